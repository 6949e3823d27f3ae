use crate::app_container::Application;
use crate::config::Settings;
use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use anyhow::Context;
use tracing_actix_web::TracingLogger;

mod app_container;
mod config;
mod errors;
mod routes;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    shared_kernel::tracing::config_telemetry("http_server")?;
    let settings = Settings::parse()?;
    let address = (settings.application.host.clone(), settings.application.port);

    // One application per process: every worker must see the same address book.
    let app = web::Data::new(Application::new());

    tracing::info!("Backend server is running at http://{}:{}", address.0, address.1);
    let result = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(Cors::permissive())
            .configure(routes::config)
            .app_data(app.clone())
    })
    .bind(address)?
    .run()
    .await
    .context("Server failed to run");

    shared_kernel::tracing::shutdown_global_tracer_provider();
    result
}
