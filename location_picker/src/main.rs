use anyhow::Context;
use location_picker::cli::{Outcome, Session};
use location_picker::config::Settings;
use location_picker::geolocation::ConfiguredGeolocator;
use location_picker::maps::GoogleMapsClient;
use location_picker::notices::TerminalNotices;
use location_picker::picker::LocationPicker;
use location_picker::store_client::AddressStoreClient;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    shared_kernel::tracing::config_telemetry("location_picker")?;
    let result = start().await;
    shared_kernel::tracing::shutdown_global_tracer_provider();
    result
}

async fn start() -> anyhow::Result<()> {
    let settings = Settings::parse()?;
    let maps = Arc::new(GoogleMapsClient::new(settings.location));
    let picker = LocationPicker::new(
        Arc::new(AddressStoreClient::new(settings.store.base_url)),
        maps.clone(),
        maps,
        Arc::new(ConfiguredGeolocator::new(settings.geolocation)),
        Arc::new(TerminalNotices),
    );

    let mut session = Session::new(&picker);
    println!("{}", session.start().await);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines
        .next_line()
        .await
        .context("Failed to read from stdin")?
    {
        if line.trim().is_empty() {
            continue;
        }
        match session.handle(&line).await {
            Outcome::Continue(output) => println!("{output}"),
            Outcome::Quit => break,
        }
    }
    Ok(())
}
