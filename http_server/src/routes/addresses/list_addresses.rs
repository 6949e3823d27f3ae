use crate::app_container::Application;
use actix_web::web;
use address_book::data_transfer::AddressRecord;

#[tracing::instrument(skip(app), level = "info")]
async fn list_addresses(app: web::Data<Application>) -> web::Json<Vec<AddressRecord>> {
    web::Json(app.address_book.list_addresses().await)
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/addresses").route(web::get().to(list_addresses)));
}
