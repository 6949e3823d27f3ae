use crate::app_container::Application;
use crate::errors::ApiError;
use actix_web::web;
use address_book::data_transfer::{AddressInput, AddressRecord};
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SaveAddressResponse {
    success: bool,
    message: &'static str,
    new_address: AddressRecord,
}

#[tracing::instrument(err, skip(app), level = "info")]
async fn save_address(
    data: web::Json<AddressInput>,
    app: web::Data<Application>,
) -> Result<web::Json<SaveAddressResponse>, ApiError> {
    let new_address = app.address_book.save_address(data.into_inner()).await?;

    Ok(web::Json(SaveAddressResponse {
        success: true,
        message: "Address saved successfully",
        new_address,
    }))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/save-address").route(web::post().to(save_address)));
}
