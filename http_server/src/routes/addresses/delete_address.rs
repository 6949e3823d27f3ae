use crate::app_container::Application;
use crate::errors::ApiError;
use actix_web::web;
use address_book::data_transfer::AddressId;
use serde::Serialize;

#[derive(Serialize)]
struct DeleteAddressResponse {
    success: bool,
    message: &'static str,
}

#[tracing::instrument(err, skip(app), level = "info")]
async fn delete_address(
    id: web::Path<String>,
    app: web::Data<Application>,
) -> Result<web::Json<DeleteAddressResponse>, ApiError> {
    // Only integer ids are ever issued, so any other segment cannot match.
    let id = id
        .parse::<AddressId>()
        .map_err(|_| ApiError::NotFound("Address not found".to_string()))?;
    app.address_book.delete_address(id).await?;

    Ok(web::Json(DeleteAddressResponse {
        success: true,
        message: "Address deleted successfully",
    }))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/delete-address/{id}").route(web::delete().to(delete_address)));
}
