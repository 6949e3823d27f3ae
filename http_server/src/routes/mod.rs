pub mod addresses;

use crate::errors::ApiError;
use actix_web::web;
use address_book::errors::AddressBookError;

pub fn config(cfg: &mut web::ServiceConfig) {
    // A body that cannot be read as an address is answered like a missing one.
    let json_config = web::JsonConfig::default().error_handler(|err, _req| {
        tracing::debug!("Rejected request body: {err}");
        ApiError::from(AddressBookError::Validation).into()
    });

    cfg.service(
        web::scope("/api")
            .app_data(json_config)
            .configure(addresses::init_routes),
    );
}
