use actix_web::web;

mod delete_address;
mod list_addresses;
mod save_address;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(list_addresses::init_routes)
        .configure(save_address::init_routes)
        .configure(delete_address::init_routes);
}
