use actix_web::web;

use crate::types::error::AppError;

pub mod health;
pub mod login;
pub mod register;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(health::welcome)
        .service(register::register)
        .service(login::login);
}

/// Malformed or unparseable JSON bodies get the same 400 shape as a failed
/// field check instead of the framework default.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|_err, _req| AppError::Validation.into())
}
