use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};

use bookswap_api::config::EnvConfig;
use bookswap_api::db::{MemoryStore, UserStore};
use bookswap_api::routes::configure_routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();
    let config = EnvConfig::from_env();
    let addr = format!("0.0.0.0:{}", config.port);

    // Process-lifetime store shared across all workers.
    let store: Arc<dyn UserStore> = Arc::new(MemoryStore::new());

    log::info!("Starting server on {}", addr);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .app_data(web::Data::from(Arc::clone(&store)))
            .configure(configure_routes)
    })
    .bind(addr)?
    .run()
    .await
}
