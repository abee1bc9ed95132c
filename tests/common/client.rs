use std::sync::Arc;

use actix_web::{web, App};
use bookswap_api::{
    db::{MemoryStore, UserStore},
    routes::configure_routes,
    types::user::{NewUser, User},
    utils::password,
};

pub struct TestClient {
    pub store: Arc<MemoryStore>,
}

impl TestClient {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        TestClient { store }
    }

    pub fn create_app(
        &self,
    ) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        let store: Arc<dyn UserStore> = self.store.clone();
        App::new()
            .app_data(web::Data::from(store))
            .configure(configure_routes)
    }

    /// Seeds a user directly through the store, bypassing the HTTP layer.
    #[allow(dead_code)]
    pub fn seed_user(&self, email: &str, plaintext: &str) -> User {
        let password_hash = password::hash(plaintext).expect("Failed to hash password");
        self.store
            .append(NewUser {
                name: "Test User".to_string(),
                surname: None,
                email: email.to_string(),
                password_hash,
            })
            .expect("Failed to seed user")
    }
}
