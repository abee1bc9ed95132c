use std::sync::Arc;

use bookswap_api::db::MemoryStore;

pub mod client;

pub struct TestContext {
    pub store: Arc<MemoryStore>,
}

impl TestContext {
    pub fn new() -> TestContext {
        TestContext {
            store: Arc::new(MemoryStore::new()),
        }
    }
}

pub mod test_data {
    use serde_json::{json, Value};

    pub fn sample_register_body() -> Value {
        json!({
            "name": "Ada",
            "surname": "Lovelace",
            "email": "ada@x.com",
            "password": "secret"
        })
    }
}
