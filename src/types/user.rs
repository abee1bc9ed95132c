use serde::{Deserialize, Serialize};

/// A stored user record. The hash never appears in a response body.
#[derive(Clone, Debug)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub surname: Option<String>,
    pub email: String,
    pub password_hash: String,
}

/// Registration payload after validation, ready for the store to assign an id.
#[derive(Clone, Debug)]
pub struct NewUser {
    pub name: String,
    pub surname: Option<String>,
    pub email: String,
    pub password_hash: String,
}

#[derive(Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub name: String,
    pub surname: Option<String>,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Serialize)]
pub struct RegisterResponse {
    pub message: String,
    #[serde(rename = "userId")]
    pub user_id: u64,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Serialize)]
pub struct PublicUser {
    pub id: u64,
    pub name: String,
    pub email: String,
}

impl From<&User> for PublicUser {
    fn from(u: &User) -> Self {
        PublicUser {
            id: u.id,
            name: u.name.clone(),
            email: u.email.clone(),
        }
    }
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub user: PublicUser,
}
