use actix_web::{post, web};

use crate::db::UserStore;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{NewUser, RegisterRequest, RegisterResponse};
use crate::utils::password;

#[post("/register")]
async fn register(
    store: web::Data<dyn UserStore>,
    body: web::Json<RegisterRequest>,
) -> ApiResult<RegisterResponse> {
    let body = body.into_inner();

    if body.name.is_empty() || body.email.is_empty() || body.password.is_empty() {
        return Err(AppError::Validation);
    }

    if store.find_by_email(&body.email).is_some() {
        return Err(AppError::Conflict);
    }

    let password_hash = password::hash(&body.password)?;

    let user = store
        .append(NewUser {
            name: body.name,
            surname: body.surname,
            email: body.email,
            password_hash,
        })
        .map_err(|_| AppError::Conflict)?;

    log::info!("user registered: id={} email={}", user.id, user.email);

    Ok(ApiResponse::Created(RegisterResponse {
        message: "User registered successfully!".to_string(),
        user_id: user.id,
    }))
}
