use actix_web::{post, web};

use crate::db::UserStore;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{LoginRequest, LoginResponse, PublicUser};
use crate::utils::password;

#[post("/login")]
async fn login(
    store: web::Data<dyn UserStore>,
    body: web::Json<LoginRequest>,
) -> ApiResult<LoginResponse> {
    // Unknown email and wrong password both answer 401 with the same
    // message, so callers cannot probe which emails are registered.
    let user = store
        .find_by_email(&body.email)
        .ok_or(AppError::Unauthorized)?;

    if !password::verify(&body.password, &user.password_hash)? {
        return Err(AppError::Unauthorized);
    }

    Ok(ApiResponse::Ok(LoginResponse {
        message: "Login successful!".to_string(),
        user: PublicUser::from(&user),
    }))
}
