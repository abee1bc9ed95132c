use actix_web::{get, HttpResponse};

#[get("/")]
async fn welcome() -> HttpResponse {
    HttpResponse::Ok().body("Welcome to the BookSwap API!")
}
