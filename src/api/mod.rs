use actix_web::{get, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

use crate::errors::ApiError;

pub mod docs;
pub mod todo;

#[derive(Serialize, Deserialize)]
pub struct Response {
    pub message: String,
}

#[get("/health")]
async fn healthcheck() -> impl Responder {
    let response = Response {
        message: "Everything is working fine".to_string(),
    };
    HttpResponse::Ok().json(response)
}

async fn not_found() -> Result<HttpResponse, ApiError> {
    Err(ApiError::NotFound("resource not found".to_string()))
}

/// Every route of the service. The caller provides the `TodoService` as
/// `web::Data<dyn TodoService>`.
pub fn config(cfg: &mut web::ServiceConfig) {
    todo::config(cfg);
    cfg.service(docs::swagger_ui())
        .service(healthcheck)
        .default_service(web::route().to(not_found));
}
