//! Health check endpoint

use actix_web::HttpResponse;

/// Handler for `GET /` (and `POST /`).
///
/// Returns the literal JSON string `"Healthy"`. Load balancers and
/// container orchestrators probe this route, so it does no work at all.
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json("Healthy")
}
