use actix_web::HttpResponse;

// Liveness only, the database is not touched
#[tracing::instrument(
    "Checking if shop api is reachable"
)]
pub async fn health_check() -> HttpResponse{
    HttpResponse::Ok()
        .content_type("text/plain")
        .body("Working")
}
