pub mod heartbeat;
pub mod metrics;
pub mod render;

pub use heartbeat::{badge, check, heartbeat};
pub use metrics::get_metrics;
pub use render::render;

use actix_web::{web, HttpResponse, Responder};

pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy"
    }))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/heartbeat", web::post().to(heartbeat))
        .route("/check", web::get().to(check))
        .route("/check/badge", web::get().to(badge))
        .route("/render", web::post().to(render))
        .route("/metrics", web::get().to(get_metrics))
        .route("/health", web::get().to(health));
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};

    #[actix_rt::test]
    async fn test_health() {
        let app = test::init_service(App::new().route("/health", web::get().to(health))).await;
        let req = test::TestRequest::get().uri("/health").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, serde_json::json!({"status": "healthy"}));
    }
}
