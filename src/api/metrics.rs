use actix_web::{web, HttpResponse, Responder};

use crate::metrics::METRICS;
use crate::state::AppState;

pub async fn get_metrics(data: web::Data<AppState>) -> impl Responder {
    // 存活状态随时间变化，每次抓取时刷新
    METRICS.observe_liveness(&data.tracker.query_liveness());

    match METRICS.render() {
        Ok(metrics_text) => HttpResponse::Ok()
            .content_type("text/plain; version=0.0.4")
            .body(metrics_text),
        Err(e) => {
            log::error!("Failed to render metrics: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "status": "error",
                "message": "Failed to render metrics"
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::configure;
    use crate::services::clock::ManualClock;
    use crate::state::test_state;
    use actix_web::{http::StatusCode, test, App};
    use std::sync::Arc;

    #[actix_rt::test]
    async fn test_metrics_exposition() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state(None, Arc::new(ManualClock::new(0)))))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/metrics").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body = test::read_body(resp).await;
        let text = std::str::from_utf8(&body).unwrap();
        assert!(text.contains("# TYPE heartbeat_alive gauge"));
        assert!(text.contains("# TYPE heartbeat_received_total counter"));
        assert!(text.contains("ansi_conversions_total"));
    }
}
