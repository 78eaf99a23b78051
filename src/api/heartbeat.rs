use actix_web::{http::header, web, HttpRequest, HttpResponse, Responder};
use serde::Deserialize;

use crate::metrics::METRICS;
use crate::models::Presence;
use crate::state::AppState;

/// 徽章左侧的脉冲动画图标（base64 SVG）
const PULSE_ICON: &str = "PHN2ZyB4bWxucz0iaHR0cDovL3d3dy53My5vcmcvMjAwMC9zdmciIHdpZHRoPSIxNiIgaGVpZ2h0PSIxNiIgdmlld0JveD0iMCAwIDE2IDE2Ij48Y2lyY2xlIGN4PSI4IiBjeT0iOCIgcj0iNCIgZmlsbD0iIzQ0YzQ3MCIgc3R5bGU9ImFuaW1hdGlvbjogcHVsc2UgMnMgaW5maW5pdGUiPjwvY2lyY2xlPjxzdHlsZT5Aa2V5ZnJhbWVzIHB1bHNlIHswJSB7b3BhY2l0eTogMX01MCUge29wYWNpdHk6IDAuNX0xMDAlIHtvcGFjaXR5OiAxfX08L3N0eWxlPjwvc3ZnPg==";

const BADGE_ALIVE: &str = "https://img.shields.io/badge/Status-Alive-brightgreen?style=for-the-badge";
const BADGE_SLEEP: &str = "https://img.shields.io/badge/Status-Sleep-9f7be1?style=for-the-badge";

fn badge_url(alive: bool) -> String {
    let base = if alive { BADGE_ALIVE } else { BADGE_SLEEP };
    format!("{}&logo=data:image/svg+xml;base64,{}", base, PULSE_ICON)
}

/// 心跳附带的表单字段，缺省均为空
#[derive(Deserialize, Default)]
pub struct HeartbeatForm {
    #[serde(default)]
    pub application: String,
    #[serde(default)]
    pub introduce: String,
    #[serde(default)]
    pub rgba: String,
    #[serde(default, rename = "applicationOnline")]
    pub application_online: String,
}

impl From<HeartbeatForm> for Presence {
    fn from(form: HeartbeatForm) -> Self {
        Presence {
            application: form.application,
            introduce: form.introduce,
            rgba: form.rgba,
            application_online: form.application_online == "true",
        }
    }
}

pub async fn heartbeat(
    data: web::Data<AppState>,
    req: HttpRequest,
    form: Option<web::Form<HeartbeatForm>>,
) -> impl Responder {
    let Some(token) = data.token.as_deref() else {
        log::warn!("Heartbeat refused: TOKEN is not configured");
        METRICS.heartbeat_rejected.inc();
        return HttpResponse::InternalServerError().json(serde_json::json!({
            "error": "TOKEN environment variable not set"
        }));
    };

    let provided = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok());
    let expected = format!("Bearer {}", token);

    if provided != Some(expected.as_str()) {
        log::warn!(
            "Heartbeat rejected: invalid token from {}",
            req.peer_addr().map(|a| a.to_string()).unwrap_or_else(|| "unknown".to_string())
        );
        METRICS.heartbeat_rejected.inc();
        return HttpResponse::Unauthorized().json(serde_json::json!({
            "error": "Invalid token"
        }));
    }

    let presence: Presence = form.map(|f| f.into_inner()).unwrap_or_default().into();
    let last_heartbeat = data.tracker.record_presence(presence.clone());

    METRICS.heartbeat_received.inc();
    METRICS.observe_liveness(&data.tracker.query_liveness());

    log::info!(
        "Heartbeat received at {} (application: '{}', online: {})",
        last_heartbeat, presence.application, presence.application_online
    );

    HttpResponse::Ok().json(serde_json::json!({
        "message": "Heartbeat received",
        "last_heartbeat": last_heartbeat,
        "application": presence.application,
        "introduce": presence.introduce,
        "rgba": presence.rgba,
        "applicationOnline": presence.application_online
    }))
}

pub async fn check(data: web::Data<AppState>) -> impl Responder {
    let liveness = data.tracker.query_liveness();

    let mut body = serde_json::json!({
        "alive": liveness.alive,
        "last_heartbeat": liveness.last_seen,
        "applicationOnline": false
    });

    if let Some(presence) = liveness.presence {
        body["application"] = presence.application.into();
        body["introduce"] = presence.introduce.into();
        body["rgba"] = presence.rgba.into();
        body["applicationOnline"] = true.into();
    }

    HttpResponse::Ok().json(body)
}

/// 根据存活状态重定向到 shields.io 徽章
pub async fn badge(data: web::Data<AppState>) -> impl Responder {
    let location = badge_url(data.tracker.query_liveness().alive);

    HttpResponse::MovedPermanently()
        .insert_header((header::LOCATION, location))
        .finish()
}
