use actix_web::{web, HttpResponse, Responder};

use crate::metrics::METRICS;
use crate::services::ansi_to_html;

/// 请求体为原始终端输出，返回 HTML 片段
pub async fn render(body: web::Bytes) -> impl Responder {
    // 非 UTF-8 字节按替换字符处理，转换本身不会失败
    let raw = String::from_utf8_lossy(&body);
    let output = ansi_to_html(&raw);

    METRICS.ansi_conversions.inc();
    METRICS.ansi_output_bytes.inc_by(output.len() as u64);

    HttpResponse::Ok().json(serde_json::json!({
        "status": "success",
        "output": output
    }))
}
