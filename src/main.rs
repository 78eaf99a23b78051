use actix_web::{web, App, HttpServer};
use clap::Parser;

mod models;
mod services;
mod state;
mod api;
mod cli;
mod metrics;

use state::new_state;
use cli::CommandArgs;

/// /render 请求体上限
const MAX_RENDER_PAYLOAD: usize = 4 * 1024 * 1024;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = CommandArgs::parse();
    let bind_address = format!("{}:{}", args.address, args.port);

    if args.token.as_deref().map_or(true, str::is_empty) {
        log::warn!("TOKEN is not set, POST /heartbeat will refuse every request");
    }
    let state = new_state(args.token.clone(), args.stale_after);
    log::info!("Heartbeats older than {}s are reported as dead", state.tracker.stale_after());

    print_banner(&args);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::PayloadConfig::new(MAX_RENDER_PAYLOAD))
            .configure(api::configure)
    })
        .bind(&bind_address)?
        .run()
        .await
}

fn print_banner(args: &CommandArgs) {
    println!("╔═══════════════════════════════════════════════════════════╗");
    println!("║      Status Beacon v{:<38}║", env!("CARGO_PKG_VERSION"));
    println!("║      Heartbeat liveness + ANSI to HTML rendering          ║");
    println!("╚═══════════════════════════════════════════════════════════╝");
    println!();
    println!("🚀 Server starting on http://{}:{}", args.address, args.port);
    println!();
    println!("📋 Available endpoints:");
    println!("  POST   /heartbeat     - Record a heartbeat (Bearer token)");
    println!("  GET    /check         - Liveness of the monitored process");
    println!("  GET    /check/badge   - Redirect to a status badge");
    println!("  POST   /render        - Convert ANSI terminal output to HTML");
    println!("  GET    /metrics       - Prometheus metrics");
    println!("  GET    /health        - Health check");
    println!("═══════════════════════════════════════════════════════════");
}
