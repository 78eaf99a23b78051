use prometheus::{
    Encoder, Gauge, IntCounter, Opts, Registry, TextEncoder,
    register_gauge_with_registry, register_int_counter_with_registry,
};
use lazy_static::lazy_static;
use std::sync::Arc;

use crate::models::Liveness;

pub struct MetricsRegistry {
    registry: Registry,

    // Gauge metrics
    pub heartbeat_alive: Gauge,
    pub heartbeat_last_seen: Gauge,

    // Counter metrics
    pub heartbeat_received: IntCounter,
    pub heartbeat_rejected: IntCounter,
    pub ansi_conversions: IntCounter,
    pub ansi_output_bytes: IntCounter,
}

impl MetricsRegistry {
    pub fn new() -> Self {
        let registry = Registry::new();

        let heartbeat_alive = register_gauge_with_registry!(
            Opts::new("heartbeat_alive", "Monitored process is alive (1) or dead (0)"),
            registry
        ).unwrap();

        let heartbeat_last_seen = register_gauge_with_registry!(
            Opts::new("heartbeat_last_seen_timestamp_seconds", "Unix timestamp of the last accepted heartbeat"),
            registry
        ).unwrap();

        let heartbeat_received = register_int_counter_with_registry!(
            Opts::new("heartbeat_received_total", "Accepted heartbeats"),
            registry
        ).unwrap();

        let heartbeat_rejected = register_int_counter_with_registry!(
            Opts::new("heartbeat_rejected_total", "Heartbeats rejected for a bad or missing token"),
            registry
        ).unwrap();

        let ansi_conversions = register_int_counter_with_registry!(
            Opts::new("ansi_conversions_total", "Terminal outputs rendered to HTML"),
            registry
        ).unwrap();

        let ansi_output_bytes = register_int_counter_with_registry!(
            Opts::new("ansi_conversion_output_bytes_total", "Bytes of HTML produced by conversions"),
            registry
        ).unwrap();

        Self {
            registry,
            heartbeat_alive,
            heartbeat_last_seen,
            heartbeat_received,
            heartbeat_rejected,
            ansi_conversions,
            ansi_output_bytes,
        }
    }

    pub fn observe_liveness(&self, liveness: &Liveness) {
        self.heartbeat_alive.set(if liveness.alive { 1.0 } else { 0.0 });
        if let Some(last_seen) = liveness.last_seen {
            self.heartbeat_last_seen.set(last_seen as f64);
        }
    }

    pub fn render(&self) -> anyhow::Result<String> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }
}

lazy_static! {
    pub static ref METRICS: Arc<MetricsRegistry> = Arc::new(MetricsRegistry::new());
}
