pub mod color;
pub mod heartbeat;

pub use color::lookup_color;
pub use heartbeat::{HeartbeatRecord, Liveness, Presence};
