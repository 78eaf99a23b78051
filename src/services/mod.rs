pub mod ansi_html;
pub mod clock;
pub mod liveness;

pub use ansi_html::convert as ansi_to_html;
pub use liveness::{LivenessTracker, DEFAULT_STALE_AFTER_SECS};
