use crate::services::LivenessTracker;
use std::sync::Arc;

pub struct AppStateInner {
    pub tracker: LivenessTracker,
    /// 心跳鉴权令牌，未配置时拒绝所有心跳
    pub token: Option<String>,
}

pub type AppState = Arc<AppStateInner>;

pub fn new_state(token: Option<String>, stale_after: i64) -> AppState {
    Arc::new(AppStateInner {
        tracker: LivenessTracker::with_system_clock(stale_after),
        token: token.filter(|t| !t.is_empty()),
    })
}

#[cfg(test)]
pub fn test_state(token: Option<&str>, clock: Arc<dyn crate::services::clock::Clock>) -> AppState {
    Arc::new(AppStateInner {
        tracker: LivenessTracker::new(clock, crate::services::DEFAULT_STALE_AFTER_SECS),
        token: token.map(str::to_string),
    })
}
