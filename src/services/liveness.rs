use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::models::{HeartbeatRecord, Liveness, Presence};
use crate::services::clock::{Clock, SystemClock};

/// 超过该秒数未收到心跳即判定为离线
pub const DEFAULT_STALE_AFTER_SECS: i64 = 600;

/// 心跳水位与存活判定
///
/// 水位只有一个字段，写入是无条件覆盖（后写者胜），
/// 读写都经过同一把锁，读者不会看到半写入的记录。
pub struct LivenessTracker {
    clock: Arc<dyn Clock>,
    stale_after: i64,
    record: Mutex<HeartbeatRecord>,
}

impl LivenessTracker {
    pub fn new(clock: Arc<dyn Clock>, stale_after: i64) -> Self {
        Self {
            clock,
            stale_after,
            record: Mutex::new(HeartbeatRecord::default()),
        }
    }

    pub fn with_system_clock(stale_after: i64) -> Self {
        Self::new(Arc::new(SystemClock), stale_after)
    }

    pub fn stale_after(&self) -> i64 {
        self.stale_after
    }

    // 覆盖写不会留下不一致的中间状态，锁中毒时直接取回内部值
    fn lock(&self) -> MutexGuard<'_, HeartbeatRecord> {
        self.record.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// 记录一次不带应用信息的心跳，返回写入的时间戳
    pub fn record_heartbeat(&self) -> i64 {
        self.record_presence(Presence::default())
    }

    /// 记录心跳并整体替换应用信息
    pub fn record_presence(&self, presence: Presence) -> i64 {
        let now = self.clock.now();
        let mut record = self.lock();
        record.last_seen = Some(now);
        record.presence = presence;
        now
    }

    /// 只读查询，age <= stale_after 视为存活
    pub fn query_liveness(&self) -> Liveness {
        let record = self.lock().clone();

        let Some(last_seen) = record.last_seen else {
            return Liveness::never_seen();
        };

        let age = self.clock.now() - last_seen;
        let presence = record.presence;

        Liveness {
            alive: age <= self.stale_after,
            last_seen: Some(last_seen),
            presence: if presence.application_online {
                Some(presence)
            } else {
                None
            },
        }
    }
}
