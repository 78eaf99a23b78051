/// 心跳附带的在线应用信息
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Presence {
    /// 当前前台应用名
    pub application: String,
    /// 应用描述
    pub introduce: String,
    /// 展示用颜色
    pub rgba: String,
    pub application_online: bool,
}

/// 进程级心跳水位
#[derive(Debug, Clone, Default)]
pub struct HeartbeatRecord {
    /// 最近一次心跳时间戳（Unix 秒），从未收到时为 None
    pub last_seen: Option<i64>,
    pub presence: Presence,
}

/// 存活查询结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Liveness {
    pub alive: bool,
    pub last_seen: Option<i64>,
    /// 仅当最近心跳报告 applicationOnline 时存在
    pub presence: Option<Presence>,
}

impl Liveness {
    pub fn never_seen() -> Self {
        Self {
            alive: false,
            last_seen: None,
            presence: None,
        }
    }
}
