use clap::Parser;

use crate::services::DEFAULT_STALE_AFTER_SECS;

/// Status Beacon - 心跳存活状态与终端输出渲染服务
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// 监听端口
    #[arg(short, long, env = "PORT", default_value_t = 5000)]
    pub port: u16,

    /// 监听地址
    #[arg(short = 'a', long, env = "ADDRESS", default_value = "0.0.0.0")]
    pub address: String,

    /// 心跳鉴权令牌（Authorization: Bearer <TOKEN>）
    #[arg(short, long, env = "TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// 心跳过期阈值（秒）
    #[arg(
        long,
        env = "STALE_AFTER",
        default_value_t = DEFAULT_STALE_AFTER_SECS,
        value_parser = clap::value_parser!(i64).range(0..)
    )]
    pub stale_after: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags() {
        let args = CommandArgs::try_parse_from([
            "status-beacon",
            "-p",
            "8080",
            "-a",
            "127.0.0.1",
            "--token",
            "secret",
            "--stale-after",
            "60",
        ])
        .unwrap();
        assert_eq!(args.port, 8080);
        assert_eq!(args.address, "127.0.0.1");
        assert_eq!(args.token.as_deref(), Some("secret"));
        assert_eq!(args.stale_after, 60);
    }

    #[test]
    fn test_negative_stale_after_is_rejected() {
        let result = CommandArgs::try_parse_from(["status-beacon", "--stale-after=-5"]);
        assert!(result.is_err());

        let args = CommandArgs::try_parse_from(["status-beacon", "--stale-after=0"]).unwrap();
        assert_eq!(args.stale_after, 0);
    }
}
