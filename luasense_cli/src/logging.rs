use std::io;

use tracing_subscriber::{self, EnvFilter, fmt, prelude::*};

/// 初始化 stderr 日志。
///
/// - `log_level`：显式过滤规则（如 `debug`、`luasense_core=trace`），优先级最高
/// - 否则读 `RUST_LOG`，再否则默认 `warn`
/// - 已经装过 subscriber（例如测试里）时静默忽略
pub fn init_logger(no_color: bool, log_level: Option<&str>) -> io::Result<()> {
    let filter = match log_level {
        Some(level) => EnvFilter::try_new(level)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    let stderr_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(!no_color)
        .with_target(true)
        .with_filter(filter);

    match tracing_subscriber::registry().with(stderr_layer).try_init() {
        Ok(()) => Ok(()),
        Err(e) if e.to_string().contains("already been set") => Ok(()),
        Err(e) => Err(io::Error::other(e)),
    }
}
