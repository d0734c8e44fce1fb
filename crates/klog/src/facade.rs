//! `log` crate 门面桥接
//!
//! 子系统 crate 通过 `log::warn!` 等宏记录日志，安装桥接后这些记录与
//! `pr_*!` 宏写入同一个全局缓冲区。

use crate::level::LogLevel;

struct KlogFacade;

impl log::Log for KlogFacade {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        crate::is_level_enabled(LogLevel::from(metadata.level()))
    }

    fn log(&self, record: &log::Record) {
        let level = LogLevel::from(record.level());
        if crate::is_level_enabled(level) {
            crate::log_impl(level, format_args!("{}: {}", record.target(), record.args()));
        }
    }

    fn flush(&self) {}
}

static FACADE: KlogFacade = KlogFacade;

/// 安装 `log` 门面桥接
///
/// 重复调用是无害的：`log` 只接受第一次设置的 logger，之后的调用直接返回。
pub fn init_log_facade() {
    if log::set_logger(&FACADE).is_ok() {
        log::set_max_level(log::LevelFilter::Trace);
    }
}
