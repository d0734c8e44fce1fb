//! 内核日志子系统
//!
//! Linux 内核风格的日志：
//!
//! - [`LogLevel`] - 从 Emergency 到 Debug 的八个级别
//! - `pr_info!` / `pr_err!` 等宏 - 面向驱动代码的日志入口
//! - [`LogCore`] - 有界缓冲区、级别过滤与控制台输出
//! - [`init_log_facade`] - 将 `log` crate 的记录汇入同一缓冲区
//!
//! 达到全局阈值（默认 Info）的日志进入缓冲区，供 [`read_log`] 事后消费；
//! 达到控制台阈值（默认 Warning）的日志同时写到通过 [`register_log_output`]
//! 注册的 [`LogOutput`]。未注册输出时只进缓冲区。

#![no_std]

extern crate alloc;

mod buffer;
mod config;
mod entry;
mod facade;
mod level;
mod log_core;
pub mod macros;

#[cfg(test)]
mod tests;

pub use config::{
    DEFAULT_CONSOLE_LEVEL, DEFAULT_LOG_LEVEL, GLOBAL_LOG_BUFFER_SIZE, MAX_LOG_MESSAGE_LENGTH,
};
pub use entry::LogEntry;
pub use facade::init_log_facade;
pub use level::LogLevel;
pub use log_core::{LogCore, format_log_entry};

/// 控制台输出
pub trait LogOutput: Send + Sync {
    /// 写出一段已格式化的文本
    fn write_str(&self, s: &str);
}

/// 宏与公共 API 使用的全局实例
static GLOBAL_LOG: LogCore = LogCore::default();

/// 注册全局控制台输出，替换之前注册的输出
pub fn register_log_output(output: &'static dyn LogOutput) {
    GLOBAL_LOG.set_output(output);
}

/// 宏的记录入口
#[doc(hidden)]
pub fn log_impl(level: LogLevel, args: core::fmt::Arguments) {
    GLOBAL_LOG.log(level, args);
}

/// 宏的级别检查入口
#[doc(hidden)]
pub fn is_level_enabled(level: LogLevel) -> bool {
    GLOBAL_LOG.is_level_enabled(level)
}

/// 取出最旧的未读日志
pub fn read_log() -> Option<LogEntry> {
    GLOBAL_LOG.read()
}

/// 查看第 `index` 个未读日志，不消耗
pub fn peek_log(index: usize) -> Option<LogEntry> {
    GLOBAL_LOG.peek(index)
}

/// 未读日志条数
pub fn log_len() -> usize {
    GLOBAL_LOG.len()
}

/// 因缓冲区写满而丢弃的日志条数
pub fn log_dropped_count() -> usize {
    GLOBAL_LOG.dropped_count()
}

/// 设置全局（缓冲）阈值
pub fn set_global_level(level: LogLevel) {
    GLOBAL_LOG.set_global_level(level);
}

/// 当前全局阈值
pub fn get_global_level() -> LogLevel {
    GLOBAL_LOG.global_level()
}

/// 设置控制台阈值
pub fn set_console_level(level: LogLevel) {
    GLOBAL_LOG.set_console_level(level);
}

/// 当前控制台阈值
pub fn get_console_level() -> LogLevel {
    GLOBAL_LOG.console_level()
}
