//! 日志实例
//!
//! [`LogCore`] 持有缓冲区、两个级别阈值和控制台输出。全局实例供宏使用，
//! 测试可以独立创建实例而不互相干扰。

use alloc::format;
use alloc::string::String;
use core::fmt;
use core::sync::atomic::{AtomicU8, Ordering};

use sync::RwLock;

use crate::LogOutput;
use crate::buffer::LogBuffer;
use crate::config::{DEFAULT_CONSOLE_LEVEL, DEFAULT_LOG_LEVEL};
use crate::entry::LogEntry;
use crate::level::LogLevel;

/// 一个完整的日志实例
///
/// 级别阈值是原子量，缓冲区和输出槽各自加锁，可在线程间共享。
pub struct LogCore {
    buffer: LogBuffer,
    /// 达到此级别的日志进入缓冲区
    global_level: AtomicU8,
    /// 达到此级别的日志同时写到控制台
    console_level: AtomicU8,
    output: RwLock<Option<&'static dyn LogOutput>>,
}

impl LogCore {
    /// 默认阈值的实例：缓冲 Info 及以上，打印 Warning 及以上
    ///
    /// ```rust
    /// use klog::LogCore;
    ///
    /// static LOG: LogCore = LogCore::default();
    /// assert!(LOG.is_empty());
    /// ```
    pub const fn default() -> Self {
        Self::new(DEFAULT_LOG_LEVEL, DEFAULT_CONSOLE_LEVEL)
    }

    /// 指定缓冲阈值与控制台阈值
    pub const fn new(global_level: LogLevel, console_level: LogLevel) -> Self {
        Self {
            buffer: LogBuffer::new(),
            global_level: AtomicU8::new(global_level as u8),
            console_level: AtomicU8::new(console_level as u8),
            output: RwLock::new(None),
        }
    }

    /// 设置控制台输出，替换之前的输出
    pub fn set_output(&self, output: &'static dyn LogOutput) {
        *self.output.write() = Some(output);
    }

    /// 记录一条日志
    pub fn log(&self, level: LogLevel, args: fmt::Arguments) {
        if !self.is_level_enabled(level) {
            return;
        }
        let entry = self.buffer.push(level, args);
        if level as u8 <= self.console_level.load(Ordering::Acquire) {
            if let Some(output) = *self.output.read() {
                let mut line = format_log_entry(&entry);
                line.push('\n');
                output.write_str(&line);
            }
        }
    }

    /// 取出最旧的未读条目
    pub fn read(&self) -> Option<LogEntry> {
        self.buffer.read()
    }

    /// 查看第 `index` 个未读条目，不消耗
    pub fn peek(&self, index: usize) -> Option<LogEntry> {
        self.buffer.peek(index)
    }

    /// 未读条目数
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// 没有未读条目
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 因缓冲区写满而丢弃的条目数
    pub fn dropped_count(&self) -> usize {
        self.buffer.dropped_count()
    }

    /// 设置缓冲阈值
    pub fn set_global_level(&self, level: LogLevel) {
        self.global_level.store(level as u8, Ordering::Release);
    }

    /// 当前缓冲阈值
    pub fn global_level(&self) -> LogLevel {
        LogLevel::from_u8(self.global_level.load(Ordering::Acquire))
    }

    /// 设置控制台阈值
    pub fn set_console_level(&self, level: LogLevel) {
        self.console_level.store(level as u8, Ordering::Release);
    }

    /// 当前控制台阈值
    pub fn console_level(&self) -> LogLevel {
        LogLevel::from_u8(self.console_level.load(Ordering::Acquire))
    }

    /// `level` 是否通过缓冲阈值
    #[inline]
    pub fn is_level_enabled(&self, level: LogLevel) -> bool {
        level as u8 <= self.global_level.load(Ordering::Acquire)
    }
}

/// 控制台行格式：`<color>[LEVEL] [   seq] message<reset>`
pub fn format_log_entry(entry: &LogEntry) -> String {
    let level = entry.level();
    format!(
        "{}{} [{:6}] {}{}",
        level.color_code(),
        level.as_str(),
        entry.seq(),
        entry.message(),
        level.reset_color_code()
    )
}
