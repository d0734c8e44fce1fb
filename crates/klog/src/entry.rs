//! 日志条目
//!
//! 消息以定长数组就地保存，格式化时超出 [`MAX_LOG_MESSAGE_LENGTH`] 的部分按字符边界截断。

use core::fmt::{self, Write};

use crate::config::MAX_LOG_MESSAGE_LENGTH;
use crate::level::LogLevel;

/// 一条已格式化的日志
#[derive(Debug, Clone)]
pub struct LogEntry {
    seq: usize,
    level: LogLevel,
    length: usize,
    message: [u8; MAX_LOG_MESSAGE_LENGTH],
}

impl LogEntry {
    /// 由格式化参数构造日志条目
    pub fn from_args(level: LogLevel, seq: usize, args: fmt::Arguments) -> Self {
        let mut entry = Self {
            seq,
            level,
            length: 0,
            message: [0; MAX_LOG_MESSAGE_LENGTH],
        };

        let mut writer = MessageWriter {
            buf: &mut entry.message,
            pos: 0,
        };
        // MessageWriter 截断而不报错，这里的结果可以忽略
        let _ = writer.write_fmt(args);
        entry.length = writer.pos;

        entry
    }

    /// 消息正文
    pub fn message(&self) -> &str {
        core::str::from_utf8(&self.message[..self.length]).unwrap_or("")
    }

    /// 日志级别
    pub fn level(&self) -> LogLevel {
        self.level
    }

    /// 全局递增的序列号
    pub fn seq(&self) -> usize {
        self.seq
    }
}

/// 写入定长缓冲区的格式化器，空间不足时在字符边界处截断
struct MessageWriter<'a> {
    buf: &'a mut [u8; MAX_LOG_MESSAGE_LENGTH],
    pos: usize,
}

impl Write for MessageWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let room = MAX_LOG_MESSAGE_LENGTH - self.pos;
        let mut take = s.len().min(room);
        while !s.is_char_boundary(take) {
            take -= 1;
        }
        self.buf[self.pos..self.pos + take].copy_from_slice(&s.as_bytes()[..take]);
        self.pos += take;
        Ok(())
    }
}
