//! 日志环形缓冲区
//!
//! 容量固定为 [`GLOBAL_LOG_BUFFER_SIZE`] 条，写满后丢弃最旧的条目并计数。

use alloc::collections::VecDeque;
use core::fmt;

use sync::SpinLock;

use crate::config::GLOBAL_LOG_BUFFER_SIZE;
use crate::entry::LogEntry;
use crate::level::LogLevel;

struct BufferState {
    entries: VecDeque<LogEntry>,
    next_seq: usize,
    dropped: usize,
}

/// 有界日志缓冲区
pub(crate) struct LogBuffer {
    state: SpinLock<BufferState>,
}

impl LogBuffer {
    pub(crate) const fn new() -> Self {
        Self {
            state: SpinLock::new(BufferState {
                entries: VecDeque::new(),
                next_seq: 0,
                dropped: 0,
            }),
        }
    }

    /// 格式化并追加一条日志，返回其副本用于控制台输出
    pub(crate) fn push(&self, level: LogLevel, args: fmt::Arguments) -> LogEntry {
        let mut state = self.state.lock();
        let entry = LogEntry::from_args(level, state.next_seq, args);
        state.next_seq += 1;
        if state.entries.len() == GLOBAL_LOG_BUFFER_SIZE {
            state.entries.pop_front();
            state.dropped += 1;
        }
        state.entries.push_back(entry.clone());
        entry
    }

    pub(crate) fn read(&self) -> Option<LogEntry> {
        self.state.lock().entries.pop_front()
    }

    pub(crate) fn peek(&self, index: usize) -> Option<LogEntry> {
        self.state.lock().entries.get(index).cloned()
    }

    pub(crate) fn len(&self) -> usize {
        self.state.lock().entries.len()
    }

    pub(crate) fn dropped_count(&self) -> usize {
        self.state.lock().dropped
    }
}
