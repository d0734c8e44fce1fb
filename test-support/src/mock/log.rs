//! 控制台输出捕获

use alloc::string::String;
use alloc::vec::Vec;

use klog::{LogEntry, LogOutput};
use sync::SpinLock;

/// 把控制台输出累积到内存中的 [`LogOutput`]
pub struct CaptureOutput {
    text: SpinLock<String>,
}

impl CaptureOutput {
    /// 创建空的捕获器
    pub const fn new() -> Self {
        Self {
            text: SpinLock::new(String::new()),
        }
    }

    /// 当前累积的输出
    pub fn contents(&self) -> String {
        self.text.lock().clone()
    }

    /// 取出并清空累积的输出
    pub fn take(&self) -> String {
        core::mem::take(&mut *self.text.lock())
    }
}

impl Default for CaptureOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl LogOutput for CaptureOutput {
    fn write_str(&self, s: &str) {
        self.text.lock().push_str(s);
    }
}

/// 全局捕获实例
pub static CAPTURE_OUTPUT: CaptureOutput = CaptureOutput::new();

/// 注册 [`CAPTURE_OUTPUT`] 为控制台输出并安装 `log` 门面，可重复调用
pub fn install_capture() -> &'static CaptureOutput {
    klog::register_log_output(&CAPTURE_OUTPUT);
    klog::init_log_facade();
    &CAPTURE_OUTPUT
}

/// 读出日志缓冲区中的全部条目
pub fn drain_log() -> Vec<LogEntry> {
    core::iter::from_fn(klog::read_log).collect()
}

/// 读出日志缓冲区中的全部消息文本
pub fn drain_messages() -> Vec<String> {
    drain_log()
        .iter()
        .map(|entry| String::from(entry.message()))
        .collect()
}
