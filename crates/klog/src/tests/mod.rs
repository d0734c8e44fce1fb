// Unit tests for klog, run on the host with the standard test harness.

use crate::LogLevel;
use crate::log_core::LogCore;

/// Test-only logging helper (mirrors production macro behavior, but targets a local `LogCore`).
macro_rules! test_log {
    ($logger:expr, $level:expr, $($arg:tt)*) => {
        $logger.log($level, format_args!($($arg)*))
    };
}

mod filter;
mod overflow;
