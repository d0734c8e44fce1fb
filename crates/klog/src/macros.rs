//! 面向用户的日志宏
//!
//! 与 Linux 的 `pr_*` 系列一致。级别检查发生在格式化之前，
//! 被过滤的日志不会对参数求值格式化。

/// 带有级别过滤的内部实现宏
#[doc(hidden)]
#[macro_export]
macro_rules! __log_impl_filtered {
    ($level:expr, $args:expr) => {
        if $crate::is_level_enabled($level) {
            $crate::log_impl($level, $args);
        }
    };
}

/// 以 **EMERGENCY (紧急)** 级别记录消息
#[macro_export]
macro_rules! pr_emerg {
    ($($arg:tt)*) => {
        $crate::__log_impl_filtered!($crate::LogLevel::Emergency, format_args!($($arg)*))
    }
}

/// 以 **ALERT (警报)** 级别记录消息
#[macro_export]
macro_rules! pr_alert {
    ($($arg:tt)*) => {
        $crate::__log_impl_filtered!($crate::LogLevel::Alert, format_args!($($arg)*))
    }
}

/// 以 **CRITICAL (关键)** 级别记录消息
#[macro_export]
macro_rules! pr_crit {
    ($($arg:tt)*) => {
        $crate::__log_impl_filtered!($crate::LogLevel::Critical, format_args!($($arg)*))
    }
}

/// 以 **ERROR (错误)** 级别记录消息
#[macro_export]
macro_rules! pr_err {
    ($($arg:tt)*) => {
        $crate::__log_impl_filtered!($crate::LogLevel::Error, format_args!($($arg)*))
    }
}

/// 以 **WARNING (警告)** 级别记录消息
#[macro_export]
macro_rules! pr_warn {
    ($($arg:tt)*) => {
        $crate::__log_impl_filtered!($crate::LogLevel::Warning, format_args!($($arg)*))
    }
}

/// 以 **NOTICE (通知)** 级别记录消息
#[macro_export]
macro_rules! pr_notice {
    ($($arg:tt)*) => {
        $crate::__log_impl_filtered!($crate::LogLevel::Notice, format_args!($($arg)*))
    }
}

/// 以 **INFO (信息)** 级别记录消息
#[macro_export]
macro_rules! pr_info {
    ($($arg:tt)*) => {
        $crate::__log_impl_filtered!($crate::LogLevel::Info, format_args!($($arg)*))
    }
}

/// 以 **DEBUG (调试)** 级别记录消息
#[macro_export]
macro_rules! pr_debug {
    ($($arg:tt)*) => {
        $crate::__log_impl_filtered!($crate::LogLevel::Debug, format_args!($($arg)*))
    }
}
