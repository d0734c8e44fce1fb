//! Mock 实现模块
//!
//! - [`log`] - 捕获控制台输出并读取日志缓冲区
//! - [`host`] - 宿主状态快照，用于断言回滚结果

pub mod host;
pub mod log;
