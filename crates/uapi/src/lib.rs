//! 与用户空间共用定义和声明
//!
//! 包含 errno 常量与文件打开/定位相关的类型，确保设备模型与读者会话的语义一致

#![no_std]

pub mod errno;
pub mod fcntl;
