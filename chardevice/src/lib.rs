//! 最小只读字符设备驱动
//!
//! 加载时获取一段连续设备号，绑定分派表，创建设备类并为每个 minor 发布节点；
//! 读任一节点得到同一段固定内容。卸载时按相反顺序归还全部资源。
//!
//! - [`config`] - 编译期配置
//! - [`DeviceNumberRange`] - 设备号区间的获取与归还
//! - [`registrar`] - 带回滚的设备注册
//! - [`StaticPayload`] - 固定内容的读分派
//! - [`module`] - 加载 / 卸载入口
//!
//! 诊断信息通过 `klog` 的 `pr_*` 宏输出。

#![no_std]

extern crate alloc;

pub mod config;
pub mod error;
pub mod module;
pub mod payload;
pub mod region;
pub mod registrar;

pub use config::ChardevConfig;
pub use error::ChardevError;
pub use module::{ChardevModule, is_loaded, on_load, on_unload, with_loaded};
pub use payload::StaticPayload;
pub use region::DeviceNumberRange;
pub use registrar::{RegisteredDevice, register};
