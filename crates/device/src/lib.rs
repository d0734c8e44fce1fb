//! 宿主字符设备模型
//!
//! 此 crate 提供驱动在加载、服务和卸载过程中依赖的宿主服务：
//!
//! - [`dev`] - 设备号编码 (`makedev` / `major` / `minor`)
//! - [`ChrdevRegions`] - 设备号区间登记表
//! - [`CdevMap`] - 设备号到分派表的映射
//! - [`ClassTable`] - 设备类与节点命名空间
//! - [`FileOperations`] / [`File`] - 分派表与打开会话
//! - [`UserBuffer`] - 读操作的用户空间目的缓冲区
//! - [`FaultInjector`] - 宿主操作的故障注入
//! - [`DeviceHost`] / [`HOST`] - 汇集以上服务的宿主
//!
//! 宿主的诊断信息通过 `log` crate 输出。

#![no_std]
#![allow(clippy::module_inception)]

extern crate alloc;

pub mod cdev;
pub mod class;
pub mod dev;
pub mod error;
pub mod fault;
pub mod file;
pub mod host;
pub mod region;
pub mod uaccess;

pub use cdev::CdevMap;
pub use class::{Class, ClassTable, DeviceNode};
pub use dev::{DevT, major, makedev, minor};
pub use error::DeviceError;
pub use fault::{FaultInjector, FaultPoint};
pub use file::{File, FileOperations};
pub use host::{DeviceHost, HOST};
pub use region::{ChrdevRegions, RegionInfo};
pub use uaccess::UserBuffer;

// Re-export uapi types for convenience
pub use uapi::fcntl::{OpenFlags, SeekWhence};
