//! 同步原语
//!
//! 向设备模型与驱动提供基本的锁，均以 `lock_api` 包装：
//!
//! - [`SpinLock`] - 互斥自旋锁，底层为 [`RawSpinLock`]
//! - [`RwLock`] - 读写自旋锁，适合“初始化时写、运行时读”的全局表
//!
//! 设备模型中不存在中断上下文，因此这里的锁不做中断屏蔽。

#![no_std]

mod raw_spin_lock;
mod rwlock;
mod spin_lock;

pub use raw_spin_lock::*;
pub use rwlock::*;
pub use spin_lock::*;
