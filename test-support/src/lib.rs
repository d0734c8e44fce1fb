//! 测试支持 crate
//!
//! 提供驱动测试使用的 Mock 实现：控制台捕获与宿主状态快照

#![no_std]

extern crate alloc;

pub mod mock;
