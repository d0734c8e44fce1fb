//! 互斥自旋锁的原始实现
//!
//! 实现 `lock_api` 的 [`RawMutex`](lock_api::RawMutex)，由 [`SpinLock`](crate::SpinLock)
//! 包装成带数据的锁。

use core::{
    hint,
    sync::atomic::{AtomicBool, Ordering},
};

/// 基于单个原子标志的自旋锁
///
/// 竞争时先以只读方式自旋，观察到锁空闲后再尝试交换，减少缓存行争用。
/// 不可重入。
#[derive(Debug)]
pub struct RawSpinLock {
    locked: AtomicBool,
}

unsafe impl lock_api::RawMutex for RawSpinLock {
    #[allow(clippy::declare_interior_mutable_const)]
    const INIT: Self = Self {
        locked: AtomicBool::new(false),
    };

    type GuardMarker = lock_api::GuardSend;

    fn lock(&self) {
        while !self.try_lock() {
            while self.locked.load(Ordering::Relaxed) {
                hint::spin_loop();
            }
        }
    }

    fn try_lock(&self) -> bool {
        self.locked
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_ok()
    }

    unsafe fn unlock(&self) {
        self.locked.store(false, Ordering::Release);
    }

    fn is_locked(&self) -> bool {
        self.locked.load(Ordering::Relaxed)
    }
}
