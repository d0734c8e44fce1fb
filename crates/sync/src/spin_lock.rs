//! 带数据的互斥自旋锁
//!
//! `lock_api::Mutex` 以 [`RawSpinLock`] 为底层实现。`SpinLock::new` 是 `const fn`，
//! 可直接用于 `static`。
//!
//! # 注意
//! 不可重入：持有保护器时再次 `lock()` 会死锁。

use crate::raw_spin_lock::RawSpinLock;

/// 互斥自旋锁
pub type SpinLock<T> = lock_api::Mutex<RawSpinLock, T>;
/// [`SpinLock`] 的保护器，离开作用域时释放锁
pub type SpinLockGuard<'a, T> = lock_api::MutexGuard<'a, RawSpinLock, T>;

#[cfg(test)]
mod tests {
    use super::*;

    static COUNTER: SpinLock<usize> = SpinLock::new(0);

    #[test]
    fn test_spin_lock_mutation() {
        let lock = SpinLock::new(0usize);
        {
            let mut guard = lock.lock();
            *guard += 1;
            assert!(lock.is_locked());
        }
        assert!(!lock.is_locked());
        assert_eq!(*lock.lock(), 1);
    }

    #[test]
    fn test_spin_lock_try_lock() {
        let lock = SpinLock::new(7u32);
        let guard = lock.lock();
        assert!(lock.try_lock().is_none());
        drop(guard);
        assert_eq!(lock.try_lock().map(|g| *g), Some(7));
    }

    #[test]
    fn test_static_lock() {
        *COUNTER.lock() += 2;
        assert!(*COUNTER.lock() >= 2);
    }

    #[test]
    fn test_into_inner() {
        let lock = SpinLock::new([1u8, 2, 3]);
        assert_eq!(lock.into_inner(), [1, 2, 3]);
    }
}
