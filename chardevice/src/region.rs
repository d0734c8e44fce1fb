//! 设备号区间的获取与归还
//!
//! 期望 major 非 0 时按 `(major, first_minor)` 精确登记，否则由宿主动态分配。
//! [`DeviceNumberRange`] 不可复制，归还时按值消耗，同一区间不会被归还两次。

use device::{DevT, DeviceHost, major, makedev, minor};
use klog::{pr_debug, pr_err};

use crate::ChardevError;

/// 已从宿主获取的设备号区间
#[derive(Debug, PartialEq, Eq)]
pub struct DeviceNumberRange {
    major: u32,
    first_minor: u32,
    count: u32,
}

impl DeviceNumberRange {
    /// 获取 `count` 个连续设备号
    ///
    /// `preferred_major` 为 0 表示动态分配。宿主拒绝时返回
    /// [`ChardevError::RangeUnavailable`]，不留下任何登记。
    pub fn acquire(
        host: &DeviceHost,
        preferred_major: u32,
        first_minor: u32,
        count: u32,
        name: &str,
    ) -> Result<Self, ChardevError> {
        let result = if preferred_major != 0 {
            let first = makedev(preferred_major, first_minor);
            host.register_chrdev_region(first, count, name)
                .map(|()| first)
        } else {
            host.alloc_chrdev_region(first_minor, count, name)
        };

        match result {
            Ok(first) => {
                pr_debug!(
                    "{}: acquired {}:{} +{}",
                    name,
                    major(first),
                    minor(first),
                    count
                );
                Ok(Self {
                    major: major(first),
                    first_minor: minor(first),
                    count,
                })
            }
            Err(e) => {
                pr_err!("Can't get major {}", preferred_major);
                Err(ChardevError::RangeUnavailable(e))
            }
        }
    }

    /// 把区间归还给宿主
    pub fn release(self, host: &DeviceHost) {
        host.unregister_chrdev_region(self.first(), self.count);
        pr_debug!(
            "released {}:{} +{}",
            self.major,
            self.first_minor,
            self.count
        );
    }

    /// major 号
    pub fn major(&self) -> u32 {
        self.major
    }

    /// 首个 minor
    pub fn first_minor(&self) -> u32 {
        self.first_minor
    }

    /// 设备号个数
    pub fn count(&self) -> u32 {
        self.count
    }

    /// 区间首个设备号
    pub fn first(&self) -> DevT {
        makedev(self.major, self.first_minor)
    }

    /// 区间内第 `index` 个设备号
    pub fn dev(&self, index: u32) -> Option<DevT> {
        (index < self.count).then(|| makedev(self.major, self.first_minor + index))
    }
}
