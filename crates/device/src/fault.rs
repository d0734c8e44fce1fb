//! 宿主操作的故障注入
//!
//! 预先布置一次性故障，对应的宿主操作在下一次（或第 `nth` 次）调用时直接返回预设错误，
//! 不修改任何状态。用于验证驱动在每个注册阶段失败时的回滚。

use alloc::vec::Vec;

use sync::SpinLock;

use crate::DeviceError;

/// 可注入故障的宿主操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaultPoint {
    /// `register_chrdev_region`
    RegionRegister,
    /// `alloc_chrdev_region`
    RegionAlloc,
    /// `cdev_add`
    CdevAdd,
    /// `class_create`
    ClassCreate,
    /// 布置之后第 `nth` 次（从 0 计）`device_create`
    DeviceCreate {
        /// 触发前需要放过的调用次数
        nth: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FaultSite {
    RegionRegister,
    RegionAlloc,
    CdevAdd,
    ClassCreate,
    DeviceCreate,
}

impl FaultPoint {
    fn site(&self) -> FaultSite {
        match self {
            FaultPoint::RegionRegister => FaultSite::RegionRegister,
            FaultPoint::RegionAlloc => FaultSite::RegionAlloc,
            FaultPoint::CdevAdd => FaultSite::CdevAdd,
            FaultPoint::ClassCreate => FaultSite::ClassCreate,
            FaultPoint::DeviceCreate { .. } => FaultSite::DeviceCreate,
        }
    }

    fn skip(&self) -> usize {
        match self {
            FaultPoint::DeviceCreate { nth } => *nth,
            _ => 0,
        }
    }
}

struct ArmedFault {
    site: FaultSite,
    remaining: usize,
    error: DeviceError,
}

/// 故障注入器
pub struct FaultInjector {
    armed: SpinLock<Vec<ArmedFault>>,
}

impl FaultInjector {
    /// 创建空注入器
    pub fn new() -> Self {
        Self {
            armed: SpinLock::new(Vec::new()),
        }
    }

    /// 布置一次性故障
    pub fn arm(&self, point: FaultPoint, error: DeviceError) {
        self.armed.lock().push(ArmedFault {
            site: point.site(),
            remaining: point.skip(),
            error,
        });
    }

    /// 撤销所有未触发的故障
    pub fn clear(&self) {
        self.armed.lock().clear();
    }

    /// 未触发的故障数量
    pub fn pending(&self) -> usize {
        self.armed.lock().len()
    }

    /// 宿主操作入口处调用：到期的故障被移除并以错误返回
    pub(crate) fn check(&self, site: FaultSite) -> Result<(), DeviceError> {
        let mut armed = self.armed.lock();
        let Some(idx) = armed.iter().position(|f| f.site == site) else {
            return Ok(());
        };
        if armed[idx].remaining > 0 {
            armed[idx].remaining -= 1;
            return Ok(());
        }
        Err(armed.remove(idx).error)
    }
}

impl Default for FaultInjector {
    fn default() -> Self {
        Self::new()
    }
}
