//! 字符设备映射表
//!
//! 对应 `cdev_add` / `cdev_del`：把一张分派表绑定到一段设备号上，
//! 打开节点时按设备号查回分派表。

use alloc::sync::Arc;
use alloc::vec::Vec;

use sync::RwLock;

use crate::dev::{DevT, major, minor, span_fits, spans_overlap};
use crate::{DeviceError, FileOperations};

struct CdevBinding {
    first: DevT,
    count: u32,
    fops: Arc<dyn FileOperations>,
}

impl CdevBinding {
    fn overlaps(&self, first: DevT, count: u32) -> bool {
        major(self.first) == major(first)
            && spans_overlap(minor(self.first), self.count, minor(first), count)
    }
}

/// 设备号 -> 分派表
pub struct CdevMap {
    bindings: RwLock<Vec<CdevBinding>>,
}

impl CdevMap {
    /// 创建空映射表
    pub fn new() -> Self {
        Self {
            bindings: RwLock::new(Vec::new()),
        }
    }

    /// 绑定分派表到 `[first, first + count)`
    pub fn add(
        &self,
        first: DevT,
        count: u32,
        fops: Arc<dyn FileOperations>,
    ) -> Result<(), DeviceError> {
        if !span_fits(minor(first), count) {
            return Err(DeviceError::InvalidArgument);
        }
        let mut bindings = self.bindings.write();
        if bindings.iter().any(|b| b.overlaps(first, count)) {
            return Err(DeviceError::Busy);
        }
        bindings.push(CdevBinding { first, count, fops });
        Ok(())
    }

    /// 解除绑定，返回是否找到了完全匹配的绑定
    pub fn del(&self, first: DevT, count: u32) -> bool {
        let mut bindings = self.bindings.write();
        match bindings
            .iter()
            .position(|b| b.first == first && b.count == count)
        {
            Some(idx) => {
                bindings.remove(idx);
                true
            }
            None => false,
        }
    }

    /// 查找覆盖 `dev` 的分派表
    pub fn lookup(&self, dev: DevT) -> Option<Arc<dyn FileOperations>> {
        self.bindings
            .read()
            .iter()
            .find(|b| b.overlaps(dev, 1))
            .map(|b| b.fops.clone())
    }

    /// 当前绑定数量
    pub fn len(&self) -> usize {
        self.bindings.read().len()
    }

    /// 是否没有任何绑定
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for CdevMap {
    fn default() -> Self {
        Self::new()
    }
}
