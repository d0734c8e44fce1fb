//! 字符设备号区间登记表
//!
//! 对应 `register_chrdev_region` / `alloc_chrdev_region` / `unregister_chrdev_region`。
//! 每个 major 下可以有多个互不相交的 minor 区间，区间带有属主名称。

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use sync::RwLock;

use crate::DeviceError;
use crate::dev::{CHRDEV_MAJOR_MAX, DevT, dynamic_major, major, makedev, minor, span_fits, spans_overlap};

/// 一段已登记的设备号区间
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionInfo {
    /// major 号
    pub major: u32,
    /// 起始 minor
    pub base_minor: u32,
    /// minor 个数
    pub count: u32,
    /// 属主名称
    pub name: String,
}

impl RegionInfo {
    fn contains(&self, dev: DevT) -> bool {
        major(dev) == self.major
            && minor(dev) >= self.base_minor
            && (minor(dev) as u64) < self.base_minor as u64 + self.count as u64
    }
}

/// 设备号区间登记表
pub struct ChrdevRegions {
    /// major -> 该 major 下的区间
    regions: RwLock<BTreeMap<u32, Vec<RegionInfo>>>,
}

impl ChrdevRegions {
    /// 创建空登记表
    pub fn new() -> Self {
        Self {
            regions: RwLock::new(BTreeMap::new()),
        }
    }

    /// 登记调用者指定的区间
    ///
    /// major 为 0 或越界、区间为空或越过 minor 空间时返回 `InvalidArgument`；
    /// 与已有区间相交时返回 `Busy`。
    pub fn register(&self, first: DevT, count: u32, name: &str) -> Result<(), DeviceError> {
        let maj = major(first);
        let min = minor(first);
        if maj == 0 || maj >= CHRDEV_MAJOR_MAX || !span_fits(min, count) {
            return Err(DeviceError::InvalidArgument);
        }

        let mut regions = self.regions.write();
        let busy = regions.get(&maj).is_some_and(|slot| {
            slot.iter()
                .any(|r| spans_overlap(r.base_minor, r.count, min, count))
        });
        if busy {
            return Err(DeviceError::Busy);
        }
        regions.entry(maj).or_default().push(RegionInfo {
            major: maj,
            base_minor: min,
            count,
            name: name.to_string(),
        });
        Ok(())
    }

    /// 动态分配一个空闲 major 并登记 `[first_minor, first_minor + count)`
    ///
    /// 搜索顺序与宿主内核一致：254 向下到 234，再从 511 向下到 384，
    /// 取第一个完全空闲的 major。
    pub fn alloc(&self, first_minor: u32, count: u32, name: &str) -> Result<DevT, DeviceError> {
        if !span_fits(first_minor, count) {
            return Err(DeviceError::InvalidArgument);
        }

        let mut regions = self.regions.write();
        let mut candidates = (dynamic_major::DYN_END..=dynamic_major::DYN_START)
            .rev()
            .chain((dynamic_major::DYN_EXT_END..=dynamic_major::DYN_EXT_START).rev());
        let maj = candidates
            .find(|m| regions.get(m).is_none_or(|v| v.is_empty()))
            .ok_or(DeviceError::Busy)?;

        regions.entry(maj).or_default().push(RegionInfo {
            major: maj,
            base_minor: first_minor,
            count,
            name: name.to_string(),
        });
        Ok(makedev(maj, first_minor))
    }

    /// 注销区间，返回是否找到了完全匹配的登记
    pub fn unregister(&self, first: DevT, count: u32) -> bool {
        let maj = major(first);
        let min = minor(first);
        let mut regions = self.regions.write();
        let Some(slot) = regions.get_mut(&maj) else {
            return false;
        };
        let Some(idx) = slot
            .iter()
            .position(|r| r.base_minor == min && r.count == count)
        else {
            return false;
        };
        slot.remove(idx);
        if slot.is_empty() {
            regions.remove(&maj);
        }
        true
    }

    /// 查找覆盖 `dev` 的区间
    pub fn find(&self, dev: DevT) -> Option<RegionInfo> {
        self.regions
            .read()
            .get(&major(dev))
            .and_then(|slot| slot.iter().find(|r| r.contains(dev)).cloned())
    }

    /// 已登记的区间总数
    pub fn len(&self) -> usize {
        self.regions.read().values().map(Vec::len).sum()
    }

    /// 登记表是否为空
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 所有已登记区间的快照
    pub fn snapshot(&self) -> Vec<RegionInfo> {
        self.regions.read().values().flatten().cloned().collect()
    }
}

impl Default for ChrdevRegions {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_then_overlap_is_busy() {
        let regions = ChrdevRegions::new();
        regions.register(makedev(240, 0), 2, "a").unwrap();
        assert_eq!(
            regions.register(makedev(240, 1), 2, "b"),
            Err(DeviceError::Busy)
        );
        // Adjacent span on the same major is fine.
        regions.register(makedev(240, 2), 2, "c").unwrap();
        assert_eq!(regions.len(), 2);
    }

    #[test]
    fn test_register_rejects_invalid_spans() {
        let regions = ChrdevRegions::new();
        assert_eq!(
            regions.register(makedev(0, 0), 1, "zero"),
            Err(DeviceError::InvalidArgument)
        );
        assert_eq!(
            regions.register(makedev(240, 0), 0, "empty"),
            Err(DeviceError::InvalidArgument)
        );
        assert_eq!(
            regions.register(makedev(240, crate::dev::MINORMASK), 2, "wrap"),
            Err(DeviceError::InvalidArgument)
        );
        assert!(regions.is_empty());
    }

    #[test]
    fn test_alloc_search_order() {
        let regions = ChrdevRegions::new();
        let first = regions.alloc(0, 2, "a").unwrap();
        let second = regions.alloc(0, 2, "b").unwrap();
        assert_eq!(major(first), 254);
        assert_eq!(major(second), 253);
    }

    #[test]
    fn test_alloc_skips_partially_used_major() {
        let regions = ChrdevRegions::new();
        regions.register(makedev(254, 100), 1, "fixed").unwrap();
        let dev = regions.alloc(0, 2, "dyn").unwrap();
        assert_eq!(major(dev), 253);
    }

    #[test]
    fn test_alloc_falls_back_to_extended_range() {
        let regions = ChrdevRegions::new();
        for maj in 234..=254 {
            regions.register(makedev(maj, 0), 1, "fill").unwrap();
        }
        let dev = regions.alloc(0, 1, "ext").unwrap();
        assert_eq!(major(dev), 511);
    }

    #[test]
    fn test_unregister_exact_match_only() {
        let regions = ChrdevRegions::new();
        regions.register(makedev(240, 0), 2, "a").unwrap();
        assert!(!regions.unregister(makedev(240, 0), 1));
        assert!(regions.unregister(makedev(240, 0), 2));
        assert!(!regions.unregister(makedev(240, 0), 2));
        assert!(regions.is_empty());
    }

    #[test]
    fn test_find_covers_span() {
        let regions = ChrdevRegions::new();
        regions.register(makedev(240, 4), 2, "owner").unwrap();
        assert_eq!(regions.find(makedev(240, 5)).unwrap().name, "owner");
        assert!(regions.find(makedev(240, 6)).is_none());
        assert!(regions.find(makedev(241, 4)).is_none());
    }
}
