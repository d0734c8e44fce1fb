//! 宿主状态快照

use alloc::string::String;
use alloc::vec::Vec;

use device::{DeviceHost, RegionInfo};

/// 某一时刻宿主中可观察的全部资源
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostSnapshot {
    /// 已登记的设备号区间
    pub regions: Vec<RegionInfo>,
    /// 分派表绑定数量
    pub cdevs: usize,
    /// 设备类名
    pub classes: Vec<String>,
    /// 节点名
    pub nodes: Vec<String>,
}

impl HostSnapshot {
    /// 记录 `host` 的当前状态
    pub fn capture(host: &DeviceHost) -> Self {
        Self {
            regions: host.regions(),
            cdevs: host.cdev_count(),
            classes: host.class_names(),
            nodes: host.node_names(),
        }
    }

    /// 宿主中没有任何资源
    pub fn is_pristine(&self) -> bool {
        self.regions.is_empty()
            && self.cdevs == 0
            && self.classes.is_empty()
            && self.nodes.is_empty()
    }
}
