//! 宿主设备模型
//!
//! [`DeviceHost`] 汇集了驱动需要的全部宿主服务：设备号区间登记、字符设备映射、
//! 设备类与节点命名空间、会话打开，以及用于测试回滚路径的故障注入。
//! 进程级实例为 [`HOST`]；测试可以各自构造独立实例。

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

use lazy_static::lazy_static;
use uapi::fcntl::OpenFlags;

use crate::cdev::CdevMap;
use crate::class::{Class, ClassTable, DeviceNode};
use crate::dev::{DevT, major, minor};
use crate::fault::{FaultInjector, FaultPoint, FaultSite};
use crate::region::{ChrdevRegions, RegionInfo};
use crate::{DeviceError, File, FileOperations};

/// 宿主设备模型
pub struct DeviceHost {
    regions: ChrdevRegions,
    cdevs: CdevMap,
    classes: ClassTable,
    faults: FaultInjector,
}

lazy_static! {
    /// 进程级宿主实例
    pub static ref HOST: DeviceHost = DeviceHost::new();
}

impl DeviceHost {
    /// 创建空宿主
    pub fn new() -> Self {
        Self {
            regions: ChrdevRegions::new(),
            cdevs: CdevMap::new(),
            classes: ClassTable::new(),
            faults: FaultInjector::new(),
        }
    }

    // ========== 设备号区间 ==========

    /// 登记调用者指定的设备号区间
    pub fn register_chrdev_region(
        &self,
        first: DevT,
        count: u32,
        name: &str,
    ) -> Result<(), DeviceError> {
        self.faults.check(FaultSite::RegionRegister)?;
        self.regions.register(first, count, name)?;
        log::debug!(
            "register_chrdev_region: {}:{} +{} for {}",
            major(first),
            minor(first),
            count,
            name
        );
        Ok(())
    }

    /// 动态分配 major 并登记区间，返回区间首个设备号
    pub fn alloc_chrdev_region(
        &self,
        first_minor: u32,
        count: u32,
        name: &str,
    ) -> Result<DevT, DeviceError> {
        self.faults.check(FaultSite::RegionAlloc)?;
        let dev = self.regions.alloc(first_minor, count, name)?;
        log::debug!(
            "alloc_chrdev_region: major {} for {}",
            major(dev),
            name
        );
        Ok(dev)
    }

    /// 归还设备号区间，未登记的区间只记录警告
    pub fn unregister_chrdev_region(&self, first: DevT, count: u32) {
        if !self.regions.unregister(first, count) {
            log::warn!(
                "unregister_chrdev_region: no region {}:{} +{}",
                major(first),
                minor(first),
                count
            );
        }
    }

    // ========== 字符设备映射 ==========

    /// 绑定分派表到设备号区间
    pub fn cdev_add(
        &self,
        first: DevT,
        count: u32,
        fops: Arc<dyn FileOperations>,
    ) -> Result<(), DeviceError> {
        self.faults.check(FaultSite::CdevAdd)?;
        self.cdevs.add(first, count, fops)
    }

    /// 解除绑定，未知绑定只记录警告
    pub fn cdev_del(&self, first: DevT, count: u32) {
        if !self.cdevs.del(first, count) {
            log::warn!(
                "cdev_del: no binding {}:{} +{}",
                major(first),
                minor(first),
                count
            );
        }
    }

    // ========== 设备类与节点 ==========

    /// 创建设备类
    pub fn class_create(&self, name: &str) -> Result<Arc<Class>, DeviceError> {
        self.faults.check(FaultSite::ClassCreate)?;
        self.classes.create(name)
    }

    /// 销毁设备类；仍残留在类下的节点被一并撤下
    pub fn class_destroy(&self, class: Arc<Class>) {
        let leftover = self.classes.destroy(&class);
        if leftover > 0 {
            log::warn!(
                "class_destroy: {} retracted {} leftover node(s)",
                class.name(),
                leftover
            );
        }
    }

    /// 在类下发布节点
    pub fn device_create(
        &self,
        class: &Class,
        dev: DevT,
        name: &str,
    ) -> Result<Arc<DeviceNode>, DeviceError> {
        self.faults.check(FaultSite::DeviceCreate)?;
        self.classes.device_create(class, dev, name)
    }

    /// 撤下节点；不存在的节点静默忽略
    pub fn device_destroy(&self, class: &Class, dev: DevT) {
        self.classes.device_destroy(class, dev);
    }

    // ========== 会话 ==========

    /// 按节点名打开会话
    ///
    /// 节点不存在返回 `NotFound`，设备号没有绑定分派表返回 `NoDevice`。
    pub fn open(&self, name: &str, flags: OpenFlags) -> Result<File, DeviceError> {
        let dev = self.classes.lookup_node(name).ok_or(DeviceError::NotFound)?;
        let fops = self.cdevs.lookup(dev).ok_or(DeviceError::NoDevice)?;
        File::open(dev, flags, fops)
    }

    // ========== 故障注入 ==========

    /// 布置一次性故障
    pub fn inject_fault(&self, point: FaultPoint, error: DeviceError) {
        self.faults.arm(point, error);
    }

    /// 撤销所有未触发的故障
    pub fn clear_faults(&self) {
        self.faults.clear();
    }

    /// 未触发的故障数量
    pub fn pending_faults(&self) -> usize {
        self.faults.pending()
    }

    // ========== 查询 ==========

    /// `dev` 是否落在某个已登记区间内
    pub fn is_region_reserved(&self, dev: DevT) -> bool {
        self.regions.find(dev).is_some()
    }

    /// 覆盖 `dev` 的区间
    pub fn region_of(&self, dev: DevT) -> Option<RegionInfo> {
        self.regions.find(dev)
    }

    /// 所有已登记区间
    pub fn regions(&self) -> Vec<RegionInfo> {
        self.regions.snapshot()
    }

    /// 覆盖 `dev` 的分派表
    pub fn lookup_cdev(&self, dev: DevT) -> Option<Arc<dyn FileOperations>> {
        self.cdevs.lookup(dev)
    }

    /// 分派表绑定数量
    pub fn cdev_count(&self) -> usize {
        self.cdevs.len()
    }

    /// 类名是否存在
    pub fn class_exists(&self, name: &str) -> bool {
        self.classes.exists(name)
    }

    /// 所有类名
    pub fn class_names(&self) -> Vec<String> {
        self.classes.class_names()
    }

    /// 所有节点名（排序后）
    pub fn node_names(&self) -> Vec<String> {
        self.classes.node_names()
    }

    /// 按节点名解析设备号
    pub fn lookup_node(&self, name: &str) -> Option<DevT> {
        self.classes.lookup_node(name)
    }
}

impl Default for DeviceHost {
    fn default() -> Self {
        Self::new()
    }
}
