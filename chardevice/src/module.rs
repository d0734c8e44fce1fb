//! 模块生命周期
//!
//! [`ChardevModule`] 是一次成功加载的全部状态，丢弃即卸载。
//! [`on_load`] / [`on_unload`] 是宿主调用的入口，作用于全局 [`HOST`]，
//! 同一时刻最多存在一个已加载实例。

use alloc::sync::Arc;
use core::mem::ManuallyDrop;

use device::{DeviceHost, FileOperations, HOST};
use klog::{pr_info, pr_warn};
use sync::SpinLock;

use crate::config::{ChardevConfig, MODULE_NAME};
use crate::payload::StaticPayload;
use crate::region::DeviceNumberRange;
use crate::registrar::{self, RegisteredDevice};
use crate::ChardevError;

/// 已加载的驱动
pub struct ChardevModule<'h> {
    device: ManuallyDrop<RegisteredDevice<'h>>,
}

impl<'h> ChardevModule<'h> {
    /// 获取设备号区间并注册设备
    ///
    /// 失败时宿主中不留下任何资源。
    pub fn load(host: &'h DeviceHost, config: &ChardevConfig) -> Result<Self, ChardevError> {
        let range = DeviceNumberRange::acquire(
            host,
            config.major,
            config.first_minor,
            config.count,
            config.module_name,
        )?;
        let fops: Arc<dyn FileOperations> = Arc::new(StaticPayload::new(config.payload));
        let device = registrar::register(
            host,
            range,
            fops,
            config.class_name,
            config.device_name,
        )?;

        pr_info!(
            "Module installed {}:[{}-{}]",
            device.major(),
            device.first_minor(),
            device.last_minor()
        );
        Ok(Self {
            device: ManuallyDrop::new(device),
        })
    }

    /// 已注册的设备
    pub fn device(&self) -> &RegisteredDevice<'h> {
        &self.device
    }

    /// 卸载
    pub fn unload(self) {
        drop(self);
    }
}

impl Drop for ChardevModule<'_> {
    fn drop(&mut self) {
        // SAFETY: `device` 只在这里取出一次，之后不再访问
        let device = unsafe { ManuallyDrop::take(&mut self.device) };
        device.unregister();
        pr_info!("Module removed");
    }
}

static LOADED: SpinLock<Option<ChardevModule<'static>>> = SpinLock::new(None);

/// 模块加载入口
///
/// 已加载时返回 [`ChardevError::AlreadyLoaded`]，不触碰宿主。
pub fn on_load() -> Result<(), ChardevError> {
    klog::init_log_facade();

    let mut slot = LOADED.lock();
    if slot.is_some() {
        pr_warn!("{}: already loaded", MODULE_NAME);
        return Err(ChardevError::AlreadyLoaded);
    }
    *slot = Some(ChardevModule::load(&HOST, &ChardevConfig::DEFAULT)?);
    Ok(())
}

/// 模块卸载入口；未加载时什么也不做
pub fn on_unload() {
    let module = LOADED.lock().take();
    if let Some(module) = module {
        module.unload();
    }
}

/// 模块是否已加载
pub fn is_loaded() -> bool {
    LOADED.lock().is_some()
}

/// 以已加载实例调用 `f`，未加载时返回 `None`
pub fn with_loaded<R>(f: impl FnOnce(&ChardevModule<'static>) -> R) -> Option<R> {
    LOADED.lock().as_ref().map(f)
}
