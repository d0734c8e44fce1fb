//! 设备注册
//!
//! 依次完成：绑定分派表、创建设备类、为每个 minor 发布节点。
//! 每获取一项资源就压入回滚栈；任一步失败时栈被丢弃，
//! 已获取的资源按相反顺序归还，宿主回到注册之前的状态。

use alloc::format;
use alloc::string::{String, ToString};
use alloc::sync::Arc;
use alloc::vec::Vec;

use device::{Class, DevT, DeviceHost, FileOperations, makedev};
use klog::{pr_debug, pr_err};

use crate::ChardevError;
use crate::region::DeviceNumberRange;

/// 已获取、尚未归还的一项宿主资源
#[derive(Debug)]
enum Acquired {
    Region(DeviceNumberRange),
    Cdev { first: DevT, count: u32 },
    Class(Arc<Class>),
    Node { class: Arc<Class>, dev: DevT },
}

impl Acquired {
    fn release(self, host: &DeviceHost) {
        match self {
            Acquired::Region(range) => range.release(host),
            Acquired::Cdev { first, count } => host.cdev_del(first, count),
            Acquired::Class(class) => host.class_destroy(class),
            Acquired::Node { class, dev } => host.device_destroy(&class, dev),
        }
    }
}

/// 资源获取记录，丢弃时按相反顺序全部归还
struct UnwindStack<'h> {
    host: &'h DeviceHost,
    acquired: Vec<Acquired>,
}

impl<'h> UnwindStack<'h> {
    fn new(host: &'h DeviceHost) -> Self {
        Self {
            host,
            acquired: Vec::new(),
        }
    }

    fn push(&mut self, res: Acquired) {
        self.acquired.push(res);
    }
}

impl Drop for UnwindStack<'_> {
    fn drop(&mut self) {
        while let Some(res) = self.acquired.pop() {
            pr_debug!("unwind: {:?}", res);
            res.release(self.host);
        }
    }
}

/// 已完成注册的设备
///
/// 持有全部宿主资源；[`RegisteredDevice::unregister`] 或丢弃时
/// 撤下节点、销毁设备类、解除绑定并归还设备号区间。
pub struct RegisteredDevice<'h> {
    resources: UnwindStack<'h>,
    major: u32,
    first_minor: u32,
    count: u32,
    class_name: String,
    node_names: Vec<String>,
}

impl RegisteredDevice<'_> {
    /// major 号
    pub fn major(&self) -> u32 {
        self.major
    }

    /// 首个 minor
    pub fn first_minor(&self) -> u32 {
        self.first_minor
    }

    /// 节点数量
    pub fn count(&self) -> u32 {
        self.count
    }

    /// 最后一个 minor
    pub fn last_minor(&self) -> u32 {
        (self.first_minor + self.count).saturating_sub(1)
    }

    /// 设备类名
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// 已发布的节点名，按 minor 顺序
    pub fn node_names(&self) -> &[String] {
        &self.node_names
    }

    /// 注销设备，归还全部资源
    pub fn unregister(self) {
        drop(self.resources);
    }

    /// 仍被持有的资源项数
    pub fn resource_count(&self) -> usize {
        self.resources.acquired.len()
    }
}

/// 在已获取的设备号区间上注册设备
///
/// 节点名为 `{device_name}{i}`，对应设备号 `(major, first_minor + i)`。
/// 失败时 `range` 也一并归还。
pub fn register<'h>(
    host: &'h DeviceHost,
    range: DeviceNumberRange,
    fops: Arc<dyn FileOperations>,
    class_name: &str,
    device_name: &str,
) -> Result<RegisteredDevice<'h>, ChardevError> {
    let major = range.major();
    let first_minor = range.first_minor();
    let count = range.count();
    let first = range.first();

    let mut resources = UnwindStack::new(host);
    resources.push(Acquired::Region(range));

    host.cdev_add(first, count, fops).map_err(|e| {
        pr_err!("Can't add char device");
        ChardevError::BindFailed(e)
    })?;
    resources.push(Acquired::Cdev { first, count });

    let class = host.class_create(class_name).map_err(|e| {
        pr_err!("Failed to create device class: {}", e.to_errno());
        ChardevError::ClassCreateFailed(e)
    })?;
    resources.push(Acquired::Class(class.clone()));

    let mut node_names = Vec::with_capacity(count as usize);
    for index in 0..count {
        let dev = makedev(major, first_minor + index);
        let name = format!("{}{}", device_name, index);
        host.device_create(&class, dev, &name).map_err(|e| {
            pr_err!("Failed to create device {}", name);
            ChardevError::NodeCreateFailed { index, source: e }
        })?;
        resources.push(Acquired::Node {
            class: class.clone(),
            dev,
        });
        node_names.push(name);
    }

    Ok(RegisteredDevice {
        resources,
        major,
        first_minor,
        count,
        class_name: class_name.to_string(),
        node_names,
    })
}
