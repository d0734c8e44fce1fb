//! 设备类与设备节点
//!
//! 设备类是节点的分组命名空间；节点是用户空间可见的入口，由 `(major, minor)` 标识。
//! 节点名在整个节点命名空间内唯一（对应扁平的 `/dev`），节点归属且只归属于一个类。

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::sync::atomic::{AtomicBool, Ordering};

use sync::{RwLock, SpinLock};

use crate::DeviceError;
use crate::dev::DevT;

/// 已发布的设备节点
#[derive(Debug)]
pub struct DeviceNode {
    name: String,
    dev: DevT,
}

impl DeviceNode {
    /// 节点名（如 `chardevice0`）
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 节点对应的设备号
    pub fn dev(&self) -> DevT {
        self.dev
    }
}

/// 设备类
#[derive(Debug)]
pub struct Class {
    name: String,
    /// 设备号 -> 节点
    nodes: SpinLock<BTreeMap<DevT, Arc<DeviceNode>>>,
    alive: AtomicBool,
}

impl Class {
    /// 类名
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 该类下的节点数
    pub fn node_count(&self) -> usize {
        self.nodes.lock().len()
    }

    /// 按设备号查找节点
    pub fn node(&self, dev: DevT) -> Option<Arc<DeviceNode>> {
        self.nodes.lock().get(&dev).cloned()
    }

    /// 该类下所有节点（按设备号排序）
    pub fn nodes(&self) -> Vec<Arc<DeviceNode>> {
        self.nodes.lock().values().cloned().collect()
    }

    /// 类是否仍在命名空间中
    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Acquire)
    }
}

/// 类与节点命名空间
pub struct ClassTable {
    classes: RwLock<BTreeMap<String, Arc<Class>>>,
}

impl ClassTable {
    /// 创建空命名空间
    pub fn new() -> Self {
        Self {
            classes: RwLock::new(BTreeMap::new()),
        }
    }

    /// 创建设备类
    pub fn create(&self, name: &str) -> Result<Arc<Class>, DeviceError> {
        if name.is_empty() {
            return Err(DeviceError::InvalidArgument);
        }
        let mut classes = self.classes.write();
        if classes.contains_key(name) {
            return Err(DeviceError::AlreadyExists);
        }
        let class = Arc::new(Class {
            name: name.to_string(),
            nodes: SpinLock::new(BTreeMap::new()),
            alive: AtomicBool::new(true),
        });
        classes.insert(name.to_string(), class.clone());
        Ok(class)
    }

    /// 销毁设备类，返回销毁时仍残留在类下、被一并撤下的节点数
    pub fn destroy(&self, class: &Arc<Class>) -> usize {
        let mut classes = self.classes.write();
        if classes
            .get(class.name())
            .is_some_and(|c| Arc::ptr_eq(c, class))
        {
            classes.remove(class.name());
        }
        class.alive.store(false, Ordering::Release);
        let mut nodes = class.nodes.lock();
        let leftover = nodes.len();
        nodes.clear();
        leftover
    }

    /// 在类下发布节点
    ///
    /// 类已销毁时返回 `NoDevice`；节点名在全局已存在，或同一设备号在该类下已有节点时
    /// 返回 `AlreadyExists`。
    pub fn device_create(
        &self,
        class: &Class,
        dev: DevT,
        name: &str,
    ) -> Result<Arc<DeviceNode>, DeviceError> {
        if name.is_empty() {
            return Err(DeviceError::InvalidArgument);
        }
        // 持有写锁，名字检查与插入之间不会有其它节点发布
        let classes = self.classes.write();
        if !class.is_alive() {
            return Err(DeviceError::NoDevice);
        }
        let taken = classes
            .values()
            .any(|c| c.nodes.lock().values().any(|n| n.name == name));
        if taken {
            return Err(DeviceError::AlreadyExists);
        }
        let mut nodes = class.nodes.lock();
        if nodes.contains_key(&dev) {
            return Err(DeviceError::AlreadyExists);
        }
        let node = Arc::new(DeviceNode {
            name: name.to_string(),
            dev,
        });
        nodes.insert(dev, node.clone());
        Ok(node)
    }

    /// 撤下节点，返回节点是否存在
    pub fn device_destroy(&self, class: &Class, dev: DevT) -> bool {
        let _classes = self.classes.write();
        class.nodes.lock().remove(&dev).is_some()
    }

    /// 按节点名解析设备号
    pub fn lookup_node(&self, name: &str) -> Option<DevT> {
        self.classes.read().values().find_map(|c| {
            c.nodes
                .lock()
                .values()
                .find(|n| n.name == name)
                .map(|n| n.dev)
        })
    }

    /// 所有节点名（排序后）
    pub fn node_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .classes
            .read()
            .values()
            .flat_map(|c| c.nodes.lock().values().map(|n| n.name.clone()).collect::<Vec<_>>())
            .collect();
        names.sort();
        names
    }

    /// 类名是否已存在
    pub fn exists(&self, name: &str) -> bool {
        self.classes.read().contains_key(name)
    }

    /// 类的数量
    pub fn len(&self) -> usize {
        self.classes.read().len()
    }

    /// 命名空间是否为空
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 所有类名
    pub fn class_names(&self) -> Vec<String> {
        self.classes.read().keys().cloned().collect()
    }
}

impl Default for ClassTable {
    fn default() -> Self {
        Self::new()
    }
}
