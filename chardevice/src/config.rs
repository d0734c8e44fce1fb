//! 编译期配置
//!
//! 驱动没有运行期配置：没有环境变量、命令行或持久化状态。

/// 设备号区间的属主名称
pub const MODULE_NAME: &str = "chardevice_module";

/// 节点名前缀，节点为 `chardevice0`、`chardevice1` ...
pub const DEVICE_NAME: &str = "chardevice";

/// 设备类名
pub const DEVICE_CLASS: &str = "chardevice_class";

/// 节点数量
pub const NUM_DEVICES: u32 = 2;

/// 首个 minor
pub const DEVICE_FIRST_INDEX: u32 = 0;

/// 期望的 major；0 表示动态分配
pub const MAJOR: u32 = 0;

/// 每个节点读出的固定内容
pub const PAYLOAD: &[u8] = b"some data in module\n";

/// 一次加载所需的全部参数
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChardevConfig {
    /// 设备号区间的属主名称
    pub module_name: &'static str,
    /// 节点名前缀
    pub device_name: &'static str,
    /// 设备类名
    pub class_name: &'static str,
    /// 期望的 major；0 表示动态分配
    pub major: u32,
    /// 首个 minor
    pub first_minor: u32,
    /// 节点数量
    pub count: u32,
    /// 固定内容
    pub payload: &'static [u8],
}

impl ChardevConfig {
    /// 模块入口使用的配置
    pub const DEFAULT: Self = Self {
        module_name: MODULE_NAME,
        device_name: DEVICE_NAME,
        class_name: DEVICE_CLASS,
        major: MAJOR,
        first_minor: DEVICE_FIRST_INDEX,
        count: NUM_DEVICES,
        payload: PAYLOAD,
    };
}

impl Default for ChardevConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
