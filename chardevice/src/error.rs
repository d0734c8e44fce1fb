//! 驱动错误类型
//!
//! 注册阶段的错误携带宿主返回的 [`DeviceError`]，用于诊断日志；
//! 读路径的错误在交给宿主时统一折算为 `-EINVAL`。

use core::fmt;

use device::DeviceError;

/// 驱动错误
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChardevError {
    /// 设备号区间不可用（已被占用或空间耗尽）
    RangeUnavailable(DeviceError),
    /// 分派表绑定失败
    BindFailed(DeviceError),
    /// 设备类创建失败
    ClassCreateFailed(DeviceError),
    /// 第 `index` 个节点创建失败
    NodeCreateFailed {
        /// 失败节点的序号（从 0 计）
        index: u32,
        /// 宿主返回的错误
        source: DeviceError,
    },
    /// 读者缓冲区放不下完整内容
    BufferTooSmall {
        /// 读者请求的字节数
        requested: usize,
        /// 完整内容的字节数
        required: usize,
    },
    /// 拷贝到读者缓冲区失败
    CopyFailed(DeviceError),
    /// 模块已加载
    AlreadyLoaded,
}

impl ChardevError {
    /// 出错的阶段
    pub fn stage(&self) -> &'static str {
        match self {
            ChardevError::RangeUnavailable(_) => "region",
            ChardevError::BindFailed(_) => "cdev",
            ChardevError::ClassCreateFailed(_) => "class",
            ChardevError::NodeCreateFailed { .. } => "device",
            ChardevError::BufferTooSmall { .. } | ChardevError::CopyFailed(_) => "read",
            ChardevError::AlreadyLoaded => "module",
        }
    }

    /// 转换为系统调用错误码（负数）
    pub fn to_errno(&self) -> isize {
        DeviceError::from(*self).to_errno()
    }
}

impl From<ChardevError> for DeviceError {
    fn from(err: ChardevError) -> Self {
        match err {
            ChardevError::RangeUnavailable(e)
            | ChardevError::BindFailed(e)
            | ChardevError::ClassCreateFailed(e)
            | ChardevError::NodeCreateFailed { source: e, .. } => e,
            ChardevError::BufferTooSmall { .. } | ChardevError::CopyFailed(_) => {
                DeviceError::InvalidArgument
            }
            ChardevError::AlreadyLoaded => DeviceError::Busy,
        }
    }
}

impl fmt::Display for ChardevError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChardevError::RangeUnavailable(e) => write!(f, "device number range unavailable: {}", e),
            ChardevError::BindFailed(e) => write!(f, "can't add char device: {}", e),
            ChardevError::ClassCreateFailed(e) => write!(f, "failed to create device class: {}", e),
            ChardevError::NodeCreateFailed { index, source } => {
                write!(f, "failed to create device node {}: {}", index, source)
            }
            ChardevError::BufferTooSmall {
                requested,
                required,
            } => write!(f, "read buffer of {} bytes, need {}", requested, required),
            ChardevError::CopyFailed(e) => write!(f, "copy to user failed: {}", e),
            ChardevError::AlreadyLoaded => write!(f, "module already loaded"),
        }
    }
}
