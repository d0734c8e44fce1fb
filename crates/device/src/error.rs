//! 设备模型错误类型
//!
//! 各错误码对应标准 POSIX errno 值，可通过 [`DeviceError::to_errno()`] 转换。

use core::fmt;

use uapi::errno::*;

/// 设备模型错误类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceError {
    /// 无效参数 (-EINVAL)
    InvalidArgument,
    /// 资源已被占用 (-EBUSY)
    Busy,
    /// 名称或设备号已存在 (-EEXIST)
    AlreadyExists,
    /// 节点不存在 (-ENOENT)
    NotFound,
    /// 没有绑定驱动的设备号 (-ENODEV)
    NoDevice,
    /// 用户地址不可访问 (-EFAULT)
    Fault,
    /// 会话的访问模式不允许该操作 (-EACCES)
    PermissionDenied,
    /// 设备不支持定位 (-ESPIPE)
    IllegalSeek,
    /// 内存不足 (-ENOMEM)
    NoMemory,
}

impl DeviceError {
    /// 转换为系统调用错误码（负数）
    pub fn to_errno(&self) -> isize {
        let errno = match self {
            DeviceError::InvalidArgument => EINVAL,
            DeviceError::Busy => EBUSY,
            DeviceError::AlreadyExists => EEXIST,
            DeviceError::NotFound => ENOENT,
            DeviceError::NoDevice => ENODEV,
            DeviceError::Fault => EFAULT,
            DeviceError::PermissionDenied => EACCES,
            DeviceError::IllegalSeek => ESPIPE,
            DeviceError::NoMemory => ENOMEM,
        };
        -(errno as isize)
    }
}

impl fmt::Display for DeviceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            DeviceError::InvalidArgument => "invalid argument",
            DeviceError::Busy => "device or resource busy",
            DeviceError::AlreadyExists => "already exists",
            DeviceError::NotFound => "no such node",
            DeviceError::NoDevice => "no such device",
            DeviceError::Fault => "bad address",
            DeviceError::PermissionDenied => "permission denied",
            DeviceError::IllegalSeek => "illegal seek",
            DeviceError::NoMemory => "out of memory",
        };
        write!(f, "{} ({})", text, self.to_errno())
    }
}
