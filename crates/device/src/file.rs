//! 分派表与打开会话
//!
//! [`FileOperations`] 是驱动提供给宿主的分派表；[`File`] 是一次打开的会话，
//! 持有自己的读写位置。未提供的操作沿用宿主内核的默认行为：
//! `read`/`write` 返回 `-EINVAL`，`llseek` 返回 `-ESPIPE`。

use alloc::sync::Arc;

use sync::SpinLock;
use uapi::fcntl::{OpenFlags, SeekWhence};

use crate::dev::DevT;
use crate::{DeviceError, UserBuffer};

/// 字符设备分派表
pub trait FileOperations: Send + Sync {
    /// 打开会话时调用（可选方法）
    fn open(&self, _file: &File) -> Result<(), DeviceError> {
        Ok(())
    }

    /// 会话关闭时调用（可选方法）
    fn release(&self, _file: &File) {}

    /// 从设备读取到用户缓冲区（可选方法）
    fn read(&self, _file: &File, _buf: &mut UserBuffer<'_>) -> Result<usize, DeviceError> {
        Err(DeviceError::InvalidArgument)
    }

    /// 向设备写入（可选方法）
    fn write(&self, _file: &File, _buf: &[u8]) -> Result<usize, DeviceError> {
        Err(DeviceError::InvalidArgument)
    }

    /// 设置会话位置（可选方法）
    fn llseek(&self, _file: &File, _offset: i64, _whence: SeekWhence) -> Result<u64, DeviceError> {
        Err(DeviceError::IllegalSeek)
    }
}

/// 打开的设备会话
///
/// 位置只属于本会话。同一会话上的并发读各自读取并回写位置，先后次序不作保证。
pub struct File {
    dev: DevT,
    flags: OpenFlags,
    pos: SpinLock<u64>,
    f_op: Arc<dyn FileOperations>,
    /// `open` 成功后才会在关闭时调用 `release`
    opened: bool,
}

impl File {
    /// 创建会话并调用分派表的 `open`
    pub(crate) fn open(
        dev: DevT,
        flags: OpenFlags,
        f_op: Arc<dyn FileOperations>,
    ) -> Result<Self, DeviceError> {
        let mut file = Self {
            dev,
            flags,
            pos: SpinLock::new(0),
            f_op,
            opened: false,
        };
        file.f_op.open(&file)?;
        file.opened = true;
        Ok(file)
    }

    /// 会话对应的设备号
    pub fn dev(&self) -> DevT {
        self.dev
    }

    /// 打开标志
    pub fn flags(&self) -> OpenFlags {
        self.flags
    }

    /// 当前位置
    pub fn pos(&self) -> u64 {
        *self.pos.lock()
    }

    /// 更新位置（供分派表实现使用）
    pub fn set_pos(&self, pos: u64) {
        *self.pos.lock() = pos;
    }

    /// 读取
    pub fn read(&self, buf: &mut UserBuffer<'_>) -> Result<usize, DeviceError> {
        if !self.flags.readable() {
            return Err(DeviceError::PermissionDenied);
        }
        self.f_op.read(self, buf)
    }

    /// 写入
    pub fn write(&self, buf: &[u8]) -> Result<usize, DeviceError> {
        if !self.flags.writable() {
            return Err(DeviceError::PermissionDenied);
        }
        self.f_op.write(self, buf)
    }

    /// 定位
    pub fn llseek(&self, offset: i64, whence: SeekWhence) -> Result<u64, DeviceError> {
        self.f_op.llseek(self, offset, whence)
    }
}

impl Drop for File {
    fn drop(&mut self) {
        if self.opened {
            self.f_op.release(self);
        }
    }
}
