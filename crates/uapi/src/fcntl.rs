//! fcntl 相关的用户空间 API 定义

use bitflags::bitflags;

bitflags! {
    /// 文件打开标志（与 POSIX 兼容）
    ///
    /// 用于 open() 系统调用
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct OpenFlags: u32 {
        /// 只读模式 (O_RDONLY)
        const O_RDONLY    = 0o0;

        /// 只写模式 (O_WRONLY)
        const O_WRONLY    = 0o1;

        /// 读写模式 (O_RDWR)
        const O_RDWR      = 0o2;

        /// 访问模式掩码 (O_ACCMODE)
        const O_ACCMODE   = 0o3;

        /// 非阻塞模式 (O_NONBLOCK)
        const O_NONBLOCK  = 0o4000;

        /// exec 时关闭 (O_CLOEXEC)
        const O_CLOEXEC   = 0o2000000;
    }
}

impl OpenFlags {
    /// 检查是否可读（O_RDONLY 或 O_RDWR）
    pub fn readable(&self) -> bool {
        let mode = self.bits() & Self::O_ACCMODE.bits();
        mode == Self::O_RDONLY.bits() || mode == Self::O_RDWR.bits()
    }

    /// 检查是否可写（O_WRONLY 或 O_RDWR）
    pub fn writable(&self) -> bool {
        let mode = self.bits() & Self::O_ACCMODE.bits();
        mode == Self::O_WRONLY.bits() || mode == Self::O_RDWR.bits()
    }
}

/// lseek 的定位基准
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum SeekWhence {
    /// 从文件开头 (SEEK_SET)
    Set = 0,
    /// 从当前位置 (SEEK_CUR)
    Cur = 1,
    /// 从文件末尾 (SEEK_END)
    End = 2,
}

impl SeekWhence {
    /// 从原始整数解析
    pub fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            0 => Some(Self::Set),
            1 => Some(Self::Cur),
            2 => Some(Self::End),
            _ => None,
        }
    }
}
