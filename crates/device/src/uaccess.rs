//! 用户缓冲区
//!
//! 读操作的目的地。缓冲区要么映射到一段可写内存，要么是一段长度已知但不可访问的地址区间
//! （地址空间边界无效）。向后者拷贝会返回 [`DeviceError::Fault`]，并且不写入任何字节。

use crate::DeviceError;

enum Backing<'a> {
    Mapped(&'a mut [u8]),
    Unmapped,
}

/// 用户空间目的缓冲区
pub struct UserBuffer<'a> {
    backing: Backing<'a>,
    len: usize,
}

impl<'a> UserBuffer<'a> {
    /// 以可写切片作为目的缓冲区
    pub fn new(buf: &'a mut [u8]) -> Self {
        let len = buf.len();
        Self {
            backing: Backing::Mapped(buf),
            len,
        }
    }

    /// 长度为 `len`、但地址不可访问的缓冲区
    pub fn unmapped(len: usize) -> Self {
        Self {
            backing: Backing::Unmapped,
            len,
        }
    }

    /// 调用者声明的缓冲区长度（即请求的字节数）
    pub fn len(&self) -> usize {
        self.len
    }

    /// 缓冲区长度是否为 0
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// 将 `src` 拷贝到缓冲区头部 (copy_to_user)
    pub fn copy_to_user(&mut self, src: &[u8]) -> Result<(), DeviceError> {
        if src.len() > self.len {
            return Err(DeviceError::InvalidArgument);
        }
        match &mut self.backing {
            Backing::Mapped(dst) => {
                dst[..src.len()].copy_from_slice(src);
                Ok(())
            }
            Backing::Unmapped => Err(DeviceError::Fault),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_into_head() {
        let mut raw = [0xAAu8; 8];
        let mut buf = UserBuffer::new(&mut raw);
        buf.copy_to_user(b"abc").unwrap();
        assert_eq!(&raw[..4], b"abc\xAA");
    }

    #[test]
    fn test_copy_larger_than_buffer() {
        let mut raw = [0u8; 2];
        let mut buf = UserBuffer::new(&mut raw);
        assert_eq!(buf.copy_to_user(b"abc"), Err(DeviceError::InvalidArgument));
        assert_eq!(raw, [0, 0]);
    }

    #[test]
    fn test_unmapped_faults() {
        let mut buf = UserBuffer::unmapped(64);
        assert_eq!(buf.len(), 64);
        assert_eq!(buf.copy_to_user(b"data"), Err(DeviceError::Fault));
    }
}
