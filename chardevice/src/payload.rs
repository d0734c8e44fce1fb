//! 固定内容的读分派
//!
//! 每个节点读出同一段固定内容。一次读取必须能容纳完整内容，
//! 否则拒绝；会话位置非 0 时报告文件结束。

use device::{DeviceError, File, FileOperations, UserBuffer};
use klog::pr_info;

use crate::ChardevError;

/// 只读的固定内容
#[derive(Debug, Clone, Copy)]
pub struct StaticPayload {
    data: &'static [u8],
}

impl StaticPayload {
    /// 以 `data` 作为内容
    pub const fn new(data: &'static [u8]) -> Self {
        Self { data }
    }

    /// 内容
    pub fn data(&self) -> &'static [u8] {
        self.data
    }

    /// 内容长度
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// 内容是否为空
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// 从会话位置 `pos` 读入 `buf`
    ///
    /// 返回 `(交付字节数, 新位置)`。检查顺序固定：先检查缓冲区大小，
    /// 再检查位置，最后拷贝。缓冲区过小或拷贝失败时 `buf` 与位置都不变。
    pub fn read_at(
        &self,
        pos: u64,
        buf: &mut UserBuffer<'_>,
    ) -> Result<(usize, u64), ChardevError> {
        let len = self.data.len();
        let count = buf.len();
        pr_info!("Read : {}", count);

        if count < len {
            return Err(ChardevError::BufferTooSmall {
                requested: count,
                required: len,
            });
        }
        if pos != 0 {
            pr_info!("Read return : 0");
            return Ok((0, pos));
        }

        buf.copy_to_user(self.data)
            .map_err(ChardevError::CopyFailed)?;
        pr_info!("Read return : {}", len);
        Ok((len, len as u64))
    }
}

impl FileOperations for StaticPayload {
    fn read(&self, file: &File, buf: &mut UserBuffer<'_>) -> Result<usize, DeviceError> {
        let (delivered, pos) = self.read_at(file.pos(), buf)?;
        file.set_pos(pos);
        Ok(delivered)
    }
}
