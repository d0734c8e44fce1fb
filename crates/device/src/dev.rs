//! 设备号编码
//!
//! 与 Linux 内核内部的 `dev_t` 布局一致：高 12 位为 major，低 20 位为 minor。

/// 内核内部设备号
pub type DevT = u32;

/// minor 所占位数
pub const MINORBITS: u32 = 20;

/// minor 掩码
pub const MINORMASK: u32 = (1 << MINORBITS) - 1;

/// 字符设备 major 号上限（不含）
pub const CHRDEV_MAJOR_MAX: u32 = 512;

/// 动态分配 major 的搜索区间
pub mod dynamic_major {
    /// 第一段：从 254 向下到 234
    pub const DYN_START: u32 = 254;
    /// 第一段终点（含）
    pub const DYN_END: u32 = 234;
    /// 扩展段：从 511 向下到 384
    pub const DYN_EXT_START: u32 = 511;
    /// 扩展段终点（含）
    pub const DYN_EXT_END: u32 = 384;
}

/// 由 major/minor 组合设备号 (MKDEV)
#[inline]
pub const fn makedev(major: u32, minor: u32) -> DevT {
    (major << MINORBITS) | (minor & MINORMASK)
}

/// 提取 major (MAJOR)
#[inline]
pub const fn major(dev: DevT) -> u32 {
    dev >> MINORBITS
}

/// 提取 minor (MINOR)
#[inline]
pub const fn minor(dev: DevT) -> u32 {
    dev & MINORMASK
}

/// 校验 `[minor, minor + count)` 是否落在单个 major 的 minor 空间内
pub(crate) fn span_fits(minor: u32, count: u32) -> bool {
    count != 0 && (minor as u64) + (count as u64) <= (MINORMASK as u64) + 1
}

/// 两个 minor 区间是否相交
pub(crate) fn spans_overlap(a_minor: u32, a_count: u32, b_minor: u32, b_count: u32) -> bool {
    let a_end = a_minor as u64 + a_count as u64;
    let b_end = b_minor as u64 + b_count as u64;
    (a_minor as u64) < b_end && (b_minor as u64) < a_end
}
