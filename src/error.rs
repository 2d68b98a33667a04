//! 错误类型定义

use thiserror::Error;

/// 调色板错误类型
#[derive(Error, Debug)]
pub enum PaletteError {
    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("索引超出范围: {index} (长度 {len})")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("无效的数据长度: {0} (必须是 4 的倍数)")]
    InvalidLength(usize),

    #[error("不支持的版本: {0}")]
    UnsupportedVersion(i32),

    #[error("无效的调色板格式")]
    InvalidFormat,

    #[error("未知的调色板: {0}")]
    UnknownPalette(String),
}

pub type Result<T> = std::result::Result<T, PaletteError>;
