//! Standard Palettes - 标准调色板
//!
//! 提供两张只读的标准调色板：
//! - Plan9：Plan 9 操作系统的 256 色调色板
//! - WebSafe：216 色 WebSafe 色彩立方 (Netscape Color Cube)
//!
//! 所有颜色均为完全不透明 (alpha = 255)，按索引访问。

#![warn(missing_docs)]

pub mod color;
#[allow(missing_docs)]
pub mod error;

pub use color::{Color, PLAN9, Palette, PaletteKind, WEB_SAFE, plan9, web_safe};
pub use error::{PaletteError, Result};

/// 库名称
pub const LIB_NAME: &str = "Standard Palettes";

/// 库版本（从 Cargo.toml 读取）
pub const LIB_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lib_info() {
        assert_eq!(LIB_NAME, "Standard Palettes");
        assert!(!LIB_VERSION.is_empty());
    }

    #[test]
    fn test_reexports() {
        assert_eq!(plan9()[0], PLAN9[0]);
        assert_eq!(web_safe()[215], WEB_SAFE[215]);
        assert_eq!("plan9".parse::<PaletteKind>().unwrap().len(), 256);
    }
}
