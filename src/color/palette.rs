//! 颜色与调色板定义

use crate::color::palette_data::{PLAN9, WEB_SAFE};
use crate::error::{PaletteError, Result};
use serde::{Deserialize, Serialize};
use std::ops::Deref;
use std::str::FromStr;

/// RGBA 颜色结构
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// 创建不透明颜色
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// 创建黑色
    pub const fn black() -> Self {
        Self::rgb(0, 0, 0)
    }

    /// 创建白色
    pub const fn white() -> Self {
        Self::rgb(255, 255, 255)
    }

    /// 转换为 u32 (0xRRGGBBAA)
    pub const fn to_u32(self) -> u32 {
        (self.r as u32) << 24 | (self.g as u32) << 16 | (self.b as u32) << 8 | self.a as u32
    }

    /// 从 u32 (0xRRGGBBAA) 创建颜色
    pub const fn from_u32(value: u32) -> Self {
        Self {
            r: (value >> 24) as u8,
            g: (value >> 16) as u8,
            b: (value >> 8) as u8,
            a: value as u8,
        }
    }

    /// 检查颜色是否完全透明
    pub fn is_transparent(self) -> bool {
        self.a == 0
    }

    /// 检查颜色是否不透明
    pub fn is_opaque(self) -> bool {
        self.a == 255
    }

    /// 格式化为十六进制颜色字符串 (如 "#FF0000" 或 "#FF0000FF" 带alpha)
    pub fn to_hex_string(self, with_alpha: bool) -> String {
        if with_alpha {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        } else {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Color(#{:X})", self)
    }
}

impl std::fmt::LowerHex for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.a == 255 {
            write!(f, "{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(f, "{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl std::fmt::UpperHex for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.a == 255 {
            write!(f, "{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(f, "{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

/// 标准调色板种类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteKind {
    /// Plan 9 256 色调色板
    Plan9,
    /// 216 色 WebSafe 调色板
    WebSafe,
}

impl PaletteKind {
    /// 所有标准调色板
    pub const ALL: [PaletteKind; 2] = [PaletteKind::Plan9, PaletteKind::WebSafe];

    /// 从名称识别调色板 (不区分大小写)
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "plan9" | "plan-9" | "plan_9" => Some(PaletteKind::Plan9),
            "websafe" | "web-safe" | "web_safe" => Some(PaletteKind::WebSafe),
            _ => None,
        }
    }

    /// 获取调色板名称
    pub fn name(&self) -> &'static str {
        match self {
            PaletteKind::Plan9 => "plan9",
            PaletteKind::WebSafe => "websafe",
        }
    }

    /// 获取调色板颜色表
    pub fn colors(&self) -> &'static [Color] {
        match self {
            PaletteKind::Plan9 => &PLAN9,
            PaletteKind::WebSafe => &WEB_SAFE,
        }
    }

    pub fn len(&self) -> usize {
        self.colors().len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors().is_empty()
    }

    /// 按索引获取颜色，越界时返回错误
    pub fn get(&self, index: usize) -> Result<Color> {
        lookup(self.colors(), index)
    }

    /// 调色板迭代器
    pub fn iter(&self) -> impl Iterator<Item = Color> {
        self.colors().iter().copied()
    }

    /// 复制为独立的调色板
    pub fn to_palette(&self) -> Palette {
        Palette::new(self.colors().to_vec())
    }
}

impl std::fmt::Display for PaletteKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PaletteKind {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s).ok_or_else(|| {
            tracing::error!("未知的调色板名称: {}", s);
            PaletteError::UnknownPalette(s.to_string())
        })
    }
}

/// Plan 9 调色板
pub fn plan9() -> &'static [Color] {
    &PLAN9
}

/// WebSafe 调色板
pub fn web_safe() -> &'static [Color] {
    &WEB_SAFE
}

fn lookup(colors: &[Color], index: usize) -> Result<Color> {
    colors
        .get(index)
        .copied()
        .ok_or(PaletteError::IndexOutOfBounds {
            index,
            len: colors.len(),
        })
}

/// 有序颜色序列 (解码结果等)
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    pub fn new(colors: Vec<Color>) -> Self {
        Self { colors }
    }

    /// 获取指定索引的颜色
    pub fn get(&self, index: usize) -> Result<Color> {
        lookup(&self.colors, index)
    }

    pub fn as_slice(&self) -> &[Color] {
        &self.colors
    }

    pub fn into_vec(self) -> Vec<Color> {
        self.colors
    }

    /// 识别是否与某个标准调色板完全一致
    pub fn kind(&self) -> Option<PaletteKind> {
        PaletteKind::ALL
            .into_iter()
            .find(|kind| kind.colors() == self.colors.as_slice())
    }
}

impl Deref for Palette {
    type Target = [Color];

    fn deref(&self) -> &[Color] {
        &self.colors
    }
}

impl From<PaletteKind> for Palette {
    fn from(kind: PaletteKind) -> Self {
        kind.to_palette()
    }
}

impl From<Vec<Color>> for Palette {
    fn from(colors: Vec<Color>) -> Self {
        Self::new(colors)
    }
}

impl FromIterator<Color> for Palette {
    fn from_iter<I: IntoIterator<Item = Color>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_conversion() {
        let color = Color::new(255, 128, 64, 32);
        assert_eq!(color.to_u32(), 0xFF804020);
        assert_eq!(Color::from_u32(color.to_u32()), color);
    }

    #[test]
    fn test_transparent_check() {
        let transparent = Color::new(0, 255, 0, 0);
        assert!(transparent.is_transparent());
        assert!(!transparent.is_opaque());

        let opaque = Color::rgb(128, 64, 32);
        assert!(!opaque.is_transparent());
        assert!(opaque.is_opaque());
    }

    #[test]
    fn test_palette_sizes() {
        assert_eq!(PaletteKind::Plan9.len(), 256);
        assert_eq!(PaletteKind::WebSafe.len(), 216);
        assert_eq!(plan9().len(), 256);
        assert_eq!(web_safe().len(), 216);
    }

    #[test]
    fn test_get_color() {
        assert_eq!(PaletteKind::Plan9.get(0).unwrap(), Color::black());
        assert_eq!(PaletteKind::Plan9.get(255).unwrap(), Color::white());
        assert_eq!(PaletteKind::WebSafe.get(0).unwrap(), Color::black());
        assert_eq!(PaletteKind::WebSafe.get(215).unwrap(), Color::white());
        assert_eq!(PaletteKind::WebSafe.get(1).unwrap(), Color::rgb(0x00, 0x00, 0x33));
        assert_eq!(PaletteKind::WebSafe.get(6).unwrap(), Color::rgb(0x00, 0x33, 0x00));
        assert_eq!(PaletteKind::WebSafe.get(36).unwrap(), Color::rgb(0x33, 0x00, 0x00));
    }

    #[test]
    fn test_get_out_of_bounds() {
        let err = PaletteKind::WebSafe.get(216).unwrap_err();
        assert!(matches!(
            err,
            PaletteError::IndexOutOfBounds { index: 216, len: 216 }
        ));
        assert!(PaletteKind::Plan9.get(256).is_err());
        assert!(Palette::default().get(0).is_err());
    }

    #[test]
    fn test_iter_matches_table() {
        let collected: Palette = PaletteKind::Plan9.iter().collect();
        assert_eq!(collected.as_slice(), plan9());
        assert!(PaletteKind::WebSafe.iter().all(Color::is_opaque));
    }

    #[test]
    fn test_kind_names() {
        for kind in PaletteKind::ALL {
            assert_eq!(PaletteKind::from_name(kind.name()), Some(kind));
            assert_eq!(kind.to_string().parse::<PaletteKind>().unwrap(), kind);
        }
        assert_eq!(PaletteKind::from_name("Web-Safe"), Some(PaletteKind::WebSafe));
        assert_eq!(PaletteKind::from_name(" PLAN9 "), Some(PaletteKind::Plan9));
        assert_eq!(PaletteKind::from_name("vga"), None);
        assert!(matches!(
            "vga".parse::<PaletteKind>(),
            Err(PaletteError::UnknownPalette(name)) if name == "vga"
        ));
    }

    #[test]
    fn test_palette_kind_detection() {
        assert_eq!(Palette::from(PaletteKind::Plan9).kind(), Some(PaletteKind::Plan9));
        assert_eq!(Palette::from(PaletteKind::WebSafe).kind(), Some(PaletteKind::WebSafe));

        let mut colors = PaletteKind::WebSafe.to_palette().into_vec();
        colors[100] = Color::new(0, 0, 0, 0);
        assert_eq!(Palette::new(colors).kind(), None);
    }

    #[test]
    fn test_palette_deref() {
        let palette = PaletteKind::WebSafe.to_palette();
        assert_eq!(palette.len(), 216);
        assert_eq!(palette[215], Color::white());
        assert_eq!(palette.first(), Some(&Color::black()));
    }

    #[test]
    fn test_serde_roundtrip() {
        let json = serde_json::to_string(&Color::rgb(1, 2, 3)).unwrap();
        assert_eq!(json, r#"{"r":1,"g":2,"b":3,"a":255}"#);

        let palette = PaletteKind::Plan9.to_palette();
        let json = serde_json::to_string(&palette).unwrap();
        let decoded: Palette = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, palette);

        let kind: PaletteKind = serde_json::from_str(r#""websafe""#).unwrap();
        assert_eq!(kind, PaletteKind::WebSafe);
        assert_eq!(serde_json::to_string(&PaletteKind::Plan9).unwrap(), r#""plan9""#);
    }

    #[test]
    fn test_format_hex() {
        let red = Color::rgb(255, 0, 0);
        assert_eq!(red.to_hex_string(false), "#FF0000");
        assert_eq!(red.to_hex_string(true), "#FF0000FF");

        let semi_transparent = Color::new(255, 0, 0, 128);
        assert_eq!(semi_transparent.to_hex_string(false), "#FF0000");
        assert_eq!(semi_transparent.to_hex_string(true), "#FF000080");
    }

    #[test]
    fn test_display() {
        let red = Color::rgb(255, 0, 0);
        assert_eq!(format!("{}", red), "Color(#FF0000)");

        let semi_transparent = Color::new(255, 0, 0, 128);
        assert_eq!(format!("{}", semi_transparent), "Color(#FF000080)");
    }

    #[test]
    fn test_lower_hex() {
        let color = Color::rgb(0xcc, 0x33, 0x00);
        assert_eq!(format!("{:x}", color), "cc3300");

        let transparent = Color::new(255, 0, 0, 128);
        assert_eq!(format!("{:x}", transparent), "ff000080");
    }
}
