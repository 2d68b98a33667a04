//! 颜色与标准调色板模块

pub mod codec;
pub mod palette;
pub mod palette_data;

pub use palette::{Color, Palette, PaletteKind, plan9, web_safe};
pub use palette_data::{PLAN9, WEB_SAFE};

#[cfg(feature = "image")]
impl From<Color> for image::Rgba<u8> {
    fn from(c: Color) -> Self {
        image::Rgba([c.r, c.g, c.b, c.a])
    }
}

#[cfg(feature = "image")]
impl From<image::Rgba<u8>> for Color {
    fn from(px: image::Rgba<u8>) -> Self {
        let [r, g, b, a] = px.0;
        Color::new(r, g, b, a)
    }
}
