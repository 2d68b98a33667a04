//! 调色板字节编码
//!
//! 两种格式：
//! - 裸 RGBA：每个颜色 4 字节 (R, G, B, A)，无头部
//! - 带头部格式：版本号 (i32) + 颜色数 (i32) + 每个颜色的 0xRRGGBBAA (u32)，均为小端序

use crate::color::palette::{Color, Palette};
use crate::error::{PaletteError, Result};
use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use std::io::{Cursor, Read, Write};

/// 带头部格式的版本号
pub const PALETTE_VERSION: i32 = 1;

/// 编码为裸 RGBA 字节
pub fn to_rgba_bytes(colors: &[Color]) -> Vec<u8> {
    colors
        .iter()
        .flat_map(|c| [c.r, c.g, c.b, c.a])
        .collect()
}

/// 从裸 RGBA 字节解码
pub fn from_rgba_bytes(data: &[u8]) -> Result<Palette> {
    if data.len() % 4 != 0 {
        tracing::error!("RGBA 数据长度不是 4 的倍数: {}", data.len());
        return Err(PaletteError::InvalidLength(data.len()));
    }

    Ok(data
        .chunks_exact(4)
        .map(|px| Color::new(px[0], px[1], px[2], px[3]))
        .collect())
}

/// 写入带头部的调色板
pub fn write_palette<W: Write>(writer: &mut W, colors: &[Color]) -> Result<()> {
    let count = i32::try_from(colors.len()).map_err(|_| PaletteError::InvalidFormat)?;
    tracing::debug!("写入调色板: {} 种颜色", count);

    writer.write_i32::<LittleEndian>(PALETTE_VERSION)?;
    writer.write_i32::<LittleEndian>(count)?;
    for color in colors {
        writer.write_u32::<LittleEndian>(color.to_u32())?;
    }
    writer.flush()?;

    Ok(())
}

/// 读取带头部的调色板
pub fn read_palette<R: Read>(reader: &mut R) -> Result<Palette> {
    let version = reader.read_i32::<LittleEndian>()?;
    if version != PALETTE_VERSION {
        tracing::error!("不支持的调色板版本: {}", version);
        return Err(PaletteError::UnsupportedVersion(version));
    }

    let count = reader.read_i32::<LittleEndian>()?;
    let count = usize::try_from(count).map_err(|_| {
        tracing::error!("无效的颜色数: {}", count);
        PaletteError::InvalidFormat
    })?;
    tracing::debug!("读取调色板: {} 种颜色", count);

    let mut colors = Vec::with_capacity(count.min(u16::MAX as usize));
    for _ in 0..count {
        colors.push(Color::from_u32(reader.read_u32::<LittleEndian>()?));
    }

    Ok(Palette::new(colors))
}

/// 编码为带头部的字节
pub fn encode(colors: &[Color]) -> Result<Vec<u8>> {
    let mut buf = Vec::with_capacity(8 + colors.len() * 4);
    write_palette(&mut buf, colors)?;
    Ok(buf)
}

/// 从带头部的字节解码，不允许尾部多余数据
pub fn decode(data: &[u8]) -> Result<Palette> {
    let mut cursor = Cursor::new(data);
    let palette = read_palette(&mut cursor)?;

    if cursor.position() as usize != data.len() {
        tracing::error!(
            "调色板数据尾部有多余字节: {}",
            data.len() - cursor.position() as usize
        );
        return Err(PaletteError::InvalidFormat);
    }

    Ok(palette)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::palette::PaletteKind;

    #[test]
    fn test_rgba_roundtrip() {
        for kind in PaletteKind::ALL {
            let bytes = to_rgba_bytes(kind.colors());
            assert_eq!(bytes.len(), kind.len() * 4);
            let decoded = from_rgba_bytes(&bytes).unwrap();
            assert_eq!(decoded.as_slice(), kind.colors());
        }
    }

    #[test]
    fn test_rgba_layout() {
        let bytes = to_rgba_bytes(&PaletteKind::WebSafe.colors()[..2]);
        assert_eq!(bytes, [0x00, 0x00, 0x00, 0xff, 0x00, 0x00, 0x33, 0xff]);
    }

    #[test]
    fn test_rgba_invalid_length() {
        let err = from_rgba_bytes(&[0, 0, 0]).unwrap_err();
        assert!(matches!(err, PaletteError::InvalidLength(3)));
        assert!(from_rgba_bytes(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_framed_roundtrip() {
        for kind in PaletteKind::ALL {
            let bytes = encode(kind.colors()).unwrap();
            assert_eq!(bytes.len(), 8 + kind.len() * 4);
            let decoded = decode(&bytes).unwrap();
            assert_eq!(decoded.as_slice(), kind.colors());
            assert_eq!(decoded.kind(), Some(kind));
        }
    }

    #[test]
    fn test_framed_header() {
        let bytes = encode(&[Color::rgb(0x11, 0x22, 0x33)]).unwrap();
        assert_eq!(
            bytes,
            [1, 0, 0, 0, 1, 0, 0, 0, 0xff, 0x33, 0x22, 0x11]
        );
    }

    #[test]
    fn test_unsupported_version() {
        let mut bytes = encode(PaletteKind::Plan9.colors()).unwrap();
        bytes[0] = 2;
        assert!(matches!(
            decode(&bytes).unwrap_err(),
            PaletteError::UnsupportedVersion(2)
        ));
    }

    #[test]
    fn test_negative_count() {
        let mut bytes = Vec::new();
        bytes.write_i32::<LittleEndian>(PALETTE_VERSION).unwrap();
        bytes.write_i32::<LittleEndian>(-1).unwrap();
        assert!(matches!(
            decode(&bytes).unwrap_err(),
            PaletteError::InvalidFormat
        ));
    }

    #[test]
    fn test_truncated() {
        let bytes = encode(PaletteKind::WebSafe.colors()).unwrap();
        let err = decode(&bytes[..bytes.len() - 1]).unwrap_err();
        match err {
            PaletteError::Io(e) => assert_eq!(e.kind(), std::io::ErrorKind::UnexpectedEof),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_trailing_bytes() {
        let mut bytes = encode(PaletteKind::WebSafe.colors()).unwrap();
        bytes.push(0);
        assert!(matches!(
            decode(&bytes).unwrap_err(),
            PaletteError::InvalidFormat
        ));
    }
}
