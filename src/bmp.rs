//! Bitmap output
//!
//! `write_bmp` produces a fixed 24-bit layout: a 14-byte file header, a
//! 40-byte info header, then the framebuffer rows in storage order (bottom row
//! first) as BGR triples with no row padding. Other formats go through the
//! `image` crate.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::{Rgb, RgbImage};

use crate::error::{RenderError, Result};
use crate::rasterizer::{Framebuffer, BYTES_PER_PIXEL};

pub const FILE_HEADER_SIZE: u32 = 14;
pub const INFO_HEADER_SIZE: u32 = 40;
pub const PIXEL_OFFSET: u32 = FILE_HEADER_SIZE + INFO_HEADER_SIZE;

/// Header fields as stored in the file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BmpHeader {
    pub file_size: u32,
    pub pixel_offset: u32,
    pub width: i32,
    pub height: i32,
    pub planes: u16,
    pub bits_per_pixel: u16,
    pub compression: u32,
    pub image_size: u32,
}

impl BmpHeader {
    pub fn for_framebuffer(fb: &Framebuffer) -> Self {
        // Framebuffer sizes are capped so these fit in i32
        let image_size = fb.width() * fb.height() * BYTES_PER_PIXEL as u32;
        Self {
            file_size: PIXEL_OFFSET + image_size,
            pixel_offset: PIXEL_OFFSET,
            width: fb.width() as i32,
            height: fb.height() as i32,
            planes: 1,
            bits_per_pixel: 24,
            compression: 0,
            image_size,
        }
    }

    pub fn write_to<W: Write>(&self, w: &mut W) -> Result<()> {
        // File header
        w.write_all(b"BM")?;
        w.write_all(&self.file_size.to_le_bytes())?;
        w.write_all(&0u32.to_le_bytes())?;
        w.write_all(&self.pixel_offset.to_le_bytes())?;

        // Info header
        w.write_all(&INFO_HEADER_SIZE.to_le_bytes())?;
        w.write_all(&self.width.to_le_bytes())?;
        w.write_all(&self.height.to_le_bytes())?;
        w.write_all(&self.planes.to_le_bytes())?;
        w.write_all(&self.bits_per_pixel.to_le_bytes())?;
        w.write_all(&self.compression.to_le_bytes())?;
        w.write_all(&self.image_size.to_le_bytes())?;
        // x/y pixels per meter, colors used, important colors
        for _ in 0..4 {
            w.write_all(&0u32.to_le_bytes())?;
        }
        Ok(())
    }

    /// Read back the header of a file produced by `write_bmp`
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < PIXEL_OFFSET as usize || &bytes[0..2] != b"BM" {
            return Err(RenderError::InvalidBitmap(
                "missing BM signature or truncated header".to_string(),
            ));
        }
        let u16_at = |i: usize| u16::from_le_bytes([bytes[i], bytes[i + 1]]);
        let u32_at = |i: usize| u32::from_le_bytes([bytes[i], bytes[i + 1], bytes[i + 2], bytes[i + 3]]);
        let i32_at = |i: usize| i32::from_le_bytes([bytes[i], bytes[i + 1], bytes[i + 2], bytes[i + 3]]);

        if u32_at(14) != INFO_HEADER_SIZE {
            return Err(RenderError::InvalidBitmap(format!(
                "unsupported info header size {}",
                u32_at(14)
            )));
        }
        Ok(Self {
            file_size: u32_at(2),
            pixel_offset: u32_at(10),
            width: i32_at(18),
            height: i32_at(22),
            planes: u16_at(26),
            bits_per_pixel: u16_at(28),
            compression: u32_at(30),
            image_size: u32_at(34),
        })
    }
}

/// Serialize the framebuffer into `w`
pub fn write_bmp<W: Write>(fb: &Framebuffer, w: &mut W) -> Result<()> {
    let rows = fb.rows()?;
    BmpHeader::for_framebuffer(fb).write_to(w)?;
    for row in rows {
        w.write_all(row)?;
    }
    Ok(())
}

pub fn encode_bmp(fb: &Framebuffer) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(BmpHeader::for_framebuffer(fb).file_size as usize);
    write_bmp(fb, &mut out)?;
    Ok(out)
}

pub fn save_bmp<P: AsRef<Path>>(fb: &Framebuffer, path: P) -> Result<()> {
    // Fail before the file is created so an existing image survives
    fb.as_bytes()?;
    let mut writer = BufWriter::new(File::create(path)?);
    write_bmp(fb, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Convert to an `image` buffer, top row first
pub fn to_rgb_image(fb: &Framebuffer) -> Result<RgbImage> {
    let bytes = fb.as_bytes()?;
    let (width, height) = (fb.width(), fb.height());
    Ok(RgbImage::from_fn(width, height, |x, y| {
        let row = (height - 1 - y) as usize;
        let idx = (row * width as usize + x as usize) * BYTES_PER_PIXEL;
        Rgb([bytes[idx + 2], bytes[idx + 1], bytes[idx]])
    }))
}

/// Save in whatever format the `image` crate infers from the extension.
/// The image is built before the file is opened.
pub fn export<P: AsRef<Path>>(fb: &Framebuffer, path: P) -> Result<()> {
    to_rgb_image(fb)?.save(path)?;
    Ok(())
}

/// Paths without an extension, or ending in `.bmp`, use the fixed encoder
pub fn is_bmp_path(path: &Path) -> bool {
    match path.extension() {
        None => true,
        Some(ext) => ext.eq_ignore_ascii_case("bmp"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rasterizer::Color;

    fn filled(width: i32, height: i32, color: Color) -> Framebuffer {
        let mut fb = Framebuffer::create(width, height).unwrap();
        fb.clear_color(color);
        fb
    }

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("softgl-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_red_2x2_round_trip() {
        let bytes = encode_bmp(&filled(2, 2, Color::RED)).unwrap();
        assert_eq!(bytes.len(), 54 + 12);

        let header = BmpHeader::parse(&bytes).unwrap();
        assert_eq!(header.width, 2);
        assert_eq!(header.height, 2);
        assert_eq!(header.bits_per_pixel, 24);
        assert_eq!(header.planes, 1);
        assert_eq!(header.compression, 0);
        assert_eq!(header.file_size, 66);
        assert_eq!(header.pixel_offset, 54);
        assert_eq!(header.image_size, 12);

        for px in bytes[54..].chunks(3) {
            assert_eq!(px, &[0u8, 0, 255]);
        }
    }

    #[test]
    fn test_header_bytes_exact() {
        let bytes = encode_bmp(&filled(3, 1, Color::BLACK)).unwrap();
        let expected: [u8; 54] = [
            b'B', b'M', 63, 0, 0, 0, 0, 0, 0, 0, 54, 0, 0, 0,
            40, 0, 0, 0, 3, 0, 0, 0, 1, 0, 0, 0, 1, 0, 24, 0,
            0, 0, 0, 0, 9, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
            0, 0, 0, 0, 0, 0, 0, 0,
        ];
        assert_eq!(&bytes[..54], &expected[..]);
        assert_eq!(bytes.len(), 63);
    }

    #[test]
    fn test_rows_written_bottom_first() {
        let mut fb = filled(1, 2, Color::BLACK);
        fb.point_with(0, 0, Color::new(1, 2, 3)).unwrap();
        let bytes = encode_bmp(&fb).unwrap();
        assert_eq!(&bytes[54..], &[3u8, 2, 1, 0, 0, 0]);
    }

    #[test]
    fn test_encode_requires_clear() {
        let fb = Framebuffer::create(2, 2).unwrap();
        assert!(matches!(encode_bmp(&fb), Err(RenderError::NotCleared { .. })));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(BmpHeader::parse(b"PNG"), Err(RenderError::InvalidBitmap(_))));
        assert!(matches!(BmpHeader::parse(&[0u8; 60]), Err(RenderError::InvalidBitmap(_))));

        let mut bytes = encode_bmp(&filled(2, 2, Color::BLACK)).unwrap();
        bytes[14] = 12;
        assert!(matches!(BmpHeader::parse(&bytes), Err(RenderError::InvalidBitmap(_))));
    }

    #[test]
    fn test_standard_decoder_orientation() {
        // 4 pixels wide keeps rows 4-byte aligned for the reference decoder
        let mut fb = filled(4, 3, Color::BLACK);
        fb.point_with(0, 0, Color::RED).unwrap();
        fb.point_with(3, 2, Color::BLUE).unwrap();
        let bytes = encode_bmp(&fb).unwrap();

        let img = image::load_from_memory_with_format(&bytes, image::ImageFormat::Bmp)
            .unwrap()
            .to_rgb8();
        assert_eq!(img.dimensions(), (4, 3));
        assert_eq!(img.get_pixel(0, 2), &Rgb([255, 0, 0]));
        assert_eq!(img.get_pixel(3, 0), &Rgb([0, 0, 255]));
        assert_eq!(img.get_pixel(1, 1), &Rgb([0, 0, 0]));
    }

    #[test]
    fn test_to_rgb_image_flips_rows() {
        let mut fb = filled(2, 2, Color::WHITE);
        fb.point_with(1, 0, Color::GREEN).unwrap();
        let img = to_rgb_image(&fb).unwrap();
        assert_eq!(img.get_pixel(1, 1), &Rgb([0, 255, 0]));
        assert_eq!(img.get_pixel(1, 0), &Rgb([255, 255, 255]));
    }

    #[test]
    fn test_save_and_export_files() {
        let fb = filled(4, 4, Color::CYAN);

        let bmp_path = temp_path("save.bmp");
        save_bmp(&fb, &bmp_path).unwrap();
        assert_eq!(std::fs::read(&bmp_path).unwrap(), encode_bmp(&fb).unwrap());
        std::fs::remove_file(&bmp_path).unwrap();

        let png_path = temp_path("export.png");
        export(&fb, &png_path).unwrap();
        let img = image::open(&png_path).unwrap().to_rgb8();
        assert_eq!(img.get_pixel(2, 2), &Rgb([0, 255, 255]));
        std::fs::remove_file(&png_path).unwrap();
    }

    #[test]
    fn test_save_uncleared_leaves_file_alone() {
        let path = temp_path("uncleared.bmp");
        std::fs::write(&path, b"previous").unwrap();
        let fb = Framebuffer::create(2, 2).unwrap();
        assert!(matches!(save_bmp(&fb, &path), Err(RenderError::NotCleared { .. })));
        assert!(matches!(export(&fb, temp_path("uncleared.png")), Err(RenderError::NotCleared { .. })));
        let contents = std::fs::read(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(contents, b"previous");
    }

    #[test]
    fn test_save_to_missing_directory_fails() {
        let fb = filled(1, 1, Color::BLACK);
        let result = save_bmp(&fb, "/nonexistent/softgl/out.bmp");
        assert!(matches!(result, Err(RenderError::Io(_))));
    }

    #[test]
    fn test_is_bmp_path() {
        assert!(is_bmp_path(Path::new("Line.bmp")));
        assert!(is_bmp_path(Path::new("LINE.BMP")));
        assert!(is_bmp_path(Path::new("out")));
        assert!(!is_bmp_path(Path::new("out.png")));
    }
}
