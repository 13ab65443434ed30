//! One-bit page images.

use crate::error::{Error, Result};
use image::{GrayImage, ImageFormat};
use std::io::Cursor;
use std::path::Path;

/// Intensity of an inked pixel.
pub const BLACK: u8 = 0;
/// Intensity of a blank pixel.
pub const WHITE: u8 = 255;

/// A thresholded raster: every pixel is either [`BLACK`] or [`WHITE`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonochromeImage {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Row-major intensities, one byte per pixel
    pub pixels: Vec<u8>,
}

impl MonochromeImage {
    /// Create an all-white image.
    pub fn blank(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![WHITE; width as usize * height as usize],
        }
    }

    /// Intensity at `(x, y)`, or `None` outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    /// Check that every pixel is pure black or pure white.
    pub fn is_binary(&self) -> bool {
        self.pixels.iter().all(|&p| p == BLACK || p == WHITE)
    }

    /// Number of inked pixels.
    pub fn black_pixel_count(&self) -> usize {
        self.pixels.iter().filter(|&&p| p == BLACK).count()
    }

    /// Expand to opaque RGBA bytes.
    pub fn to_rgba(&self) -> Vec<u8> {
        self.pixels
            .iter()
            .flat_map(|&p| [p, p, p, 255])
            .collect()
    }

    /// Pack rows into 1 bit per pixel, MSB first, `1` = black.
    ///
    /// Each row is padded to a whole number of bytes.
    pub fn pack_bits(&self) -> Vec<u8> {
        let width = self.width as usize;
        let bytes_per_row = width.div_ceil(8);
        let mut packed = vec![0u8; bytes_per_row * self.height as usize];

        for (y, row) in self.pixels.chunks(width.max(1)).enumerate() {
            for (x, &p) in row.iter().enumerate() {
                if p == BLACK {
                    packed[y * bytes_per_row + x / 8] |= 0x80 >> (x % 8);
                }
            }
        }

        packed
    }

    /// Encode as an 8-bit grayscale PNG.
    pub fn to_png(&self) -> Result<Vec<u8>> {
        let image = GrayImage::from_raw(self.width, self.height, self.pixels.clone())
            .ok_or_else(|| {
                Error::Render(format!(
                    "pixel buffer of {} bytes does not match {}x{}",
                    self.pixels.len(),
                    self.width,
                    self.height
                ))
            })?;

        let mut bytes = Vec::new();
        image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        Ok(bytes)
    }

    /// Encode as PNG and write to `path`.
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        std::fs::write(path, self.to_png()?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checker(width: u32, height: u32) -> MonochromeImage {
        let pixels = (0..height)
            .flat_map(|y| (0..width).map(move |x| if (x + y) % 2 == 0 { BLACK } else { WHITE }))
            .collect();
        MonochromeImage {
            width,
            height,
            pixels,
        }
    }

    #[test]
    fn test_blank_is_white_and_binary() {
        let image = MonochromeImage::blank(4, 3);
        assert_eq!(image.pixels.len(), 12);
        assert!(image.is_binary());
        assert_eq!(image.black_pixel_count(), 0);
        assert_eq!(image.pixel(3, 2), Some(WHITE));
        assert_eq!(image.pixel(4, 0), None);
    }

    #[test]
    fn test_is_binary_rejects_gray() {
        let mut image = MonochromeImage::blank(2, 2);
        image.pixels[1] = 128;
        assert!(!image.is_binary());
    }

    #[test]
    fn test_to_rgba() {
        let image = checker(2, 1);
        assert_eq!(image.to_rgba(), vec![0, 0, 0, 255, 255, 255, 255, 255]);
    }

    #[test]
    fn test_pack_bits_msb_first() {
        let image = checker(10, 2);
        let packed = image.pack_bits();
        assert_eq!(packed.len(), 4);
        // Row 0: x even is black -> 1010_1010 10xx_xxxx
        assert_eq!(packed[0], 0b1010_1010);
        assert_eq!(packed[1], 0b1000_0000);
        // Row 1 is shifted by one
        assert_eq!(packed[2], 0b0101_0101);
        assert_eq!(packed[3], 0b0100_0000);
    }

    #[test]
    fn test_to_png_signature() {
        let png = checker(8, 8).to_png().unwrap();
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn test_to_png_rejects_bad_buffer() {
        let image = MonochromeImage {
            width: 4,
            height: 4,
            pixels: vec![WHITE; 3],
        };
        assert!(matches!(image.to_png(), Err(Error::Render(_))));
    }

    #[test]
    fn test_save_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.png");
        checker(3, 3).save_png(&path).unwrap();
        assert!(path.exists());
    }
}
