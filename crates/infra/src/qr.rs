//! QR rasterization
//!
//! Encodes a shareable card URL as a QR symbol and rasterizes it to PNG
//! bytes in memory. High error correction (level H) keeps the symbol
//! scannable with up to ~30% damage; modules are painted in the brand
//! foreground color on a white background with a standard quiet zone.

use std::io::Cursor;

use async_trait::async_trait;
use image::{ImageFormat, Rgb, RgbImage};
use inficard_core::card::ports::QrRenderer;
use inficard_domain::constants::{
    QR_BACKGROUND_RGB, QR_FOREGROUND_RGB, QR_MIN_SIZE_PX, QR_QUIET_ZONE_MODULES,
};
use inficard_domain::{InficardError, Result};
use qrcode::{Color, EcLevel, QrCode};

use crate::errors::InfraError;

/// PNG renderer for card QR symbols.
#[derive(Debug, Clone, Copy, Default)]
pub struct QrPngRenderer;

impl QrPngRenderer {
    /// Create a new renderer.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl QrRenderer for QrPngRenderer {
    async fn render_png(&self, contents: &str) -> Result<Vec<u8>> {
        render_png(contents)
    }
}

/// Render `contents` as a PNG-encoded QR image of at least
/// [`QR_MIN_SIZE_PX`] pixels per side.
pub fn render_png(contents: &str) -> Result<Vec<u8>> {
    let code = QrCode::with_error_correction_level(contents.as_bytes(), EcLevel::H)
        .map_err(|err| InficardError::Render(format!("QR encoding failed: {err}")))?;

    let image = rasterize(&code);
    let mut buffer = Cursor::new(Vec::new());
    image.write_to(&mut buffer, ImageFormat::Png).map_err(|err| {
        let infra: InfraError = err.into();
        InficardError::from(infra)
    })?;
    Ok(buffer.into_inner())
}

fn rasterize(code: &QrCode) -> RgbImage {
    let modules = code.to_colors();
    let module_count = code.width() as u32;
    let total_modules = module_count + 2 * QR_QUIET_ZONE_MODULES;

    // Integer scale chosen so the full symbol reaches the minimum size.
    let scale = QR_MIN_SIZE_PX.div_ceil(total_modules).max(1);
    let size = total_modules * scale;

    let foreground = Rgb(QR_FOREGROUND_RGB);
    let background = Rgb(QR_BACKGROUND_RGB);
    let mut image = RgbImage::from_pixel(size, size, background);

    for (index, module) in modules.iter().enumerate() {
        if *module != Color::Dark {
            continue;
        }
        let module_x = (index as u32) % module_count;
        let module_y = (index as u32) / module_count;
        let origin_x = (QR_QUIET_ZONE_MODULES + module_x) * scale;
        let origin_y = (QR_QUIET_ZONE_MODULES + module_y) * scale;
        for dy in 0..scale {
            for dx in 0..scale {
                image.put_pixel(origin_x + dx, origin_y + dy, foreground);
            }
        }
    }

    image
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1A, b'\n'];

    #[test]
    fn output_is_png_encoded() {
        let png = render_png("https://cards.example.com/card/abc-123").expect("render");
        assert_eq!(&png[..8], &PNG_SIGNATURE);
    }

    #[test]
    fn image_meets_minimum_dimensions() {
        let png = render_png("https://cards.example.com/card/abc-123").expect("render");
        let image = image::load_from_memory(&png).expect("decode");
        assert!(image.width() >= QR_MIN_SIZE_PX);
        assert_eq!(image.width(), image.height());
    }

    #[test]
    fn symbol_uses_brand_foreground_on_white() {
        let png = render_png("https://cards.example.com/card/abc-123").expect("render");
        let image = image::load_from_memory(&png).expect("decode").to_rgb8();
        let pixels: Vec<_> = image.pixels().collect();
        assert!(pixels.contains(&&Rgb(QR_FOREGROUND_RGB)));
        assert!(pixels.contains(&&Rgb(QR_BACKGROUND_RGB)));
        // Only the two scheme colors appear.
        assert!(pixels
            .iter()
            .all(|p| **p == Rgb(QR_FOREGROUND_RGB) || **p == Rgb(QR_BACKGROUND_RGB)));
    }

    #[test]
    fn corner_pixels_are_quiet_zone() {
        let png = render_png("https://cards.example.com/card/abc-123").expect("render");
        let image = image::load_from_memory(&png).expect("decode").to_rgb8();
        assert_eq!(image.get_pixel(0, 0), &Rgb(QR_BACKGROUND_RGB));
        let edge = image.width() - 1;
        assert_eq!(image.get_pixel(edge, edge), &Rgb(QR_BACKGROUND_RGB));
    }

    #[tokio::test]
    async fn renderer_port_round_trips() {
        let renderer = QrPngRenderer::new();
        let png = renderer.render_png("https://cards.example.com/card/abc-123").await.expect("render");
        assert_eq!(&png[..8], &PNG_SIGNATURE);
    }
}
