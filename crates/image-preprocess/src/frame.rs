//! Decoded RGB frames

use image::imageops::{self, FilterType};
use image::{ColorType, DynamicImage, RgbImage};

/// Color layout of the source image before RGB coercion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceColor {
    Rgb8,
    Gray,
    GrayAlpha,
    Rgba,
    /// 16-bit or floating point RGB
    WideRgb,
    Other,
}

impl From<ColorType> for SourceColor {
    fn from(c: ColorType) -> Self {
        match c {
            ColorType::Rgb8 => SourceColor::Rgb8,
            ColorType::L8 | ColorType::L16 => SourceColor::Gray,
            ColorType::La8 | ColorType::La16 => SourceColor::GrayAlpha,
            ColorType::Rgba8 | ColorType::Rgba16 | ColorType::Rgba32F => SourceColor::Rgba,
            ColorType::Rgb16 | ColorType::Rgb32F => SourceColor::WideRgb,
            _ => SourceColor::Other,
        }
    }
}

/// 8-bit RGB frame (width * height * 3, row major)
#[derive(Debug, Clone)]
pub struct RgbFrame {
    image: RgbImage,
    source_color: SourceColor,
}

impl RgbFrame {
    /// Wrap an RGB image
    pub fn new(image: RgbImage, source_color: SourceColor) -> Self {
        Self {
            image,
            source_color,
        }
    }

    /// Frame width
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Frame height
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn source_color(&self) -> SourceColor {
        self.source_color
    }

    /// Get pixel at (x, y)
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        self.image.get_pixel_checked(x, y).map(|p| p.0)
    }

    /// Raw interleaved RGB bytes
    pub fn as_raw(&self) -> &[u8] {
        self.image.as_raw()
    }

    /// Resize to exactly `new_width` x `new_height`; aspect ratio is not preserved
    pub fn resize(&self, new_width: u32, new_height: u32, filter: FilterType) -> RgbFrame {
        RgbFrame {
            image: imageops::resize(&self.image, new_width, new_height, filter),
            source_color: self.source_color,
        }
    }
}

/// Decode encoded bytes and coerce them to 8-bit RGB
pub fn decode_rgb(bytes: &[u8]) -> Result<RgbFrame, image::ImageError> {
    let img = image::load_from_memory(bytes)?;
    let source_color = SourceColor::from(img.color());

    let rgb = match img {
        DynamicImage::ImageRgb8(rgb) => rgb,
        other => other.to_rgb8(),
    };

    Ok(RgbFrame::new(rgb, source_color))
}
