//! Image Preprocessing for the Corrosion Classifier
//!
//! Turns raw object bytes into the model input tensor:
//! - Decode (format guessed from content)
//! - Coerce to 8-bit RGB (grayscale, palette, alpha and 16-bit sources)
//! - Resize to the model input size, ignoring aspect ratio
//! - Scale to [0, 1] and add the batch dimension

pub mod frame;
pub mod tensor;

pub use frame::{decode_rgb, RgbFrame, SourceColor};
pub use tensor::{ImageTensor, CHANNELS};

use image::imageops::FilterType;
use thiserror::Error;
use tracing::debug;

/// Default model input edge length (pixels)
pub const DEFAULT_IMAGE_SIZE: u32 = 150;

/// Preprocessing error types
#[derive(Error, Debug)]
pub enum PreprocessError {
    #[error("{0}")]
    Decode(#[from] image::ImageError),

    #[error("Invalid target size {width}x{height}")]
    InvalidSize { width: u32, height: u32 },

    #[error("Tensor shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),
}

/// Preprocessing configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreprocessConfig {
    /// Output width
    pub width: u32,
    /// Output height
    pub height: u32,
}

impl Default for PreprocessConfig {
    fn default() -> Self {
        Self::square(DEFAULT_IMAGE_SIZE)
    }
}

impl PreprocessConfig {
    /// Square target of `size` x `size`
    pub fn square(size: u32) -> Self {
        Self {
            width: size,
            height: size,
        }
    }
}

/// Stateless preprocessor bound to a target size
#[derive(Debug, Clone, Default)]
pub struct Preprocessor {
    config: PreprocessConfig,
}

impl Preprocessor {
    /// Create a new preprocessor
    pub fn new(config: PreprocessConfig) -> Result<Self, PreprocessError> {
        if config.width == 0 || config.height == 0 {
            return Err(PreprocessError::InvalidSize {
                width: config.width,
                height: config.height,
            });
        }
        Ok(Self { config })
    }

    /// Target configuration
    pub fn config(&self) -> PreprocessConfig {
        self.config
    }

    /// Run the full pipeline on encoded image bytes.
    ///
    /// The resize always runs, even when the source already has the target size.
    pub fn preprocess(&self, bytes: &[u8]) -> Result<ImageTensor, PreprocessError> {
        let frame = decode_rgb(bytes)?;
        debug!(
            "Decoded {}x{} image (source color {:?})",
            frame.width(),
            frame.height(),
            frame.source_color()
        );

        let resized = frame.resize(self.config.width, self.config.height, FilterType::CatmullRom);
        ImageTensor::from_frame(&resized)
    }
}

/// Preprocess with the default 150x150 configuration
pub fn preprocess(bytes: &[u8]) -> Result<ImageTensor, PreprocessError> {
    Preprocessor::default().preprocess(bytes)
}


#[cfg(test)]
mod tests {
    use super::test_images::encode;
    use super::*;
    use image::{DynamicImage, GrayImage, ImageFormat, Luma, Rgb, RgbImage, Rgba, RgbaImage};

    fn assert_model_shape(tensor: &ImageTensor) {
        assert_eq!(tensor.shape(), [1, 150, 150, 3]);
        assert!(tensor.values().all(|v| (0.0..=1.0).contains(&v)));
    }

    #[test]
    fn test_rgb_png_produces_model_shape() {
        let img = RgbImage::from_fn(320, 240, |x, y| Rgb([(x % 256) as u8, (y % 256) as u8, 128]));
        let bytes = encode(&DynamicImage::ImageRgb8(img), ImageFormat::Png);

        let tensor = preprocess(&bytes).unwrap();
        assert_model_shape(&tensor);
    }

    #[test]
    fn test_grayscale_is_expanded_to_rgb() {
        let img = GrayImage::from_pixel(64, 64, Luma([51]));
        let bytes = encode(&DynamicImage::ImageLuma8(img), ImageFormat::Png);

        let tensor = preprocess(&bytes).unwrap();
        assert_model_shape(&tensor);
        // Uniform input stays uniform through the resize
        for v in tensor.values() {
            assert!((v - 0.2).abs() <= 1.0 / 255.0 + 1e-6);
        }
    }

    #[test]
    fn test_rgba_alpha_is_dropped() {
        let img = RgbaImage::from_pixel(10, 20, Rgba([255, 0, 0, 0]));
        let bytes = encode(&DynamicImage::ImageRgba8(img), ImageFormat::Png);

        let tensor = preprocess(&bytes).unwrap();
        assert_model_shape(&tensor);
        let array = tensor.as_array();
        assert!(array[[0, 75, 75, 0]] > 0.99);
        assert!(array[[0, 75, 75, 1]] < 0.01);
        assert!(array[[0, 75, 75, 2]] < 0.01);
    }

    #[test]
    fn test_palette_gif_is_converted() {
        let img = RgbaImage::from_pixel(30, 30, Rgba([0, 0, 255, 255]));
        let bytes = encode(&DynamicImage::ImageRgba8(img), ImageFormat::Gif);

        let tensor = preprocess(&bytes).unwrap();
        assert_model_shape(&tensor);
    }

    #[test]
    fn test_same_size_resize_keeps_pixels() {
        let img = RgbImage::from_fn(150, 150, |x, y| {
            Rgb([(x + y) as u8, (x * 2 % 256) as u8, (y * 3 % 256) as u8])
        });
        let bytes = encode(&DynamicImage::ImageRgb8(img.clone()), ImageFormat::Png);

        let tensor = preprocess(&bytes).unwrap();
        let array = tensor.as_array();
        for (x, y, pixel) in img.enumerate_pixels() {
            for c in 0..CHANNELS {
                let expected = pixel.0[c] as f32 / 255.0;
                let actual = array[[0, y as usize, x as usize, c]];
                assert!((expected - actual).abs() < 1e-6, "pixel ({x},{y}) channel {c}");
            }
        }
    }

    #[test]
    fn test_garbage_bytes_fail_to_decode() {
        let err = preprocess(b"definitely not an image").unwrap_err();
        assert!(matches!(err, PreprocessError::Decode(_)));
        assert!(!err.to_string().is_empty());
    }

    #[test]
    fn test_zero_size_is_rejected() {
        let err = Preprocessor::new(PreprocessConfig { width: 0, height: 150 }).unwrap_err();
        assert!(matches!(err, PreprocessError::InvalidSize { width: 0, height: 150 }));
    }

    #[test]
    fn test_custom_size() {
        let img = RgbImage::from_pixel(8, 8, Rgb([10, 20, 30]));
        let bytes = encode(&DynamicImage::ImageRgb8(img), ImageFormat::Png);

        let pre = Preprocessor::new(PreprocessConfig { width: 32, height: 16 }).unwrap();
        let tensor = pre.preprocess(&bytes).unwrap();
        assert_eq!(tensor.shape(), [1, 16, 32, 3]);
    }
}
