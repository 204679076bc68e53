//! Model input tensor

use crate::frame::RgbFrame;
use crate::PreprocessError;
use ndarray::{Array4, ArrayView4};

/// Channels per pixel (RGB)
pub const CHANNELS: usize = 3;

/// Normalized NHWC tensor with a batch dimension of 1
#[derive(Debug, Clone, PartialEq)]
pub struct ImageTensor {
    data: Array4<f32>,
}

impl ImageTensor {
    /// Build from an RGB frame, scaling every channel value by 1/255
    pub fn from_frame(frame: &RgbFrame) -> Result<Self, PreprocessError> {
        let shape = (1, frame.height() as usize, frame.width() as usize, CHANNELS);
        let values = frame.as_raw().iter().map(|&v| v as f32 / 255.0).collect();
        let data = Array4::from_shape_vec(shape, values)?;
        Ok(Self { data })
    }

    /// Shape as (batch, height, width, channels)
    pub fn shape(&self) -> [usize; 4] {
        let s = self.data.shape();
        [s[0], s[1], s[2], s[3]]
    }

    pub fn as_array(&self) -> &Array4<f32> {
        &self.data
    }

    pub fn view(&self) -> ArrayView4<'_, f32> {
        self.data.view()
    }

    /// Iterate over all values in logical order
    pub fn values(&self) -> impl Iterator<Item = f32> + '_ {
        self.data.iter().copied()
    }
}
