use crate::core::data::colour::Colour;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PixelBufferError {
    InvalidSize { width: u32, height: u32 },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "pixel buffer size must be positive: {}x{}", width, height)
            }
        }
    }
}

impl Error for PixelBufferError {}

/// Row-major colour buffer for one output image.
///
/// Owned exclusively by the render pass while it runs; the display layer
/// reads it only after the pass has returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Colour>,
}

impl PixelBuffer {
    pub fn new(width: u32, height: u32) -> Result<Self, PixelBufferError> {
        if width == 0 || height == 0 {
            return Err(PixelBufferError::InvalidSize { width, height });
        }

        Ok(Self {
            width,
            height,
            pixels: vec![Colour::BLACK; (width * height) as usize],
        })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn pixels(&self) -> &[Colour] {
        &self.pixels
    }

    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Colour {
        self.pixels[(y * self.width + x) as usize]
    }

    pub(crate) fn pixels_mut(&mut self) -> &mut [Colour] {
        &mut self.pixels
    }

    /// Reallocates the buffer for new output dimensions. Previous contents
    /// are discarded; the next render pass overwrites every pixel anyway.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), PixelBufferError> {
        if width == 0 || height == 0 {
            return Err(PixelBufferError::InvalidSize { width, height });
        }

        self.width = width;
        self.height = height;
        self.pixels = vec![Colour::BLACK; (width * height) as usize];

        Ok(())
    }
}
