//! Composition of the three captured frames into one framed strip.

pub mod engine;
pub mod layout;
pub mod shapes;
pub mod text;

use std::fmt;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompositionError {
    #[error("expected {expected} frames, got {actual}")]
    InvalidFrameCount { expected: usize, actual: usize },

    #[error("frame {0} has no pixels")]
    EmptyFrame(usize),

    #[error("canvas of {width}x{height} is too large")]
    CanvasTooLarge { width: u64, height: u64 },

    #[error("failed to allocate {0}")]
    Allocation(&'static str),

    #[error("text renderer unavailable")]
    TextRenderer,

    #[error("failed to encode image: {0}")]
    Encode(#[from] image::ImageError),
}

/// PNG encoded strip, ready for download.
#[derive(Clone, PartialEq)]
pub struct ComposedImage {
    pub width: u32,
    pub height: u32,
    pub png: Vec<u8>,
}

impl fmt::Debug for ComposedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ComposedImage({}x{}, {} bytes)",
            self.width,
            self.height,
            self.png.len()
        )
    }
}
