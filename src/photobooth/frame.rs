use image::RgbaImage;
use std::fmt;
use std::sync::Arc;

/// One still taken from the camera. Cloning shares the pixels.
#[derive(Clone, PartialEq)]
pub struct CapturedFrame {
    id: u64,
    image: Arc<RgbaImage>,
}

impl CapturedFrame {
    pub fn new(id: u64, image: RgbaImage) -> Self {
        Self {
            id,
            image: Arc::new(image),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }
}

impl fmt::Debug for CapturedFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CapturedFrame(#{} {}x{})",
            self.id,
            self.width(),
            self.height()
        )
    }
}

/// Frames of the current session in capture order, never more than
/// `FRAME_COUNT`.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct FrameCollection {
    frames: Vec<CapturedFrame>,
}

pub const FRAME_COUNT: usize = 3;

impl FrameCollection {
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.frames.len() >= FRAME_COUNT
    }

    /// Appends a frame unless the collection is full. Returns whether the
    /// frame was kept.
    pub fn push(&mut self, frame: CapturedFrame) -> bool {
        if self.is_full() {
            return false;
        }
        self.frames.push(frame);
        true
    }

    pub fn clear(&mut self) {
        self.frames.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &CapturedFrame> {
        self.frames.iter()
    }

    pub fn to_vec(&self) -> Vec<CapturedFrame> {
        self.frames.clone()
    }
}
