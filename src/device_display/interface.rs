use crate::photobooth::frame::CapturedFrame;
use crate::photobooth::frame_color::FrameColor;
use std::error::Error;

/// One gallery entry: a captured frame drawn with a colored border.
#[derive(Clone, Debug, PartialEq)]
pub struct Thumbnail {
    pub frame: CapturedFrame,
    pub border_color: FrameColor,
}

/// Everything the booth shows to the user.
pub trait DeviceDisplay: Send + Sync {
    /// Prepare the display before the first render
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// Show the countdown indicator with the given value
    fn show_countdown(&mut self, value: u8) -> Result<(), Box<dyn Error + Send + Sync>>;

    fn hide_countdown(&mut self) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// Replace the gallery with these thumbnails, in capture order.
    /// An empty slice clears the gallery.
    fn render_gallery(&mut self, thumbnails: &[Thumbnail]) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// One-line description of the video source
    fn show_camera_status(&mut self, status: &str) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// Blocking notification
    fn alert(&mut self, message: &str) -> Result<(), Box<dyn Error + Send + Sync>>;
}
