use crate::device_display::interface::{DeviceDisplay, Thumbnail};
use crate::photobooth::frame_color::FrameColor;
use std::error::Error;

/// Prints display changes to stdout. Renders are deduplicated so the
/// terminal only shows what changed.
pub struct DeviceDisplayConsole {
    countdown: Option<u8>,
    gallery: Option<Vec<(u64, FrameColor)>>,
    camera_status: Option<String>,
}

impl DeviceDisplayConsole {
    pub fn new() -> Self {
        Self {
            countdown: None,
            gallery: None,
            camera_status: None,
        }
    }

    fn print_gallery(thumbnails: &[Thumbnail]) {
        println!("┌ Gallery ({}/3)", thumbnails.len());
        for (index, thumbnail) in thumbnails.iter().enumerate() {
            println!(
                "│ {}. {}x{} border {}",
                index + 1,
                thumbnail.frame.width(),
                thumbnail.frame.height(),
                thumbnail.border_color
            );
        }
        println!("└");
    }
}

impl DeviceDisplay for DeviceDisplayConsole {
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        println!("📸 Photobooth");
        Ok(())
    }

    fn show_countdown(&mut self, value: u8) -> Result<(), Box<dyn Error + Send + Sync>> {
        if self.countdown != Some(value) {
            println!("  {}...", value);
            self.countdown = Some(value);
        }
        Ok(())
    }

    fn hide_countdown(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.countdown = None;
        Ok(())
    }

    fn render_gallery(&mut self, thumbnails: &[Thumbnail]) -> Result<(), Box<dyn Error + Send + Sync>> {
        let signature: Vec<(u64, FrameColor)> = thumbnails
            .iter()
            .map(|t| (t.frame.id(), t.border_color))
            .collect();

        if self.gallery.as_ref() != Some(&signature) {
            Self::print_gallery(thumbnails);
            self.gallery = Some(signature);
        }
        Ok(())
    }

    fn show_camera_status(&mut self, status: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        if self.camera_status.as_deref() != Some(status) {
            println!("Camera: {}", status);
            self.camera_status = Some(status.to_string());
        }
        Ok(())
    }

    fn alert(&mut self, message: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        println!("⚠ {}", message);
        Ok(())
    }
}
