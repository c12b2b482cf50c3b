use crate::device_display::interface::{DeviceDisplay, Thumbnail};
use crate::photobooth::core::{Model, ModelCamera};
use std::sync::{Arc, Mutex};

/// Thumbnails for the gallery. The border always follows the current
/// frame color.
pub fn gallery(model: &Model) -> Vec<Thumbnail> {
    model
        .frames
        .iter()
        .map(|frame| Thumbnail {
            frame: frame.clone(),
            border_color: model.frame_color,
        })
        .collect()
}

pub fn camera_status(camera: &ModelCamera) -> String {
    match camera {
        ModelCamera::Acquiring => "Starting camera...".to_string(),
        ModelCamera::Ready => "Live".to_string(),
        ModelCamera::Unavailable(reason) => format!("Unavailable ({})", reason),
    }
}

#[derive(Clone)]
pub struct Render {
    device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>>,
}

impl Render {
    pub fn new(device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>>) -> Self {
        Self { device_display }
    }

    pub fn render(&self, model: &Model) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut device_display = self.device_display.lock().map_err(|e| e.to_string())?;

        device_display.show_camera_status(&camera_status(&model.camera))?;

        match model.countdown.remaining() {
            Some(value) => device_display.show_countdown(value)?,
            None => device_display.hide_countdown()?,
        }

        device_display.render_gallery(&gallery(model))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device_display::impl_fake::DeviceDisplayFake;
    use crate::library::logger::impl_console::LoggerConsole;
    use crate::photobooth::countdown::Countdown;
    use crate::photobooth::frame::CapturedFrame;
    use crate::photobooth::frame_color::FrameColor;
    use image::RgbaImage;

    fn model_with_frames(count: u64) -> Model {
        let mut model = Model::new(FrameColor::rgb(255, 255, 255));
        for id in 1..=count {
            model.frames.push(CapturedFrame::new(id, RgbaImage::new(4, 4)));
        }
        model
    }

    #[test]
    fn test_gallery_follows_frame_color() {
        let mut model = model_with_frames(2);
        model.frame_color = FrameColor::rgb(255, 0, 0);

        let thumbnails = gallery(&model);

        assert_eq!(thumbnails.len(), 2);
        assert!(thumbnails
            .iter()
            .all(|t| t.border_color == FrameColor::rgb(255, 0, 0)));
        assert_eq!(thumbnails[0].frame.id(), 1);
        assert_eq!(thumbnails[1].frame.id(), 2);
    }

    #[test]
    fn test_render_pushes_countdown_and_gallery() {
        let logger = Arc::new(LoggerConsole::new(chrono::FixedOffset::east_opt(0).unwrap()));
        let display = Arc::new(Mutex::new(DeviceDisplayFake::new(logger)));
        let render = Render::new(display.clone());
        let mut model = model_with_frames(1);
        model.countdown = Countdown::Counting(2);
        model.camera = ModelCamera::Ready;

        render.render(&model).unwrap();
        {
            let display = display.lock().unwrap();
            assert_eq!(display.countdown, Some(2));
            assert_eq!(display.gallery.len(), 1);
            assert_eq!(display.camera_status, "Live");
        }

        model.countdown = Countdown::Idle;
        model.frames.clear();
        render.render(&model).unwrap();

        let display = display.lock().unwrap();
        assert_eq!(display.countdown, None);
        assert!(display.gallery.is_empty());
    }
}
