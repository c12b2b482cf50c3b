use crate::device_display::interface::{DeviceDisplay, Thumbnail};
use crate::library::logger::interface::Logger;
use std::error::Error;
use std::sync::Arc;

/// Records what would be on screen.
#[allow(dead_code)]
pub struct DeviceDisplayFake {
    logger: Arc<dyn Logger + Send + Sync>,
    pub countdown: Option<u8>,
    pub countdown_history: Vec<u8>,
    pub gallery: Vec<Thumbnail>,
    pub camera_status: String,
    pub alerts: Vec<String>,
}

#[allow(dead_code)]
impl DeviceDisplayFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger: logger.with_namespace("display").with_namespace("fake"),
            countdown: None,
            countdown_history: vec![],
            gallery: vec![],
            camera_status: String::new(),
            alerts: vec![],
        }
    }
}

impl DeviceDisplay for DeviceDisplayFake {
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.logger.info("DeviceDisplayFake::init()")?;
        Ok(())
    }

    fn show_countdown(&mut self, value: u8) -> Result<(), Box<dyn Error + Send + Sync>> {
        if self.countdown != Some(value) {
            self.logger
                .info(&format!("DeviceDisplayFake::show_countdown({})", value))?;
            self.countdown_history.push(value);
        }
        self.countdown = Some(value);
        Ok(())
    }

    fn hide_countdown(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.countdown = None;
        Ok(())
    }

    fn render_gallery(&mut self, thumbnails: &[Thumbnail]) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.gallery = thumbnails.to_vec();
        Ok(())
    }

    fn show_camera_status(&mut self, status: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.camera_status = status.to_string();
        Ok(())
    }

    fn alert(&mut self, message: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.logger
            .info(&format!("DeviceDisplayFake::alert({})", message))?;
        self.alerts.push(message.to_string());
        Ok(())
    }
}
