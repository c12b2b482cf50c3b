use crate::device_camera::interface::DeviceCamera;
use crate::library::logger::interface::Logger;
use image::{DynamicImage, Rgba, RgbaImage};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

pub struct DeviceCameraFake {
    width: u32,
    height: u32,
    started: AtomicBool,
    fail_start: bool,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl DeviceCameraFake {
    pub fn new(width: u32, height: u32, logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            width,
            height,
            started: AtomicBool::new(false),
            fail_start: false,
            logger: logger.with_namespace("camera").with_namespace("fake"),
        }
    }

    /// A camera whose acquisition always fails, like a denied permission.
    #[allow(dead_code)]
    pub fn unavailable(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            fail_start: true,
            ..Self::new(0, 0, logger)
        }
    }

    fn random_frame(&self) -> RgbaImage {
        let top: [u8; 3] = rand::random();
        let bottom: [u8; 3] = rand::random();
        let height = self.height.max(1);

        RgbaImage::from_fn(self.width, self.height, |_x, y| {
            let t = y as f32 / height as f32;
            let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
            Rgba([
                mix(top[0], bottom[0]),
                mix(top[1], bottom[1]),
                mix(top[2], bottom[2]),
                255,
            ])
        })
    }
}

impl DeviceCamera for DeviceCameraFake {
    fn start(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.logger.info("Starting camera...")?;
        if self.fail_start {
            return Err("Permission denied".into());
        }
        self.started.store(true, Ordering::SeqCst);
        self.logger.info("Camera started")?;
        Ok(())
    }

    fn stop(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.logger.info("Stopping camera...")?;
        self.started.store(false, Ordering::SeqCst);
        self.logger.info("Camera stopped")?;
        Ok(())
    }

    fn capture_frame(&self) -> Result<DynamicImage, Box<dyn std::error::Error + Send + Sync>> {
        if !self.started.load(Ordering::SeqCst) {
            return Err("Camera not started".into());
        }
        self.logger.info("Capturing frame...")?;
        let image = self.random_frame();
        self.logger.info("Frame captured")?;
        Ok(DynamicImage::ImageRgba8(image))
    }
}
