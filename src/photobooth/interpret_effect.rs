use super::main::Photobooth;
use crate::error::PhotoboothError;
use crate::photobooth::core::{Effect, Msg};
use std::fmt::Write;

impl Photobooth {
    pub fn interpret_effect(&self, effect: Effect) {
        let _ = self.logger.info(&format!("Running effect: {:?}", effect));

        match effect {
            Effect::SubscribeToControls => {
                let events = self.device_controls.events();
                while let Ok(event) = events.recv() {
                    if self.event_sender.send(Msg::Controls(event)).is_err() {
                        break;
                    }
                }
            }
            Effect::AcquireCamera => {
                let result = self.device_camera.start();
                if let Err(e) = &result {
                    let error = PhotoboothError::CameraAcquisitionFailed(e.to_string());
                    let _ = self.logger.error(&error.to_string());
                }
                self.send(Msg::CameraAcquireDone(result));
            }
            Effect::ScheduleCountdownTick { session } => {
                std::thread::sleep(self.config.tick_rate);
                self.send(Msg::CountdownTick { session });
            }
            Effect::CaptureFrame { session } => {
                let result = self
                    .device_camera
                    .capture_frame()
                    .map(|image| image.into_rgba8());
                if let Err(e) = &result {
                    let _ = self.logger.error(&format!("Snapshot failed: {}", e));
                }
                self.send(Msg::FrameCaptureDone { session, result });
            }
            Effect::ComposeImage {
                session,
                frames,
                frame_color,
            } => {
                let date = today(&self.config.composition.date_format);
                let result = self.composition.compose(&frames, frame_color, &date);
                if let Err(e) = &result {
                    let _ = self.logger.error(&format!("Composition failed: {}", e));
                }
                self.send(Msg::ComposeDone { session, result });
            }
            Effect::Download { file_name, image } => {
                let result = self.device_download.download(&file_name, &image.png);
                match &result {
                    Ok(path) => {
                        let _ = self
                            .logger
                            .info(&format!("Downloaded {}", path.display()));
                    }
                    Err(e) => {
                        let _ = self.logger.error(&format!("Download failed: {}", e));
                    }
                }
                self.send(Msg::DownloadDone(result));
            }
            Effect::Alert(alert) => {
                let message = alert.to_string();
                let shown = match self.device_display.lock() {
                    Ok(mut display) => display.alert(&message),
                    Err(e) => Err(e.to_string().into()),
                };
                if let Err(e) = shown {
                    let _ = self.logger.error(&format!("Failed to show alert: {}", e));
                }
            }
            Effect::ReleaseCamera => {
                if let Err(e) = self.device_camera.stop() {
                    let _ = self
                        .logger
                        .error(&format!("Failed to release camera: {}", e));
                }
            }
        }
    }
}

/// Current local date. Falls back to ISO order if the configured format is
/// not valid.
fn today(format: &str) -> String {
    let now = chrono::Local::now();
    let mut date = String::new();
    if write!(date, "{}", now.format(format)).is_err() {
        date = now.format("%Y-%m-%d").to_string();
    }
    date
}
