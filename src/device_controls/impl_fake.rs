use crate::device_controls::interface::{DeviceControls, DeviceControlsEvent};
use crate::library::logger::interface::Logger;
use std::sync::mpsc::{channel, Receiver};
use std::sync::Arc;
use std::time::Duration;

/// Replays a fixed script of events, each after its own delay.
pub struct DeviceControlsFake {
    script: Vec<(Duration, DeviceControlsEvent)>,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl DeviceControlsFake {
    pub fn new(
        script: Vec<(Duration, DeviceControlsEvent)>,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Self {
        Self {
            script,
            logger: logger.with_namespace("controls").with_namespace("fake"),
        }
    }

    /// Takes three photos with a color change in between, downloads, quits.
    pub fn demo(tick_rate: Duration, logger: Arc<dyn Logger + Send + Sync>) -> Self {
        let photo = tick_rate * 4;
        Self::new(
            vec![
                (Duration::ZERO, DeviceControlsEvent::Capture),
                (photo, DeviceControlsEvent::Capture),
                (
                    photo,
                    DeviceControlsEvent::FrameColor(
                        crate::photobooth::frame_color::FrameColor::rgb(255, 105, 180),
                    ),
                ),
                (Duration::ZERO, DeviceControlsEvent::Capture),
                (photo, DeviceControlsEvent::Download),
                (tick_rate, DeviceControlsEvent::Quit),
            ],
            logger,
        )
    }
}

impl DeviceControls for DeviceControlsFake {
    fn events(&self) -> Receiver<DeviceControlsEvent> {
        let (tx, rx) = channel();
        let script = self.script.clone();
        let logger = self.logger.clone();

        std::thread::spawn(move || {
            for (delay, event) in script {
                std::thread::sleep(delay);
                let _ = logger.info(&format!("Sending {:?}", event));
                if tx.send(event).is_err() {
                    break;
                }
            }
        });

        rx
    }
}
