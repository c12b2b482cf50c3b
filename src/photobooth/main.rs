use crate::composition::engine::CompositionEngine;
use crate::config::Config;
use crate::device_camera::interface::DeviceCamera;
use crate::device_controls::interface::DeviceControls;
use crate::device_display::interface::DeviceDisplay;
use crate::device_download::interface::DeviceDownload;
use crate::library::logger::interface::Logger;
use crate::photobooth::core::Msg;
use crate::photobooth::render::Render;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::{Arc, Mutex};

/// One booth session. The model lives inside `run`; everything else
/// talks to it through messages.
#[derive(Clone)]
pub struct Photobooth {
    pub config: Config,
    pub logger: Arc<dyn Logger + Send + Sync>,
    pub device_camera: Arc<dyn DeviceCamera + Send + Sync>,
    pub device_controls: Arc<dyn DeviceControls + Send + Sync>,
    pub device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>>,
    pub device_download: Arc<dyn DeviceDownload + Send + Sync>,
    pub composition: Arc<CompositionEngine>,
    pub render: Render,
    pub event_sender: Sender<Msg>,
    pub event_receiver: Arc<Mutex<Receiver<Msg>>>,
}

impl Photobooth {
    pub fn new(
        config: Config,
        logger: Arc<dyn Logger + Send + Sync>,
        device_camera: Arc<dyn DeviceCamera + Send + Sync>,
        device_controls: Arc<dyn DeviceControls + Send + Sync>,
        device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>>,
        device_download: Arc<dyn DeviceDownload + Send + Sync>,
    ) -> Self {
        let (event_sender, event_receiver) = channel();

        Self {
            composition: Arc::new(CompositionEngine::new(config.composition.clone())),
            render: Render::new(device_display.clone()),
            logger: logger.with_namespace("photobooth"),
            config,
            device_camera,
            device_controls,
            device_display,
            device_download,
            event_sender,
            event_receiver: Arc::new(Mutex::new(event_receiver)),
        }
    }

    /// Lets code outside the session post messages, e.g. a window that
    /// was closed.
    pub fn sender(&self) -> Sender<Msg> {
        self.event_sender.clone()
    }

    pub fn send(&self, msg: Msg) {
        if self.event_sender.send(msg).is_err() {
            let _ = self.logger.error("Session loop is gone, dropping message");
        }
    }
}
