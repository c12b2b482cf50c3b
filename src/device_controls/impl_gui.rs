use crate::device_controls::interface::{DeviceControls, DeviceControlsEvent};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Mutex;

/// Controls fed by the buttons of the GUI window. The window gets a
/// sender through `sender()`.
pub struct DeviceControlsGui {
    sender: Sender<DeviceControlsEvent>,
    receiver: Mutex<Option<Receiver<DeviceControlsEvent>>>,
}

impl DeviceControlsGui {
    pub fn new() -> Self {
        let (sender, receiver) = channel();
        Self {
            sender,
            receiver: Mutex::new(Some(receiver)),
        }
    }

    pub fn sender(&self) -> Sender<DeviceControlsEvent> {
        self.sender.clone()
    }
}

impl DeviceControls for DeviceControlsGui {
    fn events(&self) -> Receiver<DeviceControlsEvent> {
        let taken = self.receiver.lock().ok().and_then(|mut r| r.take());
        match taken {
            Some(receiver) => receiver,
            None => {
                // Already subscribed; the second subscriber gets a closed channel.
                let (_tx, rx) = channel();
                rx
            }
        }
    }
}
