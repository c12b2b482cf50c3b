use crate::device_controls::interface::{DeviceControls, DeviceControlsEvent};
use crate::library::logger::interface::Logger;
use std::io::BufRead;
use std::sync::mpsc::{channel, Receiver};
use std::sync::Arc;

/// Reads commands from stdin, one per line.
pub struct DeviceControlsConsole {
    logger: Arc<dyn Logger + Send + Sync>,
}

impl DeviceControlsConsole {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger: logger.with_namespace("controls").with_namespace("console"),
        }
    }
}

impl DeviceControls for DeviceControlsConsole {
    fn events(&self) -> Receiver<DeviceControlsEvent> {
        let (tx, rx) = channel();
        let logger = self.logger.clone();

        std::thread::spawn(move || {
            println!("Commands: c(apture), r(eset), d(ownload), color <#rrggbb>, q(uit)");
            let stdin = std::io::stdin();
            for line in stdin.lock().lines() {
                let line = match line {
                    Ok(line) => line,
                    Err(e) => {
                        let _ = logger.error(&format!("Failed to read stdin: {}", e));
                        break;
                    }
                };

                match DeviceControlsEvent::parse(&line) {
                    Ok(Some(event)) => {
                        if tx.send(event).is_err() {
                            break;
                        }
                    }
                    Ok(None) => {}
                    Err(message) => println!("{}", message),
                }
            }
            // stdin closed
            let _ = tx.send(DeviceControlsEvent::Quit);
        });

        rx
    }
}
