use crate::photobooth::frame_color::FrameColor;
use std::sync::mpsc::Receiver;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceControlsEvent {
    Capture,
    Reset,
    Download,
    FrameColor(FrameColor),
    Quit,
}

impl DeviceControlsEvent {
    /// Parses one console command line. `Err` carries a message for the user.
    pub fn parse(line: &str) -> Result<Option<Self>, String> {
        let mut words = line.split_whitespace();
        let command = match words.next() {
            Some(command) => command.to_lowercase(),
            None => return Ok(None),
        };

        match command.as_str() {
            "c" | "capture" => Ok(Some(DeviceControlsEvent::Capture)),
            "r" | "reset" => Ok(Some(DeviceControlsEvent::Reset)),
            "d" | "download" => Ok(Some(DeviceControlsEvent::Download)),
            "q" | "quit" | "exit" => Ok(Some(DeviceControlsEvent::Quit)),
            "color" => {
                let value = words.next().ok_or("usage: color <#rrggbb>")?;
                let color = value.parse::<FrameColor>().map_err(|e| e.to_string())?;
                Ok(Some(DeviceControlsEvent::FrameColor(color)))
            }
            other => Err(format!("unknown command: {}", other)),
        }
    }
}

/// Source of user intents: capture, reset, download, color changes.
pub trait DeviceControls {
    /// Meant to be called once; the session subscribes at startup.
    fn events(&self) -> Receiver<DeviceControlsEvent>;
}
