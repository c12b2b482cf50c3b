use crate::photobooth::frame_color::FrameColor;
use std::path::PathBuf;
use std::time::Duration;

/// Geometry and typography of the composed strip.
#[derive(Debug, Clone, PartialEq)]
pub struct CompositionConfig {
    /// Added to the frame width to get the canvas width.
    pub horizontal_padding: u32,
    /// Gap below every frame.
    pub frame_spacing: u32,
    /// Extra height for the top and bottom edges of the strip.
    pub vertical_padding: u32,
    /// Offset of the first frame from the top edge.
    pub top_offset: u32,
    /// Height reserved at the bottom for the watermark and date.
    pub watermark_margin: u32,
    pub corner_radius: f32,
    pub watermark_text: String,
    pub watermark_font_size: f32,
    pub date_font_size: f32,
    /// Distance the date baseline sits below the watermark baseline.
    pub date_offset: f32,
    pub text_color: FrameColor,
    pub font_family: String,
    /// chrono format string for the date stamp.
    pub date_format: String,
}

impl Default for CompositionConfig {
    fn default() -> Self {
        Self {
            horizontal_padding: 40,
            frame_spacing: 10,
            vertical_padding: 20,
            top_offset: 10,
            watermark_margin: 80,
            corner_radius: 30.0,
            watermark_text: "Photobooth".to_string(),
            watermark_font_size: 30.0,
            date_font_size: 20.0,
            date_offset: 20.0,
            text_color: FrameColor::rgba(255, 255, 255, 179),
            font_family: "Times New Roman".to_string(),
            date_format: "%-m/%-d/%Y".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub tick_rate: Duration,
    pub countdown_from: u8,
    pub default_frame_color: FrameColor,
    pub logger_timezone: chrono::FixedOffset,
    pub download_file_name: String,
    pub download_dir: PathBuf,
    pub fake_camera_width: u32,
    pub fake_camera_height: u32,
    pub composition: CompositionConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_rate: Duration::from_secs(1),
            countdown_from: 3,
            default_frame_color: FrameColor::rgb(255, 255, 255),
            logger_timezone: local_offset(),
            download_file_name: "photobooth.png".to_string(),
            download_dir: PathBuf::from("."),
            fake_camera_width: 640,
            fake_camera_height: 480,
            composition: CompositionConfig::default(),
        }
    }
}

fn local_offset() -> chrono::FixedOffset {
    *chrono::Local::now().offset()
}
