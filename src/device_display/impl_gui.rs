use crate::device_controls::interface::DeviceControlsEvent;
use crate::device_display::interface::{DeviceDisplay, Thumbnail};
use crate::photobooth::frame_color::FrameColor;
use eframe::egui;
use std::collections::{HashMap, VecDeque};
use std::error::Error;
use std::sync::mpsc::Sender;
use std::sync::{Arc, Mutex};
use std::time::Duration;

const THUMBNAIL_WIDTH: f32 = 200.0;

#[derive(Default)]
struct Screen {
    countdown: Option<u8>,
    thumbnails: Vec<Thumbnail>,
    camera_status: String,
    alerts: VecDeque<String>,
}

struct PhotoboothWindow {
    screen: Arc<Mutex<Screen>>,
    controls: Sender<DeviceControlsEvent>,
    textures: HashMap<u64, egui::TextureHandle>,
    picker: egui::Color32,
}

fn to_color32(color: FrameColor) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
}

impl PhotoboothWindow {
    fn send(&self, event: DeviceControlsEvent) {
        let _ = self.controls.send(event);
    }

    fn texture(&mut self, ctx: &egui::Context, thumbnail: &Thumbnail) -> egui::TextureId {
        let frame = &thumbnail.frame;
        self.textures
            .entry(frame.id())
            .or_insert_with(|| {
                let image = egui::ColorImage::from_rgba_unmultiplied(
                    [frame.width() as usize, frame.height() as usize],
                    frame.image().as_raw(),
                );
                ctx.load_texture(
                    format!("frame-{}", frame.id()),
                    image,
                    egui::TextureOptions::LINEAR,
                )
            })
            .id()
    }

    fn controls_row(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button("📸 Capture").clicked() {
                self.send(DeviceControlsEvent::Capture);
            }
            if ui.button("Reset").clicked() {
                self.send(DeviceControlsEvent::Reset);
            }
            if ui.button("Download").clicked() {
                self.send(DeviceControlsEvent::Download);
            }
            ui.label("Frame color");
            if ui.color_edit_button_srgba(&mut self.picker).changed() {
                let [r, g, b, _] = self.picker.to_array();
                self.send(DeviceControlsEvent::FrameColor(FrameColor::rgb(r, g, b)));
            }
        });
    }

    fn gallery(&mut self, ctx: &egui::Context, ui: &mut egui::Ui, thumbnails: &[Thumbnail]) {
        // Drop textures of frames that left the gallery.
        self.textures
            .retain(|id, _| thumbnails.iter().any(|t| t.frame.id() == *id));

        ui.horizontal_wrapped(|ui| {
            for thumbnail in thumbnails {
                let texture = self.texture(ctx, thumbnail);
                let frame = &thumbnail.frame;
                let scale = THUMBNAIL_WIDTH / frame.width().max(1) as f32;
                let size = egui::vec2(THUMBNAIL_WIDTH, frame.height() as f32 * scale);

                egui::Frame::none()
                    .stroke(egui::Stroke::new(5.0, to_color32(thumbnail.border_color)))
                    .rounding(10.0)
                    .inner_margin(5.0)
                    .show(ui, |ui| {
                        ui.add(egui::Image::from_texture(egui::load::SizedTexture::new(
                            texture, size,
                        )));
                    });
            }
        });
    }
}

impl eframe::App for PhotoboothWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let (countdown, thumbnails, camera_status, alert) = match self.screen.lock() {
            Ok(screen) => (
                screen.countdown,
                screen.thumbnails.clone(),
                screen.camera_status.clone(),
                screen.alerts.front().cloned(),
            ),
            Err(_) => return,
        };

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Photobooth");
            ui.label(format!("Camera: {}", camera_status));
            ui.add_space(8.0);
            self.controls_row(ui);
            ui.add_space(12.0);
            self.gallery(ctx, ui, &thumbnails);
        });

        if let Some(value) = countdown {
            egui::Area::new(egui::Id::new("countdown"))
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.label(
                        egui::RichText::new(value.to_string())
                            .size(120.0)
                            .strong()
                            .color(egui::Color32::WHITE),
                    );
                });
        }

        if let Some(message) = alert {
            egui::Window::new("Photobooth")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.label(message);
                    if ui.button("OK").clicked() {
                        if let Ok(mut screen) = self.screen.lock() {
                            screen.alerts.pop_front();
                        }
                    }
                });
        }

        // The session updates the screen from another thread.
        ctx.request_repaint_after(Duration::from_millis(100));
    }
}

/// Photobooth window. The session renders into it from its own thread
/// while `run_window` owns the main thread.
pub struct DeviceDisplayGui {
    screen: Arc<Mutex<Screen>>,
}

impl DeviceDisplayGui {
    pub fn new() -> Self {
        Self {
            screen: Arc::new(Mutex::new(Screen::default())),
        }
    }

    /// Opens the window and blocks until it is closed.
    pub fn run_window(
        &self,
        controls: Sender<DeviceControlsEvent>,
        initial_color: FrameColor,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default().with_inner_size([720.0, 520.0]),
            ..Default::default()
        };

        let window = PhotoboothWindow {
            screen: self.screen.clone(),
            controls,
            textures: HashMap::new(),
            picker: to_color32(initial_color),
        };

        eframe::run_native("Photobooth", options, Box::new(|_cc| Box::new(window)))
            .map_err(|e| e.to_string())?;
        Ok(())
    }

    fn with_screen(
        &self,
        f: impl FnOnce(&mut Screen),
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        let mut screen = self.screen.lock().map_err(|e| e.to_string())?;
        f(&mut screen);
        Ok(())
    }
}

impl Clone for DeviceDisplayGui {
    fn clone(&self) -> Self {
        Self {
            screen: self.screen.clone(),
        }
    }
}

impl DeviceDisplay for DeviceDisplayGui {
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.with_screen(|screen| *screen = Screen::default())
    }

    fn show_countdown(&mut self, value: u8) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.with_screen(|screen| screen.countdown = Some(value))
    }

    fn hide_countdown(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.with_screen(|screen| screen.countdown = None)
    }

    fn render_gallery(&mut self, thumbnails: &[Thumbnail]) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.with_screen(|screen| screen.thumbnails = thumbnails.to_vec())
    }

    fn show_camera_status(&mut self, status: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.with_screen(|screen| screen.camera_status = status.to_string())
    }

    fn alert(&mut self, message: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.with_screen(|screen| screen.alerts.push_back(message.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::photobooth::frame::CapturedFrame;
    use image::RgbaImage;

    #[test]
    fn test_renders_land_on_shared_screen() {
        let mut display = DeviceDisplayGui::new();
        let window_side = display.clone();

        display.show_countdown(2).unwrap();
        display
            .render_gallery(&[Thumbnail {
                frame: CapturedFrame::new(1, RgbaImage::new(4, 4)),
                border_color: FrameColor::rgb(1, 2, 3),
            }])
            .unwrap();
        display.alert("hello").unwrap();

        let screen = window_side.screen.lock().unwrap();
        assert_eq!(screen.countdown, Some(2));
        assert_eq!(screen.thumbnails.len(), 1);
        assert_eq!(screen.alerts.front().map(String::as_str), Some("hello"));
    }
}
