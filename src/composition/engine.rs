use crate::composition::layout::{Layout, Placement};
use crate::composition::shapes::rounded_rect;
use crate::composition::text::{TextPainter, TextStyle};
use crate::composition::{ComposedImage, CompositionError};
use crate::config::CompositionConfig;
use crate::photobooth::frame::CapturedFrame;
use crate::photobooth::frame_color::FrameColor;
use image::{ImageFormat, RgbaImage};
use std::io::Cursor;
use std::sync::Mutex;
use tiny_skia::{
    Color, FillRule, IntSize, Mask, Paint, Pixmap, PixmapPaint, Transform,
};

pub struct CompositionEngine {
    config: CompositionConfig,
    // Created on first use.
    text: Mutex<Option<TextPainter>>,
}

impl CompositionEngine {
    pub fn new(config: CompositionConfig) -> Self {
        Self {
            config,
            text: Mutex::new(None),
        }
    }

    /// Renders the strip: rounded background in `frame_color`, the frames
    /// in order each clipped to rounded corners, then watermark and
    /// `date` underneath.
    pub fn compose(
        &self,
        frames: &[CapturedFrame],
        frame_color: FrameColor,
        date: &str,
    ) -> Result<ComposedImage, CompositionError> {
        let sizes: Vec<(u32, u32)> = frames.iter().map(|f| (f.width(), f.height())).collect();
        let layout = Layout::compute(&sizes, &self.config)?;

        let mut canvas = Pixmap::new(layout.canvas_width, layout.canvas_height)
            .ok_or(CompositionError::Allocation("canvas"))?;

        self.fill_background(&mut canvas, &layout, frame_color)?;

        for (frame, placement) in frames.iter().zip(&layout.frames) {
            self.draw_frame(&mut canvas, frame, placement)?;
        }

        self.draw_captions(&mut canvas, &layout, date)?;

        encode_png(&canvas)
    }

    fn fill_background(
        &self,
        canvas: &mut Pixmap,
        layout: &Layout,
        frame_color: FrameColor,
    ) -> Result<(), CompositionError> {
        let path = rounded_rect(
            0.0,
            0.0,
            layout.canvas_width as f32,
            layout.canvas_height as f32,
            self.config.corner_radius,
        )
        .ok_or(CompositionError::Allocation("background path"))?;

        let mut paint = Paint::default();
        paint.set_color(to_skia(frame_color));
        paint.anti_alias = true;
        canvas.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
        Ok(())
    }

    fn draw_frame(
        &self,
        canvas: &mut Pixmap,
        frame: &CapturedFrame,
        placement: &Placement,
    ) -> Result<(), CompositionError> {
        let clip = rounded_rect(
            placement.x,
            placement.y,
            placement.width as f32,
            placement.height as f32,
            self.config.corner_radius,
        )
        .ok_or(CompositionError::Allocation("frame clip path"))?;

        let mut mask = Mask::new(canvas.width(), canvas.height())
            .ok_or(CompositionError::Allocation("clip mask"))?;
        mask.fill_path(&clip, FillRule::Winding, true, Transform::identity());

        let source = frame_pixmap(frame.image())?;
        canvas.draw_pixmap(
            0,
            0,
            source.as_ref(),
            &PixmapPaint::default(),
            Transform::from_translate(placement.x, placement.y),
            Some(&mask),
        );
        Ok(())
    }

    fn draw_captions(
        &self,
        canvas: &mut Pixmap,
        layout: &Layout,
        date: &str,
    ) -> Result<(), CompositionError> {
        let mut guard = self.text.lock().map_err(|_| CompositionError::TextRenderer)?;
        let painter = guard.get_or_insert_with(TextPainter::new);

        painter.draw_centered(
            canvas,
            &self.config.watermark_text,
            &TextStyle {
                family: &self.config.font_family,
                size: self.config.watermark_font_size,
                color: self.config.text_color,
            },
            layout.text_center_x,
            layout.watermark_baseline,
        );
        painter.draw_centered(
            canvas,
            date,
            &TextStyle {
                family: &self.config.font_family,
                size: self.config.date_font_size,
                color: self.config.text_color,
            },
            layout.text_center_x,
            layout.date_baseline,
        );
        Ok(())
    }
}

fn to_skia(color: FrameColor) -> Color {
    Color::from_rgba8(color.r, color.g, color.b, color.a)
}

/// tiny-skia works on premultiplied alpha.
fn frame_pixmap(image: &RgbaImage) -> Result<Pixmap, CompositionError> {
    let size = IntSize::from_wh(image.width(), image.height())
        .ok_or(CompositionError::Allocation("frame pixmap"))?;

    let mut data = image.as_raw().clone();
    for pixel in data.chunks_exact_mut(4) {
        let alpha = pixel[3] as u16;
        if alpha == 255 {
            continue;
        }
        for channel in &mut pixel[..3] {
            *channel = ((*channel as u16 * alpha + 127) / 255) as u8;
        }
    }

    Pixmap::from_vec(data, size).ok_or(CompositionError::Allocation("frame pixmap"))
}

fn encode_png(canvas: &Pixmap) -> Result<ComposedImage, CompositionError> {
    let mut rgba = Vec::with_capacity(canvas.data().len());
    for pixel in canvas.pixels() {
        let color = pixel.demultiply();
        rgba.extend_from_slice(&[color.red(), color.green(), color.blue(), color.alpha()]);
    }

    let image = RgbaImage::from_raw(canvas.width(), canvas.height(), rgba)
        .ok_or(CompositionError::Allocation("output image"))?;

    let mut png = Vec::new();
    image.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;

    Ok(ComposedImage {
        width: canvas.width(),
        height: canvas.height(),
        png,
    })
}
