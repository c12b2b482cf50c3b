use crate::photobooth::frame_color::FrameColor;
use cosmic_text::{Attrs, Buffer, Color, Family, FontSystem, Metrics, Shaping, SwashCache, Weight};
use tiny_skia::{Paint, Pixmap, Rect, Transform};

pub struct TextStyle<'a> {
    pub family: &'a str,
    pub size: f32,
    pub color: FrameColor,
}

/// Shapes and rasterizes single lines of bold text onto a pixmap.
pub struct TextPainter {
    font_system: FontSystem,
    swash_cache: SwashCache,
}

impl TextPainter {
    /// Loads system fonts, which is slow; keep one painter around.
    pub fn new() -> Self {
        Self {
            font_system: FontSystem::new(),
            swash_cache: SwashCache::new(),
        }
    }

    /// Draws `text` horizontally centered on `center_x` with its baseline
    /// at `baseline`.
    pub fn draw_centered(
        &mut self,
        pixmap: &mut Pixmap,
        text: &str,
        style: &TextStyle,
        center_x: f32,
        baseline: f32,
    ) {
        let metrics = Metrics::new(style.size, style.size * 1.2);
        let mut buffer = Buffer::new(&mut self.font_system, metrics);
        buffer.set_size(&mut self.font_system, None, None);
        let attrs = Attrs::new()
            .family(Family::Name(style.family))
            .weight(Weight::BOLD);
        buffer.set_text(&mut self.font_system, text, attrs, Shaping::Advanced);
        buffer.shape_until_scroll(&mut self.font_system, false);

        let (line_width, line_baseline) = match buffer.layout_runs().next() {
            Some(run) => (run.line_w, run.line_y),
            None => return,
        };
        let offset_x = (center_x - line_width / 2.0).round() as i32;
        let offset_y = (baseline - line_baseline).round() as i32;

        let FrameColor { r, g, b, a } = style.color;
        buffer.draw(
            &mut self.font_system,
            &mut self.swash_cache,
            Color::rgba(r, g, b, a),
            |x, y, w, h, color| {
                if color.a() == 0 {
                    return;
                }
                let rect = Rect::from_xywh(
                    (x + offset_x) as f32,
                    (y + offset_y) as f32,
                    w as f32,
                    h as f32,
                );
                if let Some(rect) = rect {
                    let mut paint = Paint::default();
                    paint.set_color_rgba8(color.r(), color.g(), color.b(), color.a());
                    paint.anti_alias = false;
                    pixmap.fill_rect(rect, &paint, Transform::identity(), None);
                }
            },
        );
    }
}
