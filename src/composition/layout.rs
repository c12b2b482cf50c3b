use crate::composition::CompositionError;
use crate::config::CompositionConfig;
use crate::photobooth::frame::FRAME_COUNT;

/// Where one frame lands on the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub x: f32,
    pub y: f32,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub frames: Vec<Placement>,
    pub text_center_x: f32,
    pub watermark_baseline: f32,
    pub date_baseline: f32,
}

impl Layout {
    /// Canvas size follows the first frame; every frame is centered on its
    /// own width and stacked by its own height.
    pub fn compute(
        sizes: &[(u32, u32)],
        config: &CompositionConfig,
    ) -> Result<Layout, CompositionError> {
        if sizes.len() != FRAME_COUNT {
            return Err(CompositionError::InvalidFrameCount {
                expected: FRAME_COUNT,
                actual: sizes.len(),
            });
        }
        if let Some(index) = sizes.iter().position(|&(w, h)| w == 0 || h == 0) {
            return Err(CompositionError::EmptyFrame(index));
        }

        let (first_width, first_height) = sizes[0];
        let width = first_width as u64 + config.horizontal_padding as u64;
        let height = (first_height as u64 + config.frame_spacing as u64) * sizes.len() as u64
            + config.vertical_padding as u64
            + config.watermark_margin as u64;

        let too_large = || CompositionError::CanvasTooLarge { width, height };
        let canvas_width = u32::try_from(width).map_err(|_| too_large())?;
        let canvas_height = u32::try_from(height).map_err(|_| too_large())?;

        let frames = sizes
            .iter()
            .enumerate()
            .map(|(index, &(w, h))| Placement {
                x: (canvas_width as f32 - w as f32) / 2.0,
                y: index as f32 * (h as f32 + config.frame_spacing as f32)
                    + config.top_offset as f32,
                width: w,
                height: h,
            })
            .collect();

        let watermark_baseline = canvas_height as f32 - config.watermark_margin as f32;

        Ok(Layout {
            canvas_width,
            canvas_height,
            frames,
            text_center_x: canvas_width as f32 / 2.0,
            watermark_baseline,
            date_baseline: canvas_height as f32
                - (config.watermark_margin as f32 - config.date_offset),
        })
    }
}
