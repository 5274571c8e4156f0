use crate::core::{MAJOR_TICK_HEIGHT, TickKind};
use crate::error::PickerResult;
use crate::render::{
    CirclePrimitive, LinePrimitive, RectPrimitive, RenderFrame, Renderer, TextHAlign,
    TextPrimitive,
};

use super::{
    CURSOR_BADGE_DIAMETER, CURSOR_HEIGHT, CURSOR_STEM_WIDTH, LABEL_FONT_SIZE, SnapFeedback,
    TICK_STROKE_WIDTH, TOP_PADDING, TimelinePicker,
};

/// Vertical placement of the cursor badge, stem, and tick row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickerGeometry {
    pub badge_center_y: f64,
    pub stem_top: f64,
    pub stem_bottom: f64,
    pub ticks_top: f64,
}

impl PickerGeometry {
    #[must_use]
    pub fn standard() -> Self {
        let stem_top = TOP_PADDING + CURSOR_BADGE_DIAMETER;
        let stem_bottom = stem_top + CURSOR_HEIGHT;
        Self {
            badge_center_y: TOP_PADDING + CURSOR_BADGE_DIAMETER / 2.0,
            stem_top,
            stem_bottom,
            ticks_top: stem_bottom - MAJOR_TICK_HEIGHT,
        }
    }
}

impl<R: Renderer, F: SnapFeedback> TimelinePicker<R, F> {
    /// Materializes the current scene without drawing it.
    pub fn build_render_frame(&self) -> PickerResult<RenderFrame> {
        let viewport = self.config.viewport;
        let style = self.config.style;
        let geometry = PickerGeometry::standard();
        let width = f64::from(viewport.width);
        let block_width = self.layout.block_width();
        let raw_offset = self.container.raw_offset();

        let mut frame = RenderFrame::new(viewport).with_rect(RectPrimitive::new(
            0.0,
            0.0,
            width,
            f64::from(viewport.height),
            style.background_color,
        ));

        for tick in self.layout.ticks() {
            let x = raw_offset + tick.content_x(block_width);
            if x < -block_width || x > width + block_width {
                continue;
            }
            let color = match tick.kind {
                TickKind::Major => style.major_tick_color,
                TickKind::Minor => style.minor_tick_color,
            };
            frame = frame.with_line(LinePrimitive::new(
                x,
                geometry.ticks_top,
                x,
                geometry.ticks_top + tick.height,
                TICK_STROKE_WIDTH,
                color,
            ));
        }

        let center_x = self.container.center_offset();
        frame = frame
            .with_line(LinePrimitive::new(
                center_x,
                geometry.stem_top,
                center_x,
                geometry.stem_bottom,
                CURSOR_STEM_WIDTH,
                style.cursor_color,
            ))
            .with_circle(CirclePrimitive::new(
                center_x,
                geometry.badge_center_y,
                CURSOR_BADGE_DIAMETER / 2.0,
                style.cursor_color,
            ))
            .with_text(
                TextPrimitive::new(
                    format!("{}h", self.label.text),
                    center_x,
                    geometry.badge_center_y,
                    LABEL_FONT_SIZE,
                    style.label_color,
                    TextHAlign::Center,
                )
                .with_bold(true),
            );

        Ok(frame)
    }
}
