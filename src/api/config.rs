use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{PickerError, PickerResult};
use crate::render::Color;

pub const CURSOR_HEIGHT: f64 = 45.0;
pub const CURSOR_STEM_WIDTH: f64 = 2.0;
pub const CURSOR_BADGE_DIAMETER: f64 = 60.0;
pub const LABEL_FONT_SIZE: f64 = 16.0;
pub const TICK_STROKE_WIDTH: f64 = 1.0;
pub const TOP_PADDING: f64 = 10.0;
pub const SNAP_ANIMATION_SECONDS: f64 = 0.35;

/// Colors used by the render frame builder.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerStyle {
    pub background_color: Color,
    pub major_tick_color: Color,
    pub minor_tick_color: Color,
    pub cursor_color: Color,
    pub label_color: Color,
}

impl Default for PickerStyle {
    fn default() -> Self {
        Self {
            background_color: Color::rgb(1.0, 1.0, 1.0),
            major_tick_color: Color::rgb(0.0, 0.0, 0.0),
            minor_tick_color: Color::rgb(0.56, 0.56, 0.58),
            cursor_color: Color::rgb(0.0, 0.48, 1.0),
            label_color: Color::rgb(1.0, 1.0, 1.0),
        }
    }
}

/// Public picker bootstrap configuration.
///
/// The hour range is fixed by the layout constants; only presentation and
/// container behavior are configurable here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PickerConfig {
    pub viewport: Viewport,
    /// Whether the scroll container may overscroll past the first/last tick.
    #[serde(default)]
    pub bounces: bool,
    #[serde(default = "default_snap_animation_seconds")]
    pub snap_animation_seconds: f64,
    #[serde(default)]
    pub style: PickerStyle,
}

impl PickerConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            bounces: false,
            snap_animation_seconds: default_snap_animation_seconds(),
            style: PickerStyle::default(),
        }
    }

    #[must_use]
    pub fn with_bounces(mut self, bounces: bool) -> Self {
        self.bounces = bounces;
        self
    }

    #[must_use]
    pub fn with_snap_animation_seconds(mut self, seconds: f64) -> Self {
        self.snap_animation_seconds = seconds;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: PickerStyle) -> Self {
        self.style = style;
        self
    }

    pub fn from_json_str(input: &str) -> PickerResult<Self> {
        serde_json::from_str(input).map_err(|err| {
            PickerError::InvalidData(format!("failed to parse picker config json: {err}"))
        })
    }

    pub fn to_json_pretty(&self) -> PickerResult<String> {
        serde_json::to_string_pretty(self).map_err(|err| {
            PickerError::InvalidData(format!("failed to serialize picker config: {err}"))
        })
    }
}

fn default_snap_animation_seconds() -> f64 {
    SNAP_ANIMATION_SECONDS
}
