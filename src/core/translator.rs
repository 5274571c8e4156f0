//! Scroll-position translation: cursor label and snap target.
//!
//! The label and the snap target read the same physical offset through two
//! different scale factors (`distance / block_width` versus
//! `distance / 4 / block_width`). Both formulas are kept as independent
//! functions because merging them shifts where releases settle.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// Minutes shown at the cursor when the content sits at its origin.
pub const LABEL_BASELINE_MINUTES: i64 = 60;
/// Simulated minutes covered by one block of physical offset.
pub const MINUTES_PER_BLOCK: i64 = 15;
/// Divisor applied to the content distance before the snap quantization.
pub const SNAP_OFFSET_DIVISOR: f64 = 4.0;

/// Time shown at the fixed center cursor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CursorLabel {
    pub text: String,
    pub total_minutes: i64,
}

impl CursorLabel {
    #[must_use]
    pub fn from_total_minutes(total_minutes: i64) -> Self {
        let hours = total_minutes.div_euclid(60);
        let minutes = total_minutes.rem_euclid(60);
        Self {
            text: format!("{hours}:{minutes:02}"),
            total_minutes,
        }
    }

    #[must_use]
    pub fn hours(&self) -> i64 {
        self.total_minutes.div_euclid(60)
    }

    #[must_use]
    pub fn minutes(&self) -> i64 {
        self.total_minutes.rem_euclid(60)
    }

    /// Wall-clock view of the label; `None` outside `[0:00, 23:59]`.
    #[must_use]
    pub fn as_naive_time(&self) -> Option<NaiveTime> {
        let hours = u32::try_from(self.hours()).ok()?;
        let minutes = u32::try_from(self.minutes()).ok()?;
        NaiveTime::from_hms_opt(hours, minutes, 0)
    }
}

impl Default for CursorLabel {
    fn default() -> Self {
        Self::from_total_minutes(LABEL_BASELINE_MINUTES)
    }
}

/// Signed content distance of the cursor from the content's logical start.
///
/// `raw_offset` is the content origin's x position in container space, so a
/// more negative offset means the content moved further left (later time).
#[must_use]
pub fn content_distance(raw_offset: f64, center_offset: f64) -> f64 {
    center_offset - raw_offset
}

/// Converts a raw scroll offset into the `H:MM` label shown at the cursor.
///
/// Total over the real line: non-finite input collapses to the baseline and
/// out-of-range distances produce cosmetic labels outside `[1:00, 24:00]`.
#[must_use]
pub fn label_for_offset(raw_offset: f64, center_offset: f64, block_width: f64) -> CursorLabel {
    let distance = content_distance(raw_offset, center_offset);
    let blocks = (distance / block_width).floor();
    let blocks = if blocks.is_finite() { blocks as i64 } else { 0 };
    let total_minutes =
        LABEL_BASELINE_MINUTES.saturating_add(blocks.saturating_mul(MINUTES_PER_BLOCK));
    CursorLabel::from_total_minutes(total_minutes)
}

/// Tick index to animate to after a release at `distance`.
#[must_use]
pub fn snap_target(distance: f64, block_width: f64) -> f64 {
    let value = (distance / SNAP_OFFSET_DIVISOR) / block_width + 1.0;
    quantize_fraction(value)
}

/// Maps the fractional part of `value` onto the four-way snap grid.
///
/// `[0, 0.375)` -> `+0.1`, `[0.375, 0.625)` -> `+0.2`, `[0.625, 0.875)` -> `+0.3`,
/// `[0.875, 1)` -> next whole hour. Values whose remainder falls outside
/// `[0, 1)` (negative or non-finite input) are returned unchanged.
#[must_use]
pub fn quantize_fraction(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }

    let integer = value.trunc();
    let fraction = value - integer;
    if (0.0..0.375).contains(&fraction) {
        integer + 0.1
    } else if (0.375..0.625).contains(&fraction) {
        integer + 0.2
    } else if (0.625..0.875).contains(&fraction) {
        integer + 0.3
    } else if (0.875..1.0).contains(&fraction) {
        integer + 1.0
    } else {
        value
    }
}
