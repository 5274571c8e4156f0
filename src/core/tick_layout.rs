use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::error::{PickerError, PickerResult};

/// First hour rendered by the picker (inclusive).
pub const HOUR_START: u32 = 1;
/// Last hour rendered by the picker (inclusive). A closing major tick follows it.
pub const HOUR_END: u32 = 23;
/// Minor ticks emitted after every major tick.
pub const QUARTERS_PER_HOUR: u32 = 3;
/// Width of one 15-minute block in layout units.
pub const BLOCK_WIDTH: f64 = 12.0;
pub const MAJOR_TICK_HEIGHT: f64 = 35.0;
pub const MINOR_TICK_HEIGHT: f64 = 20.0;

/// Minor tick indices are encoded as `hour + 0.1 * quarter`, so more than nine
/// quarters would collide with the next hour's index.
const MAX_QUARTERS_PER_HOUR: u32 = 9;
const INDEX_MATCH_EPSILON: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TickKind {
    /// Hour boundary.
    Major,
    /// Quarter-hour mark between two hour boundaries.
    Minor,
}

/// One immutable mark along the timeline.
///
/// `index` doubles as the render key and as the anchor identifier used by
/// animated scroll requests. `slot` is the ordinal position in the layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    pub index: f64,
    pub kind: TickKind,
    pub height: f64,
    pub slot: usize,
}

impl Tick {
    /// Leading-edge x offset of this tick's block inside the scroll content.
    #[must_use]
    pub fn content_x(self, block_width: f64) -> f64 {
        self.slot as f64 * block_width
    }
}

/// Ordered tick sequence derived from an hour range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickLayout {
    ticks: Vec<Tick>,
    block_width: f64,
}

impl TickLayout {
    /// Generates the tick sequence for `[hour_start, hour_end]`.
    ///
    /// Each hour contributes one major tick at `hour` followed by
    /// `quarters_per_hour` minor ticks at `hour + 0.1 * q`. A trailing major
    /// tick at `hour_end + 1` closes the range.
    pub fn generate(
        hour_start: u32,
        hour_end: u32,
        quarters_per_hour: u32,
        block_width: f64,
    ) -> PickerResult<Self> {
        if hour_end < hour_start {
            return Err(PickerError::InvalidLayout(format!(
                "hour_end ({hour_end}) must be >= hour_start ({hour_start})"
            )));
        }
        if quarters_per_hour == 0 || quarters_per_hour > MAX_QUARTERS_PER_HOUR {
            return Err(PickerError::InvalidLayout(format!(
                "quarters_per_hour must be in 1..={MAX_QUARTERS_PER_HOUR}, got {quarters_per_hour}"
            )));
        }
        if !block_width.is_finite() || block_width <= 0.0 {
            return Err(PickerError::InvalidLayout(
                "block width must be finite and > 0".to_owned(),
            ));
        }

        let hours = (hour_end - hour_start + 1) as usize;
        let mut ticks = Vec::with_capacity(hours * (quarters_per_hour as usize + 1) + 1);
        for hour in hour_start..=hour_end {
            push_tick(&mut ticks, f64::from(hour), TickKind::Major);
            for quarter in 1..=quarters_per_hour {
                push_tick(
                    &mut ticks,
                    f64::from(hour) + 0.1 * f64::from(quarter),
                    TickKind::Minor,
                );
            }
        }
        push_tick(&mut ticks, f64::from(hour_end) + 1.0, TickKind::Major);

        Ok(Self { ticks, block_width })
    }

    /// Layout built from the picker's fixed range constants.
    pub fn standard() -> PickerResult<Self> {
        Self::generate(HOUR_START, HOUR_END, QUARTERS_PER_HOUR, BLOCK_WIDTH)
    }

    #[must_use]
    pub fn ticks(&self) -> &[Tick] {
        &self.ticks
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ticks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ticks.is_empty()
    }

    #[must_use]
    pub fn block_width(&self) -> f64 {
        self.block_width
    }

    #[must_use]
    pub fn content_width(&self) -> f64 {
        self.ticks.len() as f64 * self.block_width
    }

    /// Content distance that places the trailing tick under the cursor.
    #[must_use]
    pub fn max_distance(&self) -> f64 {
        self.ticks.len().saturating_sub(1) as f64 * self.block_width
    }

    /// Exact anchor lookup by tick index.
    #[must_use]
    pub fn find(&self, index: f64) -> Option<Tick> {
        if !index.is_finite() {
            return None;
        }
        self.ticks
            .iter()
            .copied()
            .find(|tick| (tick.index - index).abs() <= INDEX_MATCH_EPSILON)
    }

    /// Closest anchor to `index` by absolute index difference.
    #[must_use]
    pub fn nearest(&self, index: f64) -> Option<Tick> {
        if !index.is_finite() {
            return None;
        }
        self.ticks
            .iter()
            .copied()
            .min_by_key(|tick| OrderedFloat((tick.index - index).abs()))
    }

    /// Content distance that centers the anchor `index` under the cursor.
    #[must_use]
    pub fn distance_for_index(&self, index: f64) -> Option<f64> {
        self.find(index).map(|tick| tick.content_x(self.block_width))
    }
}

fn push_tick(ticks: &mut Vec<Tick>, index: f64, kind: TickKind) {
    let height = match kind {
        TickKind::Major => MAJOR_TICK_HEIGHT,
        TickKind::Minor => MINOR_TICK_HEIGHT,
    };
    let slot = ticks.len();
    ticks.push(Tick {
        index,
        kind,
        height,
        slot,
    });
}
