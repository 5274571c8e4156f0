use serde::{Deserialize, Serialize};

use crate::core::{CursorLabel, Viewport};
use crate::error::{PickerError, PickerResult};
use crate::interaction::SnapPhase;
use crate::render::Renderer;

use super::{SnapFeedback, TimelinePicker};

/// Serializable picker state used for diagnostics and host persistence hooks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PickerSnapshot {
    pub viewport: Viewport,
    pub bounces: bool,
    pub tick_count: usize,
    pub raw_offset: f64,
    pub distance: f64,
    pub label: CursorLabel,
    /// `HH:MM` wall-clock time, absent for out-of-day labels like `24:00`.
    pub selected_time: Option<String>,
    pub snap_phase: SnapPhase,
    pub snap_enabled: bool,
    pub pending_target: Option<f64>,
    pub animating: bool,
}

impl<R: Renderer, F: SnapFeedback> TimelinePicker<R, F> {
    #[must_use]
    pub fn snapshot(&self) -> PickerSnapshot {
        PickerSnapshot {
            viewport: self.config.viewport,
            bounces: self.container.bounces(),
            tick_count: self.layout.len(),
            raw_offset: self.container.raw_offset(),
            distance: self.container.distance(),
            label: self.label.clone(),
            selected_time: self
                .selected_time()
                .map(|time| time.format("%H:%M").to_string()),
            snap_phase: self.snap.phase(),
            snap_enabled: self.snap.snap_enabled(),
            pending_target: self.snap.pending_target(),
            animating: self.animation.is_some(),
        }
    }

    pub fn snapshot_json_pretty(&self) -> PickerResult<String> {
        serde_json::to_string_pretty(&self.snapshot()).map_err(|err| {
            PickerError::InvalidData(format!("failed to serialize picker snapshot: {err}"))
        })
    }
}
