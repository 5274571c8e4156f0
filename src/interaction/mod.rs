use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::snap_target;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SnapPhase {
    Idle,
    Dragging,
    /// A snap target was issued and the animated scroll has not settled yet.
    Snapping,
}

/// Snap-enablement state owned by one picker instance.
///
/// At most one pending target exists at a time. A new drag always clears it
/// and re-enables snapping before the next release may issue another one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SnapState {
    phase: SnapPhase,
    snap_enabled: bool,
    pending_target: Option<f64>,
}

impl Default for SnapState {
    fn default() -> Self {
        Self {
            phase: SnapPhase::Idle,
            snap_enabled: true,
            pending_target: None,
        }
    }
}

impl SnapState {
    #[must_use]
    pub fn phase(self) -> SnapPhase {
        self.phase
    }

    #[must_use]
    pub fn snap_enabled(self) -> bool {
        self.snap_enabled
    }

    #[must_use]
    pub fn pending_target(self) -> Option<f64> {
        self.pending_target
    }

    /// Enters `Dragging`, preempting any in-flight snap.
    pub fn on_drag_start(&mut self) {
        if self.phase == SnapPhase::Snapping {
            debug!(
                pending_target = ?self.pending_target,
                "drag preempted in-flight snap"
            );
        }
        self.phase = SnapPhase::Dragging;
        self.snap_enabled = true;
        self.pending_target = None;
    }

    /// Every drag movement keeps snapping armed.
    pub fn on_drag_update(&mut self) {
        if self.phase != SnapPhase::Dragging {
            self.on_drag_start();
            return;
        }
        self.snap_enabled = true;
    }

    /// Handles the end of a scroll gesture at `distance`.
    ///
    /// Returns the snap target when snapping was armed; `None` while a previous
    /// snap is still settling.
    pub fn on_scroll_end(&mut self, distance: f64, block_width: f64) -> Option<f64> {
        if !self.snap_enabled {
            return None;
        }

        let target = snap_target(distance, block_width);
        self.snap_enabled = false;
        self.pending_target = Some(target);
        self.phase = SnapPhase::Snapping;
        Some(target)
    }

    /// Marks the animated scroll as complete. Snapping stays disarmed until the next drag.
    pub fn on_scroll_settled(&mut self) {
        if self.phase == SnapPhase::Snapping {
            self.phase = SnapPhase::Idle;
            self.pending_target = None;
        }
    }
}

/// Deterministic ease-out scroll between two content distances.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollAnimation {
    from: f64,
    to: f64,
    duration_seconds: f64,
    elapsed_seconds: f64,
}

impl ScrollAnimation {
    #[must_use]
    pub fn new(from: f64, to: f64, duration_seconds: f64) -> Self {
        Self {
            from,
            to,
            duration_seconds: duration_seconds.max(0.0),
            elapsed_seconds: 0.0,
        }
    }

    #[must_use]
    pub fn target(self) -> f64 {
        self.to
    }

    #[must_use]
    pub fn is_finished(self) -> bool {
        self.elapsed_seconds >= self.duration_seconds
    }

    /// Advances the animation and returns the distance to apply.
    pub fn step(&mut self, delta_seconds: f64) -> f64 {
        if delta_seconds.is_finite() && delta_seconds > 0.0 {
            self.elapsed_seconds = (self.elapsed_seconds + delta_seconds).min(self.duration_seconds);
        }
        self.current()
    }

    #[must_use]
    pub fn current(self) -> f64 {
        if self.duration_seconds <= 0.0 || self.is_finished() {
            return self.to;
        }
        let t = self.elapsed_seconds / self.duration_seconds;
        let eased = 1.0 - (1.0 - t).powi(3);
        self.from + (self.to - self.from) * eased
    }
}
