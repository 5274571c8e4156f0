use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::label_for_offset;
use crate::error::{PickerError, PickerResult};
use crate::interaction::{ScrollAnimation, SnapPhase};
use crate::render::Renderer;

use super::{PickerEvent, SnapFeedback, TimelinePicker};

/// Animated scroll the host should perform (or let the picker step).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollRequest {
    /// Anchor tick index to scroll to.
    pub target_index: f64,
    pub target_distance: f64,
    pub target_raw_offset: f64,
}

impl<R: Renderer, F: SnapFeedback> TimelinePicker<R, F> {
    /// Adopts a scroll position reported by the host container.
    pub fn scroll_offset_changed(&mut self, raw_offset: f64) -> PickerResult<()> {
        self.container.sync_raw_offset(raw_offset)?;
        self.apply_offset_change();
        Ok(())
    }

    pub fn drag_start(&mut self) {
        self.snap.on_drag_start();
        self.animation = None;
        debug!(distance = self.container.distance(), "drag started");
        self.emit_event(PickerEvent::DragStarted);
    }

    /// Moves the content by a pointer delta; positive `delta_x` drags towards earlier time.
    ///
    /// A movement without a preceding `drag_start` starts the drag implicitly.
    pub fn drag_update(&mut self, delta_x: f64) -> PickerResult<()> {
        self.container.scroll_by(delta_x)?;
        if self.snap.phase() != SnapPhase::Dragging {
            self.drag_start();
        }
        self.snap.on_drag_update();
        self.animation = None;
        self.apply_offset_change();
        Ok(())
    }

    /// Ends the drag gesture. The headless container has no momentum, so this
    /// is also the end of scrolling.
    pub fn drag_end(&mut self) -> Option<ScrollRequest> {
        self.scroll_end()
    }

    /// Handles the end of scrolling and issues a snap when armed.
    pub fn scroll_end(&mut self) -> Option<ScrollRequest> {
        let distance = self.container.distance();
        let raw_target = self.snap.on_scroll_end(distance, self.layout.block_width())?;

        let Some(anchor) = self.layout.nearest(raw_target) else {
            self.snap.on_scroll_settled();
            return None;
        };
        let request = self.request_for_anchor(anchor.index)?;
        debug!(
            distance,
            raw_target,
            target_index = request.target_index,
            "snap requested"
        );

        self.animation = Some(ScrollAnimation::new(
            distance,
            request.target_distance,
            self.config.snap_animation_seconds,
        ));
        self.feedback.on_snap(request.target_index);
        self.emit_event(PickerEvent::SnapRequested {
            target_index: request.target_index,
        });
        Some(request)
    }

    /// Advances the pending animated scroll by `delta_seconds`.
    ///
    /// Returns `true` while the animation is still running.
    pub fn step_animation(&mut self, delta_seconds: f64) -> PickerResult<bool> {
        let Some(animation) = self.animation.as_mut() else {
            return Ok(false);
        };
        let distance = animation.step(delta_seconds);
        let finished = animation.is_finished();

        self.container.scroll_to_distance(distance)?;
        self.apply_offset_change();
        if finished {
            self.scroll_settled();
        }
        Ok(!finished)
    }

    /// Marks the current animated scroll as complete.
    ///
    /// Hosts that animate on their own call this when the scroll settles.
    pub fn scroll_settled(&mut self) {
        self.animation = None;
        self.snap.on_scroll_settled();
        self.emit_event(PickerEvent::ScrollSettled);
    }

    /// Starts an animated scroll to an existing anchor.
    pub fn scroll_to_index(&mut self, index: f64) -> PickerResult<ScrollRequest> {
        let request = self.request_for_anchor(index).ok_or_else(|| {
            PickerError::InvalidData(format!("no tick anchor with index {index}"))
        })?;
        self.animation = Some(ScrollAnimation::new(
            self.container.distance(),
            request.target_distance,
            self.config.snap_animation_seconds,
        ));
        Ok(request)
    }

    /// Starts an animated scroll to the tick representing `time`.
    ///
    /// Only quarter-hour times inside the picker's range have anchors.
    pub fn scroll_to_time(&mut self, time: NaiveTime) -> PickerResult<ScrollRequest> {
        let index = index_for_time(time).ok_or_else(|| {
            PickerError::InvalidData(format!("{time} is not on a quarter-hour boundary"))
        })?;
        self.scroll_to_index(index)
    }

    pub(super) fn apply_offset_change(&mut self) {
        let raw_offset = self.container.raw_offset();
        let label = label_for_offset(
            raw_offset,
            self.container.center_offset(),
            self.layout.block_width(),
        );
        let label_changed = label != self.label;
        self.label = label;
        trace!(raw_offset, label = %self.label.text, "cursor label updated");

        self.emit_event(PickerEvent::OffsetChanged {
            raw_offset,
            distance: self.container.distance(),
        });
        if label_changed {
            self.emit_event(PickerEvent::LabelChanged {
                total_minutes: self.label.total_minutes,
            });
        }
    }

    fn request_for_anchor(&self, index: f64) -> Option<ScrollRequest> {
        let tick = self.layout.find(index)?;
        let target_distance = tick.content_x(self.layout.block_width());
        Some(ScrollRequest {
            target_index: tick.index,
            target_distance,
            target_raw_offset: self.container.center_offset() - target_distance,
        })
    }
}

/// Tick index for a quarter-hour wall-clock time (`hour + 0.1 * quarter`).
#[must_use]
pub fn index_for_time(time: NaiveTime) -> Option<f64> {
    if time.second() != 0 || time.minute() % 15 != 0 {
        return None;
    }
    let quarter = time.minute() / 15;
    Some(f64::from(time.hour()) + 0.1 * f64::from(quarter))
}
