use serde::{Deserialize, Serialize};

use crate::core::{CursorLabel, Viewport};
use crate::interaction::SnapPhase;

/// Read-only state snapshot passed to observer hooks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PickerContext {
    pub viewport: Viewport,
    pub raw_offset: f64,
    pub distance: f64,
    pub label: CursorLabel,
    pub snap_phase: SnapPhase,
    pub snap_enabled: bool,
    pub pending_target: Option<f64>,
}

/// Event stream exposed to observers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PickerEvent {
    /// Emitted for every reported scroll position.
    OffsetChanged { raw_offset: f64, distance: f64 },
    LabelChanged { total_minutes: i64 },
    DragStarted,
    SnapRequested { target_index: f64 },
    ScrollSettled,
    Rendered,
}

/// Subscription interface replacing framework-level position observers.
///
/// Observers are invoked synchronously, in registration order, on the thread
/// delivering the scroll events.
pub trait PickerObserver {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: PickerEvent, context: &PickerContext);
}

/// Closure adapter receiving the cursor label on every reported position.
pub struct LabelSubscriber<F>
where
    F: FnMut(&CursorLabel),
{
    id: String,
    callback: F,
}

impl<F> LabelSubscriber<F>
where
    F: FnMut(&CursorLabel),
{
    #[must_use]
    pub fn new(id: impl Into<String>, callback: F) -> Self {
        Self {
            id: id.into(),
            callback,
        }
    }
}

impl<F> PickerObserver for LabelSubscriber<F>
where
    F: FnMut(&CursorLabel),
{
    fn id(&self) -> &str {
        &self.id
    }

    fn on_event(&mut self, event: PickerEvent, context: &PickerContext) {
        if let PickerEvent::OffsetChanged { .. } = event {
            (self.callback)(&context.label);
        }
    }
}
