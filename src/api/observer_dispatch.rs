use tracing::warn;

use crate::extensions::{PickerContext, PickerObserver};
use crate::render::Renderer;

use super::{PickerEvent, SnapFeedback, TimelinePicker};

impl<R: Renderer, F: SnapFeedback> TimelinePicker<R, F> {
    /// Registers an observer. Ids must be unique; a duplicate id is rejected.
    pub fn add_observer(&mut self, observer: Box<dyn PickerObserver>) -> bool {
        if self.observers.iter().any(|item| item.id() == observer.id()) {
            warn!(id = observer.id(), "ignoring observer with duplicate id");
            return false;
        }
        self.observers.push(observer);
        true
    }

    pub fn remove_observer(&mut self, id: &str) -> bool {
        let before = self.observers.len();
        self.observers.retain(|item| item.id() != id);
        self.observers.len() != before
    }

    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    #[must_use]
    pub fn observer_context(&self) -> PickerContext {
        PickerContext {
            viewport: self.config.viewport,
            raw_offset: self.container.raw_offset(),
            distance: self.container.distance(),
            label: self.label.clone(),
            snap_phase: self.snap.phase(),
            snap_enabled: self.snap.snap_enabled(),
            pending_target: self.snap.pending_target(),
        }
    }

    pub(super) fn emit_event(&mut self, event: PickerEvent) {
        if self.observers.is_empty() {
            return;
        }
        let context = self.observer_context();
        for observer in &mut self.observers {
            observer.on_event(event, &context);
        }
    }
}
