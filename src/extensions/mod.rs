mod observers;

pub use observers::{LabelSubscriber, PickerContext, PickerEvent, PickerObserver};
