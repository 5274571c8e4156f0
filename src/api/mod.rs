mod config;
mod feedback;
mod observer_dispatch;
mod picker;
mod picker_interaction;
mod render_frame_builder;
mod snapshot;
mod validation;

pub use config::{
    CURSOR_BADGE_DIAMETER, CURSOR_HEIGHT, CURSOR_STEM_WIDTH, LABEL_FONT_SIZE, PickerConfig,
    PickerStyle, SNAP_ANIMATION_SECONDS, TICK_STROKE_WIDTH, TOP_PADDING,
};
pub use feedback::{NoopFeedback, RecordingFeedback, SnapFeedback};
pub use picker::{ScrollState, TimelinePicker};
pub use picker_interaction::{ScrollRequest, index_for_time};
pub use render_frame_builder::PickerGeometry;
pub use snapshot::PickerSnapshot;

pub use crate::extensions::{LabelSubscriber, PickerContext, PickerEvent, PickerObserver};
