pub mod scroll_container;
pub mod tick_layout;
pub mod translator;
pub mod types;

pub use scroll_container::ScrollContainer;
pub use tick_layout::{
    BLOCK_WIDTH, HOUR_END, HOUR_START, MAJOR_TICK_HEIGHT, MINOR_TICK_HEIGHT, QUARTERS_PER_HOUR,
    Tick, TickKind, TickLayout,
};
pub use translator::{
    CursorLabel, content_distance, label_for_offset, quantize_fraction, snap_target,
};
pub use types::Viewport;
