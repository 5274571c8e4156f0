//! timeline-picker: horizontally scrollable hour/quarter-hour picker widget.
//!
//! The crate keeps the scroll-offset-to-time mapping and snap decisions in a
//! toolkit-independent core, with an optional Cairo renderer and GTK4 adapter
//! for desktop hosts.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{PickerConfig, TimelinePicker};
pub use error::{PickerError, PickerResult};
