use serde::{Deserialize, Serialize};

use crate::error::{PickerError, PickerResult};

/// Headless model of the horizontal scroll container hosting the ticks.
///
/// Tracks the content distance (how far the content has been scrolled past
/// its origin) and exposes the raw offset in the container's own coordinate
/// space. Overscroll is an explicit construction parameter: with `bounces`
/// disabled every distance is clamped to `[0, max_distance]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollContainer {
    viewport_width: f64,
    max_distance: f64,
    bounces: bool,
    distance: f64,
}

impl ScrollContainer {
    pub fn new(viewport_width: f64, max_distance: f64, bounces: bool) -> PickerResult<Self> {
        if !viewport_width.is_finite() || viewport_width <= 0.0 {
            return Err(PickerError::InvalidData(
                "scroll container width must be finite and > 0".to_owned(),
            ));
        }
        if !max_distance.is_finite() || max_distance < 0.0 {
            return Err(PickerError::InvalidData(
                "scroll container max distance must be finite and >= 0".to_owned(),
            ));
        }

        Ok(Self {
            viewport_width,
            max_distance,
            bounces,
            distance: 0.0,
        })
    }

    #[must_use]
    pub fn viewport_width(self) -> f64 {
        self.viewport_width
    }

    #[must_use]
    pub fn bounces(self) -> bool {
        self.bounces
    }

    #[must_use]
    pub fn max_distance(self) -> f64 {
        self.max_distance
    }

    /// Distance from the container's left edge to the fixed cursor.
    #[must_use]
    pub fn center_offset(self) -> f64 {
        self.viewport_width / 2.0
    }

    #[must_use]
    pub fn distance(self) -> f64 {
        self.distance
    }

    /// Content origin x position in container space.
    #[must_use]
    pub fn raw_offset(self) -> f64 {
        self.center_offset() - self.distance
    }

    /// Applies a pointer delta; dragging right (`delta_x > 0`) reveals earlier time.
    ///
    /// Returns the distance actually applied after clamping.
    pub fn scroll_by(&mut self, delta_x: f64) -> PickerResult<f64> {
        if !delta_x.is_finite() {
            return Err(PickerError::InvalidData(
                "scroll delta must be finite".to_owned(),
            ));
        }
        let next = self.clamp(self.distance - delta_x);
        if !next.is_finite() {
            return Err(PickerError::InvalidData(
                "scroll delta overflows the content distance".to_owned(),
            ));
        }
        let before = self.distance;
        self.distance = next;
        Ok(self.distance - before)
    }

    pub fn scroll_to_distance(&mut self, distance: f64) -> PickerResult<()> {
        if !distance.is_finite() {
            return Err(PickerError::InvalidData(
                "scroll distance must be finite".to_owned(),
            ));
        }
        self.distance = self.clamp(distance);
        Ok(())
    }

    /// Adopts a host-reported raw offset.
    pub fn sync_raw_offset(&mut self, raw_offset: f64) -> PickerResult<()> {
        let distance = self.center_offset() - raw_offset;
        if !raw_offset.is_finite() || !distance.is_finite() {
            return Err(PickerError::InvalidData(
                "raw scroll offset must be finite".to_owned(),
            ));
        }
        self.scroll_to_distance(distance)
    }

    /// Resizes the container while keeping the same time under the cursor.
    pub fn set_viewport_width(&mut self, viewport_width: f64) -> PickerResult<()> {
        if !viewport_width.is_finite() || viewport_width <= 0.0 {
            return Err(PickerError::InvalidData(
                "scroll container width must be finite and > 0".to_owned(),
            ));
        }
        self.viewport_width = viewport_width;
        Ok(())
    }

    fn clamp(self, distance: f64) -> f64 {
        if self.bounces {
            distance
        } else {
            distance.clamp(0.0, self.max_distance)
        }
    }
}
