use crate::core::Viewport;
use crate::error::{PickerError, PickerResult};

use super::{PickerConfig, PickerStyle};

pub(super) fn validate_viewport(viewport: Viewport) -> PickerResult<()> {
    if !viewport.is_valid() {
        return Err(PickerError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }
    Ok(())
}

pub(super) fn validate_style(style: PickerStyle) -> PickerResult<()> {
    style.background_color.validate()?;
    style.major_tick_color.validate()?;
    style.minor_tick_color.validate()?;
    style.cursor_color.validate()?;
    style.label_color.validate()
}

pub(super) fn validate_picker_config(config: PickerConfig) -> PickerResult<()> {
    validate_viewport(config.viewport)?;
    if !config.snap_animation_seconds.is_finite() || config.snap_animation_seconds <= 0.0 {
        return Err(PickerError::InvalidData(
            "snap animation duration must be finite and > 0".to_owned(),
        ));
    }
    validate_style(config.style)
}
