use thiserror::Error;

pub type PickerResult<T> = Result<T, PickerError>;

#[derive(Debug, Error)]
pub enum PickerError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid tick layout: {0}")]
    InvalidLayout(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
