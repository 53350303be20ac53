use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid canvas size: width={width}, height={height}")]
    InvalidCanvasSize { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
