use thiserror::Error;

pub type SceneResult<T> = Result<T, SceneError>;

#[derive(Debug, Error)]
pub enum SceneError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("contour level {index} out of range for {count} configured levels")]
    LevelOutOfRange { index: usize, count: usize },
}
