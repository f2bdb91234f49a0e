use thiserror::Error;

pub type GraphResult<T> = Result<T, GraphError>;

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid color `{0}`")]
    InvalidColor(String),

    #[error("failed to write markup: {0}")]
    Markup(#[from] std::fmt::Error),

    #[error("serialization failed: {0}")]
    Serialization(String),
}
