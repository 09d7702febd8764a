use thiserror::Error;

#[derive(Debug, Error)]
pub enum TileGridError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    #[error("serialization failure: {0}")]
    SerializationFailure(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

impl TileGridError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidParameter(message.into())
    }
}
