use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown biomarker: {0}")]
    UnknownBiomarker(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
