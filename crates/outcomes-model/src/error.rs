use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid region id: {0:?}")]
    InvalidRegionId(String),
    #[error("invalid discipline id: {0:?}")]
    InvalidDisciplineId(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
