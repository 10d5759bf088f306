use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid care level: {0}")]
    InvalidCareLevel(String),

    #[error("invalid readiness stage: {0}")]
    InvalidReadinessStage(String),
}
