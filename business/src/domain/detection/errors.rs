use crate::domain::capability::errors::FactoryError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DetectionError {
    #[error("detection.not_initialized")]
    NotInitialized,
    #[error("detection.no_image_data")]
    NoImageData,
    #[error("detection.initialization_failed: {0}")]
    InitializationFailed(String),
}

/// Errors raised while opening or switching a scan session.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error(transparent)]
    Factory(#[from] FactoryError),
    #[error(transparent)]
    Detection(#[from] DetectionError),
}
