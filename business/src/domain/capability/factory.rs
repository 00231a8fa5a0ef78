use crate::domain::auth::services::AuthProvider;
use crate::domain::detection::services::ObjectDetector;
use crate::domain::shared::value_objects::StoreIdentifier;

use super::errors::FactoryError;

/// Builds the auth adapter for a store. The returned instance is unconfigured.
pub trait AuthProviderFactory: Send + Sync {
    fn create(&self, store: &StoreIdentifier) -> Result<Box<dyn AuthProvider>, FactoryError>;
}

/// Builds the detection adapter for a store. The returned instance is uninitialized.
pub trait ObjectDetectorFactory: Send + Sync {
    fn create(&self, store: &StoreIdentifier) -> Result<Box<dyn ObjectDetector>, FactoryError>;
}
