use crate::domain::shared::value_objects::StoreIdentifier;

pub type InstantiationCause = Box<dyn std::error::Error + Send + Sync>;

/// Fatal: without a capability instance nothing else in the layer can run.
#[derive(Debug, thiserror::Error)]
pub enum FactoryError {
    #[error("capability.provider_instantiation_failed: {store}")]
    ProviderInstantiationFailed {
        store: StoreIdentifier,
        #[source]
        source: InstantiationCause,
    },
}

impl FactoryError {
    pub fn provider_instantiation_failed(
        store: StoreIdentifier,
        source: impl Into<InstantiationCause>,
    ) -> Self {
        FactoryError::ProviderInstantiationFailed {
            store,
            source: source.into(),
        }
    }

    /// Store identifier the caller asked for.
    pub fn store(&self) -> &StoreIdentifier {
        match self {
            FactoryError::ProviderInstantiationFailed { store, .. } => store,
        }
    }
}
