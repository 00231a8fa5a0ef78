use std::env;

use business::domain::shared::value_objects::StoreIdentifier;

/// Store flavor captured when the binary was built, if any.
const BUILD_STORE_IDENTIFIER: Option<&str> = option_env!("STORE_IDENTIFIER");

/// Which store this process was shipped through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub store: StoreIdentifier,
}

impl StoreConfig {
    /// Load the store identifier
    ///
    /// Resolution order:
    /// - STORE_IDENTIFIER environment variable at runtime
    /// - STORE_IDENTIFIER captured at build time
    /// - empty, which the factories treat as unrecognized
    pub fn from_env() -> Self {
        Self::resolve(env::var("STORE_IDENTIFIER").ok(), BUILD_STORE_IDENTIFIER)
    }

    fn resolve(runtime: Option<String>, build_time: Option<&str>) -> Self {
        let raw = runtime
            .filter(|value| !value.trim().is_empty())
            .or_else(|| build_time.map(str::to_string))
            .unwrap_or_default();

        Self {
            store: StoreIdentifier::parse(&raw),
        }
    }
}
