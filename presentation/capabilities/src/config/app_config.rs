use crate::config::{detection_config::DetectionConfig, store_config::StoreConfig};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub store: StoreConfig,
    pub detection: DetectionConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            store: StoreConfig::from_env(),
            detection: DetectionConfig::from_env(),
        }
    }
}
