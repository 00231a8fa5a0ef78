use std::sync::Arc;

use anyhow::Context;
use dotenvy::dotenv;

use logger::TracingLogger;

use business::application::auth::session::AuthSession;
use business::application::detection::scan::ScanSession;
use business::domain::auth::value_objects::PlatformContext;
use business::domain::capability::errors::FactoryError;
use business::domain::capability::factory::{AuthProviderFactory, ObjectDetectorFactory};
use business::domain::detection::errors::ScanError;
use business::domain::logger::Logger;

use crate::config::app_config::AppConfig;
use crate::setup::bindings::VendorBindings;
use crate::setup::factory::auth::{AuthProviderFactoryImpl, auth_vendors};
use crate::setup::factory::detection::{ObjectDetectorFactoryImpl, detection_vendors};
use crate::setup::telemetry;

/// Wires both capability factories to the configured store.
pub struct CapabilityContainer {
    pub config: AppConfig,
    pub auth_logger: Arc<dyn Logger>,
    pub detection_logger: Arc<dyn Logger>,
    pub auth_factory: Arc<dyn AuthProviderFactory>,
    pub detector_factory: Arc<dyn ObjectDetectorFactory>,
}

impl CapabilityContainer {
    pub fn new(config: AppConfig, bindings: VendorBindings) -> Self {
        Self::with_loggers(
            config,
            bindings,
            Arc::new(TracingLogger::new("auth")),
            Arc::new(TracingLogger::new("detection")),
        )
    }

    pub fn with_loggers(
        config: AppConfig,
        bindings: VendorBindings,
        auth_logger: Arc<dyn Logger>,
        detection_logger: Arc<dyn Logger>,
    ) -> Self {
        let auth_factory = Arc::new(AuthProviderFactoryImpl {
            bindings: bindings.clone(),
            logger: auth_logger.clone(),
        });
        let detector_factory = Arc::new(ObjectDetectorFactoryImpl {
            bindings,
            logger: detection_logger.clone(),
        });

        Self {
            config,
            auth_logger,
            detection_logger,
            auth_factory,
            detector_factory,
        }
    }

    pub fn open_auth_session(&self, context: &PlatformContext) -> Result<AuthSession, FactoryError> {
        AuthSession::open(
            self.auth_factory.as_ref(),
            &self.config.store.store,
            context,
            self.auth_logger.clone(),
        )
    }

    pub fn open_scan_session(&self) -> Result<ScanSession, ScanError> {
        ScanSession::open(
            self.detector_factory.as_ref(),
            &self.config.store.store,
            self.config.detection.scan_settings(),
            self.detection_logger.clone(),
        )
    }
}

/// Host entry point: installs tracing, loads `.env`, reads configuration and
/// checks that the configured store resolves to bound adapters.
pub fn bootstrap(bindings: VendorBindings) -> anyhow::Result<CapabilityContainer> {
    // 1. Initialize tracing with RUST_LOG env filter
    telemetry::init_tracing();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Load configuration
    let config = AppConfig::from_env();

    // 4. Wire factories
    tracing::debug!(
        auth_vendors = ?auth_vendors(),
        detection_vendors = ?detection_vendors(),
        "Registered capability providers"
    );
    let container = CapabilityContainer::new(config, bindings);

    // 5. Fail fast when the store has no usable adapters
    let store = &container.config.store.store;
    let auth = container
        .auth_factory
        .create(store)
        .with_context(|| format!("auth capability unavailable for store '{}'", store))?;
    let detector = container
        .detector_factory
        .create(store)
        .with_context(|| format!("object detection unavailable for store '{}'", store))?;

    tracing::info!(
        store = %store,
        auth_provider = auth.provider_name(),
        detection_provider = detector.provider_name(),
        "Capability layer ready"
    );

    Ok(container)
}
