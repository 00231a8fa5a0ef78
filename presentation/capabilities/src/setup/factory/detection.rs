use std::sync::Arc;

use business::domain::capability::errors::FactoryError;
use business::domain::capability::factory::ObjectDetectorFactory;
use business::domain::detection::services::ObjectDetector;
use business::domain::logger::Logger;
use business::domain::shared::value_objects::{StoreIdentifier, Vendor};

use crate::setup::bindings::{BindingError, VendorBindings, require};
use crate::setup::registry::ProviderRegistry;

static OBJECT_DETECTORS: ProviderRegistry<dyn ObjectDetector> = ProviderRegistry::new(
    "object detection",
    &[
        #[cfg(feature = "gms")]
        (Vendor::Google, google_object_detector),
        #[cfg(feature = "hms")]
        (Vendor::Huawei, huawei_object_detector),
    ],
);

#[cfg(feature = "gms")]
fn google_object_detector(
    bindings: &VendorBindings,
    logger: Arc<dyn Logger>,
) -> Result<Box<dyn ObjectDetector>, BindingError> {
    let sdk = require(&bindings.mlkit_object_detection, "mlkit_object_detection")?;
    Ok(Box::new(gms::GoogleObjectDetector::new(sdk, logger)))
}

#[cfg(feature = "hms")]
fn huawei_object_detector(
    bindings: &VendorBindings,
    logger: Arc<dyn Logger>,
) -> Result<Box<dyn ObjectDetector>, BindingError> {
    let factory = require(&bindings.huawei_ml, "huawei_ml")?;
    Ok(Box::new(hms::HuaweiObjectDetector::new(factory, logger)))
}

pub fn detection_vendors() -> Vec<Vendor> {
    OBJECT_DETECTORS.vendors().collect()
}

/// Hands out uninitialized detectors; callers run `initialize` themselves.
pub struct ObjectDetectorFactoryImpl {
    pub bindings: VendorBindings,
    pub logger: Arc<dyn Logger>,
}

impl ObjectDetectorFactory for ObjectDetectorFactoryImpl {
    fn create(&self, store: &StoreIdentifier) -> Result<Box<dyn ObjectDetector>, FactoryError> {
        OBJECT_DETECTORS.resolve(store, &self.bindings, &self.logger)
    }
}
