use std::sync::Arc;

#[cfg(feature = "gms")]
use gms::sdk::{mlkit::ObjectDetection, sign_in::GoogleSignIn};
#[cfg(feature = "hms")]
use hms::sdk::{account::AccountAuthManager, ml::MlAnalyzerFactory};

/// Vendor SDK entry points supplied by the host platform at startup.
///
/// A binding left as `None` makes the matching adapter fail to instantiate.
#[derive(Clone, Default)]
pub struct VendorBindings {
    #[cfg(feature = "gms")]
    pub google_sign_in: Option<Arc<dyn GoogleSignIn>>,
    #[cfg(feature = "gms")]
    pub mlkit_object_detection: Option<Arc<dyn ObjectDetection>>,
    #[cfg(feature = "hms")]
    pub huawei_account: Option<Arc<dyn AccountAuthManager>>,
    #[cfg(feature = "hms")]
    pub huawei_ml: Option<Arc<dyn MlAnalyzerFactory>>,
}

impl VendorBindings {
    #[cfg(feature = "gms")]
    pub fn with_google(
        mut self,
        sign_in: Arc<dyn GoogleSignIn>,
        object_detection: Arc<dyn ObjectDetection>,
    ) -> Self {
        self.google_sign_in = Some(sign_in);
        self.mlkit_object_detection = Some(object_detection);
        self
    }

    #[cfg(feature = "hms")]
    pub fn with_huawei(
        mut self,
        account: Arc<dyn AccountAuthManager>,
        ml: Arc<dyn MlAnalyzerFactory>,
    ) -> Self {
        self.huawei_account = Some(account);
        self.huawei_ml = Some(ml);
        self
    }
}

#[derive(Debug, thiserror::Error)]
pub enum BindingError {
    #[error("capability.binding_missing: {0}")]
    Missing(&'static str),
    #[error("capability.no_providers_registered")]
    NoProviders,
}

pub(crate) fn require<T: ?Sized>(
    binding: &Option<Arc<T>>,
    name: &'static str,
) -> Result<Arc<T>, BindingError> {
    binding.clone().ok_or(BindingError::Missing(name))
}
