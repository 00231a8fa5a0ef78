use std::sync::Arc;

use business::domain::auth::services::AuthProvider;
use business::domain::capability::errors::FactoryError;
use business::domain::capability::factory::AuthProviderFactory;
use business::domain::logger::Logger;
use business::domain::shared::value_objects::{StoreIdentifier, Vendor};

use crate::setup::bindings::{BindingError, VendorBindings, require};
use crate::setup::registry::ProviderRegistry;

static AUTH_PROVIDERS: ProviderRegistry<dyn AuthProvider> = ProviderRegistry::new(
    "auth",
    &[
        #[cfg(feature = "gms")]
        (Vendor::Google, google_auth_provider),
        #[cfg(feature = "hms")]
        (Vendor::Huawei, huawei_auth_provider),
    ],
);

#[cfg(feature = "gms")]
fn google_auth_provider(
    bindings: &VendorBindings,
    logger: Arc<dyn Logger>,
) -> Result<Box<dyn AuthProvider>, BindingError> {
    let sdk = require(&bindings.google_sign_in, "google_sign_in")?;
    Ok(Box::new(gms::GoogleAuthProvider::new(sdk, logger)))
}

#[cfg(feature = "hms")]
fn huawei_auth_provider(
    bindings: &VendorBindings,
    logger: Arc<dyn Logger>,
) -> Result<Box<dyn AuthProvider>, BindingError> {
    let manager = require(&bindings.huawei_account, "huawei_account")?;
    Ok(Box::new(hms::HuaweiAuthProvider::new(manager, logger)))
}

/// Vendors compiled into this binary, fallback first.
pub fn auth_vendors() -> Vec<Vendor> {
    AUTH_PROVIDERS.vendors().collect()
}

pub struct AuthProviderFactoryImpl {
    pub bindings: VendorBindings,
    pub logger: Arc<dyn Logger>,
}

impl AuthProviderFactory for AuthProviderFactoryImpl {
    fn create(&self, store: &StoreIdentifier) -> Result<Box<dyn AuthProvider>, FactoryError> {
        AUTH_PROVIDERS.resolve(store, &self.bindings, &self.logger)
    }
}
