//! Composition root for the vendor-neutral auth and object detection
//! capabilities.
//!
//! - config/: store identifier and detection tuning read from the environment
//! - setup/: vendor bindings, provider registries, factories and bootstrap
//!
//! Each build flavor enables the `gms` feature, the `hms` feature or both.
//! The first registered vendor serves stores this binary does not recognize.

#[cfg(not(any(feature = "gms", feature = "hms")))]
compile_error!("enable at least one vendor feature: `gms` or `hms`");

pub mod config {
    pub mod app_config;
    pub mod detection_config;
    pub mod store_config;
}

pub mod setup {
    pub mod bindings;
    pub mod dependency_injection;
    pub mod registry;
    pub mod telemetry;
    pub mod factory {
        pub mod auth;
        pub mod detection;
    }

    #[cfg(all(test, feature = "gms", feature = "hms"))]
    pub(crate) mod test_support;
}

pub use config::app_config::AppConfig;
pub use setup::bindings::VendorBindings;
pub use setup::dependency_injection::{CapabilityContainer, bootstrap};
