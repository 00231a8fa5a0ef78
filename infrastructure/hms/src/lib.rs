//! Huawei Mobile Services adapters: Account Kit sign-in and ML Kit object analysis.

pub mod auth;
pub mod detection;
pub mod sdk;

pub use auth::HuaweiAuthProvider;
pub use detection::HuaweiObjectDetector;
