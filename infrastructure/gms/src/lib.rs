//! Google Play services adapters: Google Sign-In and ML Kit object detection.

pub mod auth;
pub mod detection;
pub mod sdk;

pub use auth::GoogleAuthProvider;
pub use detection::GoogleObjectDetector;
