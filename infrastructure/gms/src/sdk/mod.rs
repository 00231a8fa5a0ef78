//! Rust surface of the Google Play services SDKs the adapters consume.
//!
//! The host platform layer implements these traits over the real SDKs and
//! hands them to the composition root. Every field read from the SDK is
//! optional because the SDK may return null anywhere.

pub mod mlkit;
pub mod sign_in;
