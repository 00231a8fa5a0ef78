//! Rust surface of the Huawei Mobile Services kits the adapters consume.
//!
//! Implemented by the host platform layer over Account Kit and ML Kit.

pub mod account;
pub mod ml;
