use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Host environment an auth adapter is bound to (the calling activity).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformContext {
    pub package_name: String,
    pub activity: String,
}

impl PlatformContext {
    pub fn new(package_name: impl Into<String>, activity: impl Into<String>) -> Self {
        Self {
            package_name: package_name.into(),
            activity: activity.into(),
        }
    }
}

/// Opaque handle the host uses to launch a vendor's interactive sign-in flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignInIntent {
    pub action: String,
    pub target_package: String,
    #[serde(default)]
    pub extras: BTreeMap<String, String>,
}

impl SignInIntent {
    pub fn new(action: impl Into<String>, target_package: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            target_package: target_package.into(),
            extras: BTreeMap::new(),
        }
    }

    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extras.insert(key.into(), value.into());
        self
    }
}

/// Activity-result payload delivered by the host once the interactive flow ends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignInResultData {
    pub result_code: i32,
    pub payload: Option<serde_json::Value>,
}

impl SignInResultData {
    pub fn new(result_code: i32, payload: Option<serde_json::Value>) -> Self {
        Self {
            result_code,
            payload,
        }
    }
}

/// Scopes every auth adapter requests from its vendor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignInScope {
    Email,
    Profile,
}

pub const REQUIRED_SCOPES: [SignInScope; 2] = [SignInScope::Email, SignInScope::Profile];
