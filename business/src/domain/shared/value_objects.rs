use serde::{Deserialize, Serialize};

/// Vendor ecosystem a capability adapter is built against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Vendor {
    Google,
    Huawei,
}

impl Vendor {
    /// Short label shown in the UI next to provider-specific actions.
    pub fn display_name(&self) -> &'static str {
        match self {
            Vendor::Google => "Google",
            Vendor::Huawei => "Huawei",
        }
    }
}

impl std::fmt::Display for Vendor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Store the binary was built for. Resolved once at startup and never mutated.
///
/// Parsing never fails: surrounding whitespace is trimmed and anything other
/// than a known store name is kept as [`StoreIdentifier::Unrecognized`] so the
/// factories can log it before falling back.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StoreIdentifier {
    GooglePlay,
    AppGallery,
    Unrecognized(String),
}

impl StoreIdentifier {
    pub const GOOGLE_PLAY: &'static str = "GOOGLE_PLAY";
    pub const APP_GALLERY: &'static str = "APP_GALLERY";

    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            Self::GOOGLE_PLAY => StoreIdentifier::GooglePlay,
            Self::APP_GALLERY => StoreIdentifier::AppGallery,
            other => StoreIdentifier::Unrecognized(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            StoreIdentifier::GooglePlay => Self::GOOGLE_PLAY,
            StoreIdentifier::AppGallery => Self::APP_GALLERY,
            StoreIdentifier::Unrecognized(raw) => raw,
        }
    }

    /// Vendor whose SDKs ship with this store, if the store is known.
    pub fn vendor(&self) -> Option<Vendor> {
        match self {
            StoreIdentifier::GooglePlay => Some(Vendor::Google),
            StoreIdentifier::AppGallery => Some(Vendor::Huawei),
            StoreIdentifier::Unrecognized(_) => None,
        }
    }
}

impl std::fmt::Display for StoreIdentifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for StoreIdentifier {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl From<String> for StoreIdentifier {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}
