use std::env;

use business::domain::detection::value_objects::ScanSettings;

/// Detection tuning for scan sessions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetectionConfig {
    pub min_label_confidence: f32,
}

impl DetectionConfig {
    /// Load detection configuration from environment variables
    ///
    /// Environment variables:
    /// - DETECTION_MIN_CONFIDENCE: labels below this confidence are dropped (default: "0.0")
    pub fn from_env() -> Self {
        Self::parse(env::var("DETECTION_MIN_CONFIDENCE").ok().as_deref())
    }

    fn parse(raw: Option<&str>) -> Self {
        let min_label_confidence = raw
            .and_then(|value| value.trim().parse::<f32>().ok())
            .filter(|value| value.is_finite())
            .map(|value| value.clamp(0.0, 1.0))
            .unwrap_or(0.0);

        Self {
            min_label_confidence,
        }
    }

    pub fn scan_settings(&self) -> ScanSettings {
        ScanSettings {
            min_label_confidence: self.min_label_confidence,
        }
    }
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self::parse(None)
    }
}
