use std::sync::Arc;

/// Pixel layout of a camera buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    /// Planar Y, then U, then V, tightly packed with no row padding.
    Yuv420888,
    Nv21,
    Rgba8888,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FrameImage {
    pub data: Arc<[u8]>,
    pub width: u32,
    pub height: u32,
    pub format: PixelFormat,
}

/// A frame handed over by the camera pipeline. `image` is `None` when the
/// platform delivered a frame without an underlying buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraFrame {
    pub image: Option<FrameImage>,
    pub timestamp_millis: i64,
}

impl CameraFrame {
    pub fn new(image: FrameImage, timestamp_millis: i64) -> Self {
        Self {
            image: Some(image),
            timestamp_millis,
        }
    }

    pub fn empty(timestamp_millis: i64) -> Self {
        Self {
            image: None,
            timestamp_millis,
        }
    }
}

/// Per-session tuning applied on top of whatever the detector returns.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScanSettings {
    pub min_label_confidence: f32,
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            min_label_confidence: 0.0,
        }
    }
}
