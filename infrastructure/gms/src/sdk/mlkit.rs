use std::sync::Arc;

use async_trait::async_trait;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectorMode {
    SingleImage,
    Stream,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObjectDetectorOptions {
    pub mode: DetectorMode,
    pub multiple_objects: bool,
    pub classification: bool,
}

/// `InputImage.IMAGE_FORMAT_*`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputImageFormat {
    Yuv420888,
    Nv21,
    Bitmap,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InputImage {
    pub bytes: Arc<[u8]>,
    pub width: u32,
    pub height: u32,
    pub format: InputImageFormat,
    pub rotation_degrees: i32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MlKitLabel {
    pub text: Option<String>,
    pub confidence: f32,
    pub index: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MlKitDetectedObject {
    pub bounding_box: Rect,
    pub tracking_id: Option<i32>,
    pub labels: Option<Vec<MlKitLabel>>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("MlKitException {code}: {message}")]
pub struct MlKitException {
    pub code: i32,
    pub message: String,
}

/// `ObjectDetector` client.
#[async_trait]
pub trait MlKitObjectDetector: Send + Sync {
    async fn process(&self, image: InputImage) -> Result<Vec<MlKitDetectedObject>, MlKitException>;

    fn close(&self) -> Result<(), MlKitException>;
}

/// `ObjectDetection` entry point.
pub trait ObjectDetection: Send + Sync {
    fn client(
        &self,
        options: ObjectDetectorOptions,
    ) -> Result<Arc<dyn MlKitObjectDetector>, MlKitException>;
}
