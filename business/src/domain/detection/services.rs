use futures::future::BoxFuture;

use super::errors::DetectionError;
use super::model::DetectedObject;
use super::value_objects::CameraFrame;

/// Pending analysis of one frame. Resolves independently of other frames.
pub type DetectionTask = BoxFuture<'static, Result<Vec<DetectedObject>, DetectionError>>;

/// Object detection capability over a continuous camera stream.
///
/// Callers serialize `detect_objects` per instance; the camera pipeline keeps at
/// most one frame in flight.
pub trait ObjectDetector: Send + Sync {
    /// (Re)builds the vendor detector in stream mode with multi-object
    /// classification. Closes any existing detector first. The only fallible
    /// lifecycle call.
    fn initialize(&mut self) -> Result<(), DetectionError>;

    /// Never blocks. A vendor analysis failure resolves to an empty list;
    /// a missing detector or image resolves to an error without calling the vendor.
    fn detect_objects(&self, frame: &CameraFrame, rotation_degrees: i32) -> DetectionTask;

    /// Idempotent. Closing errors are logged and swallowed.
    fn stop(&mut self);

    fn is_ready(&self) -> bool;

    fn provider_name(&self) -> &'static str;
}
