use std::sync::Arc;

use futures::FutureExt;

use crate::domain::capability::factory::ObjectDetectorFactory;
use crate::domain::detection::errors::ScanError;
use crate::domain::detection::model::DetectedObject;
use crate::domain::detection::services::{DetectionTask, ObjectDetector};
use crate::domain::detection::value_objects::{CameraFrame, ScanSettings};
use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::StoreIdentifier;

/// Live waste-scanning stream owned by the camera screen.
///
/// Dropping the session stops the detector.
pub struct ScanSession {
    detector: Box<dyn ObjectDetector>,
    settings: ScanSettings,
    logger: Arc<dyn Logger>,
}

impl ScanSession {
    pub fn open(
        factory: &dyn ObjectDetectorFactory,
        store: &StoreIdentifier,
        settings: ScanSettings,
        logger: Arc<dyn Logger>,
    ) -> Result<Self, ScanError> {
        let detector = Self::start_detector(factory, store)?;

        logger.info(&format!(
            "Scan session started with {} detector for store {}",
            detector.provider_name(),
            store
        ));

        Ok(Self {
            detector,
            settings,
            logger,
        })
    }

    fn start_detector(
        factory: &dyn ObjectDetectorFactory,
        store: &StoreIdentifier,
    ) -> Result<Box<dyn ObjectDetector>, ScanError> {
        let mut detector = factory.create(store)?;
        detector.initialize()?;
        Ok(detector)
    }

    pub fn provider_name(&self) -> &'static str {
        self.detector.provider_name()
    }

    pub fn is_ready(&self) -> bool {
        self.detector.is_ready()
    }

    /// Submits one frame. Labels under the configured confidence floor are
    /// removed; the objects themselves are kept.
    pub fn analyze(&self, frame: &CameraFrame, rotation_degrees: i32) -> DetectionTask {
        let min_confidence = self.settings.min_label_confidence;
        let task = self.detector.detect_objects(frame, rotation_degrees);

        if min_confidence <= 0.0 {
            return task;
        }

        task.map(move |result| {
            result.map(|objects| filter_labels(objects, min_confidence))
        })
        .boxed()
    }

    /// Replaces the detector with one for `store`. The current detector keeps
    /// running if the replacement cannot be built.
    pub fn switch_provider(
        &mut self,
        factory: &dyn ObjectDetectorFactory,
        store: &StoreIdentifier,
    ) -> Result<(), ScanError> {
        let replacement = Self::start_detector(factory, store)?;
        let mut previous = std::mem::replace(&mut self.detector, replacement);
        previous.stop();

        self.logger.info(&format!(
            "Scan session switched from {} to {} detector",
            previous.provider_name(),
            self.detector.provider_name()
        ));
        Ok(())
    }

    pub fn close(&mut self) {
        if self.detector.is_ready() {
            self.logger.debug(&format!(
                "Closing {} detector",
                self.detector.provider_name()
            ));
        }
        self.detector.stop();
    }
}

impl Drop for ScanSession {
    fn drop(&mut self) {
        self.detector.stop();
    }
}

fn filter_labels(objects: Vec<DetectedObject>, min_confidence: f32) -> Vec<DetectedObject> {
    objects
        .into_iter()
        .map(|mut object| {
            object
                .labels
                .retain(|label| label.confidence >= min_confidence);
            object
        })
        .collect()
}
