use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;

use business::domain::auth::continuation::{catch_vendor_panic, panic_detail};
use business::domain::detection::errors::DetectionError;
use business::domain::detection::model::{BoundingBox, DetectedObject, Label};
use business::domain::detection::services::{DetectionTask, ObjectDetector};
use business::domain::detection::value_objects::{CameraFrame, PixelFormat};
use business::domain::logger::Logger;
use business::domain::shared::capability::ClientSlot;
use business::domain::shared::value_objects::Vendor;

use crate::sdk::mlkit::{
    DetectorMode, InputImage, InputImageFormat, MlKitDetectedObject, MlKitObjectDetector,
    ObjectDetection, ObjectDetectorOptions,
};

/// ML Kit object detection adapter.
pub struct GoogleObjectDetector {
    sdk: Arc<dyn ObjectDetection>,
    detector: ClientSlot<Arc<dyn MlKitObjectDetector>>,
    logger: Arc<dyn Logger>,
}

impl GoogleObjectDetector {
    pub fn new(sdk: Arc<dyn ObjectDetection>, logger: Arc<dyn Logger>) -> Self {
        Self {
            sdk,
            detector: ClientSlot::new(),
            logger,
        }
    }

    fn detector_options() -> ObjectDetectorOptions {
        ObjectDetectorOptions {
            mode: DetectorMode::Stream,
            multiple_objects: true,
            classification: true,
        }
    }

    fn input_format(format: PixelFormat) -> InputImageFormat {
        match format {
            PixelFormat::Yuv420888 => InputImageFormat::Yuv420888,
            PixelFormat::Nv21 => InputImageFormat::Nv21,
            PixelFormat::Rgba8888 => InputImageFormat::Bitmap,
        }
    }

    fn to_detected_object(object: MlKitDetectedObject) -> DetectedObject {
        let bounds = object.bounding_box;
        DetectedObject {
            bounding_box: BoundingBox::new(bounds.left, bounds.top, bounds.right, bounds.bottom),
            tracking_id: object.tracking_id,
            labels: object
                .labels
                .unwrap_or_default()
                .into_iter()
                .map(|label| {
                    Label::new(label.text.unwrap_or_default(), label.confidence, label.index)
                })
                .collect(),
        }
    }

    fn close(&self, detector: Arc<dyn MlKitObjectDetector>) {
        match std::panic::catch_unwind(AssertUnwindSafe(|| detector.close())) {
            Ok(Ok(())) => {}
            Ok(Err(error)) => self
                .logger
                .warn(&format!("Failed to close ML Kit object detector: {}", error)),
            Err(panic) => self.logger.warn(&format!(
                "Failed to close ML Kit object detector: {}",
                panic_detail(&panic)
            )),
        }
    }
}

impl ObjectDetector for GoogleObjectDetector {
    fn initialize(&mut self) -> Result<(), DetectionError> {
        if let Some(previous) = self.detector.release() {
            self.close(previous);
        }

        let detector = catch_vendor_panic(|| self.sdk.client(Self::detector_options()))
            .map_err(DetectionError::InitializationFailed)?
            .map_err(|error| DetectionError::InitializationFailed(error.to_string()))?;
        self.detector.install(detector);

        self.logger.debug("ML Kit object detector initialized");
        Ok(())
    }

    fn detect_objects(&self, frame: &CameraFrame, rotation_degrees: i32) -> DetectionTask {
        let Some(detector) = self.detector.active().cloned() else {
            return futures::future::ready(Err(DetectionError::NotInitialized)).boxed();
        };
        let Some(image) = frame.image.as_ref() else {
            return futures::future::ready(Err(DetectionError::NoImageData)).boxed();
        };

        let input = InputImage {
            bytes: image.data.clone(),
            width: image.width,
            height: image.height,
            format: Self::input_format(image.format),
            rotation_degrees,
        };
        let logger = self.logger.clone();

        async move {
            let analysis = AssertUnwindSafe(async move { detector.process(input).await })
                .catch_unwind()
                .await;
            match analysis {
                Ok(Ok(objects)) => Ok(objects
                    .into_iter()
                    .map(Self::to_detected_object)
                    .collect()),
                Ok(Err(error)) => {
                    logger.debug(&format!("ML Kit frame analysis failed: {}", error));
                    Ok(Vec::new())
                }
                Err(panic) => {
                    logger.debug(&format!(
                        "ML Kit frame analysis failed: {}",
                        panic_detail(&panic)
                    ));
                    Ok(Vec::new())
                }
            }
        }
        .boxed()
    }

    fn stop(&mut self) {
        if let Some(detector) = self.detector.release() {
            self.close(detector);
        }
    }

    fn is_ready(&self) -> bool {
        self.detector.is_active()
    }

    fn provider_name(&self) -> &'static str {
        Vendor::Google.display_name()
    }
}

impl Drop for GoogleObjectDetector {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sdk::mlkit::{MlKitException, MlKitLabel, Rect};
    use async_trait::async_trait;
    use business::domain::detection::value_objects::FrameImage;
    use futures::future::BoxFuture;
    use mockall::mock;

    mock! {
        pub Detector {}

        #[async_trait]
        impl MlKitObjectDetector for Detector {
            async fn process(
                &self,
                image: InputImage,
            ) -> Result<Vec<MlKitDetectedObject>, MlKitException>;
            fn close(&self) -> Result<(), MlKitException>;
        }
    }

    mock! {
        pub Sdk {}

        impl ObjectDetection for Sdk {
            fn client(
                &self,
                options: ObjectDetectorOptions,
            ) -> Result<Arc<dyn MlKitObjectDetector>, MlKitException>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn frame() -> CameraFrame {
        CameraFrame::new(
            FrameImage {
                data: Arc::from(vec![7_u8; 12]),
                width: 4,
                height: 3,
                format: PixelFormat::Yuv420888,
            },
            100,
        )
    }

    /// Detector that throws from `process` itself, before returning a future.
    struct ClosedDetector;

    impl MlKitObjectDetector for ClosedDetector {
        fn process<'life0, 'async_trait>(
            &'life0 self,
            _image: InputImage,
        ) -> BoxFuture<'async_trait, Result<Vec<MlKitDetectedObject>, MlKitException>>
        where
            'life0: 'async_trait,
            Self: 'async_trait,
        {
            panic!("IllegalStateException: detector closed")
        }

        fn close(&self) -> Result<(), MlKitException> {
            Ok(())
        }
    }

    fn sdk_returning(detector: MockDetector) -> MockSdk {
        let detector: Arc<dyn MlKitObjectDetector> = Arc::new(detector);
        let mut sdk = MockSdk::new();
        sdk.expect_client().returning(move |_| Ok(detector.clone()));
        sdk
    }

    fn initialized(detector: MockDetector) -> GoogleObjectDetector {
        let mut adapter =
            GoogleObjectDetector::new(Arc::new(sdk_returning(detector)), mock_logger());
        adapter.initialize().unwrap();
        adapter
    }

    fn exception() -> MlKitException {
        MlKitException {
            code: 13,
            message: "analysis failed".to_string(),
        }
    }

    #[test]
    fn should_build_stream_detector_with_multiple_objects_and_classification() {
        let mut sdk = MockSdk::new();
        sdk.expect_client()
            .withf(|options| {
                options.mode == DetectorMode::Stream
                    && options.multiple_objects
                    && options.classification
            })
            .times(1)
            .returning(|_| {
                let mut detector = MockDetector::new();
                detector.expect_close().returning(|| Ok(()));
                Ok(Arc::new(detector) as Arc<dyn MlKitObjectDetector>)
            });

        let mut adapter = GoogleObjectDetector::new(Arc::new(sdk), mock_logger());

        assert!(!adapter.is_ready());
        adapter.initialize().unwrap();
        assert!(adapter.is_ready());
    }

    #[test]
    fn should_propagate_construction_failure() {
        let mut sdk = MockSdk::new();
        sdk.expect_client().returning(|_| Err(exception()));

        let mut adapter = GoogleObjectDetector::new(Arc::new(sdk), mock_logger());
        let result = adapter.initialize();

        assert!(matches!(result, Err(DetectionError::InitializationFailed(_))));
        assert!(!adapter.is_ready());
    }

    #[test]
    fn should_close_existing_detector_when_reinitialized() {
        let mut detector = MockDetector::new();
        detector.expect_close().times(2).returning(|| Ok(()));
        let mut adapter = initialized(detector);

        adapter.initialize().unwrap();
        adapter.stop();
    }

    #[tokio::test]
    async fn should_fail_without_vendor_call_when_not_initialized() {
        let sdk = MockSdk::new();
        let adapter = GoogleObjectDetector::new(Arc::new(sdk), mock_logger());

        let result = adapter.detect_objects(&frame(), 0).await;

        assert_eq!(result, Err(DetectionError::NotInitialized));
    }

    #[tokio::test]
    async fn should_fail_when_frame_has_no_image() {
        let mut detector = MockDetector::new();
        detector.expect_process().never();
        detector.expect_close().returning(|| Ok(()));
        let adapter = initialized(detector);

        let result = adapter.detect_objects(&CameraFrame::empty(5), 0).await;

        assert_eq!(result, Err(DetectionError::NoImageData));
    }

    #[tokio::test]
    async fn should_resolve_empty_when_analysis_fails() {
        let mut detector = MockDetector::new();
        detector.expect_process().returning(|_| Err(exception()));
        detector.expect_close().returning(|| Ok(()));
        let adapter = initialized(detector);

        let result = adapter.detect_objects(&frame(), 90).await;

        assert_eq!(result, Ok(Vec::new()));
    }

    #[tokio::test]
    async fn should_resolve_empty_when_vendor_throws_before_analysis_starts() {
        let detector: Arc<dyn MlKitObjectDetector> = Arc::new(ClosedDetector);
        let mut sdk = MockSdk::new();
        sdk.expect_client().returning(move |_| Ok(detector.clone()));
        let mut adapter = GoogleObjectDetector::new(Arc::new(sdk), mock_logger());
        adapter.initialize().unwrap();

        let result = adapter.detect_objects(&frame(), 0).await;

        assert_eq!(result, Ok(Vec::new()));
    }

    #[tokio::test]
    async fn should_resolve_empty_when_analysis_panics() {
        let mut detector = MockDetector::new();
        detector
            .expect_process()
            .returning(|_| panic!("native crash in detector"));
        detector.expect_close().returning(|| Ok(()));
        let adapter = initialized(detector);

        assert_eq!(adapter.detect_objects(&frame(), 0).await, Ok(Vec::new()));
    }

    #[test]
    fn should_report_construction_panic_as_initialization_failure() {
        let mut sdk = MockSdk::new();
        sdk.expect_client()
            .returning(|_| panic!("GooglePlayServicesNotAvailableException"));

        let mut adapter = GoogleObjectDetector::new(Arc::new(sdk), mock_logger());

        assert_eq!(
            adapter.initialize(),
            Err(DetectionError::InitializationFailed(
                "GooglePlayServicesNotAvailableException".to_string()
            ))
        );
        assert!(!adapter.is_ready());
    }

    #[tokio::test]
    async fn should_map_vendor_objects_with_labels() {
        let mut detector = MockDetector::new();
        detector
            .expect_process()
            .withf(|image| {
                image.rotation_degrees == 270 && image.format == InputImageFormat::Yuv420888
            })
            .returning(|_| {
                Ok(vec![
                    MlKitDetectedObject {
                        bounding_box: Rect {
                            left: 1,
                            top: 2,
                            right: 30,
                            bottom: 40,
                        },
                        tracking_id: Some(9),
                        labels: Some(vec![
                            MlKitLabel {
                                text: Some("Home good".to_string()),
                                confidence: 0.81,
                                index: 2,
                            },
                            MlKitLabel {
                                text: None,
                                confidence: 0.1,
                                index: 0,
                            },
                        ]),
                    },
                    MlKitDetectedObject {
                        bounding_box: Rect::default(),
                        tracking_id: None,
                        labels: None,
                    },
                ])
            });
        detector.expect_close().returning(|| Ok(()));
        let adapter = initialized(detector);

        let objects = adapter.detect_objects(&frame(), 270).await.unwrap();

        assert_eq!(objects.len(), 2);
        assert_eq!(objects[0].bounding_box, BoundingBox::new(1, 2, 30, 40));
        assert_eq!(objects[0].tracking_id, Some(9));
        assert_eq!(
            objects[0].labels,
            vec![Label::new("Home good", 0.81, 2), Label::new("", 0.1, 0)]
        );
        assert_eq!(objects[1].tracking_id, None);
        assert!(objects[1].labels.is_empty());
    }

    #[test]
    fn should_swallow_close_errors_and_stop_idempotently() {
        let mut detector = MockDetector::new();
        detector.expect_close().times(1).returning(|| Err(exception()));
        let mut adapter = initialized(detector);

        let mut logger = MockLog::new();
        logger.expect_debug().returning(|_| ());
        logger
            .expect_warn()
            .withf(|message| message.contains("Failed to close"))
            .times(1)
            .returning(|_| ());
        adapter.logger = Arc::new(logger);

        adapter.stop();
        adapter.stop();

        assert!(!adapter.is_ready());
    }

    #[test]
    fn should_close_detector_when_dropped() {
        let mut detector = MockDetector::new();
        detector.expect_close().times(1).returning(|| Ok(()));
        let adapter = initialized(detector);

        drop(adapter);
    }
}
