use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;

use business::domain::auth::continuation::{catch_vendor_panic, panic_detail};
use business::domain::detection::errors::DetectionError;
use business::domain::detection::model::{BoundingBox, DetectedObject, Label};
use business::domain::detection::services::{DetectionTask, ObjectDetector};
use business::domain::detection::value_objects::{CameraFrame, FrameImage, PixelFormat};
use business::domain::logger::Logger;
use business::domain::shared::capability::ClientSlot;
use business::domain::shared::value_objects::Vendor;

use crate::sdk::ml::{
    AnalyzerType, MlAnalyzerFactory, MlFrame, MlFrameFormat, MlObject, MlObjectAnalyzer,
    MlObjectAnalyzerSetting, OBJECT_TYPE_NAMES,
};

/// HMS ML Kit object analyzer adapter.
///
/// The analyzer reports one coarse type per object, which becomes a
/// single-element label list.
pub struct HuaweiObjectDetector {
    factory: Arc<dyn MlAnalyzerFactory>,
    analyzer: ClientSlot<Arc<dyn MlObjectAnalyzer>>,
    logger: Arc<dyn Logger>,
}

impl HuaweiObjectDetector {
    pub fn new(factory: Arc<dyn MlAnalyzerFactory>, logger: Arc<dyn Logger>) -> Self {
        Self {
            factory,
            analyzer: ClientSlot::new(),
            logger,
        }
    }

    fn analyzer_setting() -> MlObjectAnalyzerSetting {
        MlObjectAnalyzerSetting {
            analyzer_type: AnalyzerType::Video,
            allow_multi_results: true,
            allow_classification: true,
        }
    }

    /// Degrees clockwise to quarter turns in `0..4`.
    fn quadrant(rotation_degrees: i32) -> i32 {
        (rotation_degrees / 90).rem_euclid(4)
    }

    /// `None` when a YUV_420_888 buffer does not match its dimensions.
    fn to_frame(image: &FrameImage, rotation_degrees: i32) -> Option<MlFrame> {
        let (data, format) = match image.format {
            PixelFormat::Nv21 => (image.data.clone(), MlFrameFormat::Nv21),
            PixelFormat::Rgba8888 => (image.data.clone(), MlFrameFormat::Rgba),
            PixelFormat::Yuv420888 => (
                Arc::from(planar_yuv_to_nv21(&image.data, image.width, image.height)?),
                MlFrameFormat::Nv21,
            ),
        };

        Some(MlFrame {
            data,
            width: image.width,
            height: image.height,
            format,
            quadrant: Self::quadrant(rotation_degrees),
        })
    }

    fn to_detected_object(object: MlObject) -> Option<DetectedObject> {
        let border = object.border?;
        let labels = object
            .type_possibility
            .map(|possibility| {
                let text = usize::try_from(object.type_identity)
                    .ok()
                    .and_then(|index| OBJECT_TYPE_NAMES.get(index))
                    .copied()
                    .unwrap_or(OBJECT_TYPE_NAMES[0]);
                Label::new(text, possibility, object.type_identity)
            })
            .into_iter()
            .collect();

        Some(DetectedObject {
            bounding_box: BoundingBox::new(border.left, border.top, border.right, border.bottom),
            tracking_id: object.tracing_identity,
            labels,
        })
    }

    fn release_analyzer(&self, analyzer: Arc<dyn MlObjectAnalyzer>) {
        let result = std::panic::catch_unwind(AssertUnwindSafe(|| analyzer.stop()));
        let failure = match result {
            Ok(Ok(())) => return,
            Ok(Err(error)) => error.to_string(),
            Err(panic) => panic_detail(&panic),
        };
        self.logger
            .warn(&format!("Failed to stop HMS object analyzer: {}", failure));
    }
}

impl ObjectDetector for HuaweiObjectDetector {
    fn initialize(&mut self) -> Result<(), DetectionError> {
        if let Some(previous) = self.analyzer.release() {
            self.release_analyzer(previous);
        }

        let created = catch_vendor_panic(|| {
            self.factory
                .local_object_analyzer(Self::analyzer_setting())
        })
        .map_err(DetectionError::InitializationFailed)?;

        match created {
            Ok(analyzer) => {
                self.analyzer.install(analyzer);
                self.logger.debug("HMS object analyzer initialized");
                Ok(())
            }
            Err(error) => Err(DetectionError::InitializationFailed(error.to_string())),
        }
    }

    fn detect_objects(&self, frame: &CameraFrame, rotation_degrees: i32) -> DetectionTask {
        let Some(analyzer) = self.analyzer.active().cloned() else {
            return futures::future::ready(Err(DetectionError::NotInitialized)).boxed();
        };
        let Some(image) = &frame.image else {
            return futures::future::ready(Err(DetectionError::NoImageData)).boxed();
        };

        let Some(ml_frame) = Self::to_frame(image, rotation_degrees) else {
            self.logger.debug(&format!(
                "Skipping YUV_420_888 frame: {} bytes do not fit {}x{}",
                image.data.len(),
                image.width,
                image.height
            ));
            return futures::future::ready(Ok(Vec::new())).boxed();
        };
        let logger = self.logger.clone();

        async move {
            let analysis = AssertUnwindSafe(async move { analyzer.analyse_frame(ml_frame).await })
                .catch_unwind()
                .await;
            let objects = match analysis {
                Ok(Ok(objects)) => objects,
                Ok(Err(error)) => {
                    logger.debug(&format!("HMS frame analysis failed: {}", error));
                    return Ok(Vec::new());
                }
                Err(panic) => {
                    logger.debug(&format!(
                        "HMS frame analysis failed: {}",
                        panic_detail(&panic)
                    ));
                    return Ok(Vec::new());
                }
            };

            Ok(objects
                .into_iter()
                .filter_map(Self::to_detected_object)
                .collect())
        }
        .boxed()
    }

    fn stop(&mut self) {
        if let Some(analyzer) = self.analyzer.release() {
            self.release_analyzer(analyzer);
        }
    }

    fn is_ready(&self) -> bool {
        self.analyzer.is_active()
    }

    fn provider_name(&self) -> &'static str {
        Vendor::Huawei.display_name()
    }
}

/// Repacks planar Y, U, V into NV21: the Y plane followed by interleaved V/U.
fn planar_yuv_to_nv21(data: &[u8], width: u32, height: u32) -> Option<Vec<u8>> {
    let luma = usize::try_from(width)
        .ok()?
        .checked_mul(usize::try_from(height).ok()?)?;
    let chroma = usize::try_from(width.div_ceil(2))
        .ok()?
        .checked_mul(usize::try_from(height.div_ceil(2)).ok()?)?;
    if data.len() != luma.checked_add(chroma.checked_mul(2)?)? {
        return None;
    }

    let (y, chroma_planes) = data.split_at(luma);
    let (u, v) = chroma_planes.split_at(chroma);
    let mut nv21 = Vec::with_capacity(data.len());
    nv21.extend_from_slice(y);
    for (v, u) in v.iter().zip(u) {
        nv21.push(*v);
        nv21.push(*u);
    }
    Some(nv21)
}

impl Drop for HuaweiObjectDetector {
    fn drop(&mut self) {
        self.stop();
    }
}
