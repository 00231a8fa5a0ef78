use std::sync::Arc;

use async_trait::async_trait;

/// `MLObject.TYPE_*` coarse categories, indexed by type id.
pub const OBJECT_TYPE_NAMES: [&str; 7] = [
    "Other",
    "Goods",
    "Food",
    "Furniture",
    "Plant",
    "Place",
    "Face",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalyzerType {
    Picture,
    Video,
}

/// `MLObjectAnalyzerSetting`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MlObjectAnalyzerSetting {
    pub analyzer_type: AnalyzerType,
    pub allow_multi_results: bool,
    pub allow_classification: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MlFrameFormat {
    Nv21,
    Rgba,
}

/// `MLFrame`. Orientation is a quadrant: 0, 1, 2 or 3 quarter turns.
#[derive(Debug, Clone, PartialEq)]
pub struct MlFrame {
    pub data: Arc<[u8]>,
    pub width: u32,
    pub height: u32,
    pub format: MlFrameFormat,
    pub quadrant: i32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MlRect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

/// `MLObject`.
#[derive(Debug, Clone, PartialEq)]
pub struct MlObject {
    pub border: Option<MlRect>,
    pub tracing_identity: Option<i32>,
    pub type_identity: i32,
    pub type_possibility: Option<f32>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("MLException {err_code}: {message}")]
pub struct MlException {
    pub err_code: i32,
    pub message: String,
}

/// `MLObjectAnalyzer`.
#[async_trait]
pub trait MlObjectAnalyzer: Send + Sync {
    async fn analyse_frame(&self, frame: MlFrame) -> Result<Vec<MlObject>, MlException>;

    fn stop(&self) -> Result<(), MlException>;
}

/// `MLAnalyzerFactory` entry point.
pub trait MlAnalyzerFactory: Send + Sync {
    fn local_object_analyzer(
        &self,
        setting: MlObjectAnalyzerSetting,
    ) -> Result<Arc<dyn MlObjectAnalyzer>, MlException>;
}
