use serde::Serialize;

/// Axis-aligned rectangle in frame pixel coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BoundingBox {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl BoundingBox {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> i32 {
        self.right.saturating_sub(self.left)
    }

    pub fn height(&self) -> i32 {
        self.bottom.saturating_sub(self.top)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Label {
    pub text: String,
    pub confidence: f32,
    pub index: i32,
}

impl Label {
    /// Confidence is clamped into `[0, 1]`; NaN becomes 0.
    pub fn new(text: impl Into<String>, confidence: f32, index: i32) -> Self {
        let confidence = if confidence.is_nan() {
            0.0
        } else {
            confidence.clamp(0.0, 1.0)
        };
        Self {
            text: text.into(),
            confidence,
            index,
        }
    }
}

/// One object found in one frame. Only `tracking_id` links it to other frames.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetectedObject {
    pub bounding_box: BoundingBox,
    pub tracking_id: Option<i32>,
    pub labels: Vec<Label>,
}

impl DetectedObject {
    /// Highest-confidence label, if any.
    pub fn best_label(&self) -> Option<&Label> {
        self.labels
            .iter()
            .max_by(|a, b| a.confidence.total_cmp(&b.confidence))
    }
}
