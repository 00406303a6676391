use serde::{Deserialize, Serialize};

pub const NO_TUMOR_FINDINGS: &str = "No obvious tumor";
const DEFAULT_CLASS: &str = "brain tumor";

/// One detected region, center-anchored as returned by the detection service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    #[serde(default = "default_class")]
    pub class: String,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub confidence: f32,
}

fn default_class() -> String {
    DEFAULT_CLASS.to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub left: i64,
    pub top: i64,
    pub right: i64,
    pub bottom: i64,
}

impl Prediction {
    /// Float-to-int casts saturate and the corner arithmetic saturates, so
    /// out-of-range detector values cannot overflow.
    pub fn bounds(&self) -> BoundingBox {
        let (x, y) = (self.x as i64, self.y as i64);
        let (half_w, half_h) = (self.width as i64 / 2, self.height as i64 / 2);
        BoundingBox {
            left: x.saturating_sub(half_w),
            top: y.saturating_sub(half_h),
            right: x.saturating_add(half_w),
            bottom: y.saturating_add(half_h),
        }
    }

    pub fn confidence_percent(&self) -> f32 {
        (self.confidence * 1000.0).round() / 10.0
    }

    /// Caption for an annotated box, e.g. `glioma (87.0%)`.
    pub fn label(&self) -> String {
        format!("{} ({:.1}%)", self.class, self.confidence_percent())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    #[serde(default)]
    pub predictions: Vec<Prediction>,
}

impl Detection {
    pub fn is_empty(&self) -> bool {
        self.predictions.is_empty()
    }

    /// Findings label for report generation, derived from the first prediction.
    pub fn findings(&self) -> String {
        match self.predictions.first() {
            Some(p) => title_case(&p.class),
            None => NO_TUMOR_FINDINGS.to_string(),
        }
    }
}

fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}
