use async_trait::async_trait;
use image::{DynamicImage, GenericImageView};

use crate::application::ports::{InferenceBackend, InferenceError};

/// Deterministic stand-in for a model, selected with `provider = "mock"`.
///
/// Replies are keyed on the prompt's mode and mention the image size so a
/// caller can tell which conversation's image was used.
pub struct MockInferenceBackend;

#[async_trait]
impl InferenceBackend for MockInferenceBackend {
    fn name(&self) -> &str {
        "mock"
    }

    async fn infer(&self, image: &DynamicImage, prompt: &str) -> Result<String, InferenceError> {
        let (width, height) = image.dimensions();

        if prompt.contains("User request:") {
            return Ok(format!(
                "Technique: Standard MRI brain ({width}x{height}).\n\
Findings: Revised per request.\n\
Impression:\n- Mass lesion, see findings."
            ));
        }

        if prompt.contains("question:") {
            return Ok(format!(
                "Imaging alone cannot establish this with certainty; \
correlate clinically ({width}x{height} study)."
            ));
        }

        Ok(format!(
            "Technique: Standard multiplanar multisequence MRI brain ({width}x{height}).\n\
\n\
Findings: There is a well-circumscribed intra-axial mass lesion with \
surrounding vasogenic edema and mild local mass effect. No midline shift. \
The ventricles are normal in size.\n\
\n\
Impression:\n\
- Intra-axial mass lesion, consistent with the provided findings.\n\
- No hydrocephalus."
        ))
    }
}
