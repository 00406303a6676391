use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use image::DynamicImage;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use crate::application::ports::{InferenceBackend, InferenceError};
use crate::application::services::image_codec::encode_jpeg;

/// Runs a local multimodal model through the `ollama` CLI.
///
/// The image is staged as a temporary JPEG and referenced from the prompt
/// with an `<image:PATH>` tag, which `ollama run` resolves itself.
pub struct OllamaCliBackend {
    binary: String,
    model: String,
    timeout: Duration,
}

impl OllamaCliBackend {
    pub fn new(binary: &str, model: &str, timeout: Duration) -> Self {
        Self {
            binary: binary.to_string(),
            model: model.to_string(),
            timeout,
        }
    }
}

#[async_trait]
impl InferenceBackend for OllamaCliBackend {
    fn name(&self) -> &str {
        "ollama"
    }

    #[tracing::instrument(skip(self, image, prompt), fields(model = %self.model))]
    async fn infer(&self, image: &DynamicImage, prompt: &str) -> Result<String, InferenceError> {
        let jpeg = encode_jpeg(image).map_err(|e| InferenceError::ImageEncoding(e.to_string()))?;

        let staged = tempfile::Builder::new()
            .prefix("radialog-")
            .suffix(".jpg")
            .tempfile()
            .map_err(|e| InferenceError::ImageEncoding(format!("temp file: {e}")))?;
        tokio::fs::write(staged.path(), &jpeg)
            .await
            .map_err(|e| InferenceError::ImageEncoding(format!("temp file write: {e}")))?;

        let full_prompt = format!("<image:{}>\n{}", staged.path().display(), prompt);

        let mut child = Command::new(&self.binary)
            .arg("run")
            .arg(&self.model)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| InferenceError::Unavailable(format!("{}: {e}", self.binary)))?;

        // A child that never drains stdin blocks the write, so the write
        // shares the deadline with the wait.
        let stdin = child.stdin.take();
        let run = async move {
            if let Some(mut stdin) = stdin {
                match stdin.write_all(full_prompt.as_bytes()).await {
                    Ok(()) => {}
                    // exited without reading; the exit status decides the error
                    Err(e) if e.kind() == std::io::ErrorKind::BrokenPipe => {}
                    Err(e) => return Err(InferenceError::ProcessFailed(format!("stdin: {e}"))),
                }
            }
            child
                .wait_with_output()
                .await
                .map_err(|e| InferenceError::ProcessFailed(e.to_string()))
        };

        let output = tokio::time::timeout(self.timeout, run)
            .await
            .map_err(|_| InferenceError::Timeout(self.timeout.as_secs()))??;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            tracing::warn!(status = %output.status, "ollama exited unsuccessfully");
            return Err(InferenceError::ProcessFailed(if stderr.is_empty() {
                format!("exit status {}", output.status)
            } else {
                stderr
            }));
        }

        let text = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if text.is_empty() {
            return Err(InferenceError::InvalidResponse("empty completion".to_string()));
        }

        Ok(text)
    }
}
