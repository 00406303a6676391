use axum::extract::Multipart;
use axum::http::StatusCode;
use axum::response::Response;

use super::error::error_response;

/// Fields of an image upload form. Unknown fields are skipped.
#[derive(Default)]
pub struct ImageUpload {
    pub image: Option<Vec<u8>>,
    pub findings: Option<String>,
}

pub async fn read_image_upload(mut multipart: Multipart) -> Result<ImageUpload, Response> {
    let mut upload = ImageUpload::default();

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read multipart");
                return Err(error_response(
                    e.status(),
                    format!("Failed to read multipart: {}", e.body_text()),
                ));
            }
        };

        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("image") | Some("file") => {
                let data = field.bytes().await.map_err(|e| {
                    error_response(e.status(), format!("Failed to read image: {}", e.body_text()))
                })?;
                upload.image = Some(data.to_vec());
            }
            Some("findings") => {
                let text = field.text().await.map_err(|e| {
                    error_response(
                        StatusCode::BAD_REQUEST,
                        format!("Failed to read findings: {}", e.body_text()),
                    )
                })?;
                upload.findings = Some(text);
            }
            other => {
                tracing::debug!(field = ?other, "Ignoring unexpected multipart field");
            }
        }
    }

    Ok(upload)
}
