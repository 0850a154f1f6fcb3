//! Upload extraction: pulls the CSV bytes out of a request body.

use axum::body::Bytes;
use axum::extract::{FromRequest, Multipart, Request};
use axum::http::header::CONTENT_TYPE;

use crate::error::ApiError;

/// Multipart field name the upload form uses for the CSV file.
pub const FILE_FIELD: &str = "file";

/// Read the uploaded CSV from either a `multipart/form-data` body or a raw
/// `text/csv` body.
///
/// In a multipart body the field named `file` wins; otherwise the first
/// field carrying a filename is used. Extractor rejections keep their own
/// status, so a body over the configured limit answers 413.
pub async fn read_upload(req: Request) -> Result<Bytes, ApiError> {
    let content_type = req
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_ascii_lowercase();

    if content_type.starts_with("multipart/form-data") {
        read_multipart(req).await
    } else if is_csv_content_type(&content_type) {
        Ok(Bytes::from_request(req, &()).await?)
    } else if content_type.is_empty() {
        Err(ApiError::BadRequest("missing content type".to_string()))
    } else {
        Err(ApiError::BadRequest(format!(
            "unsupported content type: {content_type}"
        )))
    }
}

fn is_csv_content_type(content_type: &str) -> bool {
    ["text/csv", "application/csv", "text/plain"]
        .iter()
        .any(|t| content_type.starts_with(t))
}

async fn read_multipart(req: Request) -> Result<Bytes, ApiError> {
    let mut multipart = Multipart::from_request(req, &()).await?;

    let mut fallback = None;
    while let Some(field) = multipart.next_field().await? {
        let is_file_field = field.name() == Some(FILE_FIELD);
        let has_filename = field.file_name().is_some();
        if !is_file_field && (!has_filename || fallback.is_some()) {
            continue;
        }

        let bytes = field.bytes().await?;
        if is_file_field {
            return Ok(bytes);
        }
        fallback = Some(bytes);
    }

    fallback.ok_or_else(|| ApiError::BadRequest("upload contains no file".to_string()))
}
