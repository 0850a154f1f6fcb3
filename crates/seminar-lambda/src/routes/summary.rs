use axum::extract::{Request, State};
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::response::{IntoResponse, Response};

use seminar_export::summary::summarize_csv;

use crate::error::ApiError;
use crate::state::AppState;
use crate::upload::read_upload;

pub const PDF_FILENAME: &str = "seminar_summary.pdf";

/// Turn an uploaded feedback CSV into the PDF summary.
///
/// Decoding, extraction, and layout run on the blocking pool; the response
/// is either the complete document or a JSON error.
pub async fn create_summary(
    State(state): State<AppState>,
    req: Request,
) -> Result<Response, ApiError> {
    let upload = read_upload(req).await?;
    tracing::info!(upload_bytes = upload.len(), "received feedback upload");

    let mapping = state.mapping.clone();
    let styles = state.styles.clone();
    let pdf = tokio::task::spawn_blocking(move || summarize_csv(&upload, &mapping, &styles))
        .await??;

    Ok((
        [
            (CONTENT_TYPE, "application/pdf".to_string()),
            (
                CONTENT_DISPOSITION,
                format!("attachment; filename=\"{PDF_FILENAME}\""),
            ),
        ],
        pdf,
    )
        .into_response())
}
