use std::sync::Arc;

use seminar_core::ColumnMapping;
use seminar_export::styles::ReportStyles;

use crate::config::AppConfig;

/// Shared application state, injected into all route handlers via Axum state.
///
/// Read-only after start-up; each request builds its own dataset.
#[derive(Clone)]
pub struct AppState {
    pub mapping: Arc<ColumnMapping>,
    pub styles: Arc<ReportStyles>,
    pub max_upload_bytes: usize,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            mapping: Arc::new(config.mapping),
            styles: Arc::new(config.styles),
            max_upload_bytes: config.max_upload_bytes,
        }
    }
}
