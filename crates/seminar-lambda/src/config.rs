use std::env;
use std::path::PathBuf;

use eyre::WrapErr;

use seminar_core::ColumnMapping;
use seminar_export::styles::ReportStyles;

/// Path to a JSON `ColumnMapping`; defaults apply when unset.
pub const MAPPING_ENV: &str = "SEMINAR_COLUMN_MAPPING";

/// Maximum accepted upload size in bytes.
pub const MAX_UPLOAD_ENV: &str = "SEMINAR_MAX_UPLOAD_BYTES";

pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub mapping: ColumnMapping,
    pub styles: ReportStyles,
    pub max_upload_bytes: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            mapping: ColumnMapping::default(),
            styles: ReportStyles::default(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build configuration from `lookup`, which maps a variable name to its
    /// value. Unset variables fall back to their defaults.
    pub fn from_vars<F>(lookup: F) -> eyre::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mapping = match lookup(MAPPING_ENV) {
            Some(path) => {
                let path = PathBuf::from(path);
                ColumnMapping::from_path(&path)
                    .wrap_err_with(|| format!("loading column mapping from {}", path.display()))?
            }
            None => ColumnMapping::default(),
        };

        let max_upload_bytes = match lookup(MAX_UPLOAD_ENV) {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .wrap_err_with(|| format!("{MAX_UPLOAD_ENV} must be a byte count, got {raw:?}"))?,
            None => DEFAULT_MAX_UPLOAD_BYTES,
        };

        Ok(Self {
            mapping,
            styles: ReportStyles::default(),
            max_upload_bytes,
        })
    }
}
