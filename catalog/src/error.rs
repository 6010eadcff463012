use std::path::PathBuf;

use thiserror::Error;

use crate::filter::CourseLimit;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed catalog: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Remote catalog unavailable: {0}")]
    Remote(#[from] reqwest::Error),

    #[error("Course limit {0} out of range 0..={max}", max = CourseLimit::MAX)]
    LimitOutOfRange(u32),
}
