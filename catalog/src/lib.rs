//! # Catalog
//!
//! GE course statistics for the CPP catalog.
//!
//! ## Data Shape
//!
//! One static JSON document per catalog year:
//! - **CourseData**: year (**int**) and a list of areas
//! - **Area**: label (**string**), e.g. `"Area B"`, and a list of sections
//! - **Section**: label (**string**), e.g. `"B1"`, and a list of courses
//! - **Course**: course code (**string**) and average GPA (**float** or `null`)
//!
//! Tens of courses per section, a handful of areas. Everything lives in memory.
//!
//! ## Pipeline
//!
//! 1. Load the catalog once, from disk or a remote URL.
//! 2. [`rank`] every section by average GPA, best first, `null` last.
//! 3. [`filter`] the ranked tree with a [`DisplayFilters`] value, per request.
//!
//! Both stages return a fresh tree. The loaded catalog is never touched.
//!
//! ## Course Codes
//!
//! Codes carry their variant in the characters around the hyphens.
//! See [`marker::classify_marker`].
//!
//! ```text
//! GE-1A-H   honors
//! GE-1C-L   lab
//! GE-1B     standard
//! ```
use std::{fs, path::Path};

pub mod courses;
pub mod error;
pub mod filter;
pub mod marker;
pub mod rank;
pub mod remote;
pub mod validate;

pub use courses::{Area, Course, CourseData, Section, TopCourses};
pub use error::CatalogError;
pub use filter::{CourseLimit, DisplayFilters, filter};
pub use rank::rank;
pub use remote::get_catalog_remote;

pub const DEFAULT_CATALOG_PATH: &str = "data/course-data-2023.json";

pub fn get_catalog(path: impl AsRef<Path>) -> Result<CourseData, CatalogError> {
    let path = path.as_ref();
    let data = fs::read(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(serde_json::from_slice(&data)?)
}

/// Loads from a URL when `source` starts with `http://` or `https://`,
/// otherwise from a local path.
pub async fn load_catalog(source: &str) -> Result<CourseData, CatalogError> {
    if is_remote(source) {
        get_catalog_remote(source).await
    } else {
        get_catalog(source)
    }
}

pub fn is_remote(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}
