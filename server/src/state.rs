use std::sync::Arc;

use catalog::{CatalogError, CourseData, load_catalog, validate::validate};
use tracing::{info, warn};

use super::config::Config;

/// Shared, read-only for the life of the process.
pub struct AppState {
    pub catalog: CourseData,
    pub config: Config,
}

impl AppState {
    pub async fn new(config: Config) -> Result<Arc<Self>, CatalogError> {
        let catalog = load_catalog(&config.course_data).await?;

        for issue in validate(&catalog) {
            warn!("Catalog issue: {issue}");
        }

        let courses: usize = catalog
            .areas
            .iter()
            .flat_map(|area| &area.sections)
            .map(|section| section.courses.len())
            .sum();
        info!(
            "Loaded {} catalog: {} areas, {courses} courses",
            catalog.year,
            catalog.areas.len()
        );

        Ok(Self::with_catalog(catalog, config))
    }

    pub fn with_catalog(catalog: CourseData, config: Config) -> Arc<Self> {
        Arc::new(Self { catalog, config })
    }
}
