use reqwest::get;
use tracing::info;

use crate::{courses::CourseData, error::CatalogError};

pub async fn get_catalog_remote(url: &str) -> Result<CourseData, CatalogError> {
    info!("Fetching catalog from {url}");

    let response = get(url).await?.error_for_status()?;
    let bytes = response.bytes().await?;

    Ok(serde_json::from_slice(&bytes)?)
}
