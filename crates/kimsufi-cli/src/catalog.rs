use crate::{CliError, Result};
use kimsufi_core::CatalogOption;
use kimsufi_utils::parse_catalog;
use log::debug;
use std::path::Path;

/// Load catalog records from a local JSON file.
///
/// The file holds either an array of records or an object with an `options`
/// array, as saved from the order catalog endpoint.
///
/// # Errors
/// * `CliError::NotFound` - If the file does not exist
/// * `CliError::Io` - If the file cannot be read
/// * `CliError::Utils` - If the content is not a valid catalog
pub async fn load_catalog(path: &Path) -> Result<Vec<CatalogOption>> {
    if !tokio::fs::try_exists(path).await? {
        return Err(CliError::NotFound(format!(
            "catalog file {}",
            path.display()
        )));
    }

    let content = tokio::fs::read_to_string(path).await?;
    let records = parse_catalog(&content)?;
    debug!("Loaded {} records from {}", records.len(), path.display());

    Ok(records)
}
