pub mod json;
pub mod md;

use crate::error::EcoRankError;
use crate::types::report::Page;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

pub fn render(
    page: &Page,
    format: OutputFormat,
    catalog_sha256: Option<&str>,
) -> Result<String, EcoRankError> {
    match format {
        OutputFormat::Json => json::to_json(page, catalog_sha256).map_err(EcoRankError::Json),
        OutputFormat::Md => Ok(md::to_markdown(page)),
    }
}
