use super::Catalog;
use crate::error::{EcoRankError, Result};
use crate::types::config::InvalidRowPolicy;
use crate::types::product::Product;
use crate::types::scoring::Weights;
use sha2::{Digest, Sha256};
use std::path::Path;
use tracing::{debug, info, warn};

pub const DEFAULT_CATALOG_FILE: &str = "products.csv";

pub fn load_catalog(path: &Path, policy: InvalidRowPolicy, weights: Weights) -> Result<Catalog> {
    if !path.exists() {
        return Err(EcoRankError::CatalogNotFound(path.display().to_string()));
    }
    debug!(path = %path.display(), "reading catalog");
    let bytes = std::fs::read(path)?;
    let fingerprint = sha256_hex(&bytes);

    let products = parse_products(&bytes, policy)?;
    let catalog = Catalog::new(products, weights).with_fingerprint(fingerprint);
    info!(
        rows = catalog.len(),
        categories = catalog.categories().len(),
        max_life = catalog.max_life(),
        "catalog loaded"
    );
    Ok(catalog)
}

pub(crate) fn parse_products(bytes: &[u8], policy: InvalidRowPolicy) -> Result<Vec<Product>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(bytes);

    let mut products = Vec::new();
    for (index, record) in reader.deserialize::<Product>().enumerate() {
        let product = record?;
        let row = index + 1;
        let Some(reason) = product.metrics().range_violation() else {
            products.push(product);
            continue;
        };

        match policy {
            InvalidRowPolicy::Warn => {
                warn!(row, %reason, "catalog row outside documented range");
                products.push(product);
            }
            InvalidRowPolicy::Skip => {
                warn!(row, %reason, "skipping catalog row outside documented range");
            }
            InvalidRowPolicy::Reject => {
                return Err(EcoRankError::InvalidRow { row, reason });
            }
        }
    }
    Ok(products)
}

fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}
