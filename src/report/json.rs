use crate::types::report::Page;
use chrono::Utc;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    version: &'static str,
    generated_at: String,
    catalog_sha256: Option<&'a str>,
    report: &'a Page,
}

pub fn to_json(page: &Page, catalog_sha256: Option<&str>) -> Result<String, serde_json::Error> {
    let report = JsonReport {
        version: env!("CARGO_PKG_VERSION"),
        generated_at: Utc::now().to_rfc3339(),
        catalog_sha256,
        report: page,
    };
    serde_json::to_string_pretty(&report)
}
