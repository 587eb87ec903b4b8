use thiserror::Error;

#[derive(Error, Debug)]
pub enum EcoRankError {
    #[error("catalog file not found: {0}")]
    CatalogNotFound(String),

    #[error("category not found: {0}")]
    CategoryNotFound(String),

    #[error("product not found: {0}")]
    ProductNotFound(usize),

    #[error("select two different categories (got {0} twice)")]
    SameCategory(String),

    #[error("invalid catalog row {row}: {reason}")]
    InvalidRow { row: usize, reason: String },

    #[error("config file not found: {0}")]
    ConfigNotFound(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("classifier model error: {0}")]
    Model(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, EcoRankError>;
