use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CarrinhoError {
    #[error("invalid CSS selector '{selector}': {reason}")]
    SelectorInvalid { selector: String, reason: String },

    #[error("failed to load selector set from {path}: {reason}")]
    SelectorLoad { path: PathBuf, reason: String },

    #[error("no cart items found using selector '{selector}'")]
    NoItemsFound { selector: String },

    #[error("no data could be extracted from the cart; check the selector set")]
    NoDataExtracted,

    #[error("failed to load taxonomy from {path}: {reason}")]
    TaxonomyLoad { path: PathBuf, reason: String },

    #[error("invalid taxonomy: {0}")]
    TaxonomyInvalid(String),

    #[error("failed to write spreadsheet: {0}")]
    Spreadsheet(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
