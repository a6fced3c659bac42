pub mod builtin;
pub mod schema;

use crate::error::CarrinhoError;
use schema::TaxonomyDef;
use std::path::Path;

/// Load a taxonomy from a JSON file.
pub fn load_taxonomy(path: &Path) -> Result<TaxonomyDef, CarrinhoError> {
    let content = std::fs::read_to_string(path).map_err(|e| CarrinhoError::TaxonomyLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_taxonomy(&content, path)
}

/// Parse a taxonomy from a JSON string.
pub fn parse_taxonomy(json: &str, source: &Path) -> Result<TaxonomyDef, CarrinhoError> {
    let taxonomy: TaxonomyDef =
        serde_json::from_str(json).map_err(|e| CarrinhoError::TaxonomyLoad {
            path: source.to_path_buf(),
            reason: e.to_string(),
        })?;
    validate_taxonomy(&taxonomy)?;
    Ok(taxonomy)
}

/// Parse a taxonomy from a JSON string (no file path context).
pub fn parse_taxonomy_str(json: &str) -> Result<TaxonomyDef, CarrinhoError> {
    let taxonomy: TaxonomyDef = serde_json::from_str(json).map_err(CarrinhoError::Json)?;
    validate_taxonomy(&taxonomy)?;
    Ok(taxonomy)
}

/// Validate that a taxonomy is well-formed.
pub fn validate_taxonomy(taxonomy: &TaxonomyDef) -> Result<(), CarrinhoError> {
    let buckets = [
        ("language", &taxonomy.language),
        ("condition", &taxonomy.condition),
        ("extras", &taxonomy.extras),
    ];

    for (bucket, keywords) in buckets {
        if keywords.is_empty() {
            return Err(CarrinhoError::TaxonomyInvalid(format!(
                "bucket '{}' has no keywords",
                bucket
            )));
        }

        for keyword in keywords {
            if keyword.trim().is_empty() {
                return Err(CarrinhoError::TaxonomyInvalid(format!(
                    "bucket '{}' contains a blank keyword",
                    bucket
                )));
            }
        }
    }

    Ok(())
}
