pub mod extract;
pub mod preview;
pub mod taxonomy;

use carrinho_core::error::CarrinhoError;
use carrinho_core::model::SkippedItem;
use carrinho_core::selectors::{self, SelectorSet};
use carrinho_core::taxonomy::builtin;
use carrinho_core::taxonomy::schema::TaxonomyDef;
use std::path::PathBuf;

/// Resolve the taxonomy for a run: explicit file > named preset > default.
pub fn resolve_taxonomy(
    file: Option<PathBuf>,
    preset: Option<String>,
) -> Result<TaxonomyDef, CarrinhoError> {
    match (file, preset) {
        (Some(path), _) => carrinho_core::taxonomy::load_taxonomy(&path),
        (None, Some(name)) => builtin::load_preset(&name),
        (None, None) => builtin::load_preset(builtin::DEFAULT_PRESET),
    }
}

pub fn resolve_selectors(file: Option<PathBuf>) -> Result<SelectorSet, CarrinhoError> {
    match file {
        Some(path) => selectors::load_selectors(&path),
        None => Ok(SelectorSet::default()),
    }
}

/// Report per-item skips on stderr. Missing-required skips are informational
/// (non-item rows are normal in this layout); anything else is a warning
/// with its cause.
pub fn report_skips(skipped: &[SkippedItem]) {
    for skip in skipped {
        if skip.missing_required {
            eprintln!("  item {}: skipped ({})", skip.index + 1, skip.reason);
        } else {
            eprintln!("  warning: item {}: {}", skip.index + 1, skip.reason);
        }
    }
}
