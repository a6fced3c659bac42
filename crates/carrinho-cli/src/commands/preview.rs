use crate::commands::{report_skips, resolve_selectors, resolve_taxonomy};
use crate::output;
use carrinho_core::error::CarrinhoError;
use std::path::PathBuf;

pub fn run(
    input_file: PathBuf,
    output_format: &str,
    taxonomy_file: Option<PathBuf>,
    preset: Option<String>,
    selector_file: Option<PathBuf>,
) -> Result<(), CarrinhoError> {
    let taxonomy = resolve_taxonomy(taxonomy_file, preset)?;
    let selectors = resolve_selectors(selector_file)?;

    let html = std::fs::read_to_string(&input_file)?;
    let extract = carrinho_core::process_document(&html, &selectors, &taxonomy)?;

    report_skips(&extract.skipped);

    match output_format {
        "json" => output::json::print(&extract)?,
        _ => output::table::print(&extract),
    }

    Ok(())
}
