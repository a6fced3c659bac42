use crate::commands::{report_skips, resolve_selectors, resolve_taxonomy};
use crate::output;
use carrinho_core::error::CarrinhoError;
use std::path::PathBuf;

pub fn run(
    input_file: PathBuf,
    out: PathBuf,
    taxonomy_file: Option<PathBuf>,
    preset: Option<String>,
    selector_file: Option<PathBuf>,
) -> Result<(), CarrinhoError> {
    let taxonomy = resolve_taxonomy(taxonomy_file, preset)?;
    let selectors = resolve_selectors(selector_file)?;

    eprintln!("1. Reading cart snapshot '{}'...", input_file.display());
    let html = std::fs::read_to_string(&input_file)?;

    let extract = match carrinho_core::process_document(&html, &selectors, &taxonomy) {
        Ok(extract) => extract,
        // An empty or unextractable cart ends the run cleanly: reported,
        // no artifact written.
        Err(e @ CarrinhoError::NoItemsFound { .. }) | Err(e @ CarrinhoError::NoDataExtracted) => {
            eprintln!("{e}");
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    let total = extract.items.len() + extract.skipped.len();
    eprintln!("2. Found {} cart line(s), extracting...", total);
    report_skips(&extract.skipped);

    eprintln!("3. Writing spreadsheet...");
    output::sheet::write(&extract.items, &out)?;

    let shown = std::fs::canonicalize(&out).unwrap_or(out);
    eprintln!(
        "Done! {} row(s) saved to '{}'.",
        extract.items.len(),
        shown.display()
    );
    Ok(())
}
