pub mod classify;
pub mod error;
pub mod extract;
pub mod model;
pub mod parsing;
pub mod selectors;
pub mod taxonomy;

use error::CarrinhoError;
use extract::ItemOutcome;
use model::{CartExtract, SkippedItem};
use scraper::Html;
use selectors::SelectorSet;
use taxonomy::schema::TaxonomyDef;

/// Main API entry point: extract every cart line from an HTML snapshot.
///
/// Queries the document for cart-line containers and runs the item extractor
/// on each. A failing container becomes a `SkippedItem` and the batch
/// continues; only batch-level conditions are errors — an unparseable
/// selector, zero matching containers, or zero extracted items.
///
/// Unit prices are rounded to two decimals here, so every record leaving
/// this function is spreadsheet-ready.
pub fn process_document(
    html: &str,
    selectors: &SelectorSet,
    taxonomy: &TaxonomyDef,
) -> Result<CartExtract, CarrinhoError> {
    let compiled = selectors.compile()?;
    let document = Html::parse_document(html);

    let containers: Vec<_> = document.select(&compiled.item_container).collect();
    if containers.is_empty() {
        return Err(CarrinhoError::NoItemsFound {
            selector: selectors.item_container.clone(),
        });
    }

    let mut items = Vec::new();
    let mut skipped = Vec::new();

    for (index, container) in containers.into_iter().enumerate() {
        match extract::extract_item(container, &compiled, taxonomy) {
            ItemOutcome::Item(mut item) => {
                item.unit_price = item.unit_price.round_dp(2);
                items.push(item);
            }
            ItemOutcome::MissingRequired(field) => skipped.push(SkippedItem {
                index,
                reason: format!("required field '{}' not found", field),
                missing_required: true,
            }),
            ItemOutcome::Failed(reason) => skipped.push(SkippedItem {
                index,
                reason,
                missing_required: false,
            }),
        }
    }

    if items.is_empty() {
        return Err(CarrinhoError::NoDataExtracted);
    }

    Ok(CartExtract { items, skipped })
}
