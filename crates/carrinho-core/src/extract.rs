use crate::classify::{classify_descriptions, DescriptionBuckets};
use crate::model::CartLineItem;
use crate::parsing::normalize::clean_text;
use crate::parsing::price::parse_price;
use crate::selectors::CompiledSelectors;
use crate::taxonomy::schema::TaxonomyDef;
use scraper::ElementRef;

/// Outcome of extracting one cart-line container.
///
/// `MissingRequired` marks rows that are not line items at all (header rows,
/// spacers) and is reported as informational; only `Failed` warrants a
/// warning. Neither ever aborts the batch.
#[derive(Debug)]
pub enum ItemOutcome {
    Item(CartLineItem),
    MissingRequired(&'static str),
    Failed(String),
}

/// Build one `CartLineItem` from a cart-line container node.
///
/// Link, primary name and quantity input must all be present; the rest
/// degrade to empty/zero/sentinel values.
pub fn extract_item(
    container: ElementRef,
    selectors: &CompiledSelectors,
    taxonomy: &TaxonomyDef,
) -> ItemOutcome {
    let Some(link_node) = container.select(&selectors.link).next() else {
        return ItemOutcome::MissingRequired("link");
    };
    let Some(name_pt_node) = container.select(&selectors.name_pt).next() else {
        return ItemOutcome::MissingRequired("name");
    };
    let Some(quantity_node) = container.select(&selectors.quantity).next() else {
        return ItemOutcome::MissingRequired("quantity");
    };

    let Some(link) = link_node.value().attr("href") else {
        return ItemOutcome::Failed("link element has no href attribute".into());
    };

    let Some(raw_quantity) = quantity_node.value().attr("value") else {
        return ItemOutcome::Failed("quantity input has no value attribute".into());
    };
    let quantity: u32 = match raw_quantity.trim().parse() {
        Ok(q) => q,
        Err(_) => return ItemOutcome::Failed(format!("malformed quantity '{}'", raw_quantity)),
    };

    let name_pt = clean_text(Some(&node_text(name_pt_node)));
    let name_en_text = container.select(&selectors.name_en).next().map(node_text);
    let name_en = clean_text(name_en_text.as_deref());

    let price_text = container.select(&selectors.price).next().map(node_text);
    let unit_price = parse_price(&clean_text(price_text.as_deref()));

    let fragments: Vec<String> = container
        .select(&selectors.descriptions)
        .map(|node| clean_text(Some(&node_text(node))))
        .collect();
    let DescriptionBuckets {
        language,
        condition,
        edition,
        extras,
    } = classify_descriptions(&fragments, taxonomy);

    ItemOutcome::Item(CartLineItem {
        name_pt,
        name_en,
        edition,
        language,
        condition,
        extras,
        link: link.to_string(),
        quantity,
        unit_price,
    })
}

fn node_text(node: ElementRef) -> String {
    node.text().collect::<Vec<_>>().join(" ")
}
