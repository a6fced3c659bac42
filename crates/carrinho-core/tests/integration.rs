//! Integration tests for the process_document() end-to-end pipeline.
//!
//! Cart snapshots are built inline from row fragments, so these tests run
//! against exactly the markup shapes the default selector set targets.

use carrinho_core::error::CarrinhoError;
use carrinho_core::model::NOT_AVAILABLE;
use carrinho_core::process_document;
use carrinho_core::selectors::SelectorSet;
use carrinho_core::taxonomy::builtin::load_preset;
use carrinho_core::taxonomy::parse_taxonomy_str;
use rust_decimal_macros::dec;

fn page(rows: &[String]) -> String {
    format!(
        "<html><body><div class=\"cart\">{}</div></body></html>",
        rows.join("\n")
    )
}

fn row(name: &str, link: &str, qty: &str, price: &str, descriptions: &[&str]) -> String {
    let descriptions: String = descriptions
        .iter()
        .map(|d| format!("<p class=\"checkout-product--description\">{}</p>", d))
        .collect();
    format!(
        concat!(
            "<div class=\"table-cart-row\">",
            "<h3 class=\"checkout-product--title\"><a href=\"{link}\">{name}</a></h3>",
            "{descriptions}",
            "<input class=\"checkout-product--qty\" value=\"{qty}\">",
            "<p class=\"checkout-product--price new\">{price}</p>",
            "</div>"
        ),
        link = link,
        name = name,
        qty = qty,
        price = price,
        descriptions = descriptions,
    )
}

// ---------------------------------------------------------------------------
// Full cart: every field extracted and classified
// ---------------------------------------------------------------------------
#[test]
fn full_cart_extracted() {
    let html = page(&[
        row(
            "Raio",
            "/card/raio",
            "2",
            "R$ 1.250,50",
            &["Inglês", "Lacrado (NM)", "Foil", "Kaladesh"],
        ),
        row("Contra-mágica", "/card/contra", "1", "R$ 10,00", &[]),
    ]);

    let extract =
        process_document(&html, &SelectorSet::default(), &load_preset("mtg-ptbr").unwrap())
            .unwrap();

    assert_eq!(extract.items.len(), 2);
    assert!(extract.skipped.is_empty());

    let first = &extract.items[0];
    assert_eq!(first.name_pt, "Raio");
    assert_eq!(first.quantity, 2);
    assert_eq!(first.unit_price, dec!(1250.50));
    assert_eq!(first.total_price(), dec!(2501.00));
    assert_eq!(first.language, "Inglês");
    assert_eq!(first.condition, "NM");
    assert_eq!(first.extras, "Foil");
    assert_eq!(first.edition, "Kaladesh");

    let second = &extract.items[1];
    assert_eq!(second.unit_price, dec!(10.00));
    assert_eq!(second.language, NOT_AVAILABLE);
    assert_eq!(second.edition, NOT_AVAILABLE);
}

// ---------------------------------------------------------------------------
// A row missing its quantity input is skipped, the batch continues
// ---------------------------------------------------------------------------
#[test]
fn missing_required_field_skips_row_only() {
    let broken = concat!(
        "<div class=\"table-cart-row\">",
        "<h3 class=\"checkout-product--title\"><a href=\"/card/x\">Sem quantidade</a></h3>",
        "</div>"
    )
    .to_string();
    let html = page(&[
        row("Raio", "/card/raio", "2", "R$ 5,00", &[]),
        broken,
        row("Choque", "/card/choque", "3", "R$ 2,50", &[]),
    ]);

    let extract =
        process_document(&html, &SelectorSet::default(), &load_preset("mtg-ptbr").unwrap())
            .unwrap();

    assert_eq!(extract.items.len(), 2);
    assert_eq!(extract.skipped.len(), 1);
    assert_eq!(extract.skipped[0].index, 1);
    assert!(extract.skipped[0].missing_required);
    assert_eq!(extract.items[1].name_pt, "Choque");
}

// ---------------------------------------------------------------------------
// A malformed quantity is a warned skip, not a silent one
// ---------------------------------------------------------------------------
#[test]
fn malformed_quantity_reported_with_cause() {
    let html = page(&[
        row("Raio", "/card/raio", "dois", "R$ 5,00", &[]),
        row("Choque", "/card/choque", "3", "R$ 2,50", &[]),
    ]);

    let extract =
        process_document(&html, &SelectorSet::default(), &load_preset("mtg-ptbr").unwrap())
            .unwrap();

    assert_eq!(extract.items.len(), 1);
    assert_eq!(extract.skipped.len(), 1);
    assert!(!extract.skipped[0].missing_required);
    assert!(extract.skipped[0].reason.contains("dois"));
}

// ---------------------------------------------------------------------------
// Zero containers and zero extracted items are distinct reported conditions
// ---------------------------------------------------------------------------
#[test]
fn empty_document_reports_no_items_found() {
    let html = "<html><body><p>Seu carrinho está vazio.</p></body></html>";

    let err = process_document(
        html,
        &SelectorSet::default(),
        &load_preset("mtg-ptbr").unwrap(),
    )
    .unwrap_err();

    match err {
        CarrinhoError::NoItemsFound { selector } => {
            assert_eq!(selector, "div.table-cart-row");
        }
        other => panic!("expected NoItemsFound, got {other:?}"),
    }
}

#[test]
fn containers_without_data_report_no_data_extracted() {
    // Containers match but none carries the required fields.
    let html = page(&[
        "<div class=\"table-cart-row\"></div>".to_string(),
        "<div class=\"table-cart-row\"><p>frete</p></div>".to_string(),
    ]);

    let err = process_document(
        &html,
        &SelectorSet::default(),
        &load_preset("mtg-ptbr").unwrap(),
    )
    .unwrap_err();

    assert!(matches!(err, CarrinhoError::NoDataExtracted));
}

// ---------------------------------------------------------------------------
// Prices are rounded to two decimals before records leave the engine
// ---------------------------------------------------------------------------
#[test]
fn unit_price_rounded_to_two_decimals() {
    let html = page(&[row("Raio", "/card/raio", "1", "R$ 10,999", &[])]);

    let extract =
        process_document(&html, &SelectorSet::default(), &load_preset("mtg-ptbr").unwrap())
            .unwrap();

    assert_eq!(extract.items[0].unit_price, dec!(11.00));
}

// ---------------------------------------------------------------------------
// Selector overrides retarget the same pipeline
// ---------------------------------------------------------------------------
#[test]
fn custom_selector_set() {
    let html = concat!(
        "<html><body><ul>",
        "<li class=\"cart-line\">",
        "<h3 class=\"checkout-product--title\"><a href=\"/card/raio\">Raio</a></h3>",
        "<input class=\"checkout-product--qty\" value=\"4\">",
        "<p class=\"checkout-product--price new\">R$ 3,00</p>",
        "</li>",
        "</ul></body></html>"
    );

    let mut selectors = SelectorSet::default();
    selectors.item_container = "li.cart-line".into();

    let extract =
        process_document(html, &selectors, &load_preset("mtg-ptbr").unwrap()).unwrap();

    assert_eq!(extract.items.len(), 1);
    assert_eq!(extract.items[0].quantity, 4);
    assert_eq!(extract.items[0].total_price(), dec!(12.00));
}

#[test]
fn invalid_selector_is_a_config_error() {
    let mut selectors = SelectorSet::default();
    selectors.link = "a[".into();

    let err = process_document(
        "<html></html>",
        &selectors,
        &load_preset("mtg-ptbr").unwrap(),
    )
    .unwrap_err();

    assert!(matches!(err, CarrinhoError::SelectorInvalid { .. }));
}

// ---------------------------------------------------------------------------
// A custom taxonomy drives classification the same way the preset does
// ---------------------------------------------------------------------------
#[test]
fn custom_taxonomy() {
    let taxonomy = parse_taxonomy_str(
        r#"{
            "name": "English shop",
            "version": "1.0",
            "language": ["English", "Japanese"],
            "condition": ["Sealed", "Played"],
            "extras": ["Foil"]
        }"#,
    )
    .unwrap();

    let html = page(&[row(
        "Bolt",
        "/card/bolt",
        "1",
        "R$ 2,00",
        &["Japanese", "Sealed (NM)", "Ice Age"],
    )]);

    let extract = process_document(&html, &SelectorSet::default(), &taxonomy).unwrap();

    assert_eq!(extract.items[0].language, "Japanese");
    assert_eq!(extract.items[0].condition, "NM");
    assert_eq!(extract.items[0].edition, "Ice Age");
    assert_eq!(extract.items[0].extras, NOT_AVAILABLE);
}
