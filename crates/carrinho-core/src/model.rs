use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Placeholder for classification buckets that received no match. Every
/// field of a `CartLineItem` is always populated; absence of data is this
/// sentinel, never an empty slot in the output.
pub const NOT_AVAILABLE: &str = "N/A";

/// One extracted cart line, immutable once built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartLineItem {
    /// Card name in the shop's display language.
    pub name_pt: String,
    /// English name; empty string when the page has no subtitle node.
    pub name_en: String,
    pub edition: String,
    pub language: String,
    pub condition: String,
    /// Comma-joined extra attribute tags (e.g. "Foil, Promo").
    pub extras: String,
    pub link: String,
    pub quantity: u32,
    pub unit_price: Decimal,
}

impl CartLineItem {
    /// Line total, always derived from quantity and unit price. There is no
    /// stored total field anywhere, so the two can never drift apart.
    pub fn total_price(&self) -> Decimal {
        (Decimal::from(self.quantity) * self.unit_price).round_dp(2)
    }

    /// Spreadsheet column headers, in the column order of the output sheet.
    pub fn headers() -> [&'static str; 10] {
        [
            "Nome (Português)",
            "Nome (Inglês)",
            "Expansão",
            "Idioma",
            "Condição",
            "Extras",
            "Quantidade",
            "Preço Unitário",
            "Preço Total",
            "Link",
        ]
    }

    /// Render this item as one spreadsheet row, prices with two decimals.
    pub fn to_row(&self) -> [String; 10] {
        [
            self.name_pt.clone(),
            self.name_en.clone(),
            self.edition.clone(),
            self.language.clone(),
            self.condition.clone(),
            self.extras.clone(),
            self.quantity.to_string(),
            format!("{:.2}", self.unit_price),
            format!("{:.2}", self.total_price()),
            self.link.clone(),
        ]
    }
}

/// A cart line that was dropped during extraction, with the reason.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkippedItem {
    /// Zero-based position of the container node in document order.
    pub index: usize,
    pub reason: String,
    /// True when a required field was simply absent (header rows, spacers);
    /// such skips are informational, not warnings.
    pub missing_required: bool,
}

/// Result of one full pass over a cart snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartExtract {
    pub items: Vec<CartLineItem>,
    pub skipped: Vec<SkippedItem>,
}

impl CartExtract {
    /// Sum of all line totals, each already rounded per line.
    pub fn grand_total(&self) -> Decimal {
        self.items.iter().map(CartLineItem::total_price).sum()
    }
}
