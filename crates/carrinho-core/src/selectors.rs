use crate::error::CarrinhoError;
use scraper::Selector;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The CSS selectors locating each cart-line field in the page snapshot.
///
/// Defaults target the checkout layout the tool was written against; a JSON
/// override file can retarget a changed layout without a rebuild. Fields
/// omitted from the override keep their defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorSet {
    /// One structural node per purchasable line item.
    pub item_container: String,
    pub link: String,
    pub name_pt: String,
    pub name_en: String,
    /// One-to-many free-text description fragments.
    pub descriptions: String,
    pub quantity: String,
    pub price: String,
}

impl Default for SelectorSet {
    fn default() -> Self {
        SelectorSet {
            item_container: "div.table-cart-row".into(),
            link: "h3.checkout-product--title a".into(),
            name_pt: "h3.checkout-product--title".into(),
            name_en: "p.checkout-product--subtitle".into(),
            descriptions: "p.checkout-product--description".into(),
            quantity: "input.checkout-product--qty".into(),
            price: "p.checkout-product--price.new".into(),
        }
    }
}

/// The selector set compiled for querying; built once per run.
#[derive(Debug)]
pub struct CompiledSelectors {
    pub item_container: Selector,
    pub link: Selector,
    pub name_pt: Selector,
    pub name_en: Selector,
    pub descriptions: Selector,
    pub quantity: Selector,
    pub price: Selector,
}

impl SelectorSet {
    pub fn compile(&self) -> Result<CompiledSelectors, CarrinhoError> {
        Ok(CompiledSelectors {
            item_container: compile_one(&self.item_container)?,
            link: compile_one(&self.link)?,
            name_pt: compile_one(&self.name_pt)?,
            name_en: compile_one(&self.name_en)?,
            descriptions: compile_one(&self.descriptions)?,
            quantity: compile_one(&self.quantity)?,
            price: compile_one(&self.price)?,
        })
    }
}

fn compile_one(selector: &str) -> Result<Selector, CarrinhoError> {
    Selector::parse(selector).map_err(|e| CarrinhoError::SelectorInvalid {
        selector: selector.to_string(),
        reason: e.to_string(),
    })
}

/// Load a selector set from a JSON override file. Selectors are compiled
/// here once so a bad override fails at load time, not mid-extraction.
pub fn load_selectors(path: &Path) -> Result<SelectorSet, CarrinhoError> {
    let content = std::fs::read_to_string(path).map_err(|e| CarrinhoError::SelectorLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let set: SelectorSet =
        serde_json::from_str(&content).map_err(|e| CarrinhoError::SelectorLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
    set.compile()?;
    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_compile() {
        assert!(SelectorSet::default().compile().is_ok());
    }

    #[test]
    fn test_invalid_selector_rejected() {
        let mut set = SelectorSet::default();
        set.price = "p..[".into();
        let err = set.compile().unwrap_err();
        assert!(matches!(err, CarrinhoError::SelectorInvalid { .. }));
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let set: SelectorSet =
            serde_json::from_str(r#"{ "item_container": "li.cart-line" }"#).unwrap();
        assert_eq!(set.item_container, "li.cart-line");
        assert_eq!(set.quantity, SelectorSet::default().quantity);
    }
}
