use crate::error::CarrinhoError;
use crate::taxonomy::schema::TaxonomyDef;

const MTG_PTBR_JSON: &str = include_str!("../../../../taxonomies/mtg-ptbr.json");

/// Available predefined taxonomies.
pub const PRESETS: &[&str] = &["mtg-ptbr"];

/// Preset used when a run names neither a preset nor a taxonomy file.
pub const DEFAULT_PRESET: &str = "mtg-ptbr";

/// Load a predefined taxonomy by name.
pub fn load_preset(name: &str) -> Result<TaxonomyDef, CarrinhoError> {
    match name {
        "mtg-ptbr" => {
            let taxonomy: TaxonomyDef = serde_json::from_str(MTG_PTBR_JSON)?;
            Ok(taxonomy)
        }
        _ => Err(CarrinhoError::TaxonomyInvalid(format!(
            "unknown preset '{}'. Available: {}",
            name,
            PRESETS.join(", ")
        ))),
    }
}
