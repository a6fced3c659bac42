use carrinho_core::error::CarrinhoError;
use carrinho_core::taxonomy::builtin;
use carrinho_core::taxonomy::schema::TaxonomyDef;
use std::path::Path;

pub fn list() -> Result<(), CarrinhoError> {
    println!("Available taxonomy presets:\n");
    for name in builtin::PRESETS {
        let tax = builtin::load_preset(name)?;
        println!("  {:<10} {} (v{})", name, tax.name, tax.version);
        if let Some(ref desc) = tax.description {
            println!("             {}", desc);
        }
        println!();
    }
    Ok(())
}

pub fn explain(preset: &str) -> Result<(), CarrinhoError> {
    let tax = builtin::load_preset(preset)?;

    println!("{} (version {})\n", tax.name, tax.version);

    if let Some(ref desc) = tax.description {
        println!("{}\n", desc);
    }

    println!("Each description fragment under a cart line is matched against");
    println!("these keyword lists, first match wins, in priority order");
    println!("language > condition > extras. The first fragment matching no");
    println!("list becomes the edition. Matching is case-sensitive substring");
    println!("matching against the untranslated page text.\n");

    print_bucket("language", "kept verbatim; a later match overwrites", &tax.language);
    print_bucket(
        "condition",
        "reduced to its parenthetical, e.g. \"Lacrado (NM)\" -> \"NM\"",
        &tax.condition,
    );
    print_bucket("extras", "accumulated and joined with \", \"", &tax.extras);

    Ok(())
}

fn print_bucket(bucket: &str, behavior: &str, keywords: &[String]) {
    println!("  {} ({}):", bucket, behavior);
    println!("    {}\n", keywords.join(", "));
}

pub fn validate(file: &Path) -> Result<(), CarrinhoError> {
    let tax = carrinho_core::taxonomy::load_taxonomy(file)?;

    println!("Taxonomy '{}' (v{}) is valid.", tax.name, tax.version);
    println!(
        "  Keywords: {} language, {} condition, {} extras",
        tax.language.len(),
        tax.condition.len(),
        tax.extras.len()
    );

    // Overlapping keywords are legal (priority resolves them) but worth
    // surfacing, since the lower-priority bucket can never win.
    let warnings = overlap_warnings(&tax);
    if !warnings.is_empty() {
        println!("\nWarnings:");
        for w in &warnings {
            println!("  - {}", w);
        }
    }

    Ok(())
}

fn overlap_warnings(tax: &TaxonomyDef) -> Vec<String> {
    let mut warnings = Vec::new();
    for kw in &tax.condition {
        if tax.language.contains(kw) {
            warnings.push(format!(
                "keyword '{}' is in both language and condition; language wins",
                kw
            ));
        }
    }
    for kw in &tax.extras {
        if tax.language.contains(kw) {
            warnings.push(format!(
                "keyword '{}' is in both language and extras; language wins",
                kw
            ));
        }
        if tax.condition.contains(kw) {
            warnings.push(format!(
                "keyword '{}' is in both condition and extras; condition wins",
                kw
            ));
        }
    }
    warnings
}
