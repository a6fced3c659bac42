use crate::model::NOT_AVAILABLE;
use crate::taxonomy::schema::TaxonomyDef;

/// The four classification buckets resolved from one cart line's
/// description fragments. Unmatched buckets hold the "N/A" sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptionBuckets {
    pub language: String,
    pub condition: String,
    pub edition: String,
    pub extras: String,
}

/// Sort description fragments into buckets by keyword matching.
///
/// Each fragment is tested independently, first match wins, in fixed
/// priority order: language > condition > extras. A language fragment is
/// kept verbatim (a later match overwrites an earlier one); a condition
/// fragment is reduced to its parenthetical ("Lacrado (NM)" -> "NM");
/// extras accumulate and are joined with ", ".
///
/// The first fragment matching no keyword list becomes the edition; any
/// further unmatched fragments are dropped. Shop pages put the expansion
/// name in that position, so this stays as-is.
pub fn classify_descriptions(fragments: &[String], taxonomy: &TaxonomyDef) -> DescriptionBuckets {
    let mut language = NOT_AVAILABLE.to_string();
    let mut condition = NOT_AVAILABLE.to_string();
    let mut extras_list: Vec<&str> = Vec::new();
    let mut unclassified: Vec<&str> = Vec::new();

    for fragment in fragments {
        if contains_any(fragment, &taxonomy.language) {
            language = fragment.clone();
        } else if contains_any(fragment, &taxonomy.condition) {
            condition = extract_parenthetical(fragment).to_string();
        } else if contains_any(fragment, &taxonomy.extras) {
            extras_list.push(fragment);
        } else {
            unclassified.push(fragment);
        }
    }

    let extras = if extras_list.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        extras_list.join(", ")
    };

    let edition = unclassified
        .first()
        .map(|s| s.to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());

    DescriptionBuckets {
        language,
        condition,
        edition,
        extras,
    }
}

fn contains_any(text: &str, keywords: &[String]) -> bool {
    keywords.iter().any(|kw| text.contains(kw.as_str()))
}

/// Return the interior of the first `(...)` pair, or the input unchanged
/// when there is no such pair.
pub fn extract_parenthetical(text: &str) -> &str {
    if let Some(open) = text.find('(') {
        let rest = &text[open + 1..];
        if let Some(close) = rest.find(')') {
            return &rest[..close];
        }
    }
    text
}
