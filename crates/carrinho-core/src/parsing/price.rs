use rust_decimal::Decimal;
use std::str::FromStr;

/// Parse a Brazilian-formatted price string into a decimal amount.
///
/// Keeps only ASCII digits and commas, then treats the comma as the decimal
/// separator: "R$ 1.250,50" -> 1250.50. The currency symbol and grouping
/// dots are discarded by the filter, so "1.250" parses as 1250 (dots are
/// always grouping, never decimal). Anything that fails to parse after
/// cleaning — empty input, more than one comma — yields zero; a noisy price
/// cell never aborts an extraction.
pub fn parse_price(raw: &str) -> Decimal {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == ',')
        .map(|c| if c == ',' { '.' } else { c })
        .collect();
    Decimal::from_str(&cleaned).unwrap_or(Decimal::ZERO)
}
