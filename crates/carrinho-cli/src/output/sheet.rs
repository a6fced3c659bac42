use carrinho_core::error::CarrinhoError;
use carrinho_core::model::CartLineItem;
use std::path::Path;

/// Write the extracted items as a CSV spreadsheet: one header row, one row
/// per item, no index column.
///
/// The sheet is staged in a temp file next to the destination and moved
/// into place once fully written, so a failed run never leaves a truncated
/// artifact behind.
pub fn write(items: &[CartLineItem], destination: &Path) -> Result<(), CarrinhoError> {
    let dir = destination
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let tmp = tempfile::NamedTempFile::new_in(dir).map_err(sheet_err)?;

    let mut writer = csv::Writer::from_writer(tmp.as_file());
    writer.write_record(CartLineItem::headers()).map_err(sheet_err)?;
    for item in items {
        writer.write_record(item.to_row()).map_err(sheet_err)?;
    }
    writer.flush().map_err(sheet_err)?;
    drop(writer);

    tmp.persist(destination).map_err(sheet_err)?;
    Ok(())
}

fn sheet_err<E: std::fmt::Display>(e: E) -> CarrinhoError {
    CarrinhoError::Spreadsheet(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use carrinho_core::model::NOT_AVAILABLE;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn item() -> CartLineItem {
        CartLineItem {
            name_pt: "Raio".into(),
            name_en: "Lightning Bolt".into(),
            edition: "Kaladesh".into(),
            language: "Inglês".into(),
            condition: "NM".into(),
            extras: NOT_AVAILABLE.into(),
            link: "/card/raio".into(),
            quantity: 2,
            unit_price: Decimal::from_str("1250.50").unwrap(),
        }
    }

    #[test]
    fn test_sheet_has_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("out.csv");

        write(&[item()], &dest).unwrap();

        let content = std::fs::read_to_string(&dest).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Nome (Português),Nome (Inglês)"));
        assert!(lines[1].contains("2501.00"));
        assert!(lines[1].contains("1250.50"));
    }

    #[test]
    fn test_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("out.csv");
        std::fs::write(&dest, "stale").unwrap();

        write(&[item()], &dest).unwrap();

        let content = std::fs::read_to_string(&dest).unwrap();
        assert!(!content.contains("stale"));
        assert!(content.contains("Raio"));
    }
}
