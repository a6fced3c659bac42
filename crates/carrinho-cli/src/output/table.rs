use carrinho_core::model::CartExtract;

pub fn print(extract: &CartExtract) {
    let name_width = extract
        .items
        .iter()
        .map(|i| i.name_pt.len())
        .max()
        .unwrap_or(4)
        .max(4);

    println!(
        "{:<width$}  {:>4}  {:>12}  {:>12}  {}",
        "Nome",
        "Qtd",
        "Preço Unit.",
        "Preço Total",
        "Detalhes",
        width = name_width
    );

    for item in &extract.items {
        let details = format!(
            "{} | {} | {} | {}",
            item.language, item.condition, item.edition, item.extras
        );
        println!(
            "{:<width$}  {:>4}  {:>12}  {:>12}  {}",
            item.name_pt,
            item.quantity,
            format!("R$ {:.2}", item.unit_price),
            format!("R$ {:.2}", item.total_price()),
            details,
            width = name_width
        );
    }

    println!(
        "\n{} item(s), cart total R$ {:.2}",
        extract.items.len(),
        extract.grand_total()
    );
}
