use carrinho_core::error::CarrinhoError;
use carrinho_core::model::CartExtract;

pub fn print(extract: &CartExtract) -> Result<(), CarrinhoError> {
    let json = serde_json::to_string_pretty(extract)?;
    println!("{json}");
    Ok(())
}
