/// Collapse whitespace runs in extracted node text into single spaces and
/// trim the ends. `None` becomes the empty string so absent optional nodes
/// flow through as blank fields.
pub fn clean_text(raw: Option<&str>) -> String {
    match raw {
        Some(text) => text.split_whitespace().collect::<Vec<_>>().join(" "),
        None => String::new(),
    }
}
