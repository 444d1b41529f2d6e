use anyhow::Result;
use dialoguer::Input;

/// Prompt for one search query.
///
/// Blank input is returned as-is; the search pipeline ignores it.
pub fn prompt_query() -> Result<String> {
    let query: String = Input::new()
        .with_prompt("Search for a place")
        .allow_empty(true)
        .interact_text()?;
    Ok(query)
}
