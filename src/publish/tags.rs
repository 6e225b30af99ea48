//! Tag list parsing
//!
//! Accepts what the blog backend accepts: a JSON array of strings, or free
//! text separated by ASCII or full-width commas.

/// Split user input into clean tags
///
/// Whitespace around tags is trimmed and empty tags are dropped.
pub fn parse_tags(input: &str) -> Vec<String> {
    let input = input.trim();
    if input.is_empty() {
        return Vec::new();
    }

    if input.starts_with('[')
        && input.ends_with(']')
        && let Ok(tags) = serde_json::from_str::<Vec<String>>(input)
    {
        return clean(tags.iter().map(String::as_str));
    }

    clean(input.split([',', '，']))
}

/// Wire format: tags joined with a comma
pub fn join_tags(tags: &[String]) -> String {
    tags.join(",")
}

fn clean<'a>(raw: impl Iterator<Item = &'a str>) -> Vec<String> {
    raw.map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}
