//! String helpers shared by the config loader and the facet deriver.

/// Literal used for any facet whose source text is empty or unusable
pub const UNKNOWN: &str = "Unknown";

/// Turn arbitrary text into a single filesystem-safe path component.
///
/// Path separators, NUL, `:` and control characters become `_`, runs of
/// spaces/underscores collapse to the character that started the run, and an
/// empty result becomes [`UNKNOWN`]. `.` and `..` become `_` so the component
/// never points outside its parent.
pub fn sanitize_component(text: &str) -> String {
    let trimmed = text.trim();

    let mut out = String::with_capacity(trimmed.len());
    let mut prev: Option<char> = None;
    for ch in trimmed.chars() {
        let ch = match ch {
            '/' | '\\' | '\0' | ':' => '_',
            c if (c as u32) < 32 => '_',
            c => c,
        };
        let is_filler = ch == ' ' || ch == '_';
        if is_filler && matches!(prev, Some(' ') | Some('_')) {
            continue;
        }
        out.push(ch);
        prev = Some(ch);
    }

    match out.trim() {
        "" => UNKNOWN.to_string(),
        "." | ".." => "_".to_string(),
        out => out.to_string(),
    }
}

/// Split a comma separated list, trimming and lower-casing each item and
/// dropping empty ones
pub fn split_csv(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|item| item.trim().to_ascii_lowercase())
        .filter(|item| !item.is_empty())
        .collect()
}

/// `1/true/yes/on` (any case) are truthy, everything else is false
pub fn parse_bool(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
