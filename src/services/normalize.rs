/// Matching key for directory lookups: hyphens dropped, ASCII-lowercased.
pub fn normalize(name: &str) -> String {
    name.chars()
        .filter(|&c| c != '-')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Matching key for free-form dashboard text: only alphanumerics survive,
/// ASCII-lowercased. Collapses spacing and punctuation differences.
pub fn normalize_strict(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
