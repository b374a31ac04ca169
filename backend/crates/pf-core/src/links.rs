/// Split a comma-separated link list into candidate URLs.
///
/// Tokens are trimmed and empty ones dropped. Order and duplicates are
/// preserved.
pub fn candidate_urls(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(String::from)
        .collect()
}
