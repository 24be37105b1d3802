/// Prepend `scope` to every selector of a comma-separated list.
///
/// Parts are trimmed, empty parts dropped, and the result joined with `", "`:
/// `scope_selectors("a ,b", ".x")` gives `".x a, .x b"`.
pub fn scope_selectors(selectors: &str, scope: &str) -> String {
    selectors
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| format!("{} {}", scope, part))
        .collect::<Vec<_>>()
        .join(", ")
}
