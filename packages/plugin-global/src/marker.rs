//! Recognition of the `@global` markers in rule names and body keys

use styleforge_core::RuleOptions;

/// Container marker: its value maps selectors to declaration bodies
pub const CONTAINER_KEY: &str = "@global";

/// Prefixed marker: the selector follows the marker in the key itself
pub const PREFIX_KEY: &str = "@global ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker<'a> {
    Container,
    /// Trimmed selector following the prefix
    Prefixed(&'a str),
    None,
}

pub fn classify(name: &str) -> Marker<'_> {
    if name == CONTAINER_KEY {
        return Marker::Container;
    }

    match name.strip_prefix(PREFIX_KEY) {
        Some(selector) => Marker::Prefixed(selector.trim()),
        None => Marker::None,
    }
}

/// Classify a key found inside a declaration body.
///
/// Looser than [`classify`]: any text directly after the container marker
/// counts as a selector, so `@global.active` is the prefixed form.
pub fn classify_body_key(key: &str) -> Marker<'_> {
    match key.strip_prefix(CONTAINER_KEY) {
        Some("") => Marker::Container,
        Some(rest) => Marker::Prefixed(rest.trim()),
        None => Marker::None,
    }
}

/// Force a lexically ordinary rule unscoped when it sits under a global rule.
///
/// Its selector becomes its literal name unless one was already given.
/// Returns whether it was forced.
pub fn propagate_scope(name: &str, options: &mut RuleOptions) -> bool {
    let under_global = options.within_global || options.parent.is_some_and(|kind| kind.is_global());
    if !under_global {
        return false;
    }

    options.scoped = false;
    options.selector.get_or_insert_with(|| name.to_string());
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use styleforge_core::RuleKind;

    #[test]
    fn test_container() {
        assert_eq!(classify("@global"), Marker::Container);
    }

    #[test]
    fn test_prefixed() {
        assert_eq!(classify("@global body"), Marker::Prefixed("body"));
        assert_eq!(classify("@global   a, b  "), Marker::Prefixed("a, b"));
    }

    #[test]
    fn test_none() {
        assert_eq!(classify("button"), Marker::None);
        assert_eq!(classify("@globals"), Marker::None);
        assert_eq!(classify("@media print"), Marker::None);
        assert_eq!(classify(" @global"), Marker::None);
    }

    #[test]
    fn test_body_keys() {
        assert_eq!(classify_body_key("@global"), Marker::Container);
        assert_eq!(classify_body_key("@global span"), Marker::Prefixed("span"));
        assert_eq!(classify_body_key("@global.active"), Marker::Prefixed(".active"));
        assert_eq!(classify_body_key("@global:hover "), Marker::Prefixed(":hover"));
        assert_eq!(classify_body_key("@global   "), Marker::Prefixed(""));
        assert_eq!(classify_body_key("float"), Marker::None);
        assert_eq!(classify_body_key("@media print"), Marker::None);
    }

    #[test]
    fn test_propagation_under_global_parent() {
        let mut options = RuleOptions::default();
        options.parent = Some(RuleKind::GlobalContainer);

        assert!(propagate_scope("a", &mut options));
        assert!(!options.scoped);
        assert_eq!(options.selector.as_deref(), Some("a"));
    }

    #[test]
    fn test_propagation_through_intermediate_rule() {
        let mut options = RuleOptions::default()
            .child_of(RuleKind::GlobalContainer)
            .child_of(RuleKind::Conditional);

        assert!(propagate_scope("body", &mut options));
        assert_eq!(options.selector.as_deref(), Some("body"));
    }

    #[test]
    fn test_propagation_keeps_given_selector() {
        let mut options = RuleOptions::default().with_selector("nav a");
        options.within_global = true;

        assert!(propagate_scope("a", &mut options));
        assert_eq!(options.selector.as_deref(), Some("nav a"));
    }

    #[test]
    fn test_no_propagation_for_ordinary_rules() {
        let mut options = RuleOptions::default().child_of(RuleKind::Conditional);

        assert!(!propagate_scope("button", &mut options));
        assert!(options.scoped);
        assert_eq!(options.selector, None);
    }
}
