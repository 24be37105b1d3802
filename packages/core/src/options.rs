use crate::rule::RuleKind;

/// Creation options passed down the rule traversal.
///
/// Plugins may adjust them in `on_create` before the host builds its
/// default rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleOptions {
    /// Literal selector to use verbatim; suppresses class-name generation
    pub selector: Option<String>,

    /// When false the rule's selector is its literal name
    pub scoped: bool,

    /// Kind of the rule this one is created inside of
    pub parent: Option<RuleKind>,

    /// Set when any ancestor is a global rule
    pub within_global: bool,
}

impl RuleOptions {
    /// Options for a rule created under a parent of the given kind.
    ///
    /// Scope and globality are inherited, the literal selector is not.
    pub fn child_of(&self, parent: RuleKind) -> Self {
        Self {
            selector: None,
            scoped: self.scoped,
            parent: Some(parent),
            within_global: self.within_global || parent.is_global(),
        }
    }

    pub fn with_selector(mut self, selector: impl Into<String>) -> Self {
        self.selector = Some(selector.into());
        self
    }

    pub fn unscoped(mut self) -> Self {
        self.scoped = false;
        self
    }
}

impl Default for RuleOptions {
    fn default() -> Self {
        Self {
            selector: None,
            scoped: true,
            parent: None,
            within_global: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_scoped_top_level() {
        let options = RuleOptions::default();
        assert!(options.scoped);
        assert_eq!(options.parent, None);
        assert!(!options.within_global);
    }

    #[test]
    fn test_child_of_global_inherits_globality() {
        let container = RuleOptions::default();
        let child = container.child_of(RuleKind::GlobalContainer);
        assert!(child.within_global);

        // Still global one level further down, through a conditional
        let grandchild = child.child_of(RuleKind::Conditional);
        assert!(grandchild.within_global);
        assert_eq!(grandchild.parent, Some(RuleKind::Conditional));
    }

    #[test]
    fn test_child_of_drops_literal_selector() {
        let options = RuleOptions::default().with_selector(".x").unscoped();
        let child = options.child_of(RuleKind::Conditional);
        assert_eq!(child.selector, None);
        assert!(!child.scoped);
    }
}
