use styleforge_core::{CssOptions, Pipeline, Rule, RuleKind, RuleList, RuleOptions, Style};
use tracing::debug;

/// `@global <selector>`: wraps one unscoped rule whose selector was written
/// in the key. Contributes no syntax of its own.
///
/// An empty selector wraps nothing and serializes to nothing.
#[derive(Debug)]
pub struct GlobalPrefixedRule {
    key: String,
    // at most one rule
    rules: RuleList,
    options: RuleOptions,
}

impl GlobalPrefixedRule {
    pub fn new(
        key: &str,
        selector: &str,
        style: &Style,
        options: &RuleOptions,
        pipeline: &Pipeline,
    ) -> Self {
        let mut rules = RuleList::new();
        if selector.is_empty() {
            debug!(key = %key, "Dropping @global with an empty selector");
        } else {
            let child_options = options
                .child_of(RuleKind::GlobalPrefixed)
                .with_selector(selector)
                .unscoped();
            rules.add(pipeline.create_rule(selector, style.clone(), child_options));
        }

        Self {
            key: key.to_string(),
            rules,
            options: options.clone(),
        }
    }

    /// The wrapped rule
    pub fn rule(&self) -> Option<&dyn Rule> {
        self.rules.iter().next()
    }
}

impl Rule for GlobalPrefixedRule {
    fn key(&self) -> &str {
        &self.key
    }

    fn kind(&self) -> RuleKind {
        RuleKind::GlobalPrefixed
    }

    fn options(&self) -> &RuleOptions {
        &self.options
    }

    fn selector(&self) -> Option<&str> {
        self.rule().and_then(|rule| rule.selector())
    }

    fn children(&self) -> Option<&RuleList> {
        Some(&self.rules)
    }

    fn children_mut(&mut self) -> Option<&mut RuleList> {
        Some(&mut self.rules)
    }

    fn to_css(&self, options: &CssOptions) -> String {
        self.rules.to_css(options)
    }
}
