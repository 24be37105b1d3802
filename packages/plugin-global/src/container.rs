use crate::marker::CONTAINER_KEY;
use serde_json::Value;
use styleforge_core::{
    CssOptions, PendingRule, Pipeline, Rule, RuleKind, RuleList, RuleOptions, Style,
};
use tracing::debug;

/// `@global` container: every entry is an unscoped rule whose selector is
/// the entry's key
#[derive(Debug)]
pub struct GlobalContainerRule {
    rules: RuleList,
    options: RuleOptions,
}

impl GlobalContainerRule {
    /// Create every child eagerly. Children are processed with the rest of
    /// the sheet.
    pub fn new(style: &Style, options: &RuleOptions, pipeline: &Pipeline) -> Self {
        let mut container = Self {
            rules: RuleList::new(),
            options: options.clone(),
        };

        for (selector, body) in style {
            match body {
                Value::Object(body) => {
                    let rule = pipeline.create_rule(selector, body.clone(), container.child_options(selector));
                    container.rules.add(rule);
                }
                other => debug!(selector = %selector, value = %other, "Skipping non-object entry in @global"),
            }
        }

        container
    }

    fn child_options(&self, selector: &str) -> RuleOptions {
        self.options
            .child_of(RuleKind::GlobalContainer)
            .with_selector(selector)
            .unscoped()
    }

    pub fn get_rule(&self, name: &str) -> Option<&dyn Rule> {
        self.rules.get(name)
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.rules.index_of(name)
    }

    /// Register a child and run the full processing pipeline on it.
    ///
    /// Rules the child hoists are pushed to `pending` for the owning sheet.
    pub fn add_rule(
        &mut self,
        name: &str,
        style: Style,
        pipeline: &Pipeline,
        pending: &mut Vec<PendingRule>,
    ) -> &dyn Rule {
        let mut rule = pipeline.create_rule(name, style, self.child_options(name));
        pipeline.process_rule(rule.as_mut(), pending);

        let position = self.rules.add(rule);
        &self.rules[position]
    }
}

impl Rule for GlobalContainerRule {
    fn key(&self) -> &str {
        CONTAINER_KEY
    }

    fn kind(&self) -> RuleKind {
        RuleKind::GlobalContainer
    }

    fn options(&self) -> &RuleOptions {
        &self.options
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GlobalPlugin;
    use serde_json::json;

    fn pipeline() -> Pipeline {
        Pipeline::with_class_names(|k: &str| format!("{}-id", k)).with_plugin(GlobalPlugin)
    }

    fn style(value: Value) -> Style {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_children_are_unscoped_in_order() {
        let pipeline = pipeline();
        let container = GlobalContainerRule::new(
            &style(json!({"a": {"color": "red"}, "body": {"color": "green"}})),
            &RuleOptions::default(),
            &pipeline,
        );

        assert_eq!(container.index_of("a"), Some(0));
        assert_eq!(container.index_of("body"), Some(1));
        assert_eq!(container.get_rule("body").and_then(|r| r.selector()), Some("body"));
        assert_eq!(
            container.to_css(&CssOptions::default()),
            "a {\n  color: red;\n}\nbody {\n  color: green;\n}"
        );
    }

    #[test]
    fn test_selector_list_entry_is_literal() {
        let pipeline = pipeline();
        let container = GlobalContainerRule::new(
            &style(json!({"h1, h2": {"margin": 0}})),
            &RuleOptions::default(),
            &pipeline,
        );

        assert_eq!(container.to_css(&CssOptions::default()), "h1, h2 {\n  margin: 0;\n}");
    }

    #[test]
    fn test_non_object_entries_are_skipped() {
        let pipeline = pipeline();
        let container = GlobalContainerRule::new(
            &style(json!({"color": "red", "a": {"color": "blue"}})),
            &RuleOptions::default(),
            &pipeline,
        );

        assert_eq!(container.children().map(RuleList::len), Some(1));
    }

    #[test]
    fn test_add_rule_processes_child() {
        let pipeline = pipeline();
        let mut container = GlobalContainerRule::new(&Style::new(), &RuleOptions::default(), &pipeline);

        let mut pending = Vec::new();
        let rule = container.add_rule(
            "nav",
            style(json!({"display": "flex", "@global a": {"color": "red"}})),
            &pipeline,
            &mut pending,
        );

        assert_eq!(rule.selector(), Some("nav"));
        assert_eq!(rule.to_css(&CssOptions::default()), "nav {\n  display: flex;\n}");
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].options.selector.as_deref(), Some("nav a"));
    }
}
