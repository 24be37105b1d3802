//! Rule capability and the host's built-in rule kinds

use crate::class_name::ClassNameGenerator;
use crate::options::RuleOptions;
use crate::pipeline::Pipeline;
use crate::rule_list::RuleList;
use crate::style::{declarations, Style};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use tracing::debug;

/// At-rules treated as opaque nesting containers
pub const CONDITIONAL_AT_RULES: &[&str] = &["@media", "@supports", "@container", "@layer", "@document"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleKind {
    Regular,
    Conditional,
    GlobalContainer,
    GlobalPrefixed,
}

impl RuleKind {
    pub fn is_global(self) -> bool {
        matches!(self, RuleKind::GlobalContainer | RuleKind::GlobalPrefixed)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RuleKind::Regular => "regular",
            RuleKind::Conditional => "conditional",
            RuleKind::GlobalContainer => "global-container",
            RuleKind::GlobalPrefixed => "global-prefixed",
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Serialization settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CssOptions {
    /// Nesting depth; each level indents by two spaces
    pub indent: usize,
}

impl CssOptions {
    pub fn nested(self) -> Self {
        Self {
            indent: self.indent + 1,
        }
    }
}

fn indent_str(level: usize) -> String {
    "  ".repeat(level)
}

/// Generic rule capability shared by host and plugin rule kinds
pub trait Rule: fmt::Debug {
    /// Name the rule is registered under
    fn key(&self) -> &str;

    fn kind(&self) -> RuleKind;

    fn options(&self) -> &RuleOptions;

    fn selector(&self) -> Option<&str> {
        None
    }

    /// Generated class name, for scoped rules only
    fn class_name(&self) -> Option<&str> {
        None
    }

    fn style(&self) -> Option<&Style> {
        None
    }

    /// Replace the declaration body. No-op for rules without one.
    fn set_style(&mut self, _style: Style) {}

    fn children(&self) -> Option<&RuleList> {
        None
    }

    fn children_mut(&mut self) -> Option<&mut RuleList> {
        None
    }

    /// Serialize to CSS; an empty string means nothing to emit
    fn to_css(&self, options: &CssOptions) -> String;
}

/// Ordinary style rule: `selector { prop: value; }`
#[derive(Debug, Clone)]
pub struct RegularRule {
    key: String,
    selector: String,
    class_name: Option<String>,
    style: Style,
    options: RuleOptions,
}

impl RegularRule {
    pub fn new(
        key: &str,
        style: Style,
        options: RuleOptions,
        class_names: &dyn ClassNameGenerator,
    ) -> Self {
        let (selector, class_name) = match (&options.selector, options.scoped) {
            (Some(selector), _) => (selector.clone(), None),
            (None, false) => (key.to_string(), None),
            (None, true) => {
                let class_name = class_names.generate(key);
                (format!(".{}", class_name), Some(class_name))
            }
        };

        Self {
            key: key.to_string(),
            selector,
            class_name,
            style,
            options,
        }
    }
}

impl Rule for RegularRule {
    fn key(&self) -> &str {
        &self.key
    }

    fn kind(&self) -> RuleKind {
        RuleKind::Regular
    }

    fn options(&self) -> &RuleOptions {
        &self.options
    }

    fn selector(&self) -> Option<&str> {
        Some(&self.selector)
    }

    fn class_name(&self) -> Option<&str> {
        self.class_name.as_deref()
    }

    fn style(&self) -> Option<&Style> {
        Some(&self.style)
    }

    fn set_style(&mut self, style: Style) {
        self.style = style;
    }

    fn to_css(&self, options: &CssOptions) -> String {
        let inner = indent_str(options.indent + 1);
        let lines: Vec<String> = declarations(&self.style)
            .map(|(prop, value)| format!("{}{}: {};", inner, prop, value))
            .collect();

        if lines.is_empty() {
            return String::new();
        }

        let outer = indent_str(options.indent);
        format!("{}{} {{\n{}\n{}}}", outer, self.selector, lines.join("\n"), outer)
    }
}

/// Conditional at-rule (`@media`, `@supports`, ...) holding nested rules
#[derive(Debug)]
pub struct ConditionalRule {
    key: String,
    rules: RuleList,
    options: RuleOptions,
}

impl ConditionalRule {
    pub fn is_conditional(name: &str) -> bool {
        CONDITIONAL_AT_RULES.iter().any(|at_rule| {
            name.strip_prefix(*at_rule)
                .is_some_and(|rest| rest.is_empty() || rest.starts_with(char::is_whitespace))
        })
    }

    pub fn new(key: &str, style: Style, options: RuleOptions, pipeline: &Pipeline) -> Self {
        let mut rules = RuleList::new();
        let child_options = options.child_of(RuleKind::Conditional);

        for (name, body) in style {
            match body {
                Value::Object(body) => {
                    rules.add(pipeline.create_rule(&name, body, child_options.clone()));
                }
                other => debug!(at_rule = %key, name = %name, value = %other, "Skipping non-rule entry in conditional"),
            }
        }

        Self {
            key: key.to_string(),
            rules,
            options,
        }
    }
}

impl Rule for ConditionalRule {
    fn key(&self) -> &str {
        &self.key
    }

    fn kind(&self) -> RuleKind {
        RuleKind::Conditional
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
        let body = self.rules.to_css(&options.nested());
        if body.is_empty() {
            return String::new();
        }

        let outer = indent_str(options.indent);
        format!("{}{} {{\n{}\n{}}}", outer, self.key, body, outer)
    }
}
