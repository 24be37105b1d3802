//! Style sheets: the root ordered collection of rules

use crate::error::{SheetError, SheetResult};
use crate::options::RuleOptions;
use crate::pipeline::{PendingRule, Pipeline};
use crate::rule::{CssOptions, Rule};
use crate::rule_list::RuleList;
use crate::style::Style;
use serde_json::Value;
use std::fmt;
use tracing::{debug, info, instrument};

#[derive(Debug)]
pub struct StyleSheet<'p> {
    rules: RuleList,
    pipeline: &'p Pipeline,
}

impl<'p> StyleSheet<'p> {
    pub fn empty(pipeline: &'p Pipeline) -> Self {
        Self {
            rules: RuleList::new(),
            pipeline,
        }
    }

    /// Build a sheet from top-level rule name to declaration body.
    ///
    /// Every rule is created first, in declaration order; the rules created
    /// here are then processed one by one. Rules requested while processing
    /// are appended and resolved immediately.
    #[instrument(skip_all, fields(rules = styles.len()))]
    pub fn new(styles: Style, pipeline: &'p Pipeline) -> SheetResult<Self> {
        let mut sheet = Self::empty(pipeline);

        for (name, body) in styles {
            let body = match body {
                Value::Object(body) => body,
                _ => return Err(SheetError::NotAnObject { name }),
            };
            let rule = pipeline.create_rule(&name, body, RuleOptions::default());
            sheet.rules.add(rule);
        }

        let created = sheet.rules.len();
        for position in 0..created {
            sheet.process_at(position);
        }

        info!(rules = sheet.rules.len(), "Style sheet built");
        Ok(sheet)
    }

    pub fn from_json(source: &str, pipeline: &'p Pipeline) -> SheetResult<Self> {
        match serde_json::from_str::<Value>(source)? {
            Value::Object(styles) => Self::new(styles, pipeline),
            _ => Err(SheetError::RootNotAnObject),
        }
    }

    /// Create, register and process a top-level rule
    pub fn add_rule(&mut self, name: &str, style: Style) -> &dyn Rule {
        self.add_rule_with(name, style, RuleOptions::default())
    }

    pub fn add_rule_with(&mut self, name: &str, style: Style, options: RuleOptions) -> &dyn Rule {
        let rule = self.pipeline.create_rule(name, style, options);
        let position = self.rules.add(rule);
        self.process_at(position);

        &self.rules[position]
    }

    fn process_at(&mut self, position: usize) {
        let mut pending = Vec::new();
        if let Some(rule) = self.rules.at_mut(position) {
            self.pipeline.process_rule(rule.as_mut(), &mut pending);
        }

        for PendingRule { name, style, options } in pending {
            debug!(name = %name, selector = ?options.selector, "Registering requested rule");
            self.add_rule_with(&name, style, options);
        }
    }

    pub fn get_rule(&self, name: &str) -> Option<&dyn Rule> {
        self.rules.get(name)
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.rules.index_of(name)
    }

    pub fn rules(&self) -> &RuleList {
        &self.rules
    }

    /// Rule key to generated class name, for every scoped rule in the sheet
    pub fn classes(&self) -> Vec<(&str, &str)> {
        fn collect<'a>(rules: &'a RuleList, out: &mut Vec<(&'a str, &'a str)>) {
            for rule in rules.iter() {
                if let Some(class_name) = rule.class_name() {
                    out.push((rule.key(), class_name));
                }
                if let Some(children) = rule.children() {
                    collect(children, out);
                }
            }
        }

        let mut classes = Vec::new();
        collect(&self.rules, &mut classes);
        classes
    }

    pub fn to_css(&self) -> String {
        self.rules.to_css(&CssOptions::default())
    }
}

impl fmt::Display for StyleSheet<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}
