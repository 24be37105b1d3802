use crate::rule::{CssOptions, Rule, RuleKind};
use std::collections::HashMap;
use std::ops::Index;

/// Ordered, name-keyed collection of rules
#[derive(Debug, Default)]
pub struct RuleList {
    rules: Vec<Box<dyn Rule>>,
    index: HashMap<String, usize>,
}

impl RuleList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a rule at the end of the list and return its position.
    ///
    /// Regular rules are also reachable through their selector. A later rule
    /// registered under an existing name shadows the earlier one for lookups.
    pub fn add(&mut self, rule: Box<dyn Rule>) -> usize {
        let position = self.rules.len();

        self.index.insert(rule.key().to_string(), position);
        if rule.kind() == RuleKind::Regular {
            if let Some(selector) = rule.selector() {
                self.index.entry(selector.to_string()).or_insert(position);
            }
        }

        self.rules.push(rule);
        position
    }

    pub fn get(&self, name: &str) -> Option<&dyn Rule> {
        self.index.get(name).map(|&i| self.rules[i].as_ref())
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub fn at_mut(&mut self, position: usize) -> Option<&mut Box<dyn Rule>> {
        self.rules.get_mut(position)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Rule> + '_ {
        self.rules.iter().map(|rule| rule.as_ref())
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Box<dyn Rule>> + '_ {
        self.rules.iter_mut()
    }

    /// Serialize members in insertion order, one per line, skipping empty output
    pub fn to_css(&self, options: &CssOptions) -> String {
        self.rules
            .iter()
            .map(|rule| rule.to_css(options))
            .filter(|css| !css.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Index<usize> for RuleList {
    type Output = dyn Rule;

    fn index(&self, position: usize) -> &Self::Output {
        self.rules[position].as_ref()
    }
}
