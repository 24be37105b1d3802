//! Rule creation and processing pipeline with plugin hooks

use crate::class_name::{ClassNameGenerator, SequentialClassNames};
use crate::options::RuleOptions;
use crate::rule::{ConditionalRule, RegularRule, Rule};
use crate::style::Style;
use std::fmt;
use tracing::{debug, trace};

/// Rule requested by a plugin during processing, registered on the owning
/// sheet once the current rule has been processed
#[derive(Debug, Clone, PartialEq)]
pub struct PendingRule {
    pub name: String,
    pub style: Style,
    pub options: RuleOptions,
}

/// Extension points of the pipeline
pub trait Plugin {
    fn name(&self) -> &'static str;

    /// Called before a rule exists. Returning a rule overrides default
    /// creation; declining still lets the plugin adjust `options`.
    fn on_create(
        &self,
        _name: &str,
        _style: &Style,
        _options: &mut RuleOptions,
        _pipeline: &Pipeline,
    ) -> Option<Box<dyn Rule>> {
        None
    }

    /// Called once per created rule, before it is considered final
    fn on_process(&self, _rule: &mut dyn Rule, _pending: &mut Vec<PendingRule>) {}
}

pub struct Pipeline {
    plugins: Vec<Box<dyn Plugin>>,
    class_names: Box<dyn ClassNameGenerator>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::with_class_names(SequentialClassNames::new())
    }

    pub fn with_class_names(class_names: impl ClassNameGenerator + 'static) -> Self {
        Self {
            plugins: Vec::new(),
            class_names: Box::new(class_names),
        }
    }

    /// Register a plugin; hooks run in registration order
    pub fn with_plugin(mut self, plugin: impl Plugin + 'static) -> Self {
        self.plugins.push(Box::new(plugin));
        self
    }

    pub fn plugin_names(&self) -> Vec<&'static str> {
        self.plugins.iter().map(|p| p.name()).collect()
    }

    /// Create a rule without registering it anywhere.
    ///
    /// The first plugin returning a rule wins; otherwise a conditional or
    /// regular rule is built from the (possibly adjusted) options.
    pub fn create_rule(&self, name: &str, style: Style, mut options: RuleOptions) -> Box<dyn Rule> {
        for plugin in &self.plugins {
            if let Some(rule) = plugin.on_create(name, &style, &mut options, self) {
                debug!(plugin = plugin.name(), name = %name, kind = %rule.kind(), "Plugin created rule");
                return rule;
            }
        }

        if ConditionalRule::is_conditional(name) {
            trace!(name = %name, "Creating conditional rule");
            Box::new(ConditionalRule::new(name, style, options, self))
        } else {
            trace!(name = %name, selector = ?options.selector, scoped = options.scoped, "Creating regular rule");
            Box::new(RegularRule::new(name, style, options, self.class_names.as_ref()))
        }
    }

    /// Run every plugin's processing hook on a rule, then on its children
    pub fn process_rule(&self, rule: &mut dyn Rule, pending: &mut Vec<PendingRule>) {
        for plugin in &self.plugins {
            plugin.on_process(rule, pending);
        }

        if let Some(children) = rule.children_mut() {
            for child in children.iter_mut() {
                self.process_rule(child.as_mut(), pending);
            }
        }
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("plugins", &self.plugin_names())
            .finish_non_exhaustive()
    }
}
