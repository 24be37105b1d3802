//! `@global` support: rewrites marked entries of a style tree into unscoped
//! rules while ordinary rules keep their generated class names.
//!
//! Two marker forms are recognized:
//! - `"@global": { "<selector>": { ... }, ... }` declares several rules,
//! - `"@global <selector>": { ... }` declares one. Inside a body the space
//!   may be left out, as in `"@global.active"`.
//!
//! At the top level of a sheet they produce rules with the literal selector.
//! Nested inside a regular rule they are hoisted to the sheet with the
//! enclosing rule's selector prepended.

pub mod container;
pub mod extract;
pub mod marker;
pub mod prefixed;
pub mod scope;

pub use container::GlobalContainerRule;
pub use extract::{extract_globals, Extraction};
pub use marker::{classify, classify_body_key, Marker, CONTAINER_KEY, PREFIX_KEY};
pub use prefixed::GlobalPrefixedRule;
pub use scope::scope_selectors;

use styleforge_core::{PendingRule, Pipeline, Plugin, Rule, RuleKind, RuleOptions, Style};
use tracing::{debug, trace};

#[derive(Debug, Clone, Copy, Default)]
pub struct GlobalPlugin;

impl Plugin for GlobalPlugin {
    fn name(&self) -> &'static str {
        "global"
    }

    fn on_create(
        &self,
        name: &str,
        style: &Style,
        options: &mut RuleOptions,
        pipeline: &Pipeline,
    ) -> Option<Box<dyn Rule>> {
        match classify(name) {
            Marker::Container => Some(Box::new(GlobalContainerRule::new(style, options, pipeline))),
            Marker::Prefixed(selector) => Some(Box::new(GlobalPrefixedRule::new(
                name, selector, style, options, pipeline,
            ))),
            Marker::None => {
                if marker::propagate_scope(name, options) {
                    trace!(name = %name, "Rule under @global created unscoped");
                }
                None
            }
        }
    }

    fn on_process(&self, rule: &mut dyn Rule, pending: &mut Vec<PendingRule>) {
        if rule.kind() != RuleKind::Regular {
            return;
        }
        let (Some(style), Some(scope)) = (rule.style(), rule.selector()) else {
            return;
        };

        if let Some(extraction) = extract_globals(style, scope, rule.options()) {
            debug!(rule = %rule.key(), hoisted = extraction.hoisted.len(), "Extracted nested @global rules");
            rule.set_style(extraction.style);
            pending.extend(extraction.hoisted);
        }
    }
}
