//! Hoisting of `@global` entries out of a regular rule's body

use crate::marker::{classify_body_key, Marker};
use crate::scope::scope_selectors;
use serde_json::Value;
use styleforge_core::{PendingRule, RuleOptions, Style};
use tracing::debug;

#[derive(Debug, Clone, PartialEq)]
pub struct Extraction {
    /// Body with every marker entry removed
    pub style: Style,
    /// Rules to register on the sheet, in discovery order
    pub hoisted: Vec<PendingRule>,
}

/// Split the marker entries out of `style`, scoping hoisted selectors
/// under `scope`.
///
/// Container entries come first in their own order, then prefixed entries
/// in key order. Returns `None` when the body holds no marker at all.
pub fn extract_globals(style: &Style, scope: &str, options: &RuleOptions) -> Option<Extraction> {
    if style.keys().all(|key| classify_body_key(key) == Marker::None) {
        return None;
    }

    let mut remaining = Style::new();
    let mut from_container = Vec::new();
    let mut from_prefixed = Vec::new();

    for (key, value) in style {
        match classify_body_key(key) {
            Marker::Container => match value {
                Value::Object(rules) => {
                    for (selector, body) in rules {
                        match body {
                            Value::Object(body) => {
                                from_container.extend(hoist(Some(selector), selector, scope, body.clone(), options))
                            }
                            other => debug!(selector = %selector, value = %other, "Skipping non-object entry in nested @global"),
                        }
                    }
                }
                other => debug!(scope = %scope, value = %other, "Dropping @global without rules"),
            },
            Marker::Prefixed(selector) => {
                let body = match value {
                    Value::Object(body) => body.clone(),
                    _ => Style::new(),
                };
                from_prefixed.extend(hoist(None, selector, scope, body, options));
            }
            Marker::None => {
                remaining.insert(key.clone(), value.clone());
            }
        }
    }

    from_container.append(&mut from_prefixed);
    Some(Extraction {
        style: remaining,
        hoisted: from_container,
    })
}

/// Container entries keep their own name; prefixed entries are named by
/// their scoped selector.
fn hoist(
    name: Option<&str>,
    selector: &str,
    scope: &str,
    style: Style,
    options: &RuleOptions,
) -> Option<PendingRule> {
    let scoped = scope_selectors(selector, scope);
    if scoped.is_empty() {
        debug!(scope = %scope, "Skipping @global with an empty selector");
        return None;
    }

    debug!(selector = %scoped, "Hoisting global rule");
    Some(PendingRule {
        name: name.map_or_else(|| scoped.clone(), str::to_string),
        style,
        options: RuleOptions {
            selector: Some(scoped),
            scoped: false,
            parent: None,
            within_global: options.within_global,
        },
    })
}
