/// Host pipeline behaviour as seen by plugins
use serde_json::{json, Value};
use styleforge_core::{
    PendingRule, Pipeline, Plugin, Rule, RuleKind, RuleOptions, Style, StyleSheet,
};

/// Moves `&<suffix>` entries of regular rules into sibling rules
struct Suffixes;

impl Plugin for Suffixes {
    fn name(&self) -> &'static str {
        "suffixes"
    }

    fn on_process(&self, rule: &mut dyn Rule, pending: &mut Vec<PendingRule>) {
        if rule.kind() != RuleKind::Regular {
            return;
        }
        let (Some(style), Some(selector)) = (rule.style(), rule.selector()) else {
            return;
        };

        let mut remaining = Style::new();
        let mut found = Vec::new();
        for (key, value) in style {
            match (key.strip_prefix('&'), value) {
                (Some(suffix), Value::Object(body)) => {
                    let selector = format!("{}{}", selector, suffix);
                    found.push(PendingRule {
                        name: selector.clone(),
                        style: body.clone(),
                        options: RuleOptions::default().with_selector(selector),
                    });
                }
                _ => {
                    remaining.insert(key.clone(), value.clone());
                }
            }
        }

        if !found.is_empty() {
            rule.set_style(remaining);
            pending.extend(found);
        }
    }
}

fn pipeline() -> Pipeline {
    Pipeline::with_class_names(|key: &str| format!("{}-id", key)).with_plugin(Suffixes)
}

fn build(pipeline: &Pipeline, styles: Value) -> StyleSheet<'_> {
    StyleSheet::new(styles.as_object().cloned().unwrap(), pipeline).expect("Failed to build sheet")
}

#[test]
fn test_requested_rules_are_appended_after_creation() {
    let pipeline = pipeline();
    let sheet = build(
        &pipeline,
        json!({
            "button": {"color": "red", "&:hover": {"color": "blue"}},
            "link": {"color": "green"}
        }),
    );

    assert_eq!(
        sheet.to_css(),
        ".button-id {\n  color: red;\n}\n\
         .link-id {\n  color: green;\n}\n\
         .button-id:hover {\n  color: blue;\n}"
    );
}

#[test]
fn test_requested_rules_are_processed_recursively() {
    let pipeline = pipeline();
    let sheet = build(
        &pipeline,
        json!({
            "button": {"&:hover": {"color": "blue", "&::after": {"content": "'!'"}}}
        }),
    );

    assert_eq!(sheet.index_of(".button-id:hover"), Some(1));
    assert_eq!(sheet.index_of(".button-id:hover::after"), Some(2));
    assert_eq!(
        sheet.to_css(),
        ".button-id:hover {\n  color: blue;\n}\n.button-id:hover::after {\n  content: '!';\n}"
    );
}

#[test]
fn test_children_of_conditionals_are_processed() {
    let pipeline = pipeline();
    let sheet = build(
        &pipeline,
        json!({
            "@media print": {"button": {"display": "none", "&:focus": {"outline": 0}}}
        }),
    );

    assert_eq!(
        sheet.to_css(),
        "@media print {\n  .button-id {\n    display: none;\n  }\n}\n.button-id:focus {\n  outline: 0;\n}"
    );
}

#[test]
fn test_sheet_without_plugins_keeps_nested_objects_out_of_css() {
    let pipeline = Pipeline::with_class_names(|key: &str| format!("{}-id", key));
    let sheet = build(&pipeline, json!({"button": {"color": "red", "&:hover": {"color": "blue"}}}));

    assert_eq!(sheet.to_css(), ".button-id {\n  color: red;\n}");
    assert_eq!(sheet.rules().len(), 1);
}
