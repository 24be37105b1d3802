//! Class-name generation for scoped rules

use std::cell::Cell;

/// Produces the locally-unique class name of a scoped rule
pub trait ClassNameGenerator {
    fn generate(&self, rule_key: &str) -> String;
}

impl<F> ClassNameGenerator for F
where
    F: Fn(&str) -> String,
{
    fn generate(&self, rule_key: &str) -> String {
        self(rule_key)
    }
}

/// Default generator: `{prefix}{key}-{counter}`
///
/// Characters that are not valid in a class name are replaced by `-`.
#[derive(Debug, Default)]
pub struct SequentialClassNames {
    prefix: String,
    counter: Cell<u32>,
}

impl SequentialClassNames {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: Cell::new(0),
        }
    }
}

impl ClassNameGenerator for SequentialClassNames {
    fn generate(&self, rule_key: &str) -> String {
        let id = self.counter.get();
        self.counter.set(id + 1);

        let key: String = rule_key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '-'
                }
            })
            .collect();

        format!("{}{}-{}", self.prefix, key, id)
    }
}
