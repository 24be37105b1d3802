//! Host rule-compilation pipeline: style sheets, rules, plugin hooks and
//! CSS serialization.

pub mod class_name;
pub mod error;
pub mod options;
pub mod pipeline;
pub mod rule;
pub mod rule_list;
pub mod sheet;
pub mod style;

pub use class_name::{ClassNameGenerator, SequentialClassNames};
pub use error::{SheetError, SheetResult};
pub use options::RuleOptions;
pub use pipeline::{PendingRule, Pipeline, Plugin};
pub use rule::{ConditionalRule, CssOptions, RegularRule, Rule, RuleKind};
pub use rule_list::RuleList;
pub use sheet::StyleSheet;
pub use style::Style;
