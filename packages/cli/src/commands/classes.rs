use crate::config::Config;
use anyhow::{Context, Result};
use clap::Args;
use serde_json::{Map, Value};
use std::fs;
use std::path::PathBuf;
use styleforge_core::{Pipeline, StyleSheet};

#[derive(Debug, Args)]
pub struct ClassesArgs {
    /// Style file to inspect
    pub file: PathBuf,

    /// Class name prefix (overrides config)
    #[arg(short, long)]
    pub prefix: Option<String>,
}

pub fn classes(args: ClassesArgs, cwd: &str) -> Result<()> {
    let mut config = Config::load(cwd)?;
    if let Some(prefix) = args.prefix {
        config.class_name_prefix = prefix;
    }

    let path = PathBuf::from(cwd).join(&args.file);
    let source =
        fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path.display()))?;

    let pipeline = config.pipeline()?;
    let map = class_map(&source, &pipeline)?;
    println!("{}", serde_json::to_string_pretty(&Value::Object(map))?);

    Ok(())
}

/// Rule name to generated class name, in sheet order
fn class_map(source: &str, pipeline: &Pipeline) -> Result<Map<String, Value>> {
    let sheet = StyleSheet::from_json(source, pipeline)?;

    Ok(sheet
        .classes()
        .into_iter()
        .map(|(key, class_name)| (key.to_string(), Value::String(class_name.to_string())))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_class_map_skips_global_rules() {
        let config = Config {
            class_name_prefix: "sf-".to_string(),
            ..Config::default()
        };
        let pipeline = config.pipeline().unwrap();
        let map = class_map(
            r#"{
                "@global": {"body": {"margin": 0}},
                "button": {"float": "left", "@global span": {"color": "red"}},
                "link": {"color": "blue"}
            }"#,
            &pipeline,
        )
        .unwrap();

        assert_eq!(
            Value::Object(map),
            json!({"button": "sf-button-0", "link": "sf-link-1"})
        );
    }
}
