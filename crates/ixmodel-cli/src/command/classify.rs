use crate::{input, Config};
use anyhow::Result;
use clap::Parser;
use serde_json::Value;
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser, Debug)]
pub struct ClassifyCommand {
    /// JSON file with raw index descriptors (`-` for stdin)
    file: PathBuf,

    /// Order by namespace and name instead of input order
    #[arg(long)]
    sorted: bool,

    /// Print compact JSON regardless of configuration
    #[arg(long)]
    compact: bool,
}

impl ClassifyCommand {
    pub(crate) fn run(self, config: &Config, out: &mut impl Write) -> Result<()> {
        let descriptors = input::read(&self.file)?;
        let rendered = self.render(config, descriptors)?;
        writeln!(out, "{}", rendered)?;
        Ok(())
    }

    fn render(&self, config: &Config, descriptors: Value) -> Result<String> {
        let indexes = super::load(config, descriptors)?;

        let records: Vec<Value> = if self.sorted {
            indexes
                .sorted()
                .into_iter()
                .map(|index| Value::Object(index.serialize()))
                .collect()
        } else {
            indexes
                .serialize()
                .into_iter()
                .map(Value::Object)
                .collect()
        };

        let records = Value::Array(records);
        if config.output.pretty && !self.compact {
            Ok(serde_json::to_string_pretty(&records)?)
        } else {
            Ok(serde_json::to_string(&records)?)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ixmodel_core::InvalidRecordPolicy;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn command(args: &[&str]) -> ClassifyCommand {
        let mut argv = vec!["classify"];
        argv.extend_from_slice(args);
        ClassifyCommand::parse_from(argv)
    }

    fn descriptors() -> Value {
        json!([
            { "v": 2, "ns": "shop.orders", "name": "status_1", "key": { "status": 1 } },
            { "v": 2, "ns": "shop.orders", "name": "_id_", "key": { "_id": 1 } },
        ])
    }

    #[test]
    fn prints_serialized_records() {
        let out = command(&["-", "--compact"])
            .render(&Config::new(), descriptors())
            .unwrap();

        let records: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(records[0]["name"], json!("status_1"));
        assert_eq!(records[0]["type"], json!("regular"));
        assert_eq!(records[1]["unique"], json!(true));
        assert!(!out.contains('\n'));
    }

    #[test]
    fn sorted_output() {
        let out = command(&["-", "--sorted"])
            .render(&Config::new(), descriptors())
            .unwrap();

        let records: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(records[0]["name"], json!("_id_"));
        assert!(out.contains('\n'));
    }

    #[test]
    fn policy_comes_from_config() {
        let mut input = descriptors();
        input
            .as_array_mut()
            .unwrap()
            .push(json!({ "v": 2, "name": "bad", "key": { "x": "sideways" } }));

        assert!(command(&["-"]).render(&Config::new(), input.clone()).is_err());

        let config = Config::new().on_invalid(InvalidRecordPolicy::Skip);
        let out = command(&["-"]).render(&config, input).unwrap();
        let records: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(records.as_array().unwrap().len(), 2);
    }
}
