use std::io::Read;
use std::path::Path;

use anyhow::Context;
use serde_json::Value;

/// Read JSON from a file path, or from stdin when `source` is `-`.
pub fn read_json_input(source: &str) -> anyhow::Result<Value> {
    let text = if source == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read JSON input from stdin")?;
        buffer
    } else {
        std::fs::read_to_string(Path::new(source))
            .with_context(|| format!("failed to read JSON input from {source}"))?
    };

    parse_json_input(&text, source)
}

fn parse_json_input(text: &str, source: &str) -> anyhow::Result<Value> {
    if text.trim().is_empty() {
        anyhow::bail!("JSON input from {source} is empty");
    }
    serde_json::from_str(text).with_context(|| format!("input from {source} is not valid JSON"))
}
