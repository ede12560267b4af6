//! Reading post documents from files or stdin.

use anyhow::Context;
use serde_json::Value;
use std::io::Read;

/// Read a JSON document from a path, or from stdin when `input` is `-`.
pub fn read_document(input: &str) -> anyhow::Result<Value> {
    let text = if input == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read stdin")?;
        buffer
    } else {
        std::fs::read_to_string(input).with_context(|| format!("Failed to read {}", input))?
    };

    serde_json::from_str(&text).with_context(|| format!("{} is not valid JSON", input))
}
