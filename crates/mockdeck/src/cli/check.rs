//! Check command handler.

use super::{CheckOutputFormat, read_document};
use anyhow::Context;
use mockdeck_core::{FieldRepair, diff_repairs};
use serde_json::Value;

/// Format repairs for display.
///
/// Human output has one line per field; JSON output is an array of
/// `{ field, before, after }` objects.
pub fn format_repairs(repairs: &[FieldRepair], format: CheckOutputFormat) -> anyhow::Result<String> {
    match format {
        CheckOutputFormat::Json => {
            serde_json::to_string_pretty(repairs).context("Failed to serialize repairs")
        }
        CheckOutputFormat::Human => {
            if repairs.is_empty() {
                return Ok("✓ Post is canonical".to_string());
            }
            let lines: Vec<String> = repairs
                .iter()
                .map(|repair| match &repair.after {
                    Some(after) => format!(
                        "  {}: {} -> {}",
                        repair.field,
                        show(repair.before.as_ref()),
                        after
                    ),
                    None => format!("  {}: dropped", repair.field),
                })
                .collect();
            Ok(format!(
                "✗ {} field(s) need repair:\n{}",
                repairs.len(),
                lines.join("\n")
            ))
        }
    }
}

fn show(value: Option<&Value>) -> String {
    value.map_or_else(|| "(missing)".to_string(), Value::to_string)
}

/// Handles the check command.
///
/// Returns `true` when the document is already canonical.
#[tracing::instrument]
pub fn handle_check_command(input: &str, format: CheckOutputFormat) -> anyhow::Result<bool> {
    let raw = read_document(input)?;
    let (_, repairs) = diff_repairs(&raw);
    tracing::info!(repairs = repairs.len(), "Checked post");
    println!("{}", format_repairs(&repairs, format)?);
    Ok(repairs.is_empty())
}
