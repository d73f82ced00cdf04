//! Output of the offline `score` and `explain` subcommands
//!
//! Both render to a `String` so the binary only has to print the result.

use std::fmt::Write;
use std::fs;
use std::path::Path;

use anyhow::Context;
use receipts_calculator::PointsCalculator;
use receipts_types::Receipt;

/// Reads and decodes a receipt file in the same JSON shape the API accepts.
pub fn load_receipt(file: &Path) -> anyhow::Result<Receipt> {
    let contents = fs::read_to_string(file)
        .with_context(|| format!("Failed to read receipt file at {}", file.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse receipt JSON in {}", file.display()))
}

/// Scores the receipt in `file`.
///
/// With `rule` set only that rule's points are rendered; an unknown rule is an
/// error. Otherwise the per-rule breakdown is rendered as a table, or as pretty
/// JSON when `json` is set.
pub fn render_score(
    calculator: &PointsCalculator,
    file: &Path,
    json: bool,
    rule: Option<&str>,
) -> anyhow::Result<String> {
    let receipt = load_receipt(file)?;

    if let Some(rule) = rule {
        return Ok(format!("{}\n", calculator.points_for(rule, &receipt)?));
    }

    let breakdown = calculator.breakdown(&receipt);
    if json {
        return Ok(format!("{}\n", serde_json::to_string_pretty(&breakdown)?));
    }

    let mut out = String::new();
    for contribution in &breakdown.contributions {
        writeln!(out, "  {:<24} {:>6}", contribution.rule, contribution.points)?;
    }
    writeln!(out, "  {:<24} {:>6}", "total", breakdown.total)?;
    Ok(out)
}

/// Lists every registered rule with its description.
pub fn render_rules(calculator: &PointsCalculator) -> String {
    let mut out = String::from("Receipt Processor - points rules\n");
    out.push_str("Every rule is additive; a malformed field only zeroes the rules that read it.\n");
    out.push('\n');
    for (name, description) in calculator.rules() {
        out.push_str(&format!("  {name:<24} {description}\n"));
    }
    out
}
