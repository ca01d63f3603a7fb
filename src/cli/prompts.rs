//! Interactive prompts using dialoguer

use anyhow::Result;
use dialoguer::{Confirm, Select};

use crate::data::{ColumnKind, ColumnSummary};

/// Prompt user to confirm proceeding with an action
pub fn confirm_step(message: &str) -> Result<bool> {
    let confirmed = Confirm::new()
        .with_prompt(message)
        .default(true)
        .interact()?;
    Ok(confirmed)
}

/// Prompt user to pick the column to analyze.
///
/// Only categorical columns are offered; each item shows the null profile
/// and distinct-value count so sparse columns are easy to avoid.
pub fn select_column(summaries: &[ColumnSummary]) -> Result<String> {
    let categorical: Vec<&ColumnSummary> = summaries
        .iter()
        .filter(|s| s.kind == ColumnKind::Categorical)
        .collect();

    if categorical.is_empty() {
        anyhow::bail!("The dataset has no categorical columns to analyze");
    }

    let items: Vec<String> = categorical
        .iter()
        .map(|s| {
            format!(
                "{} ({} values, {} null, {} categories)",
                s.name,
                s.non_null_count,
                s.null_count,
                s.unique_count.unwrap_or(0)
            )
        })
        .collect();

    let choice = Select::new()
        .with_prompt("Column to analyze")
        .items(&items)
        .default(0)
        .interact()?;

    Ok(categorical[choice].name.clone())
}

/// Prompt user to pick the success category from the observed counts.
pub fn select_category(counts: &[(String, u64)]) -> Result<String> {
    if counts.is_empty() {
        anyhow::bail!("The selected column has no non-null categories");
    }

    let items: Vec<String> = counts
        .iter()
        .map(|(category, count)| format!("{} ({} occurrences)", category, count))
        .collect();

    let choice = Select::new()
        .with_prompt("Success category")
        .items(&items)
        .default(0)
        .interact()?;

    Ok(counts[choice].0.clone())
}
