//! JSON export of calculation results

use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;

use crate::data::CategoricalAnalysis;
use crate::dist::{ChartSeries, DistributionResult, ModelDecision};

/// Metadata about the calculation run
#[derive(Serialize)]
pub struct ReportMetadata {
    /// Timestamp of the calculation (ISO 8601 format)
    pub timestamp: String,
    /// Finpop version
    pub finpop_version: String,
    /// Which subcommand produced the report
    pub mode: String,
}

/// Complete calculation export with metadata
#[derive(Serialize)]
pub struct CalculationReport<'a> {
    /// Metadata about the calculation run
    pub metadata: ReportMetadata,
    /// Model-selection decision (auto and analyze modes)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decision: Option<&'a ModelDecision>,
    /// The column analysis that produced N and K (analyze mode)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column_analysis: Option<&'a CategoricalAnalysis>,
    /// The distribution calculation itself
    pub results: &'a DistributionResult,
    /// Probability and cumulative series over the support
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chart: Option<&'a ChartSeries>,
}

/// Export a calculation report to a JSON file.
///
/// # Arguments
/// * `output_path` - Path to write the JSON file
/// * `mode` - Subcommand name recorded in the metadata
/// * `decision` - Model decision, when one was made
/// * `column_analysis` - Column analysis, when parameters came from data
/// * `results` - The distribution calculation
/// * `chart` - The probability/cumulative series, when computed
pub fn export_report(
    output_path: &Path,
    mode: &str,
    decision: Option<&ModelDecision>,
    column_analysis: Option<&CategoricalAnalysis>,
    results: &DistributionResult,
    chart: Option<&ChartSeries>,
) -> Result<()> {
    let report = CalculationReport {
        metadata: ReportMetadata {
            timestamp: Utc::now().to_rfc3339(),
            finpop_version: env!("CARGO_PKG_VERSION").to_string(),
            mode: mode.to_string(),
        },
        decision,
        column_analysis,
        results,
        chart,
    };

    let json = serde_json::to_string_pretty(&report)
        .context("Failed to serialize calculation report to JSON")?;

    std::fs::write(output_path, json)
        .with_context(|| format!("Failed to write report to {}", output_path.display()))?;

    Ok(())
}
