//! Per-column dataset summaries.
//!
//! Presents each column's null profile and a kind-specific digest
//! (top categories, or numeric range and moments) so a user can pick the
//! column and success category to analyze. Columns are summarized in
//! parallel; datasets can be wide.

use anyhow::Result;
use polars::prelude::*;
use rayon::prelude::*;
use serde::Serialize;

use super::categorical::column_to_string_values;

/// How many top categories a summary lists
const TOP_CATEGORY_COUNT: usize = 10;

/// Broad classification of a column for analysis purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    /// String, boolean, or categorical dtype - candidate for analysis
    Categorical,
    Numeric,
    Other,
}

/// Digest of one dataset column.
#[derive(Debug, Clone, Serialize)]
pub struct ColumnSummary {
    pub name: String,
    pub dtype: String,
    pub kind: ColumnKind,
    pub total_rows: usize,
    pub non_null_count: usize,
    pub null_count: usize,
    /// Distinct non-null values (categorical columns)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_count: Option<usize>,
    /// Most frequent categories with their counts (categorical columns)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub top_categories: Vec<(String, u64)>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mean: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub std: Option<f64>,
}

/// Summarize every column of the dataset, in parallel.
pub fn summarize_columns(df: &DataFrame) -> Result<Vec<ColumnSummary>> {
    df.get_columns()
        .par_iter()
        .map(|col| summarize_column(df.height(), col))
        .collect()
}

fn column_kind(dtype: &DataType) -> ColumnKind {
    match dtype {
        DataType::String | DataType::Boolean | DataType::Categorical(_, _) => {
            ColumnKind::Categorical
        }
        dt if dt.is_primitive_numeric() => ColumnKind::Numeric,
        _ => ColumnKind::Other,
    }
}

fn summarize_column(total_rows: usize, col: &Column) -> Result<ColumnSummary> {
    let null_count = col.null_count();
    let non_null_count = col.len() - null_count;
    let kind = column_kind(col.dtype());

    let mut summary = ColumnSummary {
        name: col.name().to_string(),
        dtype: col.dtype().to_string(),
        kind,
        total_rows,
        non_null_count,
        null_count,
        unique_count: None,
        top_categories: Vec::new(),
        min: None,
        max: None,
        mean: None,
        std: None,
    };

    match kind {
        ColumnKind::Categorical => {
            let mut counts: std::collections::HashMap<String, u64> =
                std::collections::HashMap::new();
            for value in column_to_string_values(col)?.into_iter().flatten() {
                *counts.entry(value).or_insert(0) += 1;
            }
            summary.unique_count = Some(counts.len());

            let mut sorted: Vec<(String, u64)> = counts.into_iter().collect();
            sorted.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
            sorted.truncate(TOP_CATEGORY_COUNT);
            summary.top_categories = sorted;
        }
        ColumnKind::Numeric => {
            let cast = col.cast(&DataType::Float64)?;
            let values: Vec<f64> = cast.f64()?.into_iter().flatten().collect();
            if !values.is_empty() {
                let count = values.len() as f64;
                let mean = values.iter().sum::<f64>() / count;
                summary.min = values.iter().copied().reduce(f64::min);
                summary.max = values.iter().copied().reduce(f64::max);
                summary.mean = Some(mean);
                // Sample std (ddof = 1); undefined for a single value.
                if values.len() > 1 {
                    let sum_sq: f64 = values.iter().map(|v| (v - mean) * (v - mean)).sum();
                    summary.std = Some((sum_sq / (count - 1.0)).sqrt());
                }
            }
        }
        ColumnKind::Other => {}
    }

    Ok(summary)
}
