//! Categorical column analysis.
//!
//! The bridge from raw tabular input to distribution parameters: given one
//! labeled column and a chosen "success" category, derive the population
//! size N (non-null rows), the population successes K (rows matching the
//! category), and p = K/N.
//!
//! `analyze_values` is the pure core working on plain optional strings;
//! `analyze_categorical_column` adapts a polars column onto it.

use std::collections::BTreeMap;

use polars::prelude::*;
use serde::Serialize;
use thiserror::Error;

use crate::dist::result::round6;

/// Failures while deriving distribution parameters from a data column.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The named column is not present in the dataset.
    #[error("column '{column}' does not exist in the dataset")]
    ColumnNotFound { column: String },

    /// The column exists but holds no non-null values.
    #[error("column '{column}' contains no valid (non-null) values")]
    EmptyColumn { column: String },

    /// The chosen success category never occurs in the column.
    #[error("category '{category}' does not occur in column '{column}'")]
    CategoryNotFound { category: String, column: String },

    /// An underlying polars operation failed (cast, dtype access).
    #[error(transparent)]
    Polars(#[from] PolarsError),
}

/// Parameters derived from one (column, success category) selection.
///
/// Computed once per selection; callers may cache it across calculation
/// requests and drop it when they clear their own state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoricalAnalysis {
    /// Source column name
    pub column: String,
    /// The category counted as a success
    pub success_category: String,
    /// Population size N: count of non-null entries
    pub population: u64,
    /// Population successes K: count of entries equal to the category
    pub successes: u64,
    /// K/N, rounded to 6 decimals
    pub p: f64,
    /// Full category → count mapping over the non-null entries
    pub categories: BTreeMap<String, u64>,
}

/// Analyze a sequence of optional category labels.
///
/// # Arguments
/// * `values` - One entry per row; `None` marks a missing value
/// * `column` - Column name, used only for error messages and the record
/// * `success_category` - The label counted as a success
pub fn analyze_values(
    values: &[Option<String>],
    column: &str,
    success_category: &str,
) -> Result<CategoricalAnalysis, AnalysisError> {
    let mut categories: BTreeMap<String, u64> = BTreeMap::new();
    let mut population: u64 = 0;

    for value in values.iter().flatten() {
        population += 1;
        *categories.entry(value.clone()).or_insert(0) += 1;
    }

    if population == 0 {
        return Err(AnalysisError::EmptyColumn {
            column: column.to_string(),
        });
    }

    let successes = categories.get(success_category).copied().unwrap_or(0);
    if successes == 0 {
        return Err(AnalysisError::CategoryNotFound {
            category: success_category.to_string(),
            column: column.to_string(),
        });
    }

    Ok(CategoricalAnalysis {
        column: column.to_string(),
        success_category: success_category.to_string(),
        population,
        successes,
        p: round6(successes as f64 / population as f64),
        categories,
    })
}

/// Analyze one column of a DataFrame against a success category.
pub fn analyze_categorical_column(
    df: &DataFrame,
    column: &str,
    success_category: &str,
) -> Result<CategoricalAnalysis, AnalysisError> {
    let col = df
        .column(column)
        .map_err(|_| AnalysisError::ColumnNotFound {
            column: column.to_string(),
        })?;

    let values = column_to_string_values(col)?;
    analyze_values(&values, column, success_category)
}

/// Category occurrence counts for one column, sorted by count descending
/// (ties broken by name). Drives the interactive category selection.
pub fn category_counts(
    df: &DataFrame,
    column: &str,
) -> Result<Vec<(String, u64)>, AnalysisError> {
    let col = df
        .column(column)
        .map_err(|_| AnalysisError::ColumnNotFound {
            column: column.to_string(),
        })?;

    let mut counts: BTreeMap<String, u64> = BTreeMap::new();
    for value in column_to_string_values(col)?.into_iter().flatten() {
        *counts.entry(value).or_insert(0) += 1;
    }

    let mut sorted: Vec<(String, u64)> = counts.into_iter().collect();
    sorted.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    Ok(sorted)
}

/// Stringify a column for label comparison, keeping nulls as `None`.
pub(crate) fn column_to_string_values(col: &Column) -> Result<Vec<Option<String>>, AnalysisError> {
    let dtype = col.dtype().clone();
    let values: Vec<Option<String>> = if dtype == DataType::String {
        col.str()?
            .into_iter()
            .map(|v| v.map(str::to_string))
            .collect()
    } else if dtype == DataType::Boolean {
        col.bool()?
            .into_iter()
            .map(|v| v.map(|b| b.to_string()))
            .collect()
    } else if dtype.is_signed_integer() {
        let cast = col.cast(&DataType::Int64)?;
        cast.i64()?
            .into_iter()
            .map(|v| v.map(|n| n.to_string()))
            .collect()
    } else if dtype.is_unsigned_integer() {
        let cast = col.cast(&DataType::UInt64)?;
        cast.u64()?
            .into_iter()
            .map(|v| v.map(|n| n.to_string()))
            .collect()
    } else if dtype.is_float() {
        let cast = col.cast(&DataType::Float64)?;
        cast.f64()?
            .into_iter()
            .map(|v| v.map(|n| format!("{}", n)))
            .collect()
    } else {
        let cast = col.cast(&DataType::String)?;
        cast.str()?
            .into_iter()
            .map(|v| v.map(str::to_string))
            .collect()
    };

    Ok(values)
}
