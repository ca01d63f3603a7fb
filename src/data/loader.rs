//! Dataset loader for CSV and Parquet files

use anyhow::{Context, Result};
use polars::prelude::*;
use std::path::Path;

/// Load a dataset from a file (CSV or Parquet based on extension).
///
/// The core never reads files itself; this is presentation-layer glue that
/// hands a collected DataFrame to the column analyzer.
pub fn load_dataset(path: &Path) -> Result<DataFrame> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    let lf = match extension.as_str() {
        "csv" => LazyCsvReader::new(path)
            .finish()
            .with_context(|| format!("Failed to load CSV file: {}", path.display()))?,
        "parquet" => LazyFrame::scan_parquet(path, Default::default())
            .with_context(|| format!("Failed to load Parquet file: {}", path.display()))?,
        _ => anyhow::bail!(
            "Unsupported file format: {}. Supported formats: csv, parquet",
            extension
        ),
    };

    let df = lf
        .collect()
        .with_context(|| format!("Failed to read dataset: {}", path.display()))?;

    if df.height() == 0 {
        anyhow::bail!("The dataset contains no rows");
    }

    Ok(df)
}
