//! Tabular data bridge - loading, column summaries, categorical analysis

pub mod categorical;
pub mod columns;
pub mod loader;

pub use categorical::{
    analyze_categorical_column, analyze_values, category_counts, AnalysisError,
    CategoricalAnalysis,
};
pub use columns::{summarize_columns, ColumnKind, ColumnSummary};
pub use loader::load_dataset;
