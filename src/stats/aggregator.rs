//! Sales Aggregator Module
//! Per-category totals and per-year averages over the filtered rows.

use polars::prelude::*;
use thiserror::Error;

use crate::config::CategorySpec;
use crate::data::normalize_label;

#[derive(Error, Debug)]
pub enum AggregateError {
    #[error("aggregation failed: {0}")]
    Frame(#[from] PolarsError),
    #[error("average is undefined over an empty year selection")]
    DivisionUndefined,
}

/// Pure aggregation over a filtered frame.
pub struct SalesAggregator;

impl SalesAggregator {
    /// Two-tier column resolution: exact canonical-name match first, fixed
    /// positional fallback second. `None` when neither yields a column.
    pub fn resolve_role_column(df: &DataFrame, category: &CategorySpec) -> Option<String> {
        let canonical = normalize_label(&category.canonical_label);
        let names = df.get_column_names();
        if names.iter().any(|name| name.as_str() == canonical) {
            return Some(canonical);
        }

        let fallback = names.get(category.fallback_index).map(|name| name.to_string());
        match &fallback {
            Some(name) => log::warn!(
                "column '{canonical}' not found, falling back to position {} ('{name}')",
                category.fallback_index
            ),
            None => log::warn!(
                "column '{canonical}' not found and position {} is out of range",
                category.fallback_index
            ),
        }
        fallback
    }

    /// Sum of the column's numeric cells over the filtered rows. Zero for an
    /// empty frame; non-numeric and null cells contribute nothing.
    pub fn total(df: &DataFrame, column: &str) -> Result<f64, AggregateError> {
        let values = df.column(column)?.cast(&DataType::Float64)?;
        Ok(values.f64()?.sum().unwrap_or(0.0))
    }

    /// Total divided by the number of *selected* years, not the number of
    /// matched rows.
    pub fn average_per_year(total: f64, selected_years: usize) -> Result<f64, AggregateError> {
        if selected_years == 0 {
            return Err(AggregateError::DivisionUndefined);
        }
        Ok(total / selected_years as f64)
    }
}
