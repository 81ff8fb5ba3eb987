//! Data module - workbook loading, label normalization and year filtering

mod loader;
mod normalizer;
mod selector;

pub use loader::{LoaderError, WorkbookLoader};
pub use normalizer::normalize_label;
pub use selector::{
    distinct_years, filter_by_years, resolve_year_column, YearKey, YearSelection,
};
