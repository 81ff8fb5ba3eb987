//! Year Selector Module
//! Resolves the year column and filters rows by a user-chosen set of years.

use polars::prelude::*;
use std::fmt;

/// Canonical name of the year column.
pub const YEAR_COLUMN: &str = "years";

/// A year value in the column's native type. Numeric years compare
/// numerically, text years compare as strings.
#[derive(Debug, Clone, PartialEq)]
pub enum YearKey {
    Number(f64),
    Text(String),
}

impl YearKey {
    /// Extract a key from a cell value; nulls carry no year.
    pub fn from_any(value: &AnyValue) -> Option<Self> {
        match value {
            AnyValue::Null => None,
            AnyValue::Float64(v) => Some(YearKey::Number(*v)),
            AnyValue::String(s) => Some(YearKey::Text(s.to_string())),
            AnyValue::StringOwned(s) => Some(YearKey::Text(s.to_string())),
            other => Some(YearKey::Text(other.to_string().trim_matches('"').to_string())),
        }
    }

    /// Display form; whole numeric years render without a fraction.
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for YearKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YearKey::Number(v) if v.fract() == 0.0 && v.is_finite() => {
                write!(f, "{}", *v as i64)
            }
            YearKey::Number(v) => write!(f, "{v}"),
            YearKey::Text(s) => write!(f, "{s}"),
        }
    }
}

/// The set of years the user has selected. Always a subset of the year
/// column's domain in practice; values outside it simply match nothing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct YearSelection {
    years: Vec<YearKey>,
}

impl YearSelection {
    pub fn new(years: impl IntoIterator<Item = YearKey>) -> Self {
        let mut deduped: Vec<YearKey> = Vec::new();
        for year in years {
            if !deduped.contains(&year) {
                deduped.push(year);
            }
        }
        Self { years: deduped }
    }

    /// The "show everything" default: every year in the domain.
    pub fn all_of(domain: &[YearKey]) -> Self {
        Self::new(domain.iter().cloned())
    }

    pub fn contains(&self, year: &YearKey) -> bool {
        self.years.contains(year)
    }

    /// Cardinality of the selection; the divisor for per-year averages.
    pub fn len(&self) -> usize {
        self.years.len()
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &YearKey> {
        self.years.iter()
    }
}

/// Pick the year column: a column named `years` if one exists, otherwise
/// the first column by position. Resolved once per loaded frame.
pub fn resolve_year_column(df: &DataFrame) -> Option<String> {
    let names = df.get_column_names();
    names
        .iter()
        .find(|name| name.as_str() == YEAR_COLUMN)
        .or_else(|| names.first())
        .map(|name| name.to_string())
}

/// Distinct year values in first-appearance order; the selection domain.
pub fn distinct_years(df: &DataFrame, year_column: &str) -> PolarsResult<Vec<YearKey>> {
    let column = df.column(year_column)?;
    let mut seen: Vec<YearKey> = Vec::new();
    for i in 0..column.len() {
        if let Some(year) = YearKey::from_any(&column.get(i)?) {
            if !seen.contains(&year) {
                seen.push(year);
            }
        }
    }
    Ok(seen)
}

/// Keep the rows whose year cell is a member of the selection, preserving
/// row order. An empty selection yields an empty frame.
pub fn filter_by_years(
    df: &DataFrame,
    year_column: &str,
    selection: &YearSelection,
) -> PolarsResult<DataFrame> {
    let column = df.column(year_column)?;
    let mut mask: Vec<bool> = Vec::with_capacity(df.height());
    for i in 0..df.height() {
        let keep = YearKey::from_any(&column.get(i)?)
            .map(|year| selection.contains(&year))
            .unwrap_or(false);
        mask.push(keep);
    }
    df.filter(&BooleanChunked::new("selection_mask".into(), mask))
}
