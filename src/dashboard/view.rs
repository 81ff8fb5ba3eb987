//! Dashboard View Module
//! Builds the presenter-facing view model: metric tiles and bar-chart series.

use polars::prelude::*;
use std::fmt;

use crate::config::CategorySpec;
use crate::data::{YearKey, YearSelection};
use crate::stats::SalesAggregator;

use super::session::DashboardSession;

/// One numeric metric display, value pre-formatted.
#[derive(Debug, Clone)]
pub struct MetricTile {
    pub label: String,
    pub value: String,
}

/// One bar chart: years on one axis, unit counts on the other.
#[derive(Debug, Clone)]
pub struct BarSeries {
    pub title: String,
    pub caption: String,
    pub year_labels: Vec<String>,
    pub values: Vec<f64>,
}

/// Everything the renderer needs for one pass: recomputed from the session
/// on every selection change, never cached beyond the returned value.
#[derive(Debug, Clone)]
pub struct Dashboard {
    pub title: String,
    pub selected_years: Vec<String>,
    pub totals: Vec<MetricTile>,
    pub averages: Vec<MetricTile>,
    pub charts: Vec<BarSeries>,
}

impl Dashboard {
    /// One synchronous pass: filter, aggregate, format. Per-category
    /// failures degrade to zero totals and empty series; a dashboard never
    /// crashes on a bad selection.
    pub fn build(session: &DashboardSession, selection: &YearSelection) -> PolarsResult<Dashboard> {
        let filtered = session.filter(selection)?;
        let config = session.config();

        let mut totals = Vec::new();
        let mut averages = Vec::new();
        let mut charts = Vec::new();

        for category in &config.categories {
            let column = SalesAggregator::resolve_role_column(&filtered, category);
            let total = match column.as_deref() {
                Some(column) => match SalesAggregator::total(&filtered, column) {
                    Ok(total) => total,
                    Err(e) => {
                        log::warn!("total for '{column}' failed: {e}");
                        0.0
                    }
                },
                None => 0.0,
            };

            totals.push(MetricTile {
                label: category.tile_label.clone(),
                value: format_count(total),
            });

            if let Some(average_label) = &category.average_label {
                let value = if selection.is_empty() || column.is_none() {
                    "N/A".to_string()
                } else {
                    match SalesAggregator::average_per_year(total, selection.len()) {
                        Ok(average) => format_average(average),
                        Err(_) => "N/A".to_string(),
                    }
                };
                averages.push(MetricTile {
                    label: average_label.clone(),
                    value,
                });
            }

            charts.push(build_series(
                &filtered,
                session.year_column(),
                column.as_deref(),
                category,
            )?);
        }

        Ok(Dashboard {
            title: config.title.clone(),
            selected_years: selection.iter().map(YearKey::label).collect(),
            totals,
            averages,
            charts,
        })
    }
}

/// Paired (year, value) points for one category; rows with a null year or
/// value are skipped. An unresolved role yields an empty series.
fn build_series(
    filtered: &DataFrame,
    year_column: &str,
    value_column: Option<&str>,
    category: &CategorySpec,
) -> PolarsResult<BarSeries> {
    let mut year_labels = Vec::new();
    let mut values = Vec::new();

    if let Some(value_column) = value_column {
        let years = filtered.column(year_column)?;
        let value_f64 = filtered.column(value_column)?.cast(&DataType::Float64)?;
        let value_ca = value_f64.f64()?;

        for i in 0..filtered.height() {
            if let (Ok(year), Some(value)) = (years.get(i), value_ca.get(i)) {
                if let Some(key) = YearKey::from_any(&year) {
                    if !value.is_nan() {
                        year_labels.push(key.label());
                        values.push(value);
                    }
                }
            }
        }
    }

    Ok(BarSeries {
        title: category.chart_title.clone(),
        caption: category.caption.clone(),
        year_labels,
        values,
    })
}

/// Unit counts render as whole numbers with thousands separators.
fn format_count(total: f64) -> String {
    group_thousands(&format!("{}", total.trunc() as i64))
}

/// Averages render with thousands separators and two decimals.
fn format_average(average: f64) -> String {
    let formatted = format!("{average:.2}");
    match formatted.split_once('.') {
        Some((whole, frac)) => format!("{}.{frac}", group_thousands(whole)),
        None => group_thousands(&formatted),
    }
}

fn group_thousands(digits: &str) -> String {
    let (sign, digits) = match digits.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", digits),
    };
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("{sign}{grouped}")
}

impl fmt::Display for Dashboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", "=".repeat(self.title.len()))?;

        if self.selected_years.is_empty() {
            writeln!(f, "Years: (none selected)")?;
        } else {
            writeln!(f, "Years: {}", self.selected_years.join(", "))?;
        }

        writeln!(f)?;
        for tile in &self.totals {
            writeln!(f, "  {}: {}", tile.label, tile.value)?;
        }
        for tile in &self.averages {
            writeln!(f, "  {}: {}", tile.label, tile.value)?;
        }

        for chart in &self.charts {
            writeln!(f)?;
            writeln!(f, "{}", chart.title)?;
            for (year, value) in chart.year_labels.iter().zip(&chart.values) {
                writeln!(f, "  {year}  {}", format_count(*value))?;
            }
            writeln!(f, "  {}", chart.caption)?;
        }

        Ok(())
    }
}
