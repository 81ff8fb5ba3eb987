//! Workbook Loader Module
//! Reads the sales worksheet into a Polars DataFrame via calamine.

use calamine::{open_workbook, Data, Reader, Xlsx};
use polars::prelude::*;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

use super::normalizer::normalize_labels;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("resource not found: {0}")]
    ResourceNotFound(String),
    #[error("malformed worksheet data: {0}")]
    MalformedData(String),
}

/// Loads a fixed-shape worksheet into a DataFrame.
///
/// The first row is the header; at most `max_rows` data rows are read after
/// it and anything beyond that bound is ignored. Column labels are
/// normalized before the frame is built, so every downstream lookup uses
/// canonical names.
pub struct WorkbookLoader;

impl WorkbookLoader {
    /// Load the named worksheet from an xlsx file.
    pub fn load(path: &Path, sheet: &str, max_rows: usize) -> Result<DataFrame, LoaderError> {
        let mut workbook: Xlsx<_> = open_workbook(path)
            .map_err(|e| LoaderError::ResourceNotFound(format!("{}: {e}", path.display())))?;

        let range = workbook
            .worksheet_range(sheet)
            .map_err(|e| LoaderError::ResourceNotFound(format!("worksheet '{sheet}': {e}")))?;

        let mut rows = range.rows();
        let header = rows
            .next()
            .ok_or_else(|| LoaderError::MalformedData("worksheet is empty".to_string()))?;

        let mut labels: Vec<String> = header.iter().map(|cell| cell.to_string()).collect();
        while labels.last().is_some_and(|label| label.trim().is_empty()) {
            labels.pop();
        }
        if labels.is_empty() {
            return Err(LoaderError::MalformedData("header row has no labels".to_string()));
        }
        let labels = normalize_labels(&labels);
        let width = labels.len();

        let data_rows: Vec<&[Data]> = rows.take(max_rows).collect();
        for (i, row) in data_rows.iter().enumerate() {
            if row.len() > width && row[width..].iter().any(|cell| !matches!(cell, Data::Empty)) {
                return Err(LoaderError::MalformedData(format!(
                    "row {} is wider than the {width}-column header",
                    i + 2
                )));
            }
        }

        // Two labels that collide after normalization: the later column wins.
        let mut columns: Vec<Column> = Vec::with_capacity(width);
        let mut slot_by_name: HashMap<&str, usize> = HashMap::new();
        for (ci, name) in labels.iter().enumerate() {
            let cells: Vec<&Data> = data_rows
                .iter()
                .map(|row| row.get(ci).unwrap_or(&Data::Empty))
                .collect();
            let column = Self::build_column(name, &cells);
            match slot_by_name.get(name.as_str()) {
                Some(&slot) => {
                    log::warn!("duplicate column label '{name}' after normalization, keeping the later column");
                    columns[slot] = column;
                }
                None => {
                    slot_by_name.insert(name.as_str(), columns.len());
                    columns.push(column);
                }
            }
        }

        let df = DataFrame::new(columns).map_err(|e| LoaderError::MalformedData(e.to_string()))?;
        log::info!(
            "loaded {} rows x {} columns from worksheet '{sheet}'",
            df.height(),
            df.width()
        );
        Ok(df)
    }

    /// Build one column, typed per the sheet's content: all-numeric cells
    /// become a float column, anything else becomes strings.
    fn build_column(name: &str, cells: &[&Data]) -> Column {
        let numeric = cells
            .iter()
            .all(|cell| matches!(cell, Data::Empty | Data::Float(_) | Data::Int(_)));
        let has_value = cells.iter().any(|cell| !matches!(cell, Data::Empty));

        if numeric && has_value {
            let values: Vec<Option<f64>> = cells
                .iter()
                .map(|cell| match cell {
                    Data::Float(v) => Some(*v),
                    Data::Int(v) => Some(*v as f64),
                    _ => None,
                })
                .collect();
            Column::new(name.into(), values)
        } else {
            let values: Vec<Option<String>> = cells
                .iter()
                .map(|cell| match cell {
                    Data::Empty => None,
                    Data::String(s) => Some(s.clone()),
                    other => Some(other.to_string()),
                })
                .collect();
            Column::new(name.into(), values)
        }
    }
}
