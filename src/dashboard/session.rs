//! Dashboard Session Module
//! Loads the workbook once and holds it read-only for every render pass.

use polars::prelude::*;
use thiserror::Error;

use crate::config::DashboardConfig;
use crate::data::{
    distinct_years, filter_by_years, resolve_year_column, LoaderError, WorkbookLoader, YearKey,
    YearSelection,
};

#[derive(Error, Debug)]
pub enum SessionError {
    #[error(transparent)]
    Load(#[from] LoaderError),
    #[error("dashboard data error: {0}")]
    Frame(#[from] PolarsError),
    #[error("worksheet has no usable year column")]
    MissingYearColumn,
}

/// Session-scoped state: the loaded frame plus the year-column identity and
/// domain, all resolved once at startup. Render passes borrow from here and
/// never mutate it.
pub struct DashboardSession {
    config: DashboardConfig,
    frame: DataFrame,
    year_column: String,
    year_domain: Vec<YearKey>,
}

impl DashboardSession {
    /// Load the configured workbook and resolve the year column. Failures
    /// here are fatal to startup; nothing can render without the dataset.
    pub fn open(config: DashboardConfig) -> Result<Self, SessionError> {
        let frame =
            WorkbookLoader::load(&config.workbook_path, &config.worksheet, config.max_rows)?;
        let year_column = resolve_year_column(&frame).ok_or(SessionError::MissingYearColumn)?;
        let year_domain = distinct_years(&frame, &year_column)?;
        Ok(Self {
            config,
            frame,
            year_column,
            year_domain,
        })
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn year_column(&self) -> &str {
        &self.year_column
    }

    /// Distinct years available for selection, in worksheet order.
    pub fn year_domain(&self) -> &[YearKey] {
        &self.year_domain
    }

    /// The initial "show everything" selection.
    pub fn default_selection(&self) -> YearSelection {
        YearSelection::all_of(&self.year_domain)
    }

    /// Derive the filtered view for one render pass.
    pub fn filter(&self, selection: &YearSelection) -> PolarsResult<DataFrame> {
        filter_by_years(&self.frame, &self.year_column, selection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_xlsxwriter::Workbook;

    fn panama_fixture(dir: &tempfile::TempDir) -> std::path::PathBuf {
        let path = dir.path().join("EV Growth Panama.xlsx");
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.set_name("EVPanama").unwrap();
        for (col, label) in [
            "Years",
            "Unit Vehicles Sold",
            "Unit Hybrid Vehicles Sold",
            "Unit EVs Sold",
        ]
        .iter()
        .enumerate()
        {
            sheet.write_string(0, col as u16, *label).unwrap();
        }
        for i in 0..10u32 {
            sheet.write_number(i + 1, 0, 2015.0 + i as f64).unwrap();
            sheet.write_number(i + 1, 1, 1000.0 + i as f64 * 100.0).unwrap();
            sheet.write_number(i + 1, 2, 100.0 + i as f64 * 10.0).unwrap();
            sheet.write_number(i + 1, 3, (i as f64 + 1.0) * 10.0).unwrap();
        }
        workbook.save(&path).unwrap();
        path
    }

    fn open_fixture(dir: &tempfile::TempDir) -> DashboardSession {
        let config = DashboardConfig {
            workbook_path: panama_fixture(dir),
            ..DashboardConfig::default()
        };
        DashboardSession::open(config).unwrap()
    }

    #[test]
    fn test_open_resolves_year_column_and_domain() {
        let dir = tempfile::tempdir().unwrap();
        let session = open_fixture(&dir);
        assert_eq!(session.year_column(), "years");
        assert_eq!(session.year_domain().len(), 10);
        assert_eq!(session.year_domain()[0], YearKey::Number(2015.0));
    }

    #[test]
    fn test_default_selection_covers_domain() {
        let dir = tempfile::tempdir().unwrap();
        let session = open_fixture(&dir);
        let selection = session.default_selection();
        assert_eq!(selection.len(), 10);
        let filtered = session.filter(&selection).unwrap();
        assert_eq!(filtered.height(), 10);
    }

    #[test]
    fn test_open_fails_before_any_render_when_sheet_missing() {
        let dir = tempfile::tempdir().unwrap();
        let config = DashboardConfig {
            workbook_path: panama_fixture(&dir),
            worksheet: "NoSuchSheet".to_string(),
            ..DashboardConfig::default()
        };
        let err = DashboardSession::open(config).unwrap_err();
        assert!(matches!(
            err,
            SessionError::Load(LoaderError::ResourceNotFound(_))
        ));
    }
}
