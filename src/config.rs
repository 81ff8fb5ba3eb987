//! Dashboard Configuration Module
//! One parameterized pipeline instead of per-layout script copies.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One tracked vehicle category and how it maps onto the worksheet.
///
/// `canonical_label` is matched against normalized column names first;
/// `fallback_index` is the documented positional fallback for sources whose
/// labels drifted. A category shows a per-year average tile only when
/// `average_label` is set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategorySpec {
    pub canonical_label: String,
    pub fallback_index: usize,
    pub tile_label: String,
    #[serde(default)]
    pub average_label: Option<String>,
    pub chart_title: String,
    #[serde(default = "default_caption")]
    pub caption: String,
}

/// Everything that varied between the original dashboard layouts: source
/// workbook, tracked categories, titles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "default_workbook_path")]
    pub workbook_path: PathBuf,
    #[serde(default = "default_worksheet")]
    pub worksheet: String,
    #[serde(default = "default_max_rows")]
    pub max_rows: usize,
    pub title: String,
    pub categories: Vec<CategorySpec>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            workbook_path: default_workbook_path(),
            worksheet: default_worksheet(),
            max_rows: default_max_rows(),
            title: "Panama EV Sales Outlook 2015-2024".to_string(),
            categories: vec![
                CategorySpec {
                    canonical_label: "unit_evs_sold".to_string(),
                    fallback_index: 3,
                    tile_label: "Total Electric Vehicle (BEV) Sales".to_string(),
                    average_label: Some("Avg. EV Sales per Year".to_string()),
                    chart_title: "Electric Vehicle (BEV) Sales 2015-2024".to_string(),
                    caption: default_caption(),
                },
                CategorySpec {
                    canonical_label: "unit_hybrid_vehicles_sold".to_string(),
                    fallback_index: 2,
                    tile_label: "Total Hybrid Vehicle Sales".to_string(),
                    average_label: Some("Avg. Hybrid Sales per Year".to_string()),
                    chart_title: "Hybrid Vehicle Sales 2015-2024".to_string(),
                    caption: default_caption(),
                },
                CategorySpec {
                    canonical_label: "unit_vehicles_sold".to_string(),
                    fallback_index: 1,
                    tile_label: "Total Vehicle Sales".to_string(),
                    average_label: None,
                    chart_title: "Vehicle Sales 2015-2024".to_string(),
                    caption: default_caption(),
                },
            ],
        }
    }
}

impl DashboardConfig {
    /// Load an alternate layout from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}

fn default_workbook_path() -> PathBuf {
    PathBuf::from("EV Growth Panama.xlsx")
}

fn default_worksheet() -> String {
    "EVPanama".to_string()
}

fn default_max_rows() -> usize {
    11
}

fn default_caption() -> String {
    "This chart represents the total vehicle sales from 2015 to 2024.".to_string()
}
