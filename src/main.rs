//! Panama EV Sales Dashboard
//!
//! Loads the sales workbook, filters by the selected years and prints the
//! dashboard view: metric tiles plus per-category bar-chart series.

mod config;
mod dashboard;
mod data;
mod stats;

use anyhow::Context;
use std::path::Path;

use config::DashboardConfig;
use dashboard::{Dashboard, DashboardSession};
use data::YearKey;

fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    // A single optional argument: a JSON layout overriding the built-in one.
    let config = match std::env::args().nth(1) {
        Some(path) => DashboardConfig::from_json_file(Path::new(&path))
            .with_context(|| format!("failed to load dashboard layout '{path}'"))?,
        None => DashboardConfig::default(),
    };

    let session = DashboardSession::open(config).context("failed to load the sales workbook")?;
    log::info!(
        "years available: {}",
        session
            .year_domain()
            .iter()
            .map(YearKey::label)
            .collect::<Vec<_>>()
            .join(", ")
    );

    let selection = session.default_selection();
    let dashboard =
        Dashboard::build(&session, &selection).context("failed to build the dashboard view")?;
    println!("{dashboard}");

    Ok(())
}
