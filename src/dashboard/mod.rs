//! Dashboard module - session state and the presenter-facing view model

mod session;
mod view;

pub use session::{DashboardSession, SessionError};
pub use view::{BarSeries, Dashboard, MetricTile};
