//! Stats module - sales totals and per-year averages

mod aggregator;

pub use aggregator::{AggregateError, SalesAggregator};
