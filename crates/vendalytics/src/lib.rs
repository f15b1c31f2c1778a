//! vendalytics: descriptive statistics over a retail sales dataset.
//!
//! This crate loads one delimited sales dataset into a column-oriented
//! in-memory table and answers a fixed battery of ten analytical questions
//! (top product by revenue, average ticket per seller, year-over-year
//! growth, revenue share, a price-increase simulation, cumulative revenue,
//! IQR anomaly detection, a correlation matrix, and seller consistency).
//!
//! The design favors small, testable modules: `stats` holds the numeric
//! kernel, `analysis` the question-level rollups, and `report` the text and
//! HTML renderers used by the CLI.
pub mod analysis;
pub mod config;
pub mod data_handling;
pub mod error;
pub mod io;
pub mod report;
pub mod stats;
pub mod synthetic;
