//! Command runners for the vendalytics CLI.
pub mod report;
