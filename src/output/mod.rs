//! Output formatting for CLI results

pub mod formatters;
pub mod json;
pub mod report;
pub mod table;
