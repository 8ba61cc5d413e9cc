//! Export formats for the audit download.

pub mod csv_utils;

pub use csv_utils::expenses_to_csv;
