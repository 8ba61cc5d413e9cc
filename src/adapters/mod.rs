//! Infrastructure adapters. Implement outbound ports.
//!
//! Dashboard API, mock data, snapshot files, CSV export, terminal UI. Map errors to DomainError.

pub mod export;
pub mod http;
pub mod mock;
pub mod persistence;
pub mod ui;
