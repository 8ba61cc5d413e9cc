//! Cross-cutting pieces shared by adapters and the binary.

pub mod config;
