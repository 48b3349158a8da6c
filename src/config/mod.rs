//! Configuration module
//!
//! Pager configuration loaded from YAML or JSON.
//!
//! # Overview
//!
//! The config module provides:
//! - `PagerConfig` - Endpoints, pagination, options, parameter names,
//!   extraction paths and HTTP settings in one document
//! - `load_config` / `load_config_from_str` - parsing with validation

mod parser;
mod types;

pub use parser::{load_config, load_config_from_str, load_config_from_json};
pub use types::{ExtractSettings, HttpSettings, PagerConfig, PaginationSettings};

#[cfg(test)]
mod tests;
