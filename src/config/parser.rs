//! Config parser
//!
//! Parses and validates pager configuration files.

use crate::config::types::PagerConfig;
use crate::error::{Error, Result};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use url::Url;

/// Load a pager config from a file
///
/// `.json` files are read as JSON, anything else as YAML.
pub fn load_config(path: impl AsRef<Path>) -> Result<PagerConfig> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        load_config_from_json(&content)
    } else {
        load_config_from_str(&content)
    }
}

/// Load a pager config from a YAML string
pub fn load_config_from_str(yaml: &str) -> Result<PagerConfig> {
    let config: PagerConfig = serde_yaml::from_str(yaml)?;

    validate_config(&config)?;
    Ok(config)
}

/// Load a pager config from a JSON string
pub fn load_config_from_json(json: &str) -> Result<PagerConfig> {
    let config: PagerConfig = serde_json::from_str(json)?;

    validate_config(&config)?;
    Ok(config)
}

/// Validate a pager config
pub(crate) fn validate_config(config: &PagerConfig) -> Result<()> {
    validate_url("fetch_url", &config.fetch_url)?;
    validate_url("count_url", &config.count_url)?;

    if config.pagination.limit == 0 {
        return Err(Error::invalid_value(
            "pagination.limit",
            "must be greater than 0",
        ));
    }

    let params = &config.query_params;
    let names = [&params.limit, &params.offset, &params.page];
    if names.iter().any(|name| name.is_empty()) {
        return Err(Error::invalid_value(
            "query_params",
            "parameter names cannot be empty",
        ));
    }
    if names.iter().collect::<HashSet<_>>().len() != names.len() {
        return Err(Error::invalid_value(
            "query_params",
            "parameter names must be distinct",
        ));
    }

    if config.extract.count_path.is_empty() {
        return Err(Error::invalid_value("extract.count_path", "cannot be empty"));
    }

    if config.http.timeout_secs == 0 {
        return Err(Error::invalid_value(
            "http.timeout_secs",
            "must be greater than 0",
        ));
    }

    Ok(())
}

fn validate_url(field: &str, url: &str) -> Result<()> {
    if url.is_empty() {
        return Err(Error::invalid_value(field, "cannot be empty"));
    }
    Url::parse(url).map_err(|e| Error::invalid_value(field, e.to_string()))?;
    Ok(())
}
