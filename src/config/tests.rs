//! Tests for the config module

use super::*;
use crate::error::Error;
use crate::extract::CountExtractor;
use crate::pager::PagerOptions;
use crate::query::QueryParams;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::io::Write;
use std::time::Duration;

// ============================================================================
// Loading Tests
// ============================================================================

#[test]
fn test_load_minimal_config() {
    let yaml = r#"
fetch_url: https://api.example.com/items
count_url: https://api.example.com/items/count
"#;

    let config = load_config_from_str(yaml).unwrap();
    assert_eq!(
        config,
        PagerConfig::new(
            "https://api.example.com/items",
            "https://api.example.com/items/count",
        )
    );
    assert_eq!(config.pagination.limit, 20);
    assert_eq!(config.options, PagerOptions::default());
    assert_eq!(config.query_params, QueryParams::default());
    assert_eq!(config.extract.count_path, "count");
    assert!(config.extract.results().is_none());
}

#[test]
fn test_load_full_config() {
    let yaml = r#"
fetch_url: https://api.example.com/items?status=open
count_url: https://api.example.com/items/count
pagination:
  limit: 50
  first_page: 1
  page: 3
options:
  prefetch: false
  prefer_offset: true
  infinite: true
query_params:
  limit: per_page
  offset: skip
  page: p
extract:
  results_path: data.items
  count_path: meta.total
http:
  timeout_secs: 5
  user_agent: pageflow-test
  headers:
    X-Tenant: acme
  requests_per_second: 4
"#;

    let config = load_config_from_str(yaml).unwrap();
    assert_eq!(config.pagination.limit, 50);
    assert_eq!(config.pagination.first_page, 1);
    assert_eq!(config.pagination.page, Some(3));
    assert!(!config.options.prefetch);
    assert!(config.options.prefer_offset);
    assert!(config.options.cache_pages);
    assert!(config.options.infinite);
    assert_eq!(config.query_params, QueryParams::new("per_page", "skip", "p"));
    assert_eq!(config.extract.results().unwrap().path(), "data.items");
    assert_eq!(
        config
            .extract
            .count()
            .extract_count(&json!({"meta": {"total": 9}}))
            .unwrap(),
        9
    );

    let fetcher = config.http.fetcher_config();
    assert_eq!(fetcher.timeout, Duration::from_secs(5));
    assert_eq!(fetcher.user_agent, "pageflow-test");
    assert_eq!(fetcher.default_headers.get("X-Tenant"), Some(&"acme".to_string()));
    assert_eq!(fetcher.rate_limit.unwrap().burst_size, 4);

    let pagination = config.pagination.build().unwrap();
    assert_eq!(pagination.page(), 3);
    assert_eq!(pagination.offset(), 100);
}

#[test]
fn test_load_config_from_yaml_file() {
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    writeln!(
        file,
        "fetch_url: http://localhost/items\ncount_url: http://localhost/count\npagination:\n  limit: 5"
    )
    .unwrap();

    let config = load_config(file.path()).unwrap();
    assert_eq!(config.pagination.limit, 5);
}

#[test]
fn test_load_config_from_json_file() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    let body = json!({
        "fetch_url": "http://localhost/items",
        "count_url": "http://localhost/count",
        "options": {"cache_pages": false}
    });
    write!(file, "{body}").unwrap();

    let config = load_config(file.path()).unwrap();
    assert!(!config.options.cache_pages);
    assert!(config.options.prefetch);
}

#[test]
fn test_load_config_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.yaml");
    let err = load_config(&missing).unwrap_err();
    assert!(matches!(err, Error::Io { ref path, .. } if *path == missing));
    assert!(err.to_string().contains("absent.yaml"));
}

// ============================================================================
// Validation Tests
// ============================================================================

#[test]
fn test_malformed_json_config() {
    let err = load_config_from_json(r#"{"fetch_url": "#).unwrap_err();
    assert!(matches!(err, Error::JsonParse(_)));
}

#[test]
fn test_missing_url_is_rejected() {
    let err = load_config_from_str("fetch_url: https://api.example.com/items\n").unwrap_err();
    assert!(matches!(err, Error::YamlParse(_)));
    assert!(err.to_string().contains("count_url"));
}

#[test]
fn test_relative_url_is_rejected() {
    let yaml = "fetch_url: /items\ncount_url: https://api.example.com/count\n";
    let err = load_config_from_str(yaml).unwrap_err();
    assert!(matches!(err, Error::InvalidConfigValue { ref field, .. } if field == "fetch_url"));
}

#[test]
fn test_zero_limit_is_rejected() {
    let yaml = r#"
fetch_url: https://api.example.com/items
count_url: https://api.example.com/count
pagination:
  limit: 0
"#;
    let err = load_config_from_str(yaml).unwrap_err();
    assert!(matches!(err, Error::InvalidConfigValue { ref field, .. } if field == "pagination.limit"));

    let settings = PaginationSettings {
        limit: 0,
        ..PaginationSettings::default()
    };
    assert!(settings.build().is_err());
}

#[test]
fn test_duplicate_query_params_are_rejected() {
    let yaml = r#"
fetch_url: https://api.example.com/items
count_url: https://api.example.com/count
query_params:
  offset: page
"#;
    let err = load_config_from_str(yaml).unwrap_err();
    assert!(err.to_string().contains("parameter names must be distinct"));
}

#[test]
fn test_zero_timeout_is_rejected() {
    let mut config = PagerConfig::new("http://localhost/items", "http://localhost/count");
    config.http.timeout_secs = 0;
    assert!(config.validate().is_err());

    config.http.timeout_secs = 1;
    assert!(config.validate().is_ok());
}
