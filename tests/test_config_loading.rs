//! Tests for config/loading.rs
//!
//! Loading router configs from JSON and TOML files and resolving budgets.

use anyhow::Result;
use router_summary::config::{ConfigFormat, load_router_config};
use router_summary::types::RouterName;
use std::io::Write;
use tempfile::{Builder, NamedTempFile};

fn write_temp(suffix: &str, content: &str) -> Result<NamedTempFile> {
    let mut file = Builder::new().suffix(suffix).tempfile()?;
    file.write_all(content.as_bytes())?;
    file.flush()?;
    Ok(file)
}

fn router(name: &str) -> RouterName {
    RouterName::new(name.to_string()).unwrap()
}

#[test]
fn test_load_json_config() -> Result<()> {
    let file = write_temp(
        ".json",
        r#"{
            "routers": [
                {"label": "incoming", "client": {"retries": {"budget": {"percentCanRetry": 0.35}}}},
                {"label": "outgoing"}
            ]
        }"#,
    )?;

    let config = load_router_config(file.path())?;

    assert_eq!(config.routers.len(), 2);
    assert_eq!(config.retry_budget(&router("incoming")).get(), 0.35);
    assert_eq!(config.retry_budget(&router("outgoing")).get(), 0.2);
    assert_eq!(config.retry_budget(&router("missing")).get(), 0.2);
    Ok(())
}

#[test]
fn test_load_toml_config() -> Result<()> {
    let file = write_temp(
        ".toml",
        r#"
[[routers]]
label = "incoming"

[routers.client.retries.budget]
percentCanRetry = 0.1
"#,
    )?;

    let config = load_router_config(file.path())?;
    assert_eq!(config.retry_budget(&router("incoming")).get(), 0.1);
    Ok(())
}

#[test]
fn test_unknown_extension_is_toml() -> Result<()> {
    let file = write_temp(".conf", "[[routers]]\nlabel = \"incoming\"\n")?;
    assert_eq!(ConfigFormat::from_path(file.path()), ConfigFormat::Toml);

    let config = load_router_config(file.path())?;
    assert_eq!(config.routers[0].label.as_deref(), Some("incoming"));
    Ok(())
}

#[test]
fn test_out_of_range_budget_loads_with_default() -> Result<()> {
    let file = write_temp(
        ".json",
        r#"{"routers": [{"label": "incoming", "client": {"retries": {"budget": {"percentCanRetry": 7}}}}]}"#,
    )?;

    let config = load_router_config(file.path())?;
    assert_eq!(config.validate().len(), 1);
    assert_eq!(config.retry_budget(&router("incoming")).get(), 0.2);
    Ok(())
}

#[test]
fn test_invalid_json_returns_error() -> Result<()> {
    let file = write_temp(".json", "{\"routers\": [")?;

    let err = load_router_config(file.path()).unwrap_err();
    assert!(err.to_string().contains("Failed to parse"));
    Ok(())
}

#[test]
fn test_invalid_toml_returns_error() -> Result<()> {
    let file = write_temp(".toml", "this is not valid TOML [[[")?;

    let err = load_router_config(file.path()).unwrap_err();
    assert!(err.to_string().contains("Failed to parse"));
    Ok(())
}

#[test]
fn test_missing_file_returns_error() {
    let err = load_router_config("/nonexistent/linkerd.json").unwrap_err();
    assert!(err.to_string().contains("Failed to read"));
}
