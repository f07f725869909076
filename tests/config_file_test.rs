use anyhow::Result;
use pattern_catalog::utils::validation::Validate;
use pattern_catalog::{ConfigProvider, DemoSettings, TomlConfig};
use std::io::Write;
use tempfile::NamedTempFile;

const FULL_CONFIG: &str = r#"
[catalog]
name = "pattern-catalog"
description = "Scripted run"
version = "1.0.0"

[runtime]
seed = 42
simulate_latency = false
latency_scale = 0.1
scratch_dir = "${PATTERN_CATALOG_TEST_SCRATCH}"

[demos]
forest_size = 4

[inputs]
strategy-payment = ["1", "2", "N", "2", "4111", "12/29", "123", "P"]

[monitoring]
enabled = true
"#;

#[test]
fn test_load_full_config_from_file() -> Result<()> {
    std::env::set_var("PATTERN_CATALOG_TEST_SCRATCH", "/tmp/catalog-scratch");

    let mut file = NamedTempFile::new()?;
    file.write_all(FULL_CONFIG.as_bytes())?;

    let config = TomlConfig::from_file(file.path())?;
    config.validate()?;

    assert_eq!(config.seed(), Some(42));
    assert!(!config.simulate_latency());
    assert_eq!(config.latency_scale(), 0.1);
    assert_eq!(config.scratch_dir(), "/tmp/catalog-scratch");
    assert_eq!(config.forest_size(), 4);
    assert!(config.monitoring_enabled());
    assert_eq!(config.scripted_input("strategy-payment").len(), 8);
    assert!(config.scripted_input("chain-middleware").is_empty());

    let settings = DemoSettings::from_provider(&config, ["strategy-payment", "chain-middleware"]);
    assert_eq!(settings.seed, Some(42));
    assert_eq!(settings.inputs.len(), 1);
    Ok(())
}

#[test]
fn test_minimal_config_uses_defaults() -> Result<()> {
    let config = TomlConfig::from_toml_str(
        r#"
[catalog]
name = "minimal"
"#,
    )?;
    config.validate()?;

    assert_eq!(config.seed(), None);
    assert!(config.simulate_latency());
    assert_eq!(config.latency_scale(), 1.0);
    assert_eq!(config.scratch_dir(), ".");
    assert_eq!(config.forest_size(), 10);
    assert!(!config.monitoring_enabled());
    Ok(())
}

#[test]
fn test_rejects_out_of_range_and_unknown_inputs() -> Result<()> {
    let too_fast = TomlConfig::from_toml_str(
        r#"
[catalog]
name = "bad"

[runtime]
latency_scale = 50.0
"#,
    )?;
    assert!(too_fast.validate().is_err());

    let unknown_demo = TomlConfig::from_toml_str(
        r#"
[catalog]
name = "bad"

[inputs]
not-a-demo = ["1"]
"#,
    )?;
    assert!(unknown_demo.validate().is_err());

    assert!(TomlConfig::from_toml_str("this is not toml").is_err());
    Ok(())
}
