// Config loading and validation tests

use perf_stats_emitter::config::{CONFIG_ENV, EmitterConfig};
use perf_stats_emitter::{RAW_STATS_CHANNEL, STATS_CHANNEL};

const VALID_CONFIG: &str = r#"
[channels]
inbound = "perf:raw"
outbound = "perf:stats"

[validation]
require_bus = false
"#;

#[test]
fn test_config_loads_from_str() {
    let config = EmitterConfig::load_from_str(VALID_CONFIG).expect("load_from_str");
    assert_eq!(config.channels.inbound, "perf:raw");
    assert_eq!(config.channels.outbound, "perf:stats");
    assert!(!config.validation.require_bus);
}

#[test]
fn test_config_defaults_when_empty() {
    let config = EmitterConfig::load_from_str("").expect("empty config is valid");
    assert_eq!(config.channels.inbound, RAW_STATS_CHANNEL);
    assert_eq!(config.channels.outbound, STATS_CHANNEL);
    assert_eq!(config.validation.require_bus, cfg!(debug_assertions));
}

#[test]
fn test_config_partial_section_keeps_other_defaults() {
    let config = EmitterConfig::load_from_str("[channels]\noutbound = \"perf:out\"\n").unwrap();
    assert_eq!(config.channels.inbound, RAW_STATS_CHANNEL);
    assert_eq!(config.channels.outbound, "perf:out");
}

#[test]
fn test_config_validation_rejects_empty_inbound() {
    let bad = VALID_CONFIG.replace("inbound = \"perf:raw\"", "inbound = \"\"");
    let err = EmitterConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("channels.inbound"));
}

#[test]
fn test_config_validation_rejects_empty_outbound() {
    let bad = VALID_CONFIG.replace("outbound = \"perf:stats\"", "outbound = \"\"");
    let err = EmitterConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("channels.outbound"));
}

#[test]
fn test_config_validation_rejects_same_channels() {
    let bad = VALID_CONFIG.replace("outbound = \"perf:stats\"", "outbound = \"perf:raw\"");
    let err = EmitterConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("must differ"));
}

#[test]
fn test_config_validation_rejects_invalid_toml() {
    let err = EmitterConfig::load_from_str("not valid toml [[[").unwrap_err();
    assert!(err.to_string().contains("parsing emitter config"));
}

#[test]
fn test_config_load_from_file_via_env() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("perf-emitter.toml");

    unsafe { std::env::set_var(CONFIG_ENV, path.to_str().unwrap()) };
    let missing = EmitterConfig::load();
    std::fs::write(&path, VALID_CONFIG).unwrap();
    let result = EmitterConfig::load();
    unsafe { std::env::remove_var(CONFIG_ENV) };

    let err = missing.unwrap_err();
    assert!(err.to_string().contains("perf-emitter.toml"));
    let config = result.expect("load from PERF_EMITTER_CONFIG");
    assert_eq!(config.channels.inbound, "perf:raw");
    assert!(!config.validation.require_bus);
}
