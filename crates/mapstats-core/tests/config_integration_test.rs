//! Integration tests for layered configuration
//!
//! These tests verify that configuration loading follows the correct precedence:
//! CLI arguments > Environment variables > Config file > Defaults

use mapstats_core::config::{
    parse_limit, parse_zoom, CliConfigOverrides, ConfigSource, LayeredConfig,
    DEFAULT_GEOCODE_ENDPOINT, DEFAULT_USER_AGENT,
};
use serial_test::serial;
use std::env;
use std::fs;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

const ENV_VARS: &[&str] = &[
    "MAPSTATS_GEOCODE_ENDPOINT",
    "MAPSTATS_EMBED_ENDPOINT",
    "MAPSTATS_SITE_ENDPOINT",
    "MAPSTATS_STATS_ENDPOINT",
    "MAPSTATS_USER_AGENT",
    "MAPSTATS_REFERER",
    "MAPSTATS_ZOOM",
    "MAPSTATS_COURSE_LIMIT",
    "MAPSTATS_PROGRAM_LIMIT",
];

fn clear_env() {
    for var in ENV_VARS {
        env::remove_var(var);
    }
}

#[test]
fn test_default_configuration() {
    let config = LayeredConfig::with_defaults();

    assert_eq!(config.geocode_endpoint.value, DEFAULT_GEOCODE_ENDPOINT);
    assert_eq!(config.geocode_endpoint.source, ConfigSource::Default);
    assert_eq!(config.user_agent.value, DEFAULT_USER_AGENT);
    assert!(config.user_agent.value.starts_with("mapstats/"));
    assert_eq!(config.zoom.value, 12);
    assert_eq!(config.course_limit.value, 6);
    assert_eq!(config.program_limit.value, 5);
}

#[test]
fn test_partial_file_configuration() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
program_limit = 3
# Only override the program limit, leave others as defaults
"#
    )
    .unwrap();

    let config = LayeredConfig::with_defaults().load_from_file(file.path()).unwrap();

    assert_eq!(config.program_limit.value, 3);
    assert_eq!(config.program_limit.source, ConfigSource::File);
    assert_eq!(config.course_limit.value, 6);
    assert_eq!(config.course_limit.source, ConfigSource::Default);
    assert_eq!(config.stats_endpoint.source, ConfigSource::Default);
}

#[test]
#[serial]
fn test_environment_overrides_file() {
    clear_env();

    env::set_var("MAPSTATS_STATS_ENDPOINT", "http://env.example/stats");
    env::set_var("MAPSTATS_ZOOM", "8");
    env::set_var("MAPSTATS_COURSE_LIMIT", "10");

    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
stats_endpoint = "http://file.example/stats"
zoom = 14
course_limit = 4
"#
    )
    .unwrap();

    let config = LayeredConfig::with_defaults()
        .load_from_file(file.path())
        .unwrap()
        .load_from_env();

    assert_eq!(config.stats_endpoint.value, "http://env.example/stats");
    assert_eq!(config.stats_endpoint.source, ConfigSource::Environment);
    assert_eq!(config.zoom.value, 8);
    assert_eq!(config.zoom.source, ConfigSource::Environment);
    assert_eq!(config.course_limit.value, 10);
    assert_eq!(config.course_limit.source, ConfigSource::Environment);

    clear_env();
}

#[test]
#[serial]
fn test_invalid_environment_values_are_ignored() {
    clear_env();

    env::set_var("MAPSTATS_ZOOM", "99");
    env::set_var("MAPSTATS_PROGRAM_LIMIT", "0");

    let config = LayeredConfig::with_defaults().load_from_env();

    assert_eq!(config.zoom.value, 12);
    assert_eq!(config.zoom.source, ConfigSource::Default);
    assert_eq!(config.program_limit.value, 5);
    assert_eq!(config.program_limit.source, ConfigSource::Default);

    clear_env();
}

#[test]
#[serial]
fn test_configuration_precedence_order() {
    clear_env();
    env::set_var("MAPSTATS_GEOCODE_ENDPOINT", "http://env.example/search");

    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, r#"geocode_endpoint = "http://file.example/search""#).unwrap();

    let mut config = LayeredConfig::with_defaults()
        .load_from_file(file.path())
        .unwrap()
        .load_from_env();

    assert_eq!(config.geocode_endpoint.value, "http://env.example/search");
    assert_eq!(config.geocode_endpoint.source, ConfigSource::Environment);

    config.update_from_cli(CliConfigOverrides {
        geocode_endpoint: Some("http://cli.example/search".to_string()),
        ..Default::default()
    });

    assert_eq!(config.geocode_endpoint.value, "http://cli.example/search");
    assert_eq!(config.geocode_endpoint.source, ConfigSource::Cli);

    assert!(ConfigSource::Cli.precedence() > ConfigSource::Environment.precedence());
    assert!(ConfigSource::Environment.precedence() > ConfigSource::File.precedence());
    assert!(ConfigSource::File.precedence() > ConfigSource::Default.precedence());

    clear_env();
}

#[test]
fn test_configuration_source_tracking() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "zoom = 10\nreferer = \"https://example.org\"").unwrap();

    let config = LayeredConfig::with_defaults().load_from_file(file.path()).unwrap();
    let inspection_map = config.to_inspection_map();

    let (zoom, zoom_source) = &inspection_map["zoom"];
    assert_eq!(zoom, "10");
    assert_eq!(*zoom_source, ConfigSource::File);

    let (referer, referer_source) = &inspection_map["referer"];
    assert_eq!(referer, "https://example.org");
    assert_eq!(*referer_source, ConfigSource::File);

    let (_, agent_source) = &inspection_map["user_agent"];
    assert_eq!(*agent_source, ConfigSource::Default);
}

#[test]
fn test_parse_helpers() {
    assert_eq!(parse_zoom("19").unwrap(), 19);
    assert!(parse_zoom("twelve").is_err());
    assert_eq!(parse_limit("program_limit", "5").unwrap(), 5);
    assert!(parse_limit("program_limit", "-5").is_err());
}

#[test]
fn test_invalid_toml_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "invalid toml content [[[").unwrap();

    let result = LayeredConfig::with_defaults().load_from_file(file.path());

    assert!(result.is_err());
}

#[test]
fn test_missing_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let non_existent = temp_dir.path().join("does_not_exist.toml");

    let result = LayeredConfig::with_defaults().load_from_file(&non_existent);

    assert!(result.is_err());
}

#[test]
#[serial]
fn test_full_configuration_workflow() {
    clear_env();

    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("mapstats.toml");
    fs::write(
        &config_path,
        r#"
geocode_endpoint = "http://file.example/search"
stats_endpoint = "http://file.example/stats"
zoom = 10
program_limit = 4
"#,
    )
    .unwrap();

    env::set_var("MAPSTATS_STATS_ENDPOINT", "http://env.example/stats");
    env::set_var("MAPSTATS_USER_AGENT", "mapstats-env");

    let mut config = LayeredConfig::with_defaults()
        .load_from_file(&config_path)
        .unwrap()
        .load_from_env();

    assert_eq!(config.geocode_endpoint.value, "http://file.example/search");
    assert_eq!(config.stats_endpoint.value, "http://env.example/stats");
    assert_eq!(config.user_agent.value, "mapstats-env");
    assert_eq!(config.zoom.value, 10);

    config.update_from_cli(CliConfigOverrides {
        zoom: Some(15),
        ..Default::default()
    });

    let search = config.search_settings();
    assert_eq!(search.geocode_endpoint, "http://file.example/search");
    assert_eq!(search.user_agent, "mapstats-env");
    assert_eq!(search.zoom, 15);

    let dashboard = config.dashboard_settings();
    assert_eq!(dashboard.stats_endpoint, "http://env.example/stats");
    assert_eq!(dashboard.course_limit, 6);
    assert_eq!(dashboard.program_limit, 4);

    clear_env();
}
