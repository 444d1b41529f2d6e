use crate::error::{MapstatsError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::Path;

pub const DEFAULT_GEOCODE_ENDPOINT: &str = "https://nominatim.openstreetmap.org/search";
pub const DEFAULT_EMBED_ENDPOINT: &str = "https://www.openstreetmap.org/export/embed.html";
pub const DEFAULT_SITE_ENDPOINT: &str = "https://www.openstreetmap.org";
pub const DEFAULT_STATS_ENDPOINT: &str = "https://studenter.miun.se/~mallar/dt211g/";
pub const DEFAULT_USER_AGENT: &str = concat!("mapstats/", env!("CARGO_PKG_VERSION"));
pub const DEFAULT_REFERER: &str = "https://github.com/wellywahyudi/mapstats";
pub const DEFAULT_ZOOM: u8 = 12;
pub const DEFAULT_COURSE_LIMIT: usize = 6;
pub const DEFAULT_PROGRAM_LIMIT: usize = 5;

/// Highest zoom level served by the OpenStreetMap tile layers
pub const MAX_ZOOM: u8 = 19;

/// Configuration source for tracking where values come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    /// Default value
    Default,
    /// Loaded from config file
    File,
    /// Loaded from environment variable
    Environment,
    /// Provided via CLI argument
    Cli,
}

impl ConfigSource {
    /// Returns the precedence level (higher = higher priority)
    pub fn precedence(&self) -> u8 {
        match self {
            ConfigSource::Default => 0,
            ConfigSource::File => 1,
            ConfigSource::Environment => 2,
            ConfigSource::Cli => 3,
        }
    }
}

/// A configuration value with its source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigValue<T> {
    pub value: T,
    pub source: ConfigSource,
}

impl<T> ConfigValue<T> {
    pub fn new(value: T, source: ConfigSource) -> Self {
        Self { value, source }
    }

    /// Update the value if the new source has higher precedence
    pub fn update(&mut self, value: T, source: ConfigSource) {
        if source.precedence() > self.source.precedence() {
            self.value = value;
            self.source = source;
        }
    }
}

/// Settings consumed by the place-search pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchSettings {
    pub geocode_endpoint: String,
    pub embed_endpoint: String,
    pub site_endpoint: String,
    pub user_agent: String,
    pub referer: String,
    pub zoom: u8,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            geocode_endpoint: DEFAULT_GEOCODE_ENDPOINT.to_string(),
            embed_endpoint: DEFAULT_EMBED_ENDPOINT.to_string(),
            site_endpoint: DEFAULT_SITE_ENDPOINT.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            referer: DEFAULT_REFERER.to_string(),
            zoom: DEFAULT_ZOOM,
        }
    }
}

/// Settings consumed by the admission dashboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardSettings {
    pub stats_endpoint: String,
    pub course_limit: usize,
    pub program_limit: usize,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            stats_endpoint: DEFAULT_STATS_ENDPOINT.to_string(),
            course_limit: DEFAULT_COURSE_LIMIT,
            program_limit: DEFAULT_PROGRAM_LIMIT,
        }
    }
}

/// Layered configuration for Mapstats
#[derive(Debug, Clone)]
pub struct LayeredConfig {
    pub geocode_endpoint: ConfigValue<String>,
    pub embed_endpoint: ConfigValue<String>,
    pub site_endpoint: ConfigValue<String>,
    pub stats_endpoint: ConfigValue<String>,
    pub user_agent: ConfigValue<String>,
    pub referer: ConfigValue<String>,
    pub zoom: ConfigValue<u8>,
    pub course_limit: ConfigValue<usize>,
    pub program_limit: ConfigValue<usize>,
}

impl LayeredConfig {
    /// Create a new configuration with default values
    pub fn with_defaults() -> Self {
        let default = |value: &str| ConfigValue::new(value.to_string(), ConfigSource::Default);

        Self {
            geocode_endpoint: default(DEFAULT_GEOCODE_ENDPOINT),
            embed_endpoint: default(DEFAULT_EMBED_ENDPOINT),
            site_endpoint: default(DEFAULT_SITE_ENDPOINT),
            stats_endpoint: default(DEFAULT_STATS_ENDPOINT),
            user_agent: default(DEFAULT_USER_AGENT),
            referer: default(DEFAULT_REFERER),
            zoom: ConfigValue::new(DEFAULT_ZOOM, ConfigSource::Default),
            course_limit: ConfigValue::new(DEFAULT_COURSE_LIMIT, ConfigSource::Default),
            program_limit: ConfigValue::new(DEFAULT_PROGRAM_LIMIT, ConfigSource::Default),
        }
    }

    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| MapstatsError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to read config file: {}", e),
            })?;

        let file_config: FileConfig =
            toml::from_str(&content).map_err(|e| MapstatsError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to parse TOML: {}", e),
            })?;

        if let Some(endpoint) = file_config.geocode_endpoint {
            self.geocode_endpoint.update(endpoint, ConfigSource::File);
        }

        if let Some(endpoint) = file_config.embed_endpoint {
            self.embed_endpoint.update(endpoint, ConfigSource::File);
        }

        if let Some(endpoint) = file_config.site_endpoint {
            self.site_endpoint.update(endpoint, ConfigSource::File);
        }

        if let Some(endpoint) = file_config.stats_endpoint {
            self.stats_endpoint.update(endpoint, ConfigSource::File);
        }

        if let Some(user_agent) = file_config.user_agent {
            self.user_agent.update(user_agent, ConfigSource::File);
        }

        if let Some(referer) = file_config.referer {
            self.referer.update(referer, ConfigSource::File);
        }

        if let Some(zoom) = file_config.zoom {
            self.zoom.update(validate_zoom(zoom)?, ConfigSource::File);
        }

        if let Some(limit) = file_config.course_limit {
            self.course_limit.update(validate_limit("course_limit", limit)?, ConfigSource::File);
        }

        if let Some(limit) = file_config.program_limit {
            self.program_limit.update(validate_limit("program_limit", limit)?, ConfigSource::File);
        }

        Ok(self)
    }

    /// Load configuration from environment variables
    pub fn load_from_env(mut self) -> Self {
        let string_vars = [
            ("MAPSTATS_GEOCODE_ENDPOINT", &mut self.geocode_endpoint),
            ("MAPSTATS_EMBED_ENDPOINT", &mut self.embed_endpoint),
            ("MAPSTATS_SITE_ENDPOINT", &mut self.site_endpoint),
            ("MAPSTATS_STATS_ENDPOINT", &mut self.stats_endpoint),
            ("MAPSTATS_USER_AGENT", &mut self.user_agent),
            ("MAPSTATS_REFERER", &mut self.referer),
        ];

        for (var, slot) in string_vars {
            if let Ok(value) = env::var(var) {
                slot.update(value, ConfigSource::Environment);
            }
        }

        // MAPSTATS_ZOOM
        if let Ok(zoom_str) = env::var("MAPSTATS_ZOOM") {
            match parse_zoom(&zoom_str) {
                Ok(zoom) => self.zoom.update(zoom, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid MAPSTATS_ZOOM value '{}': expected integer between 0 and {}",
                    zoom_str,
                    MAX_ZOOM
                ),
            }
        }

        // MAPSTATS_COURSE_LIMIT
        if let Ok(limit_str) = env::var("MAPSTATS_COURSE_LIMIT") {
            match parse_limit("course_limit", &limit_str) {
                Ok(limit) => self.course_limit.update(limit, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid MAPSTATS_COURSE_LIMIT value '{}': expected positive integer",
                    limit_str
                ),
            }
        }

        // MAPSTATS_PROGRAM_LIMIT
        if let Ok(limit_str) = env::var("MAPSTATS_PROGRAM_LIMIT") {
            match parse_limit("program_limit", &limit_str) {
                Ok(limit) => self.program_limit.update(limit, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid MAPSTATS_PROGRAM_LIMIT value '{}': expected positive integer",
                    limit_str
                ),
            }
        }

        self
    }

    /// Update configuration from CLI arguments
    pub fn update_from_cli(&mut self, overrides: CliConfigOverrides) {
        if let Some(endpoint) = overrides.geocode_endpoint {
            self.geocode_endpoint.update(endpoint, ConfigSource::Cli);
        }

        if let Some(endpoint) = overrides.embed_endpoint {
            self.embed_endpoint.update(endpoint, ConfigSource::Cli);
        }

        if let Some(endpoint) = overrides.site_endpoint {
            self.site_endpoint.update(endpoint, ConfigSource::Cli);
        }

        if let Some(endpoint) = overrides.stats_endpoint {
            self.stats_endpoint.update(endpoint, ConfigSource::Cli);
        }

        if let Some(zoom) = overrides.zoom {
            self.zoom.update(zoom, ConfigSource::Cli);
        }
    }

    /// Settings for the place-search pipeline
    pub fn search_settings(&self) -> SearchSettings {
        SearchSettings {
            geocode_endpoint: self.geocode_endpoint.value.clone(),
            embed_endpoint: self.embed_endpoint.value.clone(),
            site_endpoint: self.site_endpoint.value.clone(),
            user_agent: self.user_agent.value.clone(),
            referer: self.referer.value.clone(),
            zoom: self.zoom.value,
        }
    }

    /// Settings for the admission dashboard
    pub fn dashboard_settings(&self) -> DashboardSettings {
        DashboardSettings {
            stats_endpoint: self.stats_endpoint.value.clone(),
            course_limit: self.course_limit.value,
            program_limit: self.program_limit.value,
        }
    }

    /// Get all configuration values as a map for inspection
    pub fn to_inspection_map(&self) -> HashMap<String, (String, ConfigSource)> {
        let mut map = HashMap::new();

        let strings = [
            ("geocode_endpoint", &self.geocode_endpoint),
            ("embed_endpoint", &self.embed_endpoint),
            ("site_endpoint", &self.site_endpoint),
            ("stats_endpoint", &self.stats_endpoint),
            ("user_agent", &self.user_agent),
            ("referer", &self.referer),
        ];
        for (key, entry) in strings {
            map.insert(key.to_string(), (entry.value.clone(), entry.source));
        }

        map.insert("zoom".to_string(), (self.zoom.value.to_string(), self.zoom.source));
        map.insert(
            "course_limit".to_string(),
            (self.course_limit.value.to_string(), self.course_limit.source),
        );
        map.insert(
            "program_limit".to_string(),
            (self.program_limit.value.to_string(), self.program_limit.source),
        );

        map
    }
}

/// Configuration loaded from TOML file
#[derive(Debug, Deserialize, Serialize)]
struct FileConfig {
    geocode_endpoint: Option<String>,
    embed_endpoint: Option<String>,
    site_endpoint: Option<String>,
    stats_endpoint: Option<String>,
    user_agent: Option<String>,
    referer: Option<String>,
    zoom: Option<u8>,
    course_limit: Option<usize>,
    program_limit: Option<usize>,
}

/// CLI configuration overrides
#[derive(Debug, Default)]
pub struct CliConfigOverrides {
    pub geocode_endpoint: Option<String>,
    pub embed_endpoint: Option<String>,
    pub site_endpoint: Option<String>,
    pub stats_endpoint: Option<String>,
    pub zoom: Option<u8>,
}

/// Parse a map zoom level from string
pub fn parse_zoom(s: &str) -> Result<u8> {
    let zoom = s.trim().parse::<u8>().map_err(|_| MapstatsError::ConfigInvalid {
        key: "zoom".to_string(),
        reason: format!("Invalid zoom level: {}", s),
    })?;
    validate_zoom(zoom)
}

/// Parse a ranking limit from string
pub fn parse_limit(key: &str, s: &str) -> Result<usize> {
    let limit = s.trim().parse::<usize>().map_err(|_| MapstatsError::ConfigInvalid {
        key: key.to_string(),
        reason: format!("Invalid limit: {}", s),
    })?;
    validate_limit(key, limit)
}

fn validate_zoom(zoom: u8) -> Result<u8> {
    if zoom > MAX_ZOOM {
        return Err(MapstatsError::ConfigInvalid {
            key: "zoom".to_string(),
            reason: format!("Zoom level {} is above the maximum of {}", zoom, MAX_ZOOM),
        });
    }
    Ok(zoom)
}

fn validate_limit(key: &str, limit: usize) -> Result<usize> {
    if limit == 0 {
        return Err(MapstatsError::ConfigInvalid {
            key: key.to_string(),
            reason: "Limit must be at least 1".to_string(),
        });
    }
    Ok(limit)
}
