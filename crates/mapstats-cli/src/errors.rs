use console::style;
use mapstats_core::MapstatsError;
use std::fmt;

/// Enhanced error type with suggestions
pub struct CliError {
    pub message: String,
    pub context: Option<String>,
    pub suggestions: Vec<String>,
    pub help_command: Option<String>,
}

impl CliError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: None,
            suggestions: Vec::new(),
            help_command: None,
        }
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    pub fn with_help(mut self, command: impl Into<String>) -> Self {
        self.help_command = Some(command.into());
        self
    }

    pub fn display(&self) {
        eprintln!("{} {}\n", style("✗").red().bold(), style(&self.message).red().bold());

        if let Some(ref context) = self.context {
            eprintln!("{}", context);
            eprintln!();
        }

        if !self.suggestions.is_empty() {
            eprintln!("{}", style("To fix this:").yellow().bold());
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                eprintln!("  {}. {}", i + 1, suggestion);
            }
            eprintln!();
        }

        if let Some(ref help_cmd) = self.help_command {
            eprintln!("{} {}", style("Need help?").cyan(), style(help_cmd).cyan().bold());
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl fmt::Debug for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Create error for a failed place search
pub fn search_failed(error: &MapstatsError, endpoint: &str) -> CliError {
    let base = CliError::new("Place search failed")
        .with_context(format!("Geocoder: {}\n\nError: {}", endpoint, error))
        .with_help("Run: mapstats search --help");

    match error {
        MapstatsError::Network(_) => base
            .with_suggestion("Check your network connection")
            .with_suggestion("Or point to another geocoder: --geocode-endpoint <URL>"),
        MapstatsError::BadHttpStatus { status: 403 | 429 } => base
            .with_suggestion("The geocoder is rate limiting this client; wait before searching again")
            .with_suggestion("Set an identifying User-Agent: MAPSTATS_USER_AGENT=\"myapp/1.0 (me@example.org)\""),
        MapstatsError::InvalidCoordinate { .. } | MapstatsError::Parse(_) => base
            .with_suggestion("The geocoder answered with unexpected data; check --geocode-endpoint"),
        _ => base,
    }
}

/// Create error for a failed dashboard load
pub fn dashboard_failed(error: &MapstatsError, endpoint: &str) -> CliError {
    let base = CliError::new("Could not load admission statistics")
        .with_context(format!(
            "Feed: {}\n\nError: {}\n\nNo charts were rendered.",
            endpoint, error
        ))
        .with_help("Run: mapstats dashboard --help");

    match error {
        MapstatsError::Network(_) => base.with_suggestion("Check your network connection"),
        MapstatsError::BadHttpStatus { .. } | MapstatsError::Parse(_) => base
            .with_suggestion("Verify the feed URL: --stats-endpoint <URL>")
            .with_suggestion("Or set it in mapstats.toml: stats_endpoint = \"...\""),
        _ => base,
    }
}

/// Create error for invalid configuration
pub fn invalid_config(message: &str) -> CliError {
    CliError::new("Invalid configuration")
        .with_context(format!("Configuration could not be loaded.\n\nReason: {}", message))
        .with_suggestion("Check mapstats.toml for syntax errors")
        .with_suggestion("Or pass another file: --config <FILE>")
        .with_help("Run: mapstats config")
}

/// Convert anyhow::Error to CliError with context
pub fn from_anyhow(error: anyhow::Error) -> CliError {
    let error = match error.downcast::<CliError>() {
        Ok(cli_error) => return cli_error,
        Err(error) => error,
    };

    // Full chain, including the underlying cause
    let message = format!("{:#}", error);

    if error.downcast_ref::<MapstatsError>().is_some_and(|e| {
        matches!(e, MapstatsError::ConfigInvalid { .. } | MapstatsError::ConfigMissing { .. })
    }) || message.contains("configuration file")
    {
        invalid_config(&message)
    } else if message.contains("not a terminal") {
        CliError::new("Interactive mode needs a terminal")
            .with_context(format!("Error: {}", message))
            .with_suggestion("Pass the query as an argument: mapstats search <QUERY>")
    } else {
        CliError::new(message)
    }
}
