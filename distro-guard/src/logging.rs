//! Logging setup for distro-guard.
//!
//! Diagnostic lines (`file:line: message.`) are written to the run's writer
//! and are part of the tool's contract; the structured logs configured here
//! are operational context on top of them.

/// Utilities for setting up structured logging.
pub mod setup {
    use tracing::Level;

    /// Configuration for distro-guard's logging setup.
    #[derive(Debug, Clone)]
    pub struct LoggingConfig {
        /// Log level for the application.
        pub level: Level,
        /// Whether to use JSON output format.
        pub json_format: bool,
        /// Environment filter override.
        pub env_filter: Option<String>,
    }

    impl Default for LoggingConfig {
        fn default() -> Self {
            Self {
                level: Level::WARN,
                json_format: false,
                env_filter: None,
            }
        }
    }

    impl LoggingConfig {
        /// Creates a configuration for CI use: quiet, machine-readable.
        pub fn ci() -> Self {
            Self {
                level: Level::WARN,
                json_format: true,
                env_filter: None,
            }
        }

        /// Creates a configuration for development use.
        pub fn development() -> Self {
            Self {
                level: Level::DEBUG,
                json_format: false,
                env_filter: None,
            }
        }

        /// Sets the log level.
        pub fn with_level(mut self, level: Level) -> Self {
            self.level = level;
            self
        }

        /// Sets whether to use JSON output format.
        pub fn with_json_format(mut self, enabled: bool) -> Self {
            self.json_format = enabled;
            self
        }

        /// Sets a custom environment filter.
        pub fn with_env_filter(mut self, filter: impl Into<String>) -> Self {
            self.env_filter = Some(filter.into());
            self
        }

        /// Builds the environment filter string.
        pub fn env_filter(&self) -> String {
            if let Some(ref filter) = self.env_filter {
                filter.clone()
            } else {
                let level = self.level.as_str().to_lowercase();
                format!("{level},distro_guard={level}")
            }
        }
    }

    /// Initializes logging on stderr according to `config`.
    ///
    /// `RUST_LOG` takes precedence over the configured filter when set.
    pub fn init_logging(config: LoggingConfig) -> Result<(), Box<dyn std::error::Error>> {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(config.env_filter()));

        let fmt_layer = if config.json_format {
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .json()
                .boxed()
        } else {
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .boxed()
        };

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::setup::LoggingConfig;
    use tracing::Level;

    #[test]
    fn test_default_filter_names_the_crate() {
        let config = LoggingConfig::default();
        assert_eq!(config.env_filter(), "warn,distro_guard=warn");
    }

    #[test]
    fn test_filter_override_wins() {
        let config = LoggingConfig::development().with_env_filter("distro_guard=trace");
        assert_eq!(config.env_filter(), "distro_guard=trace");
        assert_eq!(config.level, Level::DEBUG);
    }

    #[test]
    fn test_ci_configuration_is_json() {
        assert!(LoggingConfig::ci().json_format);
    }
}
