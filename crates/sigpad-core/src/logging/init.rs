use std::sync::Once;

use log::LevelFilter;

/// Environment variable consulted before `RUST_LOG`.
pub const LOG_ENV: &str = "SIGPAD_LOG";

/// Logger configuration.
///
/// `env_filter` uses the `env_logger` filter syntax, e.g. `"sigpad_core::capture=trace"`.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    /// Level used when neither `env_filter` nor the environment sets one.
    pub fallback: LevelFilter,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    /// Quiet default for hosts embedding the pad: only output fallbacks and
    /// other warnings get through.
    fn default() -> Self {
        Self {
            env_filter: None,
            fallback: LevelFilter::Warn,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

impl LoggingConfig {
    /// Config with an explicit filter, e.g. from a `--verbose` flag.
    pub fn with_filter(filter: impl Into<String>) -> Self {
        Self { env_filter: Some(filter.into()), ..Self::default() }
    }

    pub fn fallback(mut self, level: LevelFilter) -> Self {
        self.fallback = level;
        self
    }

    /// Filter string to install: explicit, then `SIGPAD_LOG`, then `RUST_LOG`.
    fn resolve_filter(&self, env: impl Fn(&str) -> Option<String>) -> Option<String> {
        self.env_filter
            .clone()
            .or_else(|| env(LOG_ENV))
            .or_else(|| env("RUST_LOG"))
    }
}

static INIT: Once = Once::new();

/// Installs `env_logger` as the global logger. Only the first call has an effect.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        match config.resolve_filter(|key| std::env::var(key).ok()) {
            Some(filter) => builder.parse_filters(&filter),
            None => builder.filter_level(config.fallback),
        };
        builder.write_style(config.write_style);

        // Keep a logger the host installed itself.
        if builder.try_init().is_ok() {
            log::debug!("logging initialized");
        }
    });
}
