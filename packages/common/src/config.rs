use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Ranking engine configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct EngineConfig {
    /// Worker threads used when ranking several contests at once.
    /// `0` means one per available CPU. Default: 0.
    #[serde(default = "default_batch_threads")]
    pub batch_threads: usize,
}

impl EngineConfig {
    /// Thread count to actually use, never less than one.
    pub fn resolved_batch_threads(&self) -> usize {
        if self.batch_threads > 0 {
            return self.batch_threads;
        }
        std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1)
    }
}

fn default_batch_threads() -> usize {
    0
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            batch_threads: default_batch_threads(),
        }
    }
}

/// Output formatting for the command-line shell.
#[derive(Debug, Deserialize, Clone)]
pub struct OutputConfig {
    /// Pretty-print JSON output. Default: true.
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

fn default_pretty() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty: default_pretty(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct LogConfig {
    /// Maximum tracing level (`trace`, `debug`, `info`, `warn`, `error`). Default: "info".
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".into()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Application configuration.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct StandingsAppConfig {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub log: LogConfig,
}

impl StandingsAppConfig {
    /// Load from `config/config` (or the file named by `STANDINGS_CONFIG`),
    /// then override from `STANDINGS__*` environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path =
            std::env::var("STANDINGS_CONFIG").unwrap_or_else(|_| "config/config".to_string());
        Self::load_from(&config_path)
    }

    pub fn load_from(config_path: &str) -> Result<Self, ConfigError> {
        let s = Config::builder()
            .set_default("engine.batch_threads", 0_i64)?
            .set_default("output.pretty", true)?
            .set_default("log.level", "info")?
            .add_source(File::with_name(config_path).required(false))
            // e.g. STANDINGS__ENGINE__BATCH_THREADS=4
            .add_source(Environment::with_prefix("STANDINGS").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
