//! Suite configuration.
//!
//! Settings come from the JSON file named by `ARRAYBENCH_CONFIG`. Without
//! the variable, or when the file does not exist, the defaults apply.

use std::path::{Path, PathBuf};
use std::time::Duration;
use std::{env, fs, io};

use criterion::Criterion;
use log::{debug, warn};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Environment variable holding the config file path.
pub const CONFIG_ENV: &str = "ARRAYBENCH_CONFIG";

/// Criterion refuses fewer samples than this.
const MIN_SAMPLE_SIZE: usize = 10;

/// Timing and sizing knobs shared by every benchmark group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchConfig {
    /// Samples per benchmark.
    pub sample_size: usize,
    pub warm_up_ms: u64,
    pub measurement_ms: u64,
    /// Upper bound on elements per input array; larger sweep points are skipped.
    pub max_elements: usize,
    /// Seed for random inputs.
    pub seed: u64,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            sample_size: 20,
            warm_up_ms: 500,
            measurement_ms: 2000,
            max_elements: 1 << 26,
            seed: 42,
        }
    }
}

impl BenchConfig {
    /// Load from `ARRAYBENCH_CONFIG`, falling back to defaults.
    pub fn load() -> Result<Self, ConfigError> {
        match env::var_os(CONFIG_ENV) {
            Some(path) => Self::load_from(Path::new(&path)),
            None => {
                debug!("{} not set, using default configuration", CONFIG_ENV);
                Ok(Self::default())
            }
        }
    }

    /// Load and validate a config file. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                warn!(
                    "Config file '{}' not found, using default configuration",
                    path.display()
                );
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(ConfigError::Io {
                    path: PathBuf::from(path),
                    source: e,
                })
            }
        };
        let config: Self = serde_json::from_str(&content).map_err(|e| ConfigError::Parse {
            path: PathBuf::from(path),
            source: e,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sample_size < MIN_SAMPLE_SIZE {
            return Err(ConfigError::Invalid {
                field: "sample_size",
                message: format!(
                    "{} is below the minimum of {}",
                    self.sample_size, MIN_SAMPLE_SIZE
                ),
            });
        }
        if self.warm_up_ms == 0 {
            return Err(ConfigError::Invalid {
                field: "warm_up_ms",
                message: "must be non-zero".to_string(),
            });
        }
        if self.measurement_ms == 0 {
            return Err(ConfigError::Invalid {
                field: "measurement_ms",
                message: "must be non-zero".to_string(),
            });
        }
        if self.max_elements == 0 {
            return Err(ConfigError::Invalid {
                field: "max_elements",
                message: "must be non-zero".to_string(),
            });
        }
        Ok(())
    }

    pub fn warm_up_time(&self) -> Duration {
        Duration::from_millis(self.warm_up_ms)
    }

    pub fn measurement_time(&self) -> Duration {
        Duration::from_millis(self.measurement_ms)
    }

    /// Criterion with these settings, then command line overrides.
    pub fn criterion(&self) -> Criterion {
        Criterion::default()
            .sample_size(self.sample_size)
            .warm_up_time(self.warm_up_time())
            .measurement_time(self.measurement_time())
            .configure_from_args()
    }
}

static CONFIG: OnceCell<BenchConfig> = OnceCell::new();

/// Process-wide config, loaded on first use.
pub fn global() -> Result<&'static BenchConfig, ConfigError> {
    CONFIG.get_or_try_init(BenchConfig::load)
}
