//! Configuration loading from sortbench.toml
//!
//! SortBench configuration can be specified in a `sortbench.toml` file in the
//! project root. The configuration is discovered by walking up from the
//! current directory. Command-line flags override anything set here.

use serde::{Deserialize, Serialize};
use sortbench_core::{DEFAULT_SEED, DEFAULT_UPPER_BOUND, DatasetGenerator, MAX_DATASET_SIZE};
use std::path::Path;

/// File name looked up during discovery
pub const CONFIG_FILE_NAME: &str = "sortbench.toml";

/// SortBench configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SortBenchConfig {
    /// Dataset generation
    #[serde(default)]
    pub dataset: DatasetConfig,
    /// Batch sweep settings
    #[serde(default)]
    pub sweep: SweepConfig,
    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Dataset generation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// Generator seed
    #[serde(default = "default_seed")]
    pub seed: u32,
    /// Exclusive upper bound on generated values
    #[serde(default = "default_upper_bound")]
    pub upper_bound: u32,
    /// Largest dataset size accepted
    #[serde(default = "default_max_size")]
    pub max_size: usize,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            upper_bound: default_upper_bound(),
            max_size: default_max_size(),
        }
    }
}

impl DatasetConfig {
    /// Build the generator described by this section
    pub fn generator(&self) -> sortbench_core::Result<DatasetGenerator> {
        DatasetGenerator::new(self.seed, self.upper_bound)
    }
}

fn default_seed() -> u32 {
    DEFAULT_SEED
}
fn default_upper_bound() -> u32 {
    DEFAULT_UPPER_BOUND
}
fn default_max_size() -> usize {
    MAX_DATASET_SIZE
}

/// Batch sweep settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepConfig {
    /// Dataset sizes run by a sweep, in order
    #[serde(default = "default_sizes")]
    pub sizes: Vec<i64>,
    /// Trials per algorithm and size
    #[serde(default = "default_repeat")]
    pub repeat: usize,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            sizes: default_sizes(),
            repeat: default_repeat(),
        }
    }
}

fn default_sizes() -> Vec<i64> {
    vec![100, 1_000, 10_000, 100_000]
}
fn default_repeat() -> usize {
    1
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default output format: "human", "json", "csv"
    #[serde(default = "default_format")]
    pub format: String,
    /// Show a progress bar while running
    #[serde(default = "default_progress")]
    pub progress: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            progress: default_progress(),
        }
    }
}

fn default_format() -> String {
    "human".to_string()
}
fn default_progress() -> bool {
    true
}

impl SortBenchConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Try to discover and load configuration by walking up from current directory
    pub fn discover() -> Option<Self> {
        let mut dir = std::env::current_dir().ok()?;
        loop {
            let config_path = dir.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return match Self::load(&config_path) {
                    Ok(config) => {
                        tracing::debug!(path = %config_path.display(), "loaded configuration");
                        Some(config)
                    }
                    Err(e) => {
                        tracing::warn!(
                            path = %config_path.display(),
                            error = %e,
                            "ignoring unreadable configuration"
                        );
                        None
                    }
                };
            }
            if !dir.pop() {
                break;
            }
        }
        None
    }

    /// Generate a default configuration as TOML string
    pub fn default_toml() -> String {
        r#"# SortBench Configuration

[dataset]
# Seed for the dataset generator; every algorithm sorts the same data
seed = 123456789
# Generated values fall in [0, upper_bound)
upper_bound = 1000000
# Largest dataset size accepted
max_size = 1000000

[sweep]
# Dataset sizes run by `sortbench sweep`
sizes = [100, 1000, 10000, 100000]
# Trials per algorithm and size
repeat = 1

[output]
# Default output format: human, json, csv
format = "human"
# Show a progress bar on stderr
progress = true
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SortBenchConfig::default();
        assert_eq!(config.dataset.seed, 123_456_789);
        assert_eq!(config.dataset.upper_bound, 1_000_000);
        assert_eq!(config.dataset.max_size, 1_000_000);
        assert_eq!(config.sweep.sizes, vec![100, 1_000, 10_000, 100_000]);
        assert_eq!(config.sweep.repeat, 1);
        assert_eq!(config.output.format, "human");
    }

    #[test]
    fn test_parse_toml() {
        let toml_str = r#"
            [dataset]
            seed = 7
            upper_bound = 100000

            [sweep]
            sizes = [10, 20]
        "#;

        let config: SortBenchConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.dataset.seed, 7);
        assert_eq!(config.dataset.upper_bound, 100_000);
        assert_eq!(config.sweep.sizes, vec![10, 20]);
        // Defaults should still apply
        assert_eq!(config.dataset.max_size, 1_000_000);
        assert_eq!(config.sweep.repeat, 1);
        assert!(config.output.progress);
    }

    #[test]
    fn test_default_toml_parses() {
        let config: SortBenchConfig = toml::from_str(&SortBenchConfig::default_toml()).unwrap();
        assert_eq!(config.dataset.seed, DEFAULT_SEED);
        assert_eq!(config.sweep.sizes, default_sizes());
    }

    #[test]
    fn test_zero_upper_bound_rejected_by_generator() {
        let config = DatasetConfig {
            upper_bound: 0,
            ..Default::default()
        };
        assert!(config.generator().is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = std::env::temp_dir().join(format!("sortbench-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[sweep]\nrepeat = 3\n").unwrap();

        let config = SortBenchConfig::load(&path).unwrap();
        assert_eq!(config.sweep.repeat, 3);

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
