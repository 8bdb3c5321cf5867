use config::{Config as ConfigBuilder, ConfigError, File};
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use crate::tax::{TaxRule, DEFAULT_LOWER_RATE, DEFAULT_THRESHOLD, DEFAULT_UPPER_RATE};

/// Configuration for one run of the tax job.
///
/// # Configuration Locations
///
/// Values are layered, later sources overriding earlier ones:
/// 1. Global `$HOME/.config/taxcalc/config.yaml`
/// 2. Local `.taxcalc.yaml` in the current directory
/// 3. Custom config file specified via `--config` (must exist)
/// 4. Command-line flags, applied with [`TaxConfig::merge_with_cli`]
///
/// Every field has a default, so no file is required at all.
///
/// # Configuration Format
///
/// ```yaml
/// input_path: "taxpayer.txt"
/// output_path: "taxInfo.txt"
/// sorted_output_path: "sortedTaxInfo.txt"
///
/// # Number of name/company/salary triples to read
/// record_count: 20
///
/// # Bracket rule: salaries <= threshold pay lower_rate percent, others upper_rate
/// threshold: 10000000.0
/// lower_rate: 40.0
/// upper_rate: 53.0
///
/// # Log level (trace, debug, info, warn, error)
/// log_level: "warn"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaxConfig {
    /// File holding the taxpayer triples
    pub input_path: PathBuf,

    /// Report of all records in load order
    pub output_path: PathBuf,

    /// Report of all records in ascending salary order
    pub sorted_output_path: PathBuf,

    /// Exact number of records to read from the input
    pub record_count: NonZeroUsize,

    pub threshold: f64,
    pub lower_rate: f64,
    pub upper_rate: f64,

    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

/// Values supplied on the command line; `None` leaves the configured value alone
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub input_path: Option<PathBuf>,
    pub output_path: Option<PathBuf>,
    pub sorted_output_path: Option<PathBuf>,
    pub record_count: Option<NonZeroUsize>,
    pub log_level: Option<String>,
}

pub const DEFAULT_RECORD_COUNT: usize = 20;

fn default_record_count() -> NonZeroUsize {
    NonZeroUsize::new(DEFAULT_RECORD_COUNT).unwrap_or(NonZeroUsize::MIN)
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for TaxConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("taxpayer.txt"),
            output_path: PathBuf::from("taxInfo.txt"),
            sorted_output_path: PathBuf::from("sortedTaxInfo.txt"),
            record_count: default_record_count(),
            threshold: DEFAULT_THRESHOLD,
            lower_rate: DEFAULT_LOWER_RATE,
            upper_rate: DEFAULT_UPPER_RATE,
            log_level: default_log_level(),
        }
    }
}

impl TaxConfig {
    /// Loads configuration, layering `config_path` over the default locations
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        let defaults = [
            dirs::config_dir().map(|p| p.join("taxcalc/config.yaml")),
            Some(PathBuf::from(".taxcalc.yaml")),
        ];
        for path in defaults.iter().flatten() {
            if path.exists() {
                builder = builder.add_source(File::from(path.as_path()));
            }
        }

        if let Some(path) = config_path {
            builder = builder.add_source(File::from(path).required(true));
        }

        builder.build()?.try_deserialize()
    }

    /// Merges CLI arguments with configuration file values
    pub fn merge_with_cli(mut self, cli: CliOverrides) -> Self {
        if let Some(path) = cli.input_path {
            self.input_path = path;
        }
        if let Some(path) = cli.output_path {
            self.output_path = path;
        }
        if let Some(path) = cli.sorted_output_path {
            self.sorted_output_path = path;
        }
        if let Some(count) = cli.record_count {
            self.record_count = count;
        }
        if let Some(level) = cli.log_level {
            self.log_level = level;
        }
        self
    }

    /// The bracket rule described by this configuration
    pub fn rule(&self) -> TaxRule {
        TaxRule {
            threshold: self.threshold,
            lower_rate: self.lower_rate,
            upper_rate: self.upper_rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_load_config_file() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.yaml");
        let config_content = r#"
            input_path: "in/people.txt"
            output_path: "out/tax.txt"
            sorted_output_path: "out/sorted.txt"
            record_count: 5
            threshold: 500.0
            lower_rate: 10.0
            upper_rate: 20.0
            log_level: "debug"
        "#;
        fs::write(&config_path, config_content).unwrap();

        let config = TaxConfig::load_from(Some(&config_path)).unwrap();
        assert_eq!(config.input_path, PathBuf::from("in/people.txt"));
        assert_eq!(config.output_path, PathBuf::from("out/tax.txt"));
        assert_eq!(config.sorted_output_path, PathBuf::from("out/sorted.txt"));
        assert_eq!(config.record_count, NonZeroUsize::new(5).unwrap());
        assert_eq!(
            config.rule(),
            TaxRule {
                threshold: 500.0,
                lower_rate: 10.0,
                upper_rate: 20.0
            }
        );
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_default_values() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.yaml");
        fs::write(&config_path, "record_count: 3\n").unwrap();

        let config = TaxConfig::load_from(Some(&config_path)).unwrap();
        assert_eq!(config.record_count, NonZeroUsize::new(3).unwrap());
        assert_eq!(config.input_path, PathBuf::from("taxpayer.txt"));
        assert_eq!(config.output_path, PathBuf::from("taxInfo.txt"));
        assert_eq!(config.sorted_output_path, PathBuf::from("sortedTaxInfo.txt"));
        assert_eq!(config.rule(), TaxRule::default());
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_builtin_defaults() {
        let config = TaxConfig::default();
        assert_eq!(config.record_count.get(), 20);
        assert_eq!(config.rule(), TaxRule::default());
    }

    #[test]
    fn test_merge_with_cli() {
        let file_config = TaxConfig {
            input_path: PathBuf::from("from_file.txt"),
            log_level: "info".to_string(),
            ..TaxConfig::default()
        };

        let merged = file_config.merge_with_cli(CliOverrides {
            output_path: Some(PathBuf::from("cli_out.txt")),
            record_count: NonZeroUsize::new(7),
            ..CliOverrides::default()
        });

        assert_eq!(merged.input_path, PathBuf::from("from_file.txt")); // File value (CLI None)
        assert_eq!(merged.output_path, PathBuf::from("cli_out.txt")); // CLI value
        assert_eq!(merged.sorted_output_path, PathBuf::from("sortedTaxInfo.txt"));
        assert_eq!(merged.record_count.get(), 7);
        assert_eq!(merged.log_level, "info");
    }

    #[test]
    fn test_invalid_config() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.yaml");
        fs::write(&config_path, "record_count: \"many\"\nthreshold: []\n").unwrap();

        assert!(TaxConfig::load_from(Some(&config_path)).is_err());
    }

    #[test]
    fn test_zero_record_count_rejected() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.yaml");
        fs::write(&config_path, "record_count: 0\n").unwrap();

        assert!(TaxConfig::load_from(Some(&config_path)).is_err());
    }

    #[test]
    fn test_load_nonexistent_file() {
        let result = TaxConfig::load_from(Some(Path::new("nonexistent.yaml")));
        assert!(result.is_err());
    }
}
