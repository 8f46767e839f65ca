//! Configuration management for ferrel.
//!
//! This module handles the layered configuration system with the following
//! precedence:
//! 1. Command-line arguments (highest priority)
//! 2. Environment variables
//! 3. JSON config file
//! 4. Default values (lowest priority)

use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{FerrelError, Result};

/// Command-line arguments for ferrel
#[derive(Parser, Debug)]
#[command(name = "ferrel")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory containing the diagnostics report files
    pub report_dir: PathBuf,

    /// File extension of report files (without leading dot)
    #[arg(short, long, env = "FERREL_EXTENSION", default_value = "webarchive")]
    pub extension: String,

    /// Path to the analysis spreadsheet with variable descriptions
    #[arg(short, long, env = "FERREL_SPREADSHEET")]
    pub spreadsheet: Option<PathBuf>,

    /// Worksheet holding the variable descriptions
    #[arg(long, env = "FERREL_SHEET", default_value = "DATA")]
    pub sheet: String,

    /// Output format (csv or json)
    #[arg(short, long, env = "FERREL_FORMAT", default_value = "csv")]
    pub format: String,

    /// Output file (stdout if omitted)
    #[arg(short, long, env = "FERREL_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Report ignored and dropped lines while parsing
    #[arg(short, long)]
    pub verbose: bool,

    /// Path to JSON configuration file
    #[arg(short, long, env = "FERREL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "FERREL_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

/// Input data configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// File extension of report files
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Path to the analysis spreadsheet
    #[serde(default)]
    pub spreadsheet: Option<PathBuf>,

    /// Worksheet holding the variable descriptions
    #[serde(default = "default_sheet")]
    pub sheet: String,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output format (csv or json)
    #[serde(default = "default_format")]
    pub format: String,

    /// Output file path (stdout if None)
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Complete configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Input data configuration
    #[serde(default)]
    pub data: DataConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Verbose parsing output
    #[serde(default)]
    pub verbose: bool,
}

impl Config {
    /// Load configuration from all sources with proper precedence
    pub fn load() -> Result<(Self, PathBuf)> {
        let args = Args::parse();
        Self::from_args(args)
    }

    /// Build the configuration from already-parsed arguments
    pub fn from_args(args: Args) -> Result<(Self, PathBuf)> {
        // Start with defaults
        let mut config = Config::default();

        // Load from JSON file if provided
        if let Some(config_path) = &args.config {
            let json_config = Self::load_from_file(config_path)?;
            config.merge(json_config);
        }

        // Override with command-line arguments
        config.data.extension = args.extension;
        if args.spreadsheet.is_some() {
            config.data.spreadsheet = args.spreadsheet;
        }
        config.data.sheet = args.sheet;
        config.output.format = args.format;
        if args.output.is_some() {
            config.output.path = args.output;
        }
        config.log_level = args.log_level;
        config.verbose = config.verbose || args.verbose;

        Ok((config, args.report_dir))
    }

    /// Load configuration from a JSON file
    fn load_from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Merge another config into this one (other takes precedence)
    fn merge(&mut self, other: Config) {
        self.data.extension = other.data.extension;
        if other.data.spreadsheet.is_some() {
            self.data.spreadsheet = other.data.spreadsheet;
        }
        self.data.sheet = other.data.sheet;
        self.output = other.output;
        self.log_level = other.log_level;
        self.verbose = other.verbose;
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.data.extension.is_empty() {
            return Err(FerrelError::Config {
                message: "Report file extension cannot be empty".to_string(),
            });
        }

        if self.data.sheet.is_empty() {
            return Err(FerrelError::Config {
                message: "Worksheet name cannot be empty".to_string(),
            });
        }

        match self.output.format.as_str() {
            "csv" | "json" => {}
            _ => {
                return Err(FerrelError::Config {
                    message: format!(
                        "Invalid output format: {}. Must be one of: csv, json",
                        self.output.format
                    ),
                });
            }
        }

        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(FerrelError::Config {
                    message: format!(
                        "Invalid log level: {}. Must be one of: trace, debug, info, warn, error",
                        self.log_level
                    ),
                });
            }
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data: DataConfig::default(),
            output: OutputConfig::default(),
            log_level: default_log_level(),
            verbose: false,
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            extension: default_extension(),
            spreadsheet: None,
            sheet: default_sheet(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            path: None,
        }
    }
}

// Default value functions for serde
fn default_extension() -> String {
    "webarchive".to_string()
}

fn default_sheet() -> String {
    "DATA".to_string()
}

fn default_format() -> String {
    "csv".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}
