pub mod toml_config;

use crate::adapters::exporter::DEFAULT_EXPORTER;
use crate::domain::model::{ColumnLayout, OutputFormat};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_positive_number, Validate,
};
use toml_config::{validate_layout, TomlConfig};

pub const DEFAULT_TOP_N: usize = 5;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, clap::Parser)]
#[command(name = "yaf-reader")]
#[command(about = "Analyze network flows from a YAF file")]
pub struct CliConfig {
    /// Path to input file (.yaf)
    pub file: String,

    /// Number of entries per field in the top report
    #[arg(short = 'n', long)]
    pub top_n: Option<usize>,

    /// Report format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Optional TOML settings file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Exporter binary to run on .yaf files
    #[arg(long)]
    pub exporter: Option<String>,

    /// Directory holding the companion .yaf.txt file
    #[arg(long, default_value = ".")]
    pub work_dir: String,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

/// Effective settings after merging the settings file with command line flags.
#[derive(Debug, Clone)]
pub struct Settings {
    pub exporter_program: String,
    pub column_layout: ColumnLayout,
    pub top_n: usize,
    pub output_format: OutputFormat,
    pub work_dir: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            exporter_program: DEFAULT_EXPORTER.to_string(),
            column_layout: ColumnLayout::default(),
            top_n: DEFAULT_TOP_N,
            output_format: OutputFormat::Text,
            work_dir: ".".to_string(),
        }
    }
}

impl Settings {
    pub fn from_toml(file: &TomlConfig) -> Self {
        let defaults = Settings::default();
        Self {
            exporter_program: file
                .exporter
                .program
                .clone()
                .unwrap_or(defaults.exporter_program),
            column_layout: file.columnar,
            top_n: file.report.top_n.unwrap_or(defaults.top_n),
            output_format: file.report.format.unwrap_or(defaults.output_format),
            work_dir: defaults.work_dir,
        }
    }

    /// Loads the settings file named on the command line (if any) and
    /// applies flag overrides on top of it.
    #[cfg(feature = "cli")]
    pub fn from_cli(cli: &CliConfig) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => {
                tracing::info!("Loading configuration from: {}", path);
                TomlConfig::from_file(path)?
            }
            None => TomlConfig::default(),
        };
        file.validate()?;

        let mut settings = Settings::from_toml(&file);
        if let Some(program) = &cli.exporter {
            settings.exporter_program = program.clone();
        }
        if let Some(top_n) = cli.top_n {
            settings.top_n = top_n;
        }
        if let Some(format) = cli.format {
            settings.output_format = format;
        }
        settings.work_dir = cli.work_dir.clone();
        Ok(settings)
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("exporter", &self.exporter_program)?;
        validate_positive_number("top_n", self.top_n, 1)?;
        validate_path("work_dir", &self.work_dir)?;
        validate_layout(&self.column_layout)
    }
}

impl ConfigProvider for Settings {
    fn exporter_program(&self) -> &str {
        &self.exporter_program
    }

    fn column_layout(&self) -> ColumnLayout {
        self.column_layout
    }

    fn top_n(&self) -> usize {
        self.top_n
    }

    fn output_format(&self) -> OutputFormat {
        self.output_format
    }

    fn work_dir(&self) -> &str {
        &self.work_dir
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let cli = CliConfig::parse_from(["yaf-reader", "capture.yaf"]);
        let settings = Settings::from_cli(&cli).unwrap();

        assert_eq!(cli.file, "capture.yaf");
        assert_eq!(settings.exporter_program, "yafscii");
        assert_eq!(settings.top_n, 5);
        assert_eq!(settings.output_format, OutputFormat::Text);
        assert_eq!(settings.work_dir, ".");
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_flags_override_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[exporter]\nprogram = \"yafscii2\"\n[report]\ntop_n = 3\nformat = \"json\"\n")
            .unwrap();
        let config_path = temp_file.path().to_str().unwrap().to_string();

        let cli = CliConfig::parse_from([
            "yaf-reader",
            "capture.yaf",
            "--config",
            &config_path,
            "--top-n",
            "7",
        ]);
        let settings = Settings::from_cli(&cli).unwrap();

        assert_eq!(settings.exporter_program, "yafscii2");
        assert_eq!(settings.top_n, 7);
        assert_eq!(settings.output_format, OutputFormat::Json);
    }

    #[test]
    fn test_config_provider_reflects_flags() {
        let cli = CliConfig::parse_from([
            "yaf-reader",
            "capture.yaf",
            "--exporter",
            "/opt/yaf/bin/yafscii",
            "--work-dir",
            "/data/captures",
        ]);
        let settings = Settings::from_cli(&cli).unwrap();

        assert_eq!(settings.exporter_program(), "/opt/yaf/bin/yafscii");
        assert_eq!(settings.work_dir(), "/data/captures");
        assert_eq!(settings.column_layout(), ColumnLayout::default());
    }

    #[test]
    fn test_zero_top_n_fails_validation() {
        let cli = CliConfig::parse_from(["yaf-reader", "capture.yaf", "-n", "0"]);
        let settings = Settings::from_cli(&cli).unwrap();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_format_flag() {
        let cli = CliConfig::parse_from(["yaf-reader", "capture.yaf", "--format", "json"]);
        assert_eq!(cli.format, Some(OutputFormat::Json));
    }
}
