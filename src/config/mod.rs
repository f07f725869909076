pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use self::command_line::{CliConfig, Command, LogFormat};

#[cfg(feature = "cli")]
mod command_line {
    use super::toml_config::TomlConfig;
    use crate::core::context::DEFAULT_FOREST_SIZE;
    use crate::core::ConfigProvider;
    use crate::domain::model::Category;
    use crate::utils::error::{CatalogError, Result};
    use crate::utils::validation::{validate_path, validate_range, Validate};
    use clap::{Parser, Subcommand, ValueEnum};

    #[derive(Debug, Clone, Parser)]
    #[command(name = "pattern-catalog")]
    #[command(about = "A catalogue of runnable design-pattern demos")]
    pub struct CliConfig {
        #[command(subcommand)]
        pub command: Command,

        /// Path to a TOML configuration file
        #[arg(short, long, global = true)]
        pub config: Option<String>,

        #[arg(short, long, global = true, help = "Enable verbose output")]
        pub verbose: bool,

        #[arg(long, global = true, help = "Log CPU and memory after each demo")]
        pub monitor: bool,

        #[arg(long, global = true, value_enum, default_value = "compact")]
        pub log_format: LogFormat,

        /// Seed for every random choice the demos make
        #[arg(long, global = true)]
        pub seed: Option<u64>,

        /// Skip simulated network latency
        #[arg(long, global = true)]
        pub no_latency: bool,

        #[arg(long, global = true)]
        pub latency_scale: Option<f64>,

        /// Directory for files written by demos
        #[arg(long, global = true)]
        pub scratch_dir: Option<String>,

        /// Number of tree pairs planted by the flyweight demo
        #[arg(long, global = true)]
        pub forest_size: Option<usize>,

        /// Answers for interactive prompts, used before reading stdin
        #[arg(long, global = true, value_delimiter = ',')]
        pub input: Vec<String>,

        #[arg(skip)]
        pub file_config: Option<TomlConfig>,
    }

    #[derive(Debug, Clone, Subcommand)]
    pub enum Command {
        /// List the demos in the catalogue
        List {
            #[arg(long, value_enum)]
            category: Option<Category>,

            #[arg(long)]
            json: bool,
        },
        /// Show the details of one demo
        Show { name: String },
        /// Run demos by name or pattern
        Run {
            selectors: Vec<String>,

            #[arg(long, conflicts_with = "category")]
            all: bool,

            #[arg(long, value_enum)]
            category: Option<Category>,
        },
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
    pub enum LogFormat {
        Compact,
        Json,
    }

    impl CliConfig {
        /// 若有指定 --config 就載入 TOML 檔，命令列參數優先
        pub fn load_file_config(&mut self) -> Result<()> {
            if let Some(path) = &self.config {
                tracing::info!("📁 Loading configuration from: {}", path);
                self.file_config = Some(TomlConfig::from_file(path)?);
            }
            Ok(())
        }

        pub fn monitoring_enabled(&self) -> bool {
            self.monitor
                || self
                    .file_config
                    .as_ref()
                    .map(|f| f.monitoring_enabled())
                    .unwrap_or(false)
        }
    }

    impl ConfigProvider for CliConfig {
        fn seed(&self) -> Option<u64> {
            self.seed
                .or_else(|| self.file_config.as_ref().and_then(|f| f.seed()))
        }

        fn simulate_latency(&self) -> bool {
            if self.no_latency {
                return false;
            }
            self.file_config
                .as_ref()
                .map(|f| f.simulate_latency())
                .unwrap_or(true)
        }

        fn latency_scale(&self) -> f64 {
            self.latency_scale
                .or_else(|| self.file_config.as_ref().map(|f| f.latency_scale()))
                .unwrap_or(1.0)
        }

        fn scratch_dir(&self) -> &str {
            match (&self.scratch_dir, &self.file_config) {
                (Some(dir), _) => dir,
                (None, Some(file)) => file.scratch_dir(),
                (None, None) => ".",
            }
        }

        fn forest_size(&self) -> usize {
            self.forest_size
                .or_else(|| self.file_config.as_ref().map(|f| f.forest_size()))
                .unwrap_or(DEFAULT_FOREST_SIZE)
        }

        fn scripted_input(&self, demo: &str) -> Vec<String> {
            self.file_config
                .as_ref()
                .map(|f| f.scripted_input(demo))
                .unwrap_or_default()
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            if let Some(file) = &self.file_config {
                file.validate()?;
            }

            validate_range("--latency-scale", self.latency_scale(), 0.0, 10.0)?;
            validate_path("--scratch-dir", self.scratch_dir())?;
            validate_range("--forest-size", self.forest_size(), 1, 100_000)?;

            if let Command::Run {
                selectors,
                all,
                category,
            } = &self.command
            {
                if selectors.is_empty() && !all && category.is_none() {
                    return Err(CatalogError::MissingConfigError {
                        field: "run <SELECTORS>... | --all | --category".to_string(),
                    });
                }
            }

            Ok(())
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_parse_run_command() {
            let config = CliConfig::parse_from([
                "pattern-catalog",
                "run",
                "observer",
                "chain-garage",
                "--seed",
                "9",
                "--no-latency",
                "--input",
                "a,b",
            ]);

            match &config.command {
                Command::Run { selectors, all, .. } => {
                    assert_eq!(selectors, &["observer", "chain-garage"]);
                    assert!(!all);
                }
                other => panic!("unexpected command: {:?}", other),
            }
            assert_eq!(config.seed(), Some(9));
            assert!(!config.simulate_latency());
            assert_eq!(config.input, ["a", "b"]);
            assert!(config.validate().is_ok());
        }

        #[test]
        fn test_run_without_selection_is_invalid() {
            let config = CliConfig::parse_from(["pattern-catalog", "run"]);
            assert!(config.validate().is_err());
        }

        #[test]
        fn test_cli_overrides_file() {
            let mut config = CliConfig::parse_from([
                "pattern-catalog",
                "list",
                "--forest-size",
                "4",
            ]);
            config.file_config = Some(
                TomlConfig::from_toml_str(
                    "[catalog]\nname = \"x\"\n[runtime]\nseed = 5\n[demos]\nforest_size = 99\n",
                )
                .unwrap(),
            );

            assert_eq!(config.forest_size(), 4);
            assert_eq!(config.seed(), Some(5));
            assert_eq!(config.scratch_dir(), ".");
        }
    }
}
