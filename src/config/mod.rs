pub mod toml_config;

pub const DEFAULT_INPUT_PATH: &str = "airportcodes.txt";
pub const DEFAULT_OUTPUT_PATH: &str = "routes.txt";

#[cfg(feature = "cli")]
pub use cli_config::CliConfig;

#[cfg(feature = "cli")]
mod cli_config {
    use super::{DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH};
    use crate::core::generator::DEFAULT_STOP_RANGE;
    use crate::core::{BatchSpec, ConfigProvider};
    use crate::domain::model::default_plan;
    use crate::utils::error::Result;
    use crate::utils::validation::{validate_path, validate_plan, Validate};
    use clap::Parser;
    use serde::{Deserialize, Serialize};
    use std::ops::RangeInclusive;

    #[derive(Debug, Clone, Serialize, Deserialize, Parser)]
    #[command(name = "make-routes")]
    #[command(about = "Generate synthetic flight routes from a list of airport codes")]
    pub struct CliConfig {
        /// Airport code file, one code per line
        #[arg(long, default_value = DEFAULT_INPUT_PATH, conflicts_with = "config")]
        pub input: String,

        /// Route file to (over)write
        #[arg(long, default_value = DEFAULT_OUTPUT_PATH, conflicts_with = "config")]
        pub output: String,

        /// Seed for the random source; a fresh one is drawn and logged when omitted
        #[arg(long)]
        pub seed: Option<u64>,

        /// TOML configuration file; owns the input, output and batch settings
        #[arg(short, long)]
        pub config: Option<String>,

        #[arg(short, long, help = "Enable verbose output")]
        pub verbose: bool,

        /// Load and validate everything without writing the route file
        #[arg(long)]
        pub dry_run: bool,

        #[arg(skip = default_plan())]
        pub batches: Vec<BatchSpec>,
    }

    impl ConfigProvider for CliConfig {
        fn input_path(&self) -> &str {
            &self.input
        }

        fn output_path(&self) -> &str {
            &self.output
        }

        fn batches(&self) -> &[BatchSpec] {
            &self.batches
        }

        fn stop_range(&self) -> RangeInclusive<usize> {
            DEFAULT_STOP_RANGE
        }

        fn seed(&self) -> Option<u64> {
            self.seed
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            validate_path("input", &self.input)?;
            validate_path("output", &self.output)?;
            validate_plan("batches", &self.batches)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_defaults_reproduce_fixed_run() {
            let config = CliConfig::parse_from(["make-routes"]);

            assert_eq!(config.input_path(), "airportcodes.txt");
            assert_eq!(config.output_path(), "routes.txt");
            assert_eq!(config.batches(), default_plan().as_slice());
            assert_eq!(config.stop_range(), 2..=5);
            assert_eq!(config.seed(), None);
            assert!(config.validate().is_ok());
        }

        #[test]
        fn test_overrides() {
            let config = CliConfig::parse_from([
                "make-routes",
                "--input",
                "codes.txt",
                "--output",
                "out/routes.txt",
                "--seed",
                "1234",
                "--dry-run",
            ]);

            assert_eq!(config.input_path(), "codes.txt");
            assert_eq!(config.output_path(), "out/routes.txt");
            assert_eq!(config.seed(), Some(1234));
            assert!(config.dry_run);
        }

        #[test]
        fn test_empty_output_is_invalid() {
            let config = CliConfig::parse_from(["make-routes", "--output", ""]);
            assert!(config.validate().is_err());
        }

        #[test]
        fn test_config_file_rejects_path_flags() {
            for flag in ["--input", "--output"] {
                let parsed = CliConfig::try_parse_from([
                    "make-routes",
                    "--config",
                    "routes.toml",
                    flag,
                    "other.txt",
                ]);
                assert!(parsed.is_err(), "{} should conflict with --config", flag);
            }

            let config =
                CliConfig::try_parse_from(["make-routes", "--config", "routes.toml", "--seed", "7"])
                    .unwrap();
            assert_eq!(config.config.as_deref(), Some("routes.toml"));
            assert_eq!(config.seed(), Some(7));
        }
    }
}
