use super::{DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH};
use crate::core::generator::DEFAULT_STOP_RANGE;
use crate::core::{BatchSpec, ConfigProvider};
use crate::domain::model::default_plan;
use crate::utils::error::{Result, RouteGenError};
use crate::utils::validation::{validate_path, validate_plan, validate_stop_range, Validate};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::path::Path;

/// ```toml
/// [input]
/// path = "airportcodes.txt"
///
/// [output]
/// path = "routes.txt"
///
/// [generation]
/// seed = 42
/// min_stops = 2
/// max_stops = 5
///
/// [[batches]]
/// origin = "LAX"
/// count = 5
/// ```
///
/// Every section is optional; missing values keep the built-in run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub generation: GenerationConfig,
    #[serde(default = "default_plan")]
    pub batches: Vec<BatchSpec>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerationConfig {
    pub seed: Option<u64>,
    pub min_stops: Option<usize>,
    pub max_stops: Option<usize>,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            path: DEFAULT_INPUT_PATH.to_string(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: DEFAULT_OUTPUT_PATH.to_string(),
        }
    }
}

impl Default for TomlConfig {
    fn default() -> Self {
        Self {
            input: InputConfig::default(),
            output: OutputConfig::default(),
            generation: GenerationConfig::default(),
            batches: default_plan(),
        }
    }
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content =
            std::fs::read_to_string(&path).map_err(|e| RouteGenError::ConfigError {
                message: format!("cannot read {}: {}", path.as_ref().display(), e),
            })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| RouteGenError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 命令列的 seed 優先於設定檔
    pub fn with_seed_override(mut self, seed: Option<u64>) -> Self {
        if seed.is_some() {
            self.generation.seed = seed;
        }
        self
    }

    pub fn min_stops(&self) -> usize {
        self.generation.min_stops.unwrap_or(*DEFAULT_STOP_RANGE.start())
    }

    pub fn max_stops(&self) -> usize {
        self.generation.max_stops.unwrap_or(*DEFAULT_STOP_RANGE.end())
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_path("input.path", &self.input.path)?;
        validate_path("output.path", &self.output.path)?;
        validate_stop_range(self.min_stops(), self.max_stops())?;
        validate_plan("batches", &self.batches)
    }
}

impl ConfigProvider for TomlConfig {
    fn input_path(&self) -> &str {
        &self.input.path
    }

    fn output_path(&self) -> &str {
        &self.output.path
    }

    fn batches(&self) -> &[BatchSpec] {
        &self.batches
    }

    fn stop_range(&self) -> RangeInclusive<usize> {
        self.min_stops()..=self.max_stops()
    }

    fn seed(&self) -> Option<u64> {
        self.generation.seed
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_toml_config() {
        let toml_content = r#"
[input]
path = "data/codes.txt"

[output]
path = "data/routes.txt"

[generation]
seed = 42
min_stops = 3
max_stops = 4

[[batches]]
origin = "SEA"
count = 2

[[batches]]
origin = "PDX"
count = 7
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.input_path(), "data/codes.txt");
        assert_eq!(config.output_path(), "data/routes.txt");
        assert_eq!(config.seed(), Some(42));
        assert_eq!(config.stop_range(), 3..=4);
        assert_eq!(
            config.batches(),
            &[BatchSpec::new("SEA", 2), BatchSpec::new("PDX", 7)]
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();

        assert_eq!(config.input_path(), "airportcodes.txt");
        assert_eq!(config.output_path(), "routes.txt");
        assert_eq!(config.stop_range(), 2..=5);
        assert_eq!(config.batches(), default_plan().as_slice());
        assert_eq!(config.seed(), None);
    }

    #[test]
    fn test_seed_override() {
        let config = TomlConfig::from_toml_str("[generation]\nseed = 1\n").unwrap();

        assert_eq!(config.clone().with_seed_override(None).seed(), Some(1));
        assert_eq!(config.with_seed_override(Some(9)).seed(), Some(9));
    }

    #[test]
    fn test_config_validation() {
        let inverted =
            TomlConfig::from_toml_str("[generation]\nmin_stops = 5\nmax_stops = 2\n").unwrap();
        assert!(inverted.validate().is_err());

        let zero = TomlConfig::from_toml_str("[generation]\nmin_stops = 0\n").unwrap();
        assert!(zero.validate().is_err());

        let no_batches = TomlConfig::from_toml_str("batches = []\n").unwrap();
        assert!(no_batches.validate().is_err());

        let huge_count = TomlConfig::from_toml_str(
            "[[batches]]\norigin = \"LAX\"\ncount = 1000000000000000000\n",
        )
        .unwrap();
        assert!(huge_count.validate().is_err());
    }

    #[test]
    fn test_invalid_toml_is_rejected() {
        let err = TomlConfig::from_toml_str("[generation\nseed = ").unwrap_err();
        assert!(matches!(err, RouteGenError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[output]\npath = \"file-test.txt\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.output_path(), "file-test.txt");
    }
}
