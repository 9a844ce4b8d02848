//! Local configuration

use std::path::{Path, PathBuf};

use crate::fmt::{LabelOptions, SymbolChoice, Units};

/// Harness configuration
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct Config {
    /// Dataset discovery config
    pub data: DataConfig,

    /// Axis label config
    pub labels: LabelConfig,
}

/// Dataset discovery config
#[derive(Debug, serde::Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Directory tree to scan for result files
    pub root: PathBuf,
    /// Filename glob result files must match
    pub pattern: String,
    /// Skip result files whose path match any of theses regexs
    #[serde(with = "serde_regex")]
    pub exclude: Vec<regex::Regex>,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            pattern: "*.csv".to_owned(),
            exclude: Vec::new(),
        }
    }
}

/// Axis label config
#[derive(Debug, serde::Deserialize)]
#[serde(default)]
pub struct LabelConfig {
    /// Magnitude symbol, "auto" or one symbol of the selected base's set
    pub symbol: String,
    /// Unit base name, "si" for base 1000, anything else for base 1024
    pub units: String,
    /// Decimal places of scaled values
    pub precision: usize,
    /// Literal string appended after the symbol
    pub suffix: String,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            symbol: "auto".to_owned(),
            units: String::new(),
            precision: 0,
            suffix: String::new(),
        }
    }
}

impl From<&LabelConfig> for LabelOptions {
    /// Resolve raw configuration strings into formatter options
    fn from(cfg: &LabelConfig) -> Self {
        let symbol = if cfg.symbol == "auto" {
            SymbolChoice::Auto
        } else {
            SymbolChoice::Fixed(cfg.symbol.clone())
        };
        Self {
            symbol,
            units: Units::from_name(&cfg.units),
            precision: cfg.precision,
            suffix: cfg.suffix.clone(),
        }
    }
}

/// Parse configuration from a TOML file
pub fn parse_config(path: &Path) -> anyhow::Result<Config> {
    let toml_data = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&toml_data)?)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use crate::fmt::LabelFormatter;

    use super::*;

    #[test]
    fn test_parse_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("benchplot.toml");
        fs::write(
            &path,
            r#"
[data]
root = "results"
pattern = "*_index_*.csv"
exclude = ["Warmup", "\\.bak"]

[labels]
units = "si"
suffix = "B"
"#,
        )
        .unwrap();
        let config = parse_config(&path).unwrap();
        assert_eq!(config.data.root, PathBuf::from("results"));
        assert_eq!(config.data.pattern, "*_index_*.csv");
        assert_eq!(config.data.exclude.len(), 2);
        assert!(config.data.exclude[0].is_match("2023_Warmup_run.csv"));
        let options = LabelOptions::from(&config.labels);
        assert_eq!(options.symbol, SymbolChoice::Auto);
        assert_eq!(options.units, Units::Si);
        assert_eq!(options.precision, 0);
        assert_eq!(options.suffix, "B");
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.data.pattern, "*.csv");
        let options = LabelOptions::from(&config.labels);
        assert_eq!(options.units, Units::Binary);
        assert!(LabelFormatter::new(options).is_ok());
    }

    #[test]
    fn test_fixed_symbol_config() {
        let config: Config = toml::from_str(
            r#"
[labels]
symbol = "M"
units = "si"
precision = 1
"#,
        )
        .unwrap();
        let options = LabelOptions::from(&config.labels);
        assert_eq!(options.symbol, SymbolChoice::Fixed("M".to_owned()));
        assert_eq!(options.precision, 1);
        // symbol validity is only checked at formatter construction
        assert!(LabelFormatter::new(options).is_ok());
        let bad: Config = toml::from_str("[labels]\nsymbol = \"Q\"\n").unwrap();
        assert!(LabelFormatter::new(LabelOptions::from(&bad.labels)).is_err());
    }
}
