use crate::domain::model::{Currency, CurrencyUnit};
use crate::domain::ports::CurrencyProvider;
use crate::utils::error::{ConversionError, Result};
use crate::utils::validation::{validate_non_empty_list, validate_non_empty_string, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    pub currency: Currency,
    pub shell: ShellConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    pub prompt: String,
    pub exit_keywords: Vec<String>,
    pub stop_on_error: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: "Enter currency number to convert into words: ".to_string(),
            exit_keywords: vec!["exit".to_string(), "quit".to_string()],
            stop_on_error: false,
        }
    }
}

impl ConverterConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| ConversionError::Config {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }
}

impl CurrencyProvider for ConverterConfig {
    fn unit(&self) -> &CurrencyUnit {
        &self.currency.unit
    }

    fn subunit(&self) -> &CurrencyUnit {
        &self.currency.subunit
    }
}

impl Validate for ConverterConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("currency.unit.singular", &self.currency.unit.singular)?;
        validate_non_empty_string("currency.unit.plural", &self.currency.unit.plural)?;
        validate_non_empty_string("currency.subunit.singular", &self.currency.subunit.singular)?;
        validate_non_empty_string("currency.subunit.plural", &self.currency.subunit.plural)?;
        validate_non_empty_list("shell.exit_keywords", &self.shell.exit_keywords)?;
        Ok(())
    }
}
