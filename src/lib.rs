pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::app::shell::{InputLoop, LoopSummary};
pub use crate::config::toml_config::{ConverterConfig, ShellConfig};
pub use crate::core::converter::{convert, NumberToWordsConverter};
pub use crate::domain::model::{AmountPair, AmountSide, Currency, CurrencyUnit};
pub use crate::domain::ports::CurrencyProvider;
pub use crate::utils::error::{ConversionError, ErrorCategory, Result};
