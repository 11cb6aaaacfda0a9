use crate::config::toml_config::ShellConfig;
use crate::core::converter::NumberToWordsConverter;
use crate::domain::ports::CurrencyProvider;
use crate::utils::error::Result;
use std::io::{BufRead, Write};

/// Counts of what a finished loop did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoopSummary {
    pub converted: usize,
    pub failed: usize,
}

/// Prompt, read a line, print its words, repeat until an exit keyword or end of input.
pub struct InputLoop<C: CurrencyProvider> {
    converter: NumberToWordsConverter<C>,
    shell: ShellConfig,
}

impl<C: CurrencyProvider> InputLoop<C> {
    pub fn new(converter: NumberToWordsConverter<C>, shell: ShellConfig) -> Self {
        Self { converter, shell }
    }

    pub fn run<R: BufRead, W: Write>(&self, mut reader: R, mut writer: W) -> Result<LoopSummary> {
        let mut summary = LoopSummary::default();

        loop {
            write!(writer, "{}", self.shell.prompt)?;
            writer.flush()?;

            let mut line = String::new();
            if reader.read_line(&mut line)? == 0 {
                tracing::debug!("End of input reached");
                break;
            }

            if self.is_exit_keyword(line.trim()) {
                tracing::debug!("Exit keyword received");
                break;
            }

            let input = line.trim_end_matches(['\r', '\n']);
            match self.converter.convert(input) {
                Ok(words) => {
                    writeln!(writer, "{}", words)?;
                    writeln!(writer)?;
                    summary.converted += 1;
                }
                Err(e) => {
                    tracing::warn!("Conversion of '{}' failed: {} ({:?})", input, e, e.category());
                    writeln!(writer, "{}", e.user_friendly_message())?;
                    writeln!(writer)?;
                    summary.failed += 1;
                    if self.shell.stop_on_error {
                        break;
                    }
                }
            }
        }

        Ok(summary)
    }

    fn is_exit_keyword(&self, line: &str) -> bool {
        self.shell.exit_keywords.iter().any(|keyword| keyword == line)
    }
}
