use anyhow::Context;
use clap::Parser;
use currency_words::utils::{logger, validation::Validate};
use currency_words::{CliConfig, ConverterConfig, ErrorCategory, InputLoop, NumberToWordsConverter};
use std::io;

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting currency-words");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let mut config = match &cli.config {
        Some(path) => ConverterConfig::from_file(path)
            .with_context(|| format!("Failed to load config file '{}'", path.display()))?,
        None => ConverterConfig::default(),
    };

    if cli.stop_on_error {
        config.shell.stop_on_error = true;
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e.user_friendly_message());
        std::process::exit(1);
    }

    let converter = NumberToWordsConverter::new(config.currency);

    if !cli.amounts.is_empty() {
        let mut exit_code = 0;
        for amount in &cli.amounts {
            match converter.convert(amount.as_str()) {
                Ok(words) => println!("{}", words),
                Err(e) => {
                    tracing::error!("Conversion of '{}' failed: {} ({:?})", amount, e, e.category());
                    eprintln!("{}", e.user_friendly_message());
                    exit_code = match e.category() {
                        ErrorCategory::Input => 2,
                        _ => 1,
                    };
                    if config.shell.stop_on_error {
                        break;
                    }
                }
            }
        }
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
        return Ok(());
    }

    let input_loop = InputLoop::new(converter, config.shell);
    let summary = input_loop
        .run(io::stdin().lock(), io::stdout().lock())
        .context("Interactive input loop failed")?;

    tracing::info!(
        "Finished: {} converted, {} failed",
        summary.converted,
        summary.failed
    );
    Ok(())
}
