use anyhow::Context;
use clap::Parser;
use small_checks::app;
use small_checks::utils::{logger, validation::Validate};
use small_checks::CliConfig;
use std::io::Write;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if let Err(e) = config.validate() {
        eprintln!("❌ {}", e);
        std::process::exit(e.exit_code());
    }

    let file_config = match config.load_file_config() {
        Ok(file_config) => file_config,
        Err(e) => {
            eprintln!(
                "❌ Failed to load config file '{}': {}",
                config.config.as_deref().unwrap_or_default(),
                e
            );
            std::process::exit(e.exit_code());
        }
    };

    logger::init_cli_logger(
        config.verbose,
        file_config.log_level(),
        config.log_format(&file_config),
    );

    tracing::info!("Starting small-checks");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
        tracing::debug!("File config: {:?}", file_config);
    }

    let rendered = app::run(&config, &file_config).and_then(|outcome| outcome.render(config.json));
    match rendered {
        Ok(output) => {
            writeln!(std::io::stdout(), "{}", output).context("writing result to stdout")?;
        }
        Err(e) => {
            tracing::error!("❌ {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(e.exit_code());
        }
    }

    Ok(())
}
