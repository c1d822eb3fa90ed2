use serde::{Deserialize, Serialize};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

/// Default filter directive when `RUST_LOG` is unset.
pub fn default_directive(verbose: bool, level: Option<&str>) -> String {
    if verbose {
        return "small_checks=debug,info".to_string();
    }
    match level {
        Some(level) => format!("small_checks={level}"),
        None => "small_checks=info".to_string(),
    }
}

pub fn init_cli_logger(verbose: bool, level: Option<&str>, format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, level)));

    let registry = tracing_subscriber::registry().with(filter);
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    match format {
        LogFormat::Compact => registry.with(layer.compact()).init(),
        LogFormat::Json => registry.with(layer.json()).init(),
    }
}
