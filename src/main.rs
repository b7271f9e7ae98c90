use std::io::{self, BufRead};
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use authlog::config::{self, Config};
use authlog::logging::{self, ExportFormat, LogStore, Severity, TracingSink};

/// Logger name used for stdin lines without one
const STDIN_LOGGER: &str = "stdin";

fn main() -> Result<()> {
    let config = Config::load()?;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| config.log_filter.as_str().into());
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr).with_target(true))
        .init();

    let store = Arc::new(LogStore::from_config(&config, Arc::new(TracingSink)));
    tracing::info!("Log threshold: {}", store.threshold());

    for line in io::stdin().lock().lines() {
        let line = line.context("Failed to read stdin")?;
        if line.trim().is_empty() {
            continue;
        }
        let (severity, name, message) = parse_input_line(&line);
        store.record(severity, name, message, None);
    }

    let path = logging::export_to_dir(&store, &config::exports_dir(), ExportFormat::Text)?;
    println!("{}", path.display());
    Ok(())
}

/// Parse `LEVEL name: message`
///
/// Lines without a recognized level are recorded at INFO under `stdin`.
fn parse_input_line(line: &str) -> (Severity, &str, &str) {
    let line = line.trim();

    let (severity, rest) = match line.split_once(' ') {
        Some((head, rest)) => match head.parse::<Severity>() {
            Ok(severity) => (severity, rest.trim_start()),
            Err(_) => return (Severity::Info, STDIN_LOGGER, line),
        },
        None => return (Severity::Info, STDIN_LOGGER, line),
    };

    match rest.split_once(": ") {
        Some((name, message)) if !name.contains(' ') => (severity, name, message),
        _ => (severity, STDIN_LOGGER, rest),
    }
}
