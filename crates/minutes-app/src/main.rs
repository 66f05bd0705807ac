//! Minutes application binary - composition root.
//!
//! 1. Resolve configuration and logging
//! 2. Construct the annotator in full or degraded mode and the date parser
//! 3. Read notes from a file or stdin, optionally as a JSON request
//! 4. Run the extractor and print the result as JSON on stdout

mod cli;
mod input;

use std::io::Read;
use std::sync::Arc;

use clap::Parser;
use minutes_core::config::AnnotatorMode;
use minutes_core::{Annotator, MinutesConfig};
use minutes_extract::ActionItemExtractor;
use minutes_nlp::{FuzzyDateParser, RuleAnnotator};
use serde::Serialize;

use cli::CliArgs;
use input::{parse_reference_date, ExtractRequest};

/// Annotator health report printed by `--status`.
#[derive(Debug, Serialize)]
struct Status<'a> {
    status: &'static str,
    annotator: &'a str,
    mode: &'static str,
}

fn read_notes(args: &CliArgs) -> std::io::Result<String> {
    match &args.file {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<(), serde_json::Error> {
    let out = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{out}");
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    // Config is read before tracing so the file can set the log level;
    // the outcome is reported once the subscriber is up.
    let config_file = args.resolve_config_path();
    let loaded = config_file
        .exists()
        .then(|| MinutesConfig::load(&config_file));
    let config = match &loaded {
        Some(Ok(config)) => config.clone(),
        _ => MinutesConfig::default(),
    };

    // Tracing. Logs go to stderr; stdout carries the JSON result.
    let env_level = args.resolve_log_level(&config.general.log_level);
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_new(&env_level)
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    match loaded {
        Some(Ok(_)) => tracing::info!(path = %config_file.display(), "Configuration loaded"),
        Some(Err(e)) => tracing::warn!(
            path = %config_file.display(),
            error = %e,
            "Failed to load config, using defaults"
        ),
        None => tracing::debug!(path = %config_file.display(), "No configuration file, using defaults"),
    }

    tracing::info!("Starting minutes v{}", env!("CARGO_PKG_VERSION"));

    let mode = if args.degraded {
        AnnotatorMode::Degraded
    } else {
        config.annotator.mode
    };
    let annotator: Arc<dyn Annotator> = Arc::new(RuleAnnotator::new(mode));

    if args.status {
        let status = Status {
            status: "ok",
            annotator: annotator.name(),
            mode: mode.as_str(),
        };
        print_json(&status, args.pretty)?;
        return Ok(());
    }

    let reference = args.today.as_deref().map(parse_reference_date).transpose()?;

    let raw = read_notes(&args)?;
    let notes = if args.json {
        ExtractRequest::from_json(&raw)?.notes
    } else {
        raw
    };

    let extractor = ActionItemExtractor::new(annotator, Arc::new(FuzzyDateParser::new()))
        .with_config(config.extraction);
    let result = extractor.extract_action_items(&notes, reference);

    print_json(&result, args.pretty)?;
    Ok(())
}
