use clap::error::ErrorKind;
use clap::Parser;
use loan_underwriting::config::TelemetryConfig;
use loan_underwriting::error::AppError;
use loan_underwriting::telemetry;
use loan_underwriting::workflows::underwriting::load_application;
use loan_underwriting::UnderwritingEvaluator;
use std::path::PathBuf;
use tracing::debug;

const USAGE: &str = "Usage: underwrite <path_to_application.json>";

#[derive(Parser, Debug)]
#[command(
    name = "underwrite",
    about = "Evaluate a loan application document and print the underwriting decision as JSON",
    version
)]
struct Cli {
    /// Path to the application JSON document
    application: PathBuf,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(_) => {
            eprintln!("{USAGE}");
            std::process::exit(1);
        }
    };

    if let Err(err) = run(cli) {
        match err {
            AppError::Intake(_) => eprintln!("{err}"),
            _ => eprintln!("application error: {err}"),
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    if let Err(err) = telemetry::init_or_default(&TelemetryConfig::load()) {
        eprintln!("warning: {err}");
    }

    debug!(path = %cli.application.display(), "loading application document");
    let document = load_application(&cli.application)?;

    let decision = UnderwritingEvaluator::new().evaluate(&document);
    let rendered = serde_json::to_string_pretty(&decision).map_err(std::io::Error::from)?;
    println!("{rendered}");

    Ok(())
}
