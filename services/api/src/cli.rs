use crate::server;
use clap::{Args, Parser, Subcommand};
use loan_underwriting::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Loan Underwriting Service",
    about = "Serve the loan underwriting evaluator over HTTP",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serve_is_the_default_command() {
        let cli = Cli::try_parse_from(["loan-underwriting-api"]).expect("no arguments parse");
        assert!(cli.command.is_none());
    }

    #[test]
    fn serve_accepts_host_and_port_overrides() {
        let cli = Cli::try_parse_from([
            "loan-underwriting-api",
            "serve",
            "--host",
            "0.0.0.0",
            "--port",
            "8088",
        ])
        .expect("serve arguments parse");

        match cli.command {
            Some(Command::Serve(args)) => {
                assert_eq!(args.host.as_deref(), Some("0.0.0.0"));
                assert_eq!(args.port, Some(8088));
            }
            other => panic!("expected serve command, got {other:?}"),
        }
    }
}
