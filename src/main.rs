mod cli;

use clap::Parser;

use cli::{Cli, Commands};
use ledger_import::review::ImportStatus;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Parse {
            file,
            format,
            account_id,
            currency,
            json,
        } => cli::parse::run(&file, format.as_deref(), account_id, currency.as_deref(), json)
            .await
            .map(|status| status != ImportStatus::Unusable),
        Commands::Formats => {
            cli::formats::list();
            Ok(true)
        }
        Commands::Config { format, currency } => {
            cli::config::run(format.as_deref(), currency.as_deref()).map(|_| true)
        }
    };

    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
