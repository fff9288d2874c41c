use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use hibp_passcheck::{FailurePolicy, Outcome, TextReporter, run};
use hibp_range_client::{ClientConfig, RangeClient};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "hibp-passcheck")]
#[command(about = "Check passwords from a file against Have I Been Pwned using k-anonymity")]
#[command(version)]
struct Args {
    /// Text file with one password per line
    file: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    match check(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn check(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = ClientConfig::from_env()
        .with_user_agent(concat!("hibp-passcheck/", env!("CARGO_PKG_VERSION")));
    let client = RangeClient::new(config)?;
    let mut reporter = TextReporter::new(io::stdout().lock());

    let outcome =
        run(args.file.as_deref(), &client, &mut reporter, FailurePolicy::Abort).await?;

    if let Outcome::Finished(summary) = outcome {
        println!("\n{summary}\n");
    }

    Ok(())
}
