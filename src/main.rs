use clap::Parser;
use fitcalc::config::RunConfig;
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    run: RunConfig,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // stdout is reserved for the report.
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .init();

    let packages = cli.run.packages().unwrap_or_else(|e| {
        error!("Failed to load workout packages: {}", e);
        process::exit(1);
    });

    let outcome = cmd::run::run(&cli.run, &packages);
    info!("Printed {} workout summaries", outcome.printed);
    if outcome.failures > 0 {
        error!(
            "{} of {} packages failed",
            outcome.failures,
            packages.len()
        );
        process::exit(1);
    }
}
