use clap::Parser;
use log::error;

use row_matcher::cli::Cli;
use row_matcher::{logging, orchestrator};

fn main() {
    logging::init_from_env();

    // Handle clap errors ourselves: every handled failure exits 1, while
    // --help/--version print and exit 0.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    let args = match cli.into_match_args() {
        Ok(args) => args,
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    };

    match orchestrator::run(&args) {
        Ok(summary) => summary.log(),
        Err(e) => {
            error!("{e:#}");
            std::process::exit(1);
        }
    }
}
