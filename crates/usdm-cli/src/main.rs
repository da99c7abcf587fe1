//! USDM builder CLI.

use clap::Parser;
use usdm_cli::cli::Cli;
use usdm_cli::commands::run;
use usdm_cli::logging::init_logging;
use usdm_cli::options::log_config;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    if let Err(error) = init_logging(&log_config(&cli)) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(&cli) {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}
