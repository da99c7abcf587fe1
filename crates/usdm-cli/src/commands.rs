use anyhow::{Context, Result};
use tracing::info_span;
use usdm_api::{BuildOptions, minimum_with_options, sample_wrapper};

use crate::cli::{Cli, Command, MinimumArgs, OutputArgs, SummaryArgs};
use crate::document::{read_wrapper, write_wrapper};
use crate::options::build_options;
use crate::report::print_summary;

/// Run the parsed command with build options taken from the global flags.
pub fn run(cli: &Cli) -> Result<()> {
    let options = build_options(cli);
    match &cli.command {
        Command::Minimum(args) => run_minimum(args, options),
        Command::Sample(args) => run_sample(args, options),
        Command::Summary(args) => run_summary(args),
    }
}

pub fn run_minimum(args: &MinimumArgs, options: BuildOptions) -> Result<()> {
    let span = info_span!("minimum", identifier = %args.identifier);
    let _guard = span.enter();
    let wrapper = minimum_with_options(
        &args.title,
        &args.identifier,
        &args.protocol_version,
        options,
    )
    .context("build minimum study")?;
    write_wrapper(&wrapper, args.output.path.as_deref(), args.output.compact)
}

pub fn run_sample(args: &OutputArgs, options: BuildOptions) -> Result<()> {
    let span = info_span!("sample");
    let _guard = span.enter();
    let wrapper = sample_wrapper(options).context("build sample study")?;
    write_wrapper(&wrapper, args.path.as_deref(), args.compact)
}

pub fn run_summary(args: &SummaryArgs) -> Result<()> {
    let wrapper = read_wrapper(&args.path)?;
    print_summary(&wrapper);
    Ok(())
}
