//! Mapping from parsed command-line flags to build and logging settings.

use std::io::{self, IsTerminal};

use clap::ColorChoice;
use tracing::level_filters::LevelFilter;
use usdm_api::{BuildOptions, IdStrategy};

use crate::cli::{Cli, LogFormatArg, LogLevelArg};
use crate::logging::{LogConfig, LogFormat};

/// Build options for the `minimum` and `sample` commands.
pub fn build_options(cli: &Cli) -> BuildOptions {
    let mut options = BuildOptions::default()
        .with_system(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    if let Some(version) = &cli.code_system_version {
        options = options.with_cdisc_code_system_version(version.clone());
    }
    if let Some(system) = &cli.sponsor_code_system {
        options = options
            .with_sponsor_code_system(system.clone(), cli.sponsor_code_system_version.clone());
    }
    if cli.uuid_ids {
        options = options.with_id_strategy(IdStrategy::Uuid);
    }
    options
}

/// Logging configuration with consistent precedence: `--log-level` beats
/// `-v/-q`, and either one disables the `RUST_LOG` override.
pub fn log_config(cli: &Cli) -> LogConfig {
    let level_filter = match cli.log_level {
        Some(LogLevelArg::Error) => LevelFilter::ERROR,
        Some(LogLevelArg::Warn) => LevelFilter::WARN,
        Some(LogLevelArg::Info) => LevelFilter::INFO,
        Some(LogLevelArg::Debug) => LevelFilter::DEBUG,
        Some(LogLevelArg::Trace) => LevelFilter::TRACE,
        None => cli.verbosity.tracing_level_filter(),
    };
    let format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    let ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    LogConfig::default()
        .with_level_filter(level_filter)
        .with_env_filter(!(cli.verbosity.is_present() || cli.log_level.is_some()))
        .with_format(format)
        .with_ansi(ansi)
        .with_log_file(cli.log_file.clone())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("usdm").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults_name_this_package() {
        let options = build_options(&parse(&["sample"]));
        assert_eq!(options.system_name, "usdm-cli");
        assert_eq!(options.id_strategy, IdStrategy::Sequential);
        assert_eq!(options.cdisc_code_system_version, "2023-12-15");
        assert_eq!(options.sponsor_code_system, "SPONSOR");
    }

    #[test]
    fn log_level_overrides_verbosity() {
        let config = log_config(&parse(&["-vv", "--log-level", "error", "sample"]));
        assert_eq!(config.level_filter, LevelFilter::ERROR);
        assert!(!config.use_env_filter);
    }

    #[test]
    fn log_file_gets_timestamps_without_color() {
        let config = log_config(&parse(&[
            "--color",
            "auto",
            "--log-format",
            "compact",
            "--log-file",
            "usdm.log",
            "sample",
        ]));
        assert_eq!(config.format, LogFormat::Compact);
        assert!(config.use_env_filter);
        assert!(!config.with_ansi);
        assert!(config.with_timestamps);
    }
}
