//! Salary guide CLI.

use clap::{ColorChoice, Parser};
use salary_cli::config::Settings;
use salary_cli::logging::{LogConfig, LogFormat, init_logging};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{run_browse, run_convert, run_locations, run_options, run_years};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let result = Settings::from_sources(cli.assets.as_deref(), cli.config.as_deref()).and_then(
        |settings| match &cli.command {
            Command::Years => run_years(&settings),
            Command::Locations(args) => run_locations(&settings, args),
            Command::Browse(args) => run_browse(&settings, args),
            Command::Options(args) => run_options(&settings, args),
            Command::Convert(args) => run_convert(args),
        },
    );
    let exit_code = match result {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.log_data = cli.log_data;
    config.with_timestamps = cli.log_timestamps;
    config.with_target = cli.log_target;
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_and_target_flags_reach_log_config() {
        let cli = Cli::parse_from(["salary-guide", "years"]);
        let config = log_config_from_cli(&cli);
        assert!(!config.with_timestamps);
        assert!(!config.with_target);

        let cli = Cli::parse_from([
            "salary-guide",
            "--log-timestamps",
            "--log-target",
            "--log-format",
            "compact",
            "years",
        ]);
        let config = log_config_from_cli(&cli);
        assert!(config.with_timestamps);
        assert!(config.with_target);
        assert_eq!(config.format, LogFormat::Compact);
    }

    #[test]
    fn desc_without_sort_flag_parses() {
        let cli = Cli::parse_from(["salary-guide", "browse", "--desc"]);
        let Command::Browse(args) = cli.command else {
            panic!("expected browse");
        };
        assert!(args.desc);
        assert!(args.sort.is_none());
    }
}
