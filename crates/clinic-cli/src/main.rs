//! Clinic command-line tool.

use std::io::{self, IsTerminal};

use clap::{ColorChoice, Parser};
use clinic_cli::config::{Config, LoadedConfig, load_config};
use clinic_cli::logging::{LogConfig, LogFormat, init_logging};
use clinic_core::LoadStatus;
use tracing::level_filters::LevelFilter;
use tracing::{debug, warn};

mod cli;
mod commands;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg, ReferralCommand};
use crate::commands::{run_list, run_load, run_referral_export, run_referral_process};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let loaded = match current_dir_config(&cli) {
        Ok(loaded) => loaded,
        Err(error) => {
            eprintln!("error: {error:#}");
            std::process::exit(2);
        }
    };
    let log_config = log_config_from_cli(&cli, &loaded.config);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    for warning in &loaded.warnings {
        warn!("{warning}");
    }
    if let Some(source) = &loaded.source {
        debug!(path = %source.display(), "configuration loaded");
    }

    let config = loaded.config;
    let result = match &cli.command {
        Command::Load(args) => run_load(args, &config).map(|report| {
            let failed = report.entities.iter().any(|load| {
                matches!(
                    load.status,
                    LoadStatus::Unreadable { .. } | LoadStatus::Interrupted { .. }
                )
            });
            if failed { 1 } else { 0 }
        }),
        Command::List(args) => run_list(args, &config).map(|()| 0),
        Command::Referral(ReferralCommand::Export(args)) => {
            run_referral_export(args, &config).map(|_| 0)
        }
        Command::Referral(ReferralCommand::Process(args)) => {
            run_referral_process(args, &config).map(|_| 0)
        }
    };
    let exit_code = match result {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn current_dir_config(cli: &Cli) -> anyhow::Result<LoadedConfig> {
    let cwd = std::env::current_dir()?;
    load_config(cli.config.as_deref(), &cwd)
}

/// Build logging configuration with precedence flags, then config file, then defaults.
fn log_config_from_cli(cli: &Cli, config: &Config) -> LogConfig {
    let flag_level = cli.log_level.map(|level| match level {
        LogLevelArg::Error => LevelFilter::ERROR,
        LogLevelArg::Warn => LevelFilter::WARN,
        LogLevelArg::Info => LevelFilter::INFO,
        LogLevelArg::Debug => LevelFilter::DEBUG,
        LogLevelArg::Trace => LevelFilter::TRACE,
    });
    let level = match (flag_level, cli.verbosity.is_present()) {
        (Some(level), _) => Some(level),
        (None, true) => Some(cli.verbosity.tracing_level_filter()),
        (None, false) => config.logging.level_filter(),
    };
    let format = match cli.log_format {
        Some(LogFormatArg::Pretty) => LogFormat::Pretty,
        Some(LogFormatArg::Compact) => LogFormat::Compact,
        Some(LogFormatArg::Json) => LogFormat::Json,
        None => config.logging.format.unwrap_or_default(),
    };
    let log_file = cli
        .log_file
        .clone()
        .or_else(|| config.logging.file.clone());
    let with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => log_file.is_none() && io::stderr().is_terminal(),
    };

    let mut log_config = LogConfig::default()
        .with_level(level.unwrap_or_else(|| cli.verbosity.tracing_level_filter()))
        .with_format(format)
        .with_timestamps(config.logging.timestamps)
        .with_ansi(with_ansi)
        .with_log_file(log_file);
    log_config.use_env_filter = level.is_none();
    log_config
}
