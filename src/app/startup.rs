//! Application start-up
//!
//! Parses arguments, sets up logging, loads the config and runs the index
//! orchestrator. Fatal errors are reported once and mapped to exit code 1;
//! clap handles usage errors (exit code 2) and help/version output (0).

use super::cli::Args;
use super::error::{AppError, AppResult};
use super::summary::print_summary;
use crate::config::Config;
use crate::core::error_handling::log_error_with_context;
use crate::core::logging::init_logging;
use crate::core::version::build_banner;
use crate::index::{IndexOrchestrator, RunOptions, TypeReport};
use crate::scanner::SymphoniaTagReader;
use std::io::IsTerminal;
use std::process::ExitCode;

/// Initialize application startup and run to completion
pub fn startup() -> ExitCode {
    let args = match Args::parse_from_args(std::env::args_os(), std::io::stdout().is_terminal()) {
        Ok(args) => args,
        Err(e) => e.exit(),
    };

    let log_color = std::io::stderr().is_terminal() && !args.no_color;
    if let Err(e) = init_logging(
        args.log_level.as_deref(),
        args.log_format.as_deref(),
        args.log_file.as_deref(),
        log_color,
    ) {
        eprintln!("{}", AppError::Logging(e.to_string()));
        return ExitCode::FAILURE;
    }
    log::debug!("{}", build_banner());
    log::debug!("Arguments: {:?}", args);

    match run(&args) {
        Ok(reports) => {
            let table_color = std::io::stdout().is_terminal() && !args.no_color;
            print_summary(&reports, args.dry_run, table_color);
            ExitCode::SUCCESS
        }
        Err(e) => {
            let context = match e {
                AppError::Config(_) => "Loading configuration",
                _ => "Indexing",
            };
            log_error_with_context(&e, context);
            ExitCode::FAILURE
        }
    }
}

/// Load the config and index every enabled media type
pub fn run(args: &Args) -> AppResult<Vec<TypeReport>> {
    let config = Config::load(&args.config)?;
    let options = RunOptions {
        dry_run: args.dry_run,
        force: args.force,
        clean: args.clean_override(),
    };
    log::debug!("Run options: {:?}", options);

    let tag_reader = SymphoniaTagReader::new();
    let reports = IndexOrchestrator::new(&config, &tag_reader).run(&options)?;
    Ok(reports)
}
