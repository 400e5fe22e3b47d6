use clap::{ArgMatches, CommandFactory, FromArgMatches};
use tracing::{error, info};

use crate::adapters::cli::to_run_config;
use crate::app::{Dispatcher, format_report};
use crate::args::TesterArgs;
use crate::config::{apply_config, load_config};
use crate::error::AppResult;
use crate::system::logger::init_logging;

/// Parses arguments, merges config, runs the load test and prints the report
/// to stdout.
///
/// # Errors
///
/// Returns an error when arguments or config are invalid, the connection
/// context cannot be opened, or the report cannot be rendered.
pub fn run() -> AppResult<()> {
    let (mut args, matches) = parse_args()?;

    if let Some(config) = load_config(args.config.as_deref())? {
        apply_config(&mut args, &matches, &config)?;
    }

    init_logging(args.verbose, args.no_color);

    let run_config = to_run_config(&args);
    info!(
        "Starting load test: {} requests, {} workers, target {}",
        run_config.total_requests.get(),
        run_config.worker_count.get(),
        run_config.target_url
    );

    let dispatcher = Dispatcher::new(run_config);
    let metrics = dispatcher.run().inspect_err(|err| {
        error!("Run aborted: {}", err);
    })?;

    let report = format_report(&metrics, args.output_format)?;
    println!("{}", report);
    Ok(())
}

fn parse_args() -> AppResult<(TesterArgs, ArgMatches)> {
    let matches = TesterArgs::command().get_matches();
    let args = TesterArgs::from_arg_matches(&matches)?;
    Ok((args, matches))
}
