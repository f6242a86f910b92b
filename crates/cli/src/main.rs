use check_diff::{check_diff, Settings};
use check_diff_core::{CheckOutcome, Invocation, CHECK_NAME, DEFAULT_LOG_FILTER};
use check_diff_utils::logging;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use std::process;

/// Exit code for usage errors
const USAGE_EXIT_CODE: i32 = 1;

#[derive(Parser)]
#[command(name = "check-diff")]
#[command(about = "Run a command and report whether its output changed since the last run", long_about = None)]
#[command(override_usage = "check-diff [OPTIONS] -- <COMMAND> [ARGS]...")]
#[command(version)]
struct Cli {
    /// Identify the stored command result with the given string
    #[arg(short, long, default_value = "")]
    identifier: String,

    /// Command to run, followed by its arguments
    #[arg(last = true, value_name = "COMMAND")]
    command: Vec<String>,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                err.exit();
            }
            let _ = err.print();
            process::exit(USAGE_EXIT_CODE);
        }
    };

    let Some((command, args)) = cli.command.split_first() else {
        let _ = Cli::command().print_help();
        process::exit(USAGE_EXIT_CODE);
    };

    let settings = Settings::load();
    let directive = settings.as_ref().ok().and_then(|s| s.log_filter.as_deref());
    if let Err(e) = logging::init(directive, DEFAULT_LOG_FILTER) {
        eprintln!("failed to initialize logging: {e}");
    }

    let invocation = Invocation::new(cli.identifier, command.as_str(), args.to_vec());
    let outcome = match settings {
        Ok(settings) => check_diff(&invocation, &settings),
        Err(e) => CheckOutcome::from(e),
    };

    println!("{}", outcome.report(CHECK_NAME));
    process::exit(outcome.status.exit_code());
}
