use std::process::ExitCode;
use clap::Parser;
use survey_dash::config::constants::DEFAULT_LOG_FILTER;
use survey_dash::errors::ErrorHandler;
use survey_dash::structs::cli::Cli;
use survey_dash::workers::command_runner::CommandRunner;

fn main() -> ExitCode {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER),
    )
    .init();

    let cli = Cli::parse();
    match CommandRunner::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            ErrorHandler::handle_error(&error);
            ExitCode::FAILURE
        }
    }
}
