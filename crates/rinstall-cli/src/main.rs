// recursive-install entry point

use clap::{CommandFactory, FromArgMatches};
use rinstall_cli::{
    init_logging, output, run, shutdown_signal, ArgumentReport, Cli, CliError, REPORTED_FLAGS,
};
use tracing::debug;

#[tokio::main]
async fn main() {
    let matches = Cli::command().get_matches();
    let cli = match Cli::from_arg_matches(&matches) {
        Ok(cli) => cli,
        Err(e) => e.exit(),
    };

    let verbosity = init_logging(cli.verbose, cli.quiet);
    let report = ArgumentReport::from_matches(&Cli::command(), &matches, REPORTED_FLAGS);

    let result = match shutdown_signal() {
        Ok(shutdown) => run(&cli, &report, verbosity, shutdown).await,
        Err(e) => Err(CliError::from(e)),
    };

    // run has stopped every job by now, so exiting leaves no child behind
    match result {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            output::print_error(&e.user_message());
            debug!("{}", e.technical_details());
            std::process::exit(e.exit_code());
        }
    }
}
