use std::io::{stdin, stdout};
use std::process::ExitCode;

use clap::Parser;
use log::debug;

use notes_cli::cli_args::Args;
use notes_cli::command_selection::Console;
use notes_cli::error::Result;
use notes_cli::note::RandomIdGenerator;
use notes_cli::session::Session;

fn execute() -> Result<()> {
    let args = Args::parse();
    debug!("Arguments: {:?}", args);

    let config = args.session_config()?;
    let console = Console::new(stdin().lock(), stdout());

    let mut session = Session::new(config, Box::new(RandomIdGenerator), console);
    session.run()
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
