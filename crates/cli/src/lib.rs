pub mod args;
pub mod commands;
pub mod output;

use clap::Parser;

pub fn run() {
  // If no additional args, show help and exit 0
  if std::env::args_os().len() == 1 {
    args::Cli::print_help();
    return;
  }

  // Parse arguments; this will also handle --help/--version.
  let cli = args::Cli::parse();
  let Some(command) = cli.command else {
    args::Cli::print_help();
    return;
  };

  let code = commands::dispatch(command, cli.json, cli.endpoint.as_deref());
  if code != 0 {
    std::process::exit(code);
  }
}
