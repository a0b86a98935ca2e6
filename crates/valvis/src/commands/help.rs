use clap::CommandFactory as _;

use crate::Cli;

/// One-line usage shown when valvis runs without arguments.
pub fn print_usage() {
  let mut cmd = Cli::command();
  anstream::println!("{}", cmd.render_usage().ansi());
}

pub fn run() {
  let mut cmd = Cli::command();
  anstream::println!("{}", cmd.render_long_help().ansi());
}
