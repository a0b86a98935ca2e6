use anyhow::Result;
use clap::Parser;

pub mod commands;
pub mod config;
pub mod project;
pub mod texts;
pub mod utils;

use crate::config::{AppContext, AppPaths, ensure_and_load};
use crate::utils::wizard::Wizard;

/// Valvis - a project manager for Blender projects.
#[derive(Debug, Parser)]
#[command(
  name = "valvis",
  about,
  long_about = None,
  disable_help_flag = true,
  disable_version_flag = true
)]
pub struct Cli {
  /// Print this help message
  #[arg(short = 'h', long)]
  help: bool,

  /// Print the software version
  #[arg(short = 'v', long)]
  version: bool,

  /// Print the configuration file location and its values
  #[arg(short = 'c', long)]
  config: bool,

  /// Create a new project under the configured projects path
  #[arg(short = 'n', long = "new", value_name = "PROJECT NAME")]
  new: Option<String>,
}

/// The single action an invocation resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
  Help,
  Version,
  ShowConfig,
  New(String),
}

impl Cli {
  /// Resolve flags into one action. `None` means no flag was given.
  ///
  /// When several flags are combined the winner is fixed regardless of their
  /// order on the command line: help, version, config, then new.
  #[must_use]
  pub fn action(&self) -> Option<Action> {
    if self.help {
      Some(Action::Help)
    } else if self.version {
      Some(Action::Version)
    } else if self.config {
      Some(Action::ShowConfig)
    } else {
      self.new.clone().map(Action::New)
    }
  }
}

pub fn parse() -> Cli {
  Cli::parse()
}

fn init_logging() {
  let env = env_logger::Env::new().filter_or("VALVIS_LOG", "warn");
  let _ = env_logger::Builder::from_env(env)
    .format_timestamp(None)
    .try_init();
}

pub fn run() -> Result<()> {
  init_logging();
  let cli = parse();
  let Some(action) = cli.action() else {
    commands::help::print_usage();
    return Ok(());
  };

  // Every action runs against a loaded configuration, creating it on first use.
  let mut wizard = Wizard::new();
  let paths = AppPaths::resolve()?;
  let config = ensure_and_load(&paths, &mut wizard)?;
  let ctx = AppContext { paths, config };

  match action {
    Action::Help => commands::help::run(),
    Action::Version => commands::version::run(),
    Action::ShowConfig => commands::config::run(&ctx),
    Action::New(name) => commands::new::run(&ctx, &mut wizard, &name)?,
  }

  Ok(())
}
