use anyhow::Result;

use crate::config::AppContext;
use crate::log_success;
use crate::project;
use crate::utils::wizard::Prompter;

pub fn run(ctx: &AppContext, prompter: &mut dyn Prompter, name: &str) -> Result<()> {
  let root = project::create(name, &ctx.config, prompter)?;
  log_success!(
    "project '{}' was successfully created under '{}'",
    name,
    root.display()
  );
  Ok(())
}
