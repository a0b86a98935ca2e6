use crate::config::AppContext;
use crate::log_info;
use crate::utils::log::t;

pub fn run(ctx: &AppContext) {
  let cfg = &ctx.config;
  let or_unset = |value: &Option<String>| value.clone().unwrap_or_else(t::unset);

  log_info!("Config: {}", t::path(ctx.paths.config_file().display()));
  log_info!("");
  log_info!("user_name:     {}", or_unset(&cfg.user_name));
  log_info!("user_email:    {}", or_unset(&cfg.user_email));
  log_info!("projects_path: {}", t::path(cfg.projects_path.display()));
  if cfg.has_library() {
    log_info!("library_path:  {}", t::path(cfg.library_path.display()));
  } else {
    log_info!("library_path:  {}", t::unset());
  }
}
