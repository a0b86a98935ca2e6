use std::fs::{self, OpenOptions};
use std::io::Write as _;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer, Serialize};

use crate::log_success;
use crate::texts;
use crate::utils::wizard::{Prompter, Wizard};

const APP_NAME: &str = "valvis";

/// File name of the user configuration inside the config directory.
pub const CONFIG_FILE: &str = "config.json";

/// Numeric marker older config files use for an unset attribution field.
const LEGACY_UNSET: i64 = -1;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
  #[error("unable to resolve the user's home directory")]
  UnresolvedHome,
  #[error("couldn't find user folder: {} is not an accessible directory", .path.display())]
  NoHomeDirectory { path: PathBuf },
  #[error("config file {} not found", .path.display())]
  Missing { path: PathBuf },
  #[error("malformed config file {}, fix or delete it", .path.display())]
  Malformed {
    path: PathBuf,
    #[source]
    source: serde_json::Error,
  },
}

/// Per-user locations resolved once per invocation.
#[derive(Debug, Clone)]
pub struct AppPaths {
  home: PathBuf,
  config_dir: PathBuf,
}

impl AppPaths {
  pub fn new(home: impl Into<PathBuf>, config_dir: impl Into<PathBuf>) -> Self {
    Self {
      home: home.into(),
      config_dir: config_dir.into(),
    }
  }

  /// Resolve the home directory and `$XDG_CONFIG_HOME/valvis`, which
  /// defaults to `~/.config/valvis`.
  ///
  /// # Errors
  /// Returns [`ConfigError::UnresolvedHome`] when no home directory is known.
  pub fn resolve() -> Result<Self> {
    let home = dirs::home_dir().ok_or(ConfigError::UnresolvedHome)?;
    let config_dir = xdg::BaseDirectories::with_prefix(APP_NAME)
      .get_config_home()
      .unwrap_or_else(|| home.join(".config").join(APP_NAME));
    Ok(Self::new(home, config_dir))
  }

  #[must_use]
  pub fn home(&self) -> &Path {
    &self.home
  }

  #[must_use]
  pub fn config_dir(&self) -> &Path {
    &self.config_dir
  }

  #[must_use]
  pub fn config_file(&self) -> PathBuf {
    self.config_dir.join(CONFIG_FILE)
  }

  /// Projects location offered during first-run setup.
  #[must_use]
  pub fn default_projects_path(&self) -> PathBuf {
    self.home.join("Documents").join(APP_NAME)
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValvisConfig {
  /// Author credited in generated READMEs.
  #[serde(default, deserialize_with = "deserialize_attribution")]
  pub user_name: Option<String>,
  /// Only shown next to `user_name`.
  #[serde(default, deserialize_with = "deserialize_attribution")]
  pub user_email: Option<String>,
  pub projects_path: PathBuf,
  /// Shared asset library. Empty means no library is linked.
  pub library_path: PathBuf,
}

impl ValvisConfig {
  #[must_use]
  pub fn has_library(&self) -> bool {
    !self.library_path.as_os_str().is_empty()
  }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawAttribution {
  Text(String),
  Number(i64),
}

// Accepts `null`, blank strings and the legacy `-1` as "unset".
fn deserialize_attribution<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
  D: Deserializer<'de>,
{
  match Option::<RawAttribution>::deserialize(deserializer)? {
    None | Some(RawAttribution::Number(LEGACY_UNSET)) => Ok(None),
    Some(RawAttribution::Text(value)) if value.trim().is_empty() => Ok(None),
    Some(RawAttribution::Text(value)) => Ok(Some(value)),
    Some(RawAttribution::Number(other)) => Err(serde::de::Error::custom(format!(
      "expected a string or {LEGACY_UNSET}, found {other}"
    ))),
  }
}

/// Resolved paths plus the loaded configuration, shared by all commands.
#[derive(Debug, Clone)]
pub struct AppContext {
  pub paths: AppPaths,
  pub config: ValvisConfig,
}

/// Guarantee a configuration exists and load it.
///
/// The config directory is created when missing, and the first-run wizard
/// runs when no config file exists yet. An existing file is only ever read.
///
/// # Errors
/// Fails when the home directory is not accessible, when the config
/// directory cannot be created, or when the file is malformed.
pub fn ensure_and_load(paths: &AppPaths, prompter: &mut dyn Prompter) -> Result<ValvisConfig> {
  let home = paths.home();
  if !home.is_dir() {
    return Err(
      ConfigError::NoHomeDirectory {
        path: home.to_path_buf(),
      }
      .into(),
    );
  }

  let config_dir = paths.config_dir();
  if !config_dir.exists() {
    fs::create_dir_all(config_dir)
      .with_context(|| format!("failed to create {}", config_dir.display()))?;
    log::debug!("created config directory {}", config_dir.display());
  }

  let config_file = paths.config_file();
  if !config_file.exists() {
    return run_first_setup(paths, prompter);
  }
  load_config(&config_file)
}

/// Ask the operator for every setting and persist them as a new config file.
///
/// # Errors
/// Fails when a prompt fails or the file cannot be written. An already
/// existing file is never replaced.
pub fn run_first_setup(paths: &AppPaths, prompter: &mut dyn Prompter) -> Result<ValvisConfig> {
  let config_file = paths.config_file();

  anstream::println!();
  Wizard::print_logo();
  anstream::println!();
  Wizard::info_lines(&texts::setup::welcome_lines(
    &config_file.display().to_string(),
  ));
  anstream::println!();

  let user_name = blank_as_none(prompter.text(&texts::setup::user_name_prompt(), None)?);
  let user_email = blank_as_none(prompter.text(&texts::setup::user_email_prompt(), None)?);

  let default_projects = paths.default_projects_path();
  let default_display = default_projects.display().to_string();
  let answer = prompter.text(
    &texts::setup::projects_path_prompt(),
    Some(&default_display),
  )?;
  let projects_path = if answer.trim().is_empty() {
    default_projects
  } else {
    PathBuf::from(answer.trim())
  };

  let library_path = PathBuf::from(
    prompter
      .text(&texts::setup::library_path_prompt(), None)?
      .trim(),
  );

  let config = ValvisConfig {
    user_name,
    user_email,
    projects_path,
    library_path,
  };
  write_new_config(&config_file, &config)?;

  log_success!("Created config {}", config_file.display());
  Wizard::info_lines(&texts::setup::summary_lines());
  Ok(config)
}

fn blank_as_none(value: String) -> Option<String> {
  let trimmed = value.trim();
  if trimmed.is_empty() {
    None
  } else {
    Some(trimmed.to_string())
  }
}

/// Parse an existing config file.
///
/// # Errors
/// [`ConfigError::Missing`] when the file does not exist and
/// [`ConfigError::Malformed`] when it is not a valid config record.
pub fn load_config(path: &Path) -> Result<ValvisConfig> {
  if !path.exists() {
    return Err(
      ConfigError::Missing {
        path: path.to_path_buf(),
      }
      .into(),
    );
  }
  let data =
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
  let config = serde_json::from_str(&data).map_err(|source| ConfigError::Malformed {
    path: path.to_path_buf(),
    source,
  })?;
  log::debug!("loaded config from {}", path.display());
  Ok(config)
}

/// Write `config` to a file that must not exist yet.
///
/// # Errors
/// Fails when the file already exists or cannot be written.
pub fn write_new_config(path: &Path, config: &ValvisConfig) -> Result<()> {
  let mut serialized = serde_json::to_string_pretty(config).context("failed to serialize config")?;
  serialized.push('\n');
  let mut file = OpenOptions::new()
    .write(true)
    .create_new(true)
    .open(path)
    .with_context(|| format!("failed to create {}", path.display()))?;
  file
    .write_all(serialized.as_bytes())
    .with_context(|| format!("failed to write {}", path.display()))?;
  Ok(())
}
