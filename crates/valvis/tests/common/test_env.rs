use std::path::{Path, PathBuf};

use anyhow::Result;
use assert_cmd::Command;
use serde_json::{Value, json};
use tempfile::TempDir;

use super::tempdir_in_sandbox;

/// Isolated home, config and projects directories for one CLI test.
#[derive(Debug)]
pub struct TestEnv {
  temp: TempDir,
}

impl TestEnv {
  pub fn new() -> Self {
    let temp = tempdir_in_sandbox();
    let env = Self { temp };
    for dir in [env.home(), env.library_dir()] {
      if let Err(err) = std::fs::create_dir_all(&dir) {
        panic!("create {} failed: {err}", dir.display());
      }
    }
    env
  }

  pub fn path(&self) -> &Path {
    self.temp.path()
  }

  pub fn home(&self) -> PathBuf {
    self.path().join("home")
  }

  pub fn xdg_home_dir(&self) -> PathBuf {
    self.home().join(".config")
  }

  pub fn config_file(&self) -> PathBuf {
    self.xdg_home_dir().join("valvis").join("config.json")
  }

  pub fn projects_dir(&self) -> PathBuf {
    self.path().join("projects")
  }

  pub fn library_dir(&self) -> PathBuf {
    self.path().join("library")
  }

  pub fn project_dir(&self, name: &str) -> PathBuf {
    self.projects_dir().join(name)
  }

  /// `valvis` binary pointed at this environment's home and XDG config.
  pub fn valvis(&self) -> Result<Command> {
    let mut cmd = Command::cargo_bin("valvis")?;
    cmd.current_dir(self.path());
    cmd.env("HOME", self.home());
    cmd.env("XDG_CONFIG_HOME", self.xdg_home_dir());
    cmd.env_remove("VALVIS_LOG");
    Ok(cmd)
  }

  pub fn write_config_raw(&self, body: &str) -> Result<PathBuf> {
    let path = self.config_file();
    if let Some(parent) = path.parent() {
      std::fs::create_dir_all(parent).map_err(|err| {
        anyhow::anyhow!("create config dir {}: {err}", parent.display())
      })?;
    }
    std::fs::write(&path, body)
      .map_err(|err| anyhow::anyhow!("write config {}: {err}", path.display()))?;
    Ok(path)
  }

  /// Write a config pointing at this environment's projects and library dirs.
  pub fn write_config(&self, user_name: Value, user_email: Value) -> Result<PathBuf> {
    let body = json!({
      "user_name": user_name,
      "user_email": user_email,
      "projects_path": self.projects_dir(),
      "library_path": self.library_dir(),
    });
    self.write_config_raw(&serde_json::to_string_pretty(&body)?)
  }

  pub fn read_config(&self) -> Result<Value> {
    let data = std::fs::read_to_string(self.config_file())?;
    Ok(serde_json::from_str(&data)?)
  }
}
