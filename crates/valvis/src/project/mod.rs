//! Project scaffolding.
//!
//! A project is a directory under the configured projects path holding the
//! fixed working folders, a link to the shared library, a README and a
//! metadata record. Projects are created once and never touched again.

use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;

use crate::config::ValvisConfig;
use crate::log_warn;
use crate::texts;
use crate::utils::wizard::Prompter;

pub mod layout;
pub mod metadata;
pub mod readme;

pub use layout::ProjectPaths;
pub use metadata::{ProjectInfo, ToolVersion};

#[derive(Debug, thiserror::Error)]
pub enum ProjectError {
  #[error("project name must not be empty")]
  EmptyName,
  #[error("project name must be a single folder name: {name}")]
  InvalidName { name: String },
  #[error("a project with this name already exists: {}", .path.display())]
  AlreadyExists { path: PathBuf },
}

/// Scaffold the project `name` under `config.projects_path` and return its root.
///
/// The existence check runs before the description prompt, so a conflict
/// leaves the filesystem untouched. Failures after the root is created leave
/// the partial tree in place.
///
/// # Errors
/// [`ProjectError::EmptyName`], [`ProjectError::InvalidName`],
/// [`ProjectError::AlreadyExists`], a failed prompt, or the I/O error of the
/// step that failed.
pub fn create(name: &str, config: &ValvisConfig, prompter: &mut dyn Prompter) -> Result<PathBuf> {
  check_name(name)?;
  let paths = ProjectPaths::new(&config.projects_path, name);
  let root = paths.root();
  // symlink_metadata so a dangling link also counts as taken
  if root.symlink_metadata().is_ok() {
    return Err(already_exists(root));
  }

  let description = prompter.text(&texts::setup::description_prompt(name), None)?;
  let created = Local::now().naive_local();

  create_root(&config.projects_path, root)?;
  for dir in paths.work_dirs() {
    create_dir(&dir)?;
  }
  link_library(config, root, &paths.library_link());
  create_dir(&paths.meta_dir())?;

  let readme_path = paths.readme();
  fs::write(&readme_path, readme::render(name, &description, config))
    .with_context(|| format!("failed to write {}", readme_path.display()))?;
  log::debug!("wrote {}", readme_path.display());

  let info_path = paths.info_file();
  metadata::write_info(&info_path, &ProjectInfo::new(name, created))?;
  log::debug!("wrote {}", info_path.display());

  Ok(root.to_path_buf())
}

/// A name is exactly one normal path component, so the project root always
/// sits directly under the projects path.
fn check_name(name: &str) -> Result<(), ProjectError> {
  if name.is_empty() {
    return Err(ProjectError::EmptyName);
  }
  let mut components = Path::new(name).components();
  match (components.next(), components.next()) {
    (Some(Component::Normal(_)), None) => Ok(()),
    _ => Err(ProjectError::InvalidName {
      name: name.to_string(),
    }),
  }
}

fn already_exists(root: &Path) -> anyhow::Error {
  ProjectError::AlreadyExists {
    path: root.to_path_buf(),
  }
  .into()
}

fn create_root(projects_path: &Path, root: &Path) -> Result<()> {
  fs::create_dir_all(projects_path)
    .with_context(|| format!("failed to create {}", projects_path.display()))?;
  match fs::create_dir(root) {
    Ok(()) => {
      log::debug!("created {}", root.display());
      Ok(())
    }
    // Lost a race against another invocation since the existence check.
    Err(err) if err.kind() == io::ErrorKind::AlreadyExists => Err(already_exists(root)),
    Err(err) => Err(err).with_context(|| format!("failed to create {}", root.display())),
  }
}

fn create_dir(dir: &Path) -> Result<()> {
  fs::create_dir(dir).with_context(|| format!("failed to create {}", dir.display()))?;
  log::debug!("created {}", dir.display());
  Ok(())
}

/// The library is optional: every problem here is reported as a warning.
fn link_library(config: &ValvisConfig, root: &Path, link: &Path) {
  if !config.has_library() {
    log_warn!(
      "No library path configured, skipping {}",
      layout::LIBRARY_LINK
    );
    return;
  }
  let target = &config.library_path;
  if !link_target(root, target).exists() {
    log_warn!(
      "Library {} does not exist yet, linking anyway",
      target.display()
    );
  }
  match symlink_dir(target, link) {
    Ok(()) => log::debug!("linked {} -> {}", link.display(), target.display()),
    Err(err) => log_warn!(
      "Failed to link library {} -> {}: {}",
      link.display(),
      target.display(),
      err
    ),
  }
}

/// Where a link placed in `root` ends up: relative targets resolve against the
/// link's own directory, not the working directory.
fn link_target(root: &Path, target: &Path) -> PathBuf {
  if target.is_absolute() {
    target.to_path_buf()
  } else {
    root.join(target)
  }
}

#[cfg(unix)]
fn symlink_dir(target: &Path, link: &Path) -> io::Result<()> {
  std::os::unix::fs::symlink(target, link)
}

#[cfg(windows)]
fn symlink_dir(target: &Path, link: &Path) -> io::Result<()> {
  std::os::windows::fs::symlink_dir(target, link)
}
