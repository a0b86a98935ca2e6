use std::fmt;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{Datelike as _, NaiveDateTime, Timelike as _};
use serde::{Deserialize, Serialize};

/// Version triple of the running tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolVersion {
  pub major: u32,
  pub minor: u32,
  pub fix: u32,
}

impl ToolVersion {
  #[must_use]
  pub fn current() -> Self {
    Self {
      major: env!("CARGO_PKG_VERSION_MAJOR").parse().unwrap_or_default(),
      minor: env!("CARGO_PKG_VERSION_MINOR").parse().unwrap_or_default(),
      fix: env!("CARGO_PKG_VERSION_PATCH").parse().unwrap_or_default(),
    }
  }
}

impl fmt::Display for ToolVersion {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}.{}.{}", self.major, self.minor, self.fix)
  }
}

/// Creation time with minute precision, local wall clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedAt {
  pub year: i32,
  pub month: u32,
  pub day: u32,
  pub hour: u32,
  pub minute: u32,
}

impl From<NaiveDateTime> for CreatedAt {
  fn from(at: NaiveDateTime) -> Self {
    Self {
      year: at.year(),
      month: at.month(),
      day: at.day(),
      hour: at.hour(),
      minute: at.minute(),
    }
  }
}

/// Record stored in `.valvis/infos.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectInfo {
  pub name: String,
  pub created: CreatedAt,
  pub version: ToolVersion,
}

impl ProjectInfo {
  #[must_use]
  pub fn new(name: &str, created: NaiveDateTime) -> Self {
    Self {
      name: name.to_string(),
      created: created.into(),
      version: ToolVersion::current(),
    }
  }
}

pub fn write_info(path: &Path, info: &ProjectInfo) -> Result<()> {
  let mut data = serde_json::to_string_pretty(info).context("failed to serialize project info")?;
  data.push('\n');
  fs::write(path, data).with_context(|| format!("failed to write {}", path.display()))
}

#[cfg(test)]
pub(crate) fn read_info(path: &Path) -> Result<ProjectInfo> {
  let data =
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
  serde_json::from_str(&data).with_context(|| format!("failed to parse {}", path.display()))
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::NaiveDate;

  fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, mo, d)
      .and_then(|date| date.and_hms_opt(h, mi, s))
      .expect("valid date")
  }

  #[test]
  fn current_version_matches_package() {
    assert_eq!(
      ToolVersion::current().to_string(),
      env!("CARGO_PKG_VERSION")
    );
  }

  #[test]
  fn created_at_drops_seconds() {
    let created = CreatedAt::from(at(2017, 3, 9, 21, 5, 59));
    assert_eq!(
      created,
      CreatedAt {
        year: 2017,
        month: 3,
        day: 9,
        hour: 21,
        minute: 5,
      }
    );
  }

  #[test]
  fn info_file_layout() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("infos.json");
    let info = ProjectInfo::new("Foo", at(2024, 12, 31, 23, 59, 0));
    write_info(&path, &info)?;

    let raw: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path)?)?;
    assert_eq!(raw["name"], "Foo");
    assert_eq!(raw["created"]["year"], 2024);
    assert_eq!(raw["created"]["minute"], 59);
    assert!(raw["created"].get("second").is_none());
    assert_eq!(raw["version"]["major"], ToolVersion::current().major);
    assert_eq!(read_info(&path)?, info);
    Ok(())
  }
}
