use std::path::{Path, PathBuf};

/// Working folders created in every project, in creation order.
pub const WORK_DIRS: [&str; 5] = [
  "1_blends",
  "2_textures",
  "3_references",
  "4_documents",
  "5_renders",
];

/// Symlink pointing at the shared asset library.
pub const LIBRARY_LINK: &str = "6_library";

/// Hidden folder holding tool metadata.
pub const META_DIR: &str = ".valvis";

pub const INFO_FILE: &str = "infos.json";

pub const README_FILE: &str = "README.md";

/// On-disk locations of a single project.
#[derive(Debug, Clone)]
pub struct ProjectPaths {
  root: PathBuf,
}

impl ProjectPaths {
  /// `name` is a single folder name; `project::create` checks it first.
  pub fn new(projects_path: &Path, name: &str) -> Self {
    Self {
      root: projects_path.join(name),
    }
  }

  #[must_use]
  pub fn root(&self) -> &Path {
    &self.root
  }

  pub fn work_dirs(&self) -> impl Iterator<Item = PathBuf> + '_ {
    WORK_DIRS.iter().map(|dir| self.root.join(dir))
  }

  #[must_use]
  pub fn library_link(&self) -> PathBuf {
    self.root.join(LIBRARY_LINK)
  }

  #[must_use]
  pub fn meta_dir(&self) -> PathBuf {
    self.root.join(META_DIR)
  }

  #[must_use]
  pub fn info_file(&self) -> PathBuf {
    self.meta_dir().join(INFO_FILE)
  }

  #[must_use]
  pub fn readme(&self) -> PathBuf {
    self.root.join(README_FILE)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn paths_hang_off_the_project_root() {
    let paths = ProjectPaths::new(Path::new("/work"), "Foo");
    assert_eq!(paths.root(), Path::new("/work/Foo"));
    assert_eq!(paths.library_link(), PathBuf::from("/work/Foo/6_library"));
    assert_eq!(
      paths.info_file(),
      PathBuf::from("/work/Foo/.valvis/infos.json")
    );
    assert_eq!(paths.readme(), PathBuf::from("/work/Foo/README.md"));
    let dirs: Vec<PathBuf> = paths.work_dirs().collect();
    assert_eq!(dirs.first(), Some(&PathBuf::from("/work/Foo/1_blends")));
    assert_eq!(dirs.last(), Some(&PathBuf::from("/work/Foo/5_renders")));
  }
}
