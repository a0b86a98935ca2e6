#![allow(dead_code)]
pub mod test_env;

use tempfile::{Builder, TempDir};

/// Returns a workspace-local temp root for tests under `./target/test-tmp` at the workspace root.
pub fn tmp_root() -> std::path::PathBuf {
  let manifest_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
  // Walk two parents up: crates/valvis -> crates -> workspace root
  let workspace_root = manifest_dir
    .parent()
    .and_then(|parent| parent.parent())
    .unwrap_or(&manifest_dir)
    .to_path_buf();
  let root = workspace_root.join("target").join("test-tmp");
  let _ = std::fs::create_dir_all(&root);
  root
}

/// Create a temp dir under the workspace-local temp root.
pub fn tempdir_in_sandbox() -> TempDir {
  Builder::new()
    .prefix("valvis-test-")
    .tempdir_in(tmp_root())
    .expect("temp dir")
}
