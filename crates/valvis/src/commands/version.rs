use crate::project::ToolVersion;

pub fn run() {
  anstream::println!("valvis version {}", ToolVersion::current());
}
