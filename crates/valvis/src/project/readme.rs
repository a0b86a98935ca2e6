use crate::config::ValvisConfig;

/// License paragraph appended to every README, kept byte-for-byte stable.
pub const LICENSE_NOTICE: &str = "## Copyright notice:\n\n\
This work is licensed under the Creative Commons Attribution-NonCommercial-ShareAlike 4.0 International License.\n\n\
To view a copy of this license, visit http://creativecommons.org/licenses/by-nc-sa/4.0/ or send a letter to Creative Commons, PO Box 1866, Mountain View, CA 94042, USA.";

/// Render the README for a new project.
///
/// The author line only appears when a user name is configured, and the
/// email only next to it.
#[must_use]
pub fn render(name: &str, description: &str, config: &ValvisConfig) -> String {
  let mut out = format!("# {name}\n\n{description}\n");
  if let Some(user) = &config.user_name {
    out.push_str(&format!("\nCreated by {user}"));
    if let Some(email) = &config.user_email {
      out.push_str(&format!(" - <{email}>"));
    }
  }
  out.push_str("\n\n");
  out.push_str(LICENSE_NOTICE);
  out
}
