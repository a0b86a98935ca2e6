/// Token styling helpers.
///
/// The `t` module stands for "tokens". Use these helpers to style
/// specific values inside info messages consistently across the CLI.
pub mod t {
  use std::fmt::Display;

  use owo_colors::OwoColorize as _;

  pub fn path(p: impl Display) -> String {
    format!("{}", p.to_string().cyan())
  }

  pub fn unset() -> String {
    format!("{}", "(not set)".dimmed())
  }

  pub fn ok(s: impl Display) -> String {
    format!("{}", s.to_string().green())
  }

  pub fn warn(s: impl Display) -> String {
    format!("{}", s.to_string().yellow())
  }
}

// Operator-facing output. These macros enforce the agreed style:
// info = neutral, success/warn = full-line tint.
// Use `t::*` helpers to highlight tokens in info messages only.
// Diagnostics for developers go through the `log` crate instead.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
  Info,
  Success,
  Warn,
}

pub(crate) fn emit(level: LogLevel, text: &str) {
  match level {
    LogLevel::Info | LogLevel::Success => anstream::println!("{}", text),
    LogLevel::Warn => anstream::eprintln!("{}", text),
  }
}

#[macro_export]
macro_rules! log_info {
  ($fmt:literal $(, $args:expr )* $(,)?) => {{
    $crate::utils::log::emit(
      $crate::utils::log::LogLevel::Info,
      &format!($fmt $(, $args )*)
    );
  }};
}

#[macro_export]
macro_rules! log_success {
  ($fmt:literal $(, $args:expr )* $(,)?) => {{
    $crate::utils::log::emit(
      $crate::utils::log::LogLevel::Success,
      &$crate::utils::log::t::ok(format!($fmt $(, $args )*))
    );
  }};
}

#[macro_export]
macro_rules! log_warn {
  ($fmt:literal $(, $args:expr )* $(,)?) => {{
    $crate::utils::log::emit(
      $crate::utils::log::LogLevel::Warn,
      &$crate::utils::log::t::warn(format!($fmt $(, $args )*))
    );
  }};
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn tint_helpers_wrap_value_in_ansi() {
    for styled in [t::ok("a"), t::warn("b"), t::path("/tmp")] {
      assert!(styled.contains("\u{1b}["), "missing ANSI escape: {styled:?}");
    }
    assert!(t::unset().contains("(not set)"));
  }

  #[test]
  fn macros_no_panic() {
    crate::log_info!("A {}", 1);
    crate::log_success!("B");
    crate::log_warn!("C {}", "x");
  }
}
