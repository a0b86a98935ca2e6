use std::io::{self, BufRead as _, IsTerminal as _, Write as _};

use anyhow::{Context, Result, anyhow};
use inquire::Text;
use owo_colors::OwoColorize as _;

use crate::log_info;

/// ASCII art logo rendered during the first-run setup.
#[allow(unknown_lints)]
#[allow(clippy::unneeded_raw_string)]
const LOGO_LINES: [&str; 6] = [
  r"                 888          d8b",
  r"                 888          Y8P",
  r"888  888  8888b. 888 888  888 888 .d8888b",
  r#"888  888     "88b888 888  888 888 88K"#,
  r#"Y88  88P.d888888888 Y88  88P 888 "Y8888b."#,
  r#" "Y8P"  "Y888888888  "Y8P"  888  88888P'"#,
];

/// Source of operator answers for interactive flows.
///
/// The CLI answers through [`Wizard`]; tests feed scripted answers instead.
pub trait Prompter {
  /// Ask for one line of text. When `default` is given, a blank answer
  /// resolves to it.
  fn text(&mut self, prompt: &str, default: Option<&str>) -> Result<String>;
}

/// Shared helpers for interactive setup wizards.
#[derive(Clone, Debug)]
pub struct Wizard {
  is_tty: bool,
}

impl Default for Wizard {
  fn default() -> Self {
    Self::new()
  }
}

impl Wizard {
  #[must_use]
  pub fn new() -> Self {
    let stdin_tty = io::stdin().is_terminal();
    let stdout_tty = io::stdout().is_terminal();
    Self {
      is_tty: stdin_tty && stdout_tty,
    }
  }

  /// Print the branded logo using an orange-to-blue gradient.
  #[allow(clippy::cast_precision_loss)]
  pub fn print_logo() {
    let steps = (LOGO_LINES.len().saturating_sub(1)).max(1) as f32;
    for (idx, line) in LOGO_LINES.iter().enumerate() {
      let (r, g, b) = gradient_color(idx as f32 / steps);
      anstream::println!("{}", line.truecolor(r, g, b));
    }
  }

  /// Print informational lines through the shared logger.
  pub fn info_lines(lines: &[String]) {
    for line in lines {
      if line.is_empty() {
        log_info!("");
      } else {
        log_info!("{}", line);
      }
    }
  }

  fn fallback_text(prompt: &str, default: Option<&str>) -> Result<String> {
    match default {
      Some(def) => log_info!("{} [{}]", prompt, def),
      None => log_info!("{}", prompt),
    }
    anstream::print!("{}", "-> ".bright_cyan());
    io::stdout().flush().ok();

    Ok(resolve_answer(read_line()?, default))
  }
}

impl Prompter for Wizard {
  /// Prompt via `inquire` when attached to a TTY, or via plain stdin lines
  /// when running non-interactively (tests, piped input).
  fn text(&mut self, prompt: &str, default: Option<&str>) -> Result<String> {
    if self.is_tty {
      let mut question = Text::new(prompt);
      if let Some(def) = default {
        question = question.with_default(def);
      }
      return question
        .prompt()
        .map(|ans| resolve_answer(ans, default))
        .map_err(|err| anyhow!(err));
    }
    Self::fallback_text(prompt, default)
  }
}

/// Blank answers resolve to `default` when one is given; anything else is
/// returned as typed. Callers trim where the value calls for it.
fn resolve_answer(answer: String, default: Option<&str>) -> String {
  match default {
    Some(def) if answer.trim().is_empty() => def.to_string(),
    _ => answer,
  }
}

/// Read one line from stdin without its line terminator. EOF yields an empty line.
fn read_line() -> Result<String> {
  let mut line = String::new();
  io::stdin()
    .lock()
    .read_line(&mut line)
    .context("failed to read from stdin")?;
  let trimmed = line.trim_end_matches(['\r', '\n']).len();
  line.truncate(trimmed);
  Ok(line)
}

#[allow(
  clippy::cast_precision_loss,
  clippy::cast_possible_truncation,
  clippy::cast_sign_loss
)]
fn gradient_color(t: f32) -> (u8, u8, u8) {
  let start = (0xf5 as f32, 0x79 as f32, 0x2a as f32);
  let end = (0x26 as f32, 0x5c as f32, 0xd9 as f32);
  let ratio = t.clamp(0.0, 1.0);
  let lerp = |a: f32, b: f32| a + (b - a) * ratio;
  (
    lerp(start.0, end.0).round() as u8,
    lerp(start.1, end.1).round() as u8,
    lerp(start.2, end.2).round() as u8,
  )
}

/// Prompter that replays canned answers and records every prompt it saw.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct ScriptedPrompter {
  answers: std::collections::VecDeque<String>,
  pub(crate) asked: Vec<String>,
}

#[cfg(test)]
impl ScriptedPrompter {
  pub(crate) fn new<I, S>(answers: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    Self {
      answers: answers.into_iter().map(Into::into).collect(),
      asked: Vec::new(),
    }
  }
}

#[cfg(test)]
impl Prompter for ScriptedPrompter {
  fn text(&mut self, prompt: &str, _default: Option<&str>) -> Result<String> {
    self.asked.push(prompt.to_string());
    self
      .answers
      .pop_front()
      .ok_or_else(|| anyhow!("no scripted answer left for: {prompt}"))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn gradient_hits_both_ends() {
    assert_eq!(gradient_color(0.0), (0xf5, 0x79, 0x2a));
    assert_eq!(gradient_color(1.0), (0x26, 0x5c, 0xd9));
    assert_eq!(gradient_color(7.0), gradient_color(1.0));
  }

  #[test]
  fn answers_keep_surrounding_whitespace() {
    assert_eq!(resolve_answer("  spaced  ".into(), None), "  spaced  ");
    assert_eq!(resolve_answer("  spaced  ".into(), Some("def")), "  spaced  ");
    assert_eq!(resolve_answer("   ".into(), None), "   ");
  }

  #[test]
  fn blank_answer_takes_the_default() {
    assert_eq!(resolve_answer(String::new(), Some("def")), "def");
    assert_eq!(resolve_answer(" \t".into(), Some("def")), "def");
  }

  #[test]
  fn scripted_prompter_replays_in_order() -> Result<()> {
    let mut prompter = ScriptedPrompter::new(["first", ""]);
    assert_eq!(prompter.text("one", None)?, "first");
    assert_eq!(prompter.text("two", Some("fallback"))?, "");
    assert!(prompter.text("three", None).is_err());
    assert_eq!(prompter.asked, vec!["one", "two", "three"]);
    Ok(())
  }
}
