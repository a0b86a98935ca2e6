use owo_colors::OwoColorize as _;

fn highlight_name() -> String {
  "Valvis".bright_cyan().bold().to_string()
}

fn highlight_cmd(cmd: &str) -> String {
  format!("{}", cmd.bright_cyan().bold())
}

pub fn welcome_lines(config_path: &str) -> Vec<String> {
  let path = format!("{}", config_path.bright_cyan());
  vec![
    format!("Welcome to {}! Let's set up your workspace.", highlight_name()),
    String::new(),
    "Answer a few questions once. Leave a field blank to skip it.".to_string(),
    String::new(),
    format!("Your answers are stored in {path}."),
  ]
}

pub fn user_name_prompt() -> String {
  "Your name (used to sign project READMEs):".to_string()
}

pub fn user_email_prompt() -> String {
  "Your email address:".to_string()
}

pub fn projects_path_prompt() -> String {
  "Where should new projects be created?".to_string()
}

pub fn library_path_prompt() -> String {
  format!(
    "Path to your shared asset {} (linked into every project):",
    "library".bright_cyan()
  )
}

pub fn description_prompt(project_name: &str) -> String {
  format!("Enter a short description for '{project_name}':")
}

pub fn summary_lines() -> Vec<String> {
  vec![
    String::new(),
    "What's next?".bright_cyan().bold().to_string(),
    String::new(),
    format!(
      "- Create your first project with {}",
      highlight_cmd("valvis --new <project name>")
    ),
    format!("- Review your settings with {}", highlight_cmd("valvis --config")),
    format!("- Need a refresher? Run {}", highlight_cmd("valvis --help")),
    String::new(),
  ]
}
