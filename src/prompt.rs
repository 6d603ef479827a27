use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input};

/// What the user asked for. Collected before anything touches the disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answers {
    pub project_name: String,
    pub with_paper: bool,
}

pub trait Prompter {
    fn project_name(&self, default: &str) -> Result<String>;
    fn with_paper(&self, default: bool) -> Result<bool>;
}

/// Asks on the terminal.
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn project_name(&self, default: &str) -> Result<String> {
        let name: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Enter project name:")
            .default(default.to_string())
            .interact_text()?;
        Ok(name)
    }

    fn with_paper(&self, default: bool) -> Result<bool> {
        let answer = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt("Do you want to install react-native-paper?")
            .default(default)
            .interact()?;
        Ok(answer)
    }
}

/// Takes the default for every question (`--yes`).
pub struct DefaultsPrompter;

impl Prompter for DefaultsPrompter {
    fn project_name(&self, default: &str) -> Result<String> {
        Ok(default.to_string())
    }

    fn with_paper(&self, default: bool) -> Result<bool> {
        Ok(default)
    }
}

/// Answers already given on the command line.
#[derive(Debug, Default, Clone)]
pub struct Presets {
    pub project_name: Option<String>,
    pub with_paper: Option<bool>,
}

/// Asks whatever `presets` leaves open, name first. Blank names fall back to
/// `default_name`; nothing is validated.
pub fn collect_answers(
    prompter: &dyn Prompter,
    presets: &Presets,
    default_name: &str,
    default_with_paper: bool,
) -> Result<Answers> {
    let raw_name = match &presets.project_name {
        Some(name) => name.clone(),
        None => prompter.project_name(default_name)?,
    };
    let project_name = if raw_name.trim().is_empty() {
        default_name.to_string()
    } else {
        raw_name
    };

    let with_paper = match presets.with_paper {
        Some(choice) => choice,
        None => prompter.with_paper(default_with_paper)?,
    };

    Ok(Answers {
        project_name,
        with_paper,
    })
}
