use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::config::Settings;
use crate::execution::SystemRunner;
use crate::output::Output;
use crate::prompt::{collect_answers, DefaultsPrompter, Presets, Prompter, TerminalPrompter};
use crate::scaffold::Scaffolder;

impl Cli {
    pub fn execute(self) -> Result<()> {
        let settings = Settings::new().context("Failed to load config")?;
        let output = Output::new(settings.use_emoji());

        output.banner("Welcome to Quickstart React Native");

        let presets = Presets {
            project_name: self.name.clone(),
            with_paper: self.paper_choice(),
        };
        let prompter: &dyn Prompter = if self.yes {
            &DefaultsPrompter
        } else {
            &TerminalPrompter
        };
        let answers = collect_answers(
            prompter,
            &presets,
            &settings.default_project_name,
            settings.default_with_paper,
        )?;
        tracing::debug!(?answers, "collected answers");

        let cwd = std::env::current_dir().context("Could not determine current directory")?;
        let parent = match &self.dir {
            Some(dir) => cwd.join(dir),
            None => cwd.clone(),
        };

        let package_manager = self.package_manager.or(settings.package_manager);
        let scaffolder = Scaffolder::new(&SystemRunner, output, package_manager);
        let report = scaffolder.run(&answers, &parent)?;
        tracing::debug!(
            project_dir = %report.project_dir.display(),
            files = report.written.len(),
            patch = ?report.patch,
            "scaffold finished"
        );

        output.success(&format!(
            "Setup complete! Run:\n\ncd {}\n{}\n",
            cd_target(&report.project_dir, &cwd).display(),
            report.package_manager.run_command("android")
        ));
        Ok(())
    }
}

/// Where the user has to `cd` to from `cwd`: a relative path when the
/// project sits below it, the full path otherwise.
fn cd_target(project_dir: &Path, cwd: &Path) -> PathBuf {
    match project_dir.strip_prefix(cwd) {
        Ok(relative) if !relative.as_os_str().is_empty() => relative.to_path_buf(),
        _ => project_dir.to_path_buf(),
    }
}
