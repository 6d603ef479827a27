//! The scaffolding sequence: initialize, install, lay out `src/`, write
//! boilerplate, patch the Android activity.

pub mod files;
pub mod patch;

use std::path::{Path, PathBuf};

use crate::error::ScaffoldError;
use crate::execution::CommandRunner;
use crate::output::Output;
use crate::package_managers::{resolve_package_manager, NodePackageManager};
use crate::prompt::Answers;
use crate::templates::boilerplate_files;

use files::{create_dirs, write_file, PROJECT_DIRS};
use patch::{patch_main_activity, PatchOutcome};

pub const INITIALIZER_PACKAGE: &str = "@react-native-community/cli@latest";

pub const MANDATORY_DEPENDENCIES: [&str; 6] = [
    "axios",
    "@react-navigation/native",
    "@react-navigation/native-stack",
    "@react-navigation/bottom-tabs",
    "react-native-screens",
    "react-native-safe-area-context",
];

pub const PAPER_DEPENDENCIES: [&str; 2] = [
    "react-native-paper",
    "@react-native-vector-icons/material-design-icons",
];

#[derive(Debug)]
pub struct ScaffoldReport {
    pub project_dir: PathBuf,
    pub package_manager: NodePackageManager,
    pub written: Vec<PathBuf>,
    pub patch: PatchOutcome,
}

pub struct Scaffolder<'a> {
    runner: &'a dyn CommandRunner,
    output: Output,
    package_manager: NodePackageManager,
}

impl<'a> Scaffolder<'a> {
    pub fn new(
        runner: &'a dyn CommandRunner,
        output: Output,
        package_manager: Option<NodePackageManager>,
    ) -> Self {
        Self {
            runner,
            output,
            package_manager: resolve_package_manager(package_manager),
        }
    }

    /// Creates `parent/<project name>` and fills it in. Stops at the first
    /// failing step; earlier steps are not undone.
    pub fn run(&self, answers: &Answers, parent: &Path) -> Result<ScaffoldReport, ScaffoldError> {
        let project_dir = self.initialize(answers, parent)?;

        let package_manager = self.package_manager;
        tracing::debug!(%package_manager, "using package manager");

        self.output.step("🔗", "Installing essential packages...");
        self.runner
            .run(&package_manager.install(&MANDATORY_DEPENDENCIES, &project_dir))?;

        if answers.with_paper {
            self.output.step("🎨", "Installing react-native-paper...");
            self.runner
                .run(&package_manager.install(&PAPER_DEPENDENCIES, &project_dir))?;
        }

        self.output.step("📂", "Setting up folder structure...");
        create_dirs(&project_dir, &PROJECT_DIRS)?;

        let mut written = Vec::new();
        for file in boilerplate_files(answers.with_paper) {
            written.push(write_file(&project_dir, file.path, &file.content)?);
        }

        let patch = patch_main_activity(&project_dir, &answers.project_name)?;
        match &patch {
            PatchOutcome::Patched(_) => self.output.success("Patched MainActivity.kt successfully!"),
            PatchOutcome::Skipped(_) => self
                .output
                .warning("MainActivity.kt not found, skipping patch."),
        }

        Ok(ScaffoldReport {
            project_dir,
            package_manager,
            written,
            patch,
        })
    }

    fn initialize(&self, answers: &Answers, parent: &Path) -> Result<PathBuf, ScaffoldError> {
        self.output.step("📦", "Creating React Native project...");
        self.runner.run(&self.package_manager.exec(
            INITIALIZER_PACKAGE,
            &["init", &answers.project_name],
            parent,
        ))?;

        let project_dir = parent.join(&answers.project_name);
        if !project_dir.is_dir() {
            return Err(ScaffoldError::ProjectDirMissing(project_dir));
        }
        Ok(project_dir)
    }
}
