use std::fmt;
use std::path::Path;

use serde::Deserialize;

use crate::execution::Invocation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum NodePackageManager {
    Npm,
    Yarn,
    Pnpm,
    Bun,
}

impl NodePackageManager {
    pub fn program(&self) -> &'static str {
        match self {
            Self::Npm => "npm",
            Self::Yarn => "yarn",
            Self::Pnpm => "pnpm",
            Self::Bun => "bun",
        }
    }

    /// `npm install <packages>` and its equivalents, run inside the project.
    pub fn install(&self, packages: &[&str], cwd: &Path) -> Invocation {
        let verb = match self {
            Self::Npm => "install",
            Self::Yarn | Self::Pnpm | Self::Bun => "add",
        };
        let mut invocation = Invocation::new(self.program(), cwd).arg(verb);
        for package in packages {
            invocation = invocation.arg(*package);
        }
        invocation
    }

    /// Runs a package's binary without installing it (`npx`, `pnpm dlx`, `bunx`).
    pub fn exec(&self, package: &str, args: &[&str], cwd: &Path) -> Invocation {
        let mut invocation = match self {
            // yarn classic has no dlx, npx ships with node
            Self::Npm | Self::Yarn => Invocation::new("npx", cwd),
            Self::Pnpm => Invocation::new("pnpm", cwd).arg("dlx"),
            Self::Bun => Invocation::new("bunx", cwd),
        };
        invocation = invocation.arg(package);
        for arg in args {
            invocation = invocation.arg(*arg);
        }
        invocation
    }

    /// The command line a user types to run a package.json script.
    pub fn run_command(&self, script: &str) -> String {
        format!("{} run {}", self.program(), script)
    }
}

impl fmt::Display for NodePackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.program())
    }
}
