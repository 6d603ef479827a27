use anyhow::Result;
use assert_cmd::Command;
use serde_json::json;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use walkdir::WalkDir;

/// A scratch directory with fake `npx`/`npm` binaries, an empty HOME and a
/// working directory to scaffold into. Every fake invocation is appended to
/// `calls.log`.
pub struct Sandbox {
    root: TempDir,
}

impl Sandbox {
    pub fn new() -> Result<Self> {
        let sandbox = Sandbox {
            root: TempDir::new()?,
        };
        fs::create_dir_all(sandbox.bin())?;
        fs::create_dir_all(sandbox.home())?;
        fs::create_dir_all(sandbox.work())?;
        sandbox.install_fake("npx", &fake_initializer())?;
        sandbox.install_fake("npm", FAKE_NPM)?;
        Ok(sandbox)
    }

    pub fn bin(&self) -> PathBuf {
        self.root.path().join("bin")
    }

    pub fn home(&self) -> PathBuf {
        self.root.path().join("home")
    }

    pub fn work(&self) -> PathBuf {
        self.root.path().join("work")
    }

    pub fn project(&self, name: &str) -> PathBuf {
        self.work().join(name)
    }

    pub fn log_path(&self) -> PathBuf {
        self.root.path().join("calls.log")
    }

    pub fn calls(&self) -> Vec<String> {
        fs::read_to_string(self.log_path())
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    pub fn create_file(&self, path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
        Ok(())
    }

    fn install_fake(&self, name: &str, script: &str) -> Result<()> {
        let path = self.bin().join(name);
        fs::write(&path, script)?;
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))?;
        Ok(())
    }

    /// The binary, ready to run inside the sandbox.
    pub fn command(&self) -> Result<Command> {
        let path = format!(
            "{}:{}",
            self.bin().display(),
            std::env::var("PATH").unwrap_or_default()
        );
        let mut cmd = Command::cargo_bin("quickstart-rn")?;
        cmd.current_dir(self.work())
            .env("PATH", path)
            .env("HOME", self.home())
            .env("FAKE_LOG", self.log_path())
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG")
            .env_remove("QUICKSTART_RN_PACKAGE_MANAGER")
            .env_remove("QUICKSTART_RN_DEFAULT_PROJECT_NAME")
            .env_remove("QUICKSTART_RN_DEFAULT_WITH_PAPER")
            .env_remove("QUICKSTART_RN_SHOW_EMOJI");
        Ok(cmd)
    }
}

/// Relative paths of every file under `dir`, sorted.
pub fn files_under(dir: &Path) -> Vec<String> {
    let mut files: Vec<String> = WalkDir::new(dir)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter_map(|entry| {
            entry
                .path()
                .strip_prefix(dir)
                .ok()
                .map(|p| p.to_string_lossy().into_owned())
        })
        .collect();
    files.sort();
    files
}

pub fn activity_path(project: &Path, name: &str) -> PathBuf {
    project
        .join("android/app/src/main/java/com")
        .join(name.to_lowercase())
        .join("MainActivity.kt")
}

fn fake_initializer() -> String {
    let package_json = json!({
        "name": "fake-react-native-app",
        "private": true,
        "scripts": { "android": "react-native run-android" }
    });
    format!(
        r#"#!/bin/sh
echo "npx $*" >> "$FAKE_LOG"
if [ -n "$FAKE_INIT_EXIT" ]; then exit "$FAKE_INIT_EXIT"; fi
name="$3"
lower=$(printf '%s' "$name" | tr '[:upper:]' '[:lower:]')
mkdir -p "$name"
echo '{package_json}' > "$name/package.json"
if [ -n "$FAKE_LOCK_FILE" ]; then touch "$name/$FAKE_LOCK_FILE"; fi
if [ -z "$FAKE_NO_ANDROID" ]; then
  mkdir -p "$name/android/app/src/main/java/com/$lower"
  echo "// generated by init" > "$name/android/app/src/main/java/com/$lower/MainActivity.kt"
fi
"#,
        package_json = package_json
    )
}

const FAKE_NPM: &str = r#"#!/bin/sh
echo "npm $*" >> "$FAKE_LOG"
case "$*" in
  *react-native-paper*) if [ -n "$FAKE_PAPER_EXIT" ]; then exit "$FAKE_PAPER_EXIT"; fi ;;
esac
if [ -n "$FAKE_NPM_EXIT" ]; then exit "$FAKE_NPM_EXIT"; fi
exit 0
"#;
