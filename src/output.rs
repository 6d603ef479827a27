//! Progress lines printed to the user while scaffolding.

use crossterm::style::{StyledContent, Stylize};

/// Styles progress lines; `emoji` controls the pictograph prefixes.
#[derive(Debug, Clone, Copy)]
pub struct Output {
    emoji: bool,
}

impl Output {
    pub fn new(emoji: bool) -> Self {
        Self { emoji }
    }

    fn prefixed(&self, icon: &str, msg: &str) -> String {
        if self.emoji {
            format!("{} {}", icon, msg)
        } else {
            msg.to_string()
        }
    }

    pub fn banner(&self, msg: &str) {
        println!("{}", self.prefixed("🚀", msg).green());
    }

    /// A step that is about to start; `icon` is shown only with emoji enabled.
    pub fn step(&self, icon: &str, msg: &str) {
        println!("{}", self.prefixed(icon, msg).blue());
    }

    pub fn success(&self, msg: &str) {
        println!("{}", self.prefixed("✅", msg).green());
    }

    pub fn warning(&self, msg: &str) {
        eprintln!("{}", self.prefixed("⚠️", msg).yellow());
    }

    pub fn error(&self, msg: &str) {
        eprintln!("{}", styled_error(msg));
    }
}

fn styled_error(msg: &str) -> StyledContent<String> {
    format!("Error: {}", msg).red().bold()
}
