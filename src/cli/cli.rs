use crate::package_managers::NodePackageManager;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "quickstart-rn")]
#[command(version)]
#[command(
    about = "Scaffold a React Native app with navigation, an API client and optional react-native-paper",
    long_about = "Scaffold a React Native app with navigation, an API client and optional react-native-paper.\n\n\
        Runs the React Native initializer, installs the navigation and networking packages, \
        writes starter sources under src/ and replaces android/.../MainActivity.kt with a \
        version that works with react-native-screens. Any edits already made to that file are lost."
)]
pub struct Cli {
    /// Project name (asked interactively when omitted)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Install react-native-paper and write its theme and babel config
    #[arg(long, conflicts_with = "no_paper")]
    pub paper: bool,

    /// Skip react-native-paper without asking
    #[arg(long)]
    pub no_paper: bool,

    /// Accept the default answer for every question not given as a flag
    #[arg(short, long)]
    pub yes: bool,

    /// Create the project inside this directory instead of the current one
    #[arg(short, long)]
    pub dir: Option<PathBuf>,

    /// Package manager used to run the initializer and install dependencies
    #[arg(long)]
    pub package_manager: Option<NodePackageManager>,

    /// Show more log output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    /// The paper choice given on the command line, if any.
    pub fn paper_choice(&self) -> Option<bool> {
        match (self.paper, self.no_paper) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}
