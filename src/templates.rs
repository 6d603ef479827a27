//! Boilerplate sources written into a new project.
//!
//! Templates live in `templates/` and are compiled in. Placeholders have the
//! form `{{name}}`; see [`render`].

const AXIOS_CONFIG: &str = include_str!("../templates/axiosConfig.js");
const ROOT_NAVIGATOR: &str = include_str!("../templates/RootNavigator.js");
const APP_NAVIGATOR: &str = include_str!("../templates/AppNavigator.js");
const HOME_SCREEN: &str = include_str!("../templates/HomeScreen.js");
const DETAILS_SCREEN: &str = include_str!("../templates/DetailsScreen.js");
const PAPER_THEME: &str = include_str!("../templates/theme.js");
const PAPER_BABEL_CONFIG: &str = include_str!("../templates/babel.config.js");
const APP_ENTRY: &str = include_str!("../templates/App.js");
const MAIN_ACTIVITY: &str = include_str!("../templates/MainActivity.kt");

pub const PAPER_IMPORTS: &str = "import { Provider as PaperProvider } from \"react-native-paper\";\nimport theme from \"./src/theme/theme\";";
pub const PAPER_WRAPPER: &str =
    "AppWrapper = ({ children }) => <PaperProvider theme={theme}>{children}</PaperProvider>;";

/// A file to write, relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Boilerplate {
    pub path: &'static str,
    pub content: String,
}

impl Boilerplate {
    fn fixed(path: &'static str, content: &str) -> Self {
        Self {
            path,
            content: content.to_string(),
        }
    }
}

/// Every file the scaffold writes, in write order.
pub fn boilerplate_files(with_paper: bool) -> Vec<Boilerplate> {
    let mut files = vec![
        Boilerplate::fixed("src/api/axiosConfig.js", AXIOS_CONFIG),
        Boilerplate::fixed("src/navigation/RootNavigator.js", ROOT_NAVIGATOR),
        Boilerplate::fixed("src/navigation/AppNavigator.js", APP_NAVIGATOR),
        Boilerplate::fixed("src/screens/HomeScreen.js", HOME_SCREEN),
        Boilerplate::fixed("src/screens/DetailsScreen.js", DETAILS_SCREEN),
    ];

    if with_paper {
        files.push(Boilerplate::fixed("src/theme/theme.js", PAPER_THEME));
        files.push(Boilerplate::fixed("babel.config.js", PAPER_BABEL_CONFIG));
    }

    files.push(Boilerplate {
        path: "App.js",
        content: app_entry(with_paper),
    });
    files
}

pub fn app_entry(with_paper: bool) -> String {
    let (imports, wrapper) = if with_paper {
        (PAPER_IMPORTS, PAPER_WRAPPER)
    } else {
        ("", "")
    };
    render(
        APP_ENTRY,
        &[("paper_imports", imports), ("paper_wrapper", wrapper)],
    )
}

pub fn main_activity(project_name: &str) -> String {
    let lower = project_name.to_lowercase();
    render(
        MAIN_ACTIVITY,
        &[("project_name", project_name), ("project_name_lower", &lower)],
    )
}

/// Replaces `{{key}}` placeholders in one pass, so substituted values are
/// never re-scanned. Unknown placeholders are left as written.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after_open = &rest[start + 2..];
        let Some(end) = after_open.find("}}") else {
            out.push_str(&rest[start..]);
            return out;
        };

        let key = &after_open[..end];
        match vars.iter().find(|(name, _)| *name == key) {
            Some((_, value)) => out.push_str(value),
            None => out.push_str(&rest[start..start + 2 + end + 2]),
        }
        rest = &after_open[end + 2..];
    }

    out.push_str(rest);
    out
}
