use clap::{ArgAction, Parser};

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.1.0" for releases, "0.1.0@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "contacts", bin_name = "contacts", version = get_version())]
#[command(about = "List, fetch, add and remove contacts stored in a JSON file", long_about = None)]
pub struct Cli {
    /// Action to perform: list, get, add or remove
    #[arg(short, long)]
    pub action: Option<String>,

    /// Contact id (get, remove)
    #[arg(short, long)]
    pub id: Option<String>,

    /// Contact name (add)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Contact email (add)
    #[arg(short, long)]
    pub email: Option<String>,

    /// Contact phone (add)
    #[arg(short, long)]
    pub phone: Option<String>,

    /// Verbose logging to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
