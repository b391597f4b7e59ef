//! Semantic version reporting for the current build

/// The semantic version of the current build, with the git revision and
/// build date appended when they were provided at compile time via the
/// `GIT_REVISION` and `BUILD_DATE` environment variables.
pub fn version() -> String {
    let mut version = env!("CARGO_PKG_VERSION").to_string();
    match (option_env!("GIT_REVISION"), option_env!("BUILD_DATE")) {
        (Some(revision), Some(date)) => {
            version.push_str(&format!(" (revision {revision} built on {date})"));
        }
        (Some(revision), None) => {
            version.push_str(&format!(" ({revision})"));
        }
        _ => {}
    }
    version
}
