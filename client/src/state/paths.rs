#[cfg(test)]
#[path = "paths_test.rs"]
mod paths_test;

/// The fixed learning paths shown in the home-page tab strip.
#[must_use]
pub fn learning_paths() -> Vec<&'static str> {
    vec!["Curriculum Basics", "Full Stack - Part 1", "HBnB v2"]
}

/// The path selected on first load.
pub const DEFAULT_PATH: &str = "Full Stack - Part 1";
