//! Build metadata embedded by `build.rs`.

const UNKNOWN_COMMIT: &str = "unknown";
const SHORT_COMMIT_LEN: usize = 7;

/// Commit the bundle was built from, or `unknown` outside a checkout.
pub fn git_commit_hash() -> &'static str {
    option_env!("PORTAL_WEB_GIT_SHA")
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or(UNKNOWN_COMMIT)
}

/// Footer caption for `commit`, shortened to the usual seven characters.
pub fn footer_label(commit: &str) -> String {
    let short: String = commit.trim().chars().take(SHORT_COMMIT_LEN).collect();
    if short.is_empty() {
        format!("Build {UNKNOWN_COMMIT}")
    } else {
        format!("Build {short}")
    }
}

#[cfg(test)]
mod tests {
    use super::footer_label;

    #[test]
    fn footer_label_shortens_commit() {
        assert_eq!(footer_label("3f9c2d1a7b55e0"), "Build 3f9c2d1");
        assert_eq!(footer_label("unknown"), "Build unknown");
        assert_eq!(footer_label("  "), "Build unknown");
    }
}
