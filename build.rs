use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs");
    println!("cargo:rerun-if-env-changed=PORTAL_WEB_GIT_SHA");

    // CI images without a checkout pass the commit in explicitly.
    let sha = std::env::var("PORTAL_WEB_GIT_SHA")
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .or_else(head_commit)
        .unwrap_or_else(|| "unknown".to_string());

    println!("cargo:rustc-env=PORTAL_WEB_GIT_SHA={sha}");
}

fn head_commit() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short=12", "HEAD"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8(output.stdout)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
