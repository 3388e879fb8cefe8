use std::process::Command;

// Embed the current commit in the version string unless the packager already
// set `RELAY_GIT_COMMIT`.
fn main() {
    println!("cargo::rerun-if-env-changed=RELAY_GIT_COMMIT");
    if std::env::var_os("RELAY_GIT_COMMIT").is_some() {
        return;
    }

    let commit = Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok());
    if let Some(commit) = commit {
        println!("cargo::rustc-env=RELAY_GIT_COMMIT={}", commit.trim());
    }
}
