use std::process::Command;

const VERSION_ENV: &str = "TUDU_VERSION";

/// Stamp `TUDU_VERSION` for `--version`: the crate version, with the short
/// commit hash appended when building from a git checkout. Setting
/// `TUDU_VERSION` in the build environment overrides both.
fn main() {
    println!("cargo:rerun-if-env-changed={VERSION_ENV}");
    println!("cargo:rerun-if-changed=.git/HEAD");

    let version = std::env::var(VERSION_ENV).unwrap_or_else(|_| {
        let pkg = env!("CARGO_PKG_VERSION");
        match short_hash() {
            Some(hash) => format!("{pkg}+{hash}"),
            None => pkg.to_string(),
        }
    });
    println!("cargo:rustc-env={VERSION_ENV}={version}");
}

fn short_hash() -> Option<String> {
    let out = Command::new("git")
        .args(["rev-parse", "--short=7", "HEAD"])
        .output()
        .ok()?;
    if !out.status.success() {
        return None;
    }
    let hash = String::from_utf8(out.stdout).ok()?.trim().to_string();
    (!hash.is_empty()).then_some(hash)
}
