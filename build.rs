use std::path::Path;
use std::process::Command;

#[path = "build/head_refs.rs"]
mod head_refs;

/// Trimmed stdout of a successful git invocation
fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8(output.stdout)
        .ok()
        .map(|s| s.trim().to_string())
}

fn main() {
    // Short hash of the commit being built, shown by --version
    let git_hash = git(&["rev-parse", "--short", "HEAD"]).unwrap_or_else(|| "unknown".to_string());
    println!("cargo:rustc-env=GIT_HASH={}", git_hash);
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=build/head_refs.rs");

    if let Some(git_dir) = git(&["rev-parse", "--git-dir"]) {
        let common_dir = git(&["rev-parse", "--git-common-dir"]).unwrap_or_else(|| git_dir.clone());
        for path in head_refs::head_watch_list(Path::new(&git_dir), Path::new(&common_dir)) {
            println!("cargo:rerun-if-changed={}", path.display());
        }
    }
}
