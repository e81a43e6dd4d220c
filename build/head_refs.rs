//! Which files under `.git` to watch so the embedded hash follows HEAD
//!
//! `.git/HEAD` alone only changes on a branch switch. A commit on the
//! current branch moves the branch ref instead, either the loose file under
//! `refs/heads` or a line in `packed-refs`.

use std::fs;
use std::path::{Path, PathBuf};

/// Paths whose change may mean HEAD now names a different commit.
///
/// `git_dir` holds `HEAD`; `common_dir` holds refs (they differ in a
/// linked worktree). Only existing paths are returned, since a missing
/// path makes cargo rerun the build script on every build.
pub fn head_watch_list(git_dir: &Path, common_dir: &Path) -> Vec<PathBuf> {
    let head = git_dir.join("HEAD");
    let mut paths = Vec::new();

    let contents = match fs::read_to_string(&head) {
        Ok(contents) => contents,
        Err(_) => return paths,
    };
    paths.push(head);

    // Detached HEAD holds a hash and only changes through HEAD itself
    let reference = match contents.trim().strip_prefix("ref:") {
        Some(reference) => reference.trim(),
        None => return paths,
    };

    let loose_ref = common_dir.join(reference);
    if loose_ref.is_file() {
        paths.push(loose_ref);
    } else if let Some(parent) = loose_ref.parent().filter(|p| p.is_dir()) {
        // Branch is only packed (or unborn); the loose file appears on the next commit
        paths.push(parent.to_path_buf());
    }

    let packed_refs = common_dir.join("packed-refs");
    if packed_refs.is_file() {
        paths.push(packed_refs);
    }

    paths
}
