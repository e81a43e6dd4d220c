//! Shared fixtures for running verstamp against throwaway git checkouts

use assert_cmd::Command;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Whether a git executable is on PATH
pub fn git_available() -> bool {
    std::process::Command::new("git")
        .arg("--version")
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}

/// A temporary working directory, optionally turned into a git checkout
pub struct TestRepo {
    pub temp_dir: TempDir,
}

impl TestRepo {
    /// Plain directory that is not a checkout
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self {
            temp_dir: tempfile::tempdir()?,
        })
    }

    /// Initialized checkout with `commits` empty commits and an `include/` directory
    pub fn with_commits(commits: usize) -> anyhow::Result<Self> {
        let repo = Self::new()?;
        repo.git(&["init", "-q"])?;
        for i in 0..commits {
            repo.commit(&format!("commit {}", i + 1))?;
        }
        repo.create_include_dir()?;
        Ok(repo)
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn create_include_dir(&self) -> anyhow::Result<()> {
        fs::create_dir_all(self.path().join("include"))?;
        Ok(())
    }

    pub fn commit(&self, message: &str) -> anyhow::Result<()> {
        self.git(&[
            "-c",
            "user.name=verstamp",
            "-c",
            "user.email=verstamp@example.invalid",
            "-c",
            "commit.gpgsign=false",
            "commit",
            "-q",
            "--allow-empty",
            "-m",
            message,
        ])
    }

    pub fn header(&self) -> String {
        fs::read_to_string(self.path().join("include/version.h")).unwrap()
    }

    pub fn build_number(&self) -> String {
        fs::read_to_string(self.path().join("versioning")).unwrap()
    }

    /// verstamp invocation rooted in this directory.
    ///
    /// Repository discovery stops at the temp dir so an enclosing checkout
    /// is never picked up.
    pub fn stamp(&self) -> Command {
        let mut cmd = Command::cargo_bin("verstamp").unwrap();
        cmd.current_dir(self.path());
        if let Some(parent) = self.path().parent() {
            cmd.env("GIT_CEILING_DIRECTORIES", parent);
        }
        cmd
    }

    fn git(&self, args: &[&str]) -> anyhow::Result<()> {
        let status = std::process::Command::new("git")
            .args(args)
            .current_dir(self.path())
            .status()?;
        anyhow::ensure!(status.success(), "git {:?} failed with {}", args, status);
        Ok(())
    }
}
