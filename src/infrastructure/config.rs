use anyhow::{Result, anyhow};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Per-user configuration directory holding the saved-request file.
pub struct Config {
    dir: PathBuf,
}

impl Config {
    /// Resolves `~/.apitester` from the user's home directory.
    pub fn resolve() -> Result<Self> {
        let home = env::var_os("HOME")
            .or_else(|| env::var_os("USERPROFILE"))
            .map(PathBuf::from)
            .ok_or_else(|| anyhow!("Could not determine the home directory"))?;
        Ok(Self {
            dir: home.join(".apitester"),
        })
    }

    pub fn with_dir(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn ensure_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .map_err(|e| anyhow!("Could not create {}: {}", self.dir.display(), e))
    }

    /// The fixed path of the saved-request file.
    pub fn tests_file(&self) -> PathBuf {
        self.dir.join("tests.json")
    }
}
