use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

pub fn tally_home() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".tally"))
}

pub fn ensure_tally_home() -> Result<PathBuf> {
    let dir = tally_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}

/// Directory holding the running executable; the HTML report lands here by default
pub fn program_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("locate current executable")?;
    exe.parent()
        .map(|p| p.to_path_buf())
        .context("executable has no parent directory")
}
