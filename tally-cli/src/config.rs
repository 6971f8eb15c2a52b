use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::state::{ensure_tally_home, tally_home};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub input: InputSection,
    pub report: ReportSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputSection {
    /// Statement used when no path is given on the command line
    pub default_path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportSection {
    pub html_filename: String,
    /// Where the HTML report is written (default: next to the executable)
    pub output_dir: Option<PathBuf>,
    pub open_browser: bool,
}

impl Default for InputSection {
    fn default() -> Self {
        Self {
            default_path: PathBuf::from("sample_bank_statement.csv"),
        }
    }
}

impl Default for ReportSection {
    fn default() -> Self {
        Self {
            html_filename: tally_finance::REPORT_FILENAME.to_string(),
            output_dir: None,
            open_browser: false,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    Ok(tally_home()?.join("config.toml"))
}

/// Load `~/.tally/config.toml`, falling back to defaults when it is absent.
pub fn load_config() -> Result<Config> {
    let p = config_path()?;
    if !p.exists() {
        return Ok(Config::default());
    }
    read_config(&p)
}

pub fn read_config(path: &Path) -> Result<Config> {
    let s = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    toml::from_str(&s).with_context(|| format!("parse {}", path.display()))
}

pub fn save_config(cfg: &Config) -> Result<()> {
    let p = ensure_tally_home()?.join("config.toml");
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(&p, s).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}

pub fn init_config() -> Result<()> {
    let p = config_path()?;
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(());
    }
    save_config(&Config::default())?;
    println!("Wrote {}", p.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_fills_defaults() {
        let cfg: Config = toml::from_str("[report]\nopen_browser = true\n").unwrap();
        assert!(cfg.report.open_browser);
        assert_eq!(cfg.report.html_filename, "finance_report.html");
        assert_eq!(cfg.input.default_path, PathBuf::from("sample_bank_statement.csv"));
        assert_eq!(cfg.report.output_dir, None);
    }

    #[test]
    fn test_empty_config_is_default() {
        let cfg: Config = toml::from_str("").unwrap();
        assert_eq!(cfg, Config::default());
    }
}
