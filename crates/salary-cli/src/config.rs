//! Settings resolution: CLI flag, then environment, then config file, then
//! built-in defaults.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::ValueEnum;
use salary_core::{DEFAULT_PAGE_SIZE, SortColumn, SortDirection, SortState};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Environment variable for overriding the asset directory.
pub const ASSETS_ENV_VAR: &str = "SALARY_ASSETS_DIR";

/// Asset directory used when nothing else is configured.
pub const DEFAULT_ASSETS_DIR: &str = "assets";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Name,
    Salary,
}

impl From<SortKey> for SortColumn {
    fn from(key: SortKey) -> Self {
        match key {
            SortKey::Name => SortColumn::Name,
            SortKey::Salary => SortColumn::Salary,
        }
    }
}

/// Contents of the optional TOML config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GuideConfig {
    pub assets_dir: Option<PathBuf>,
    pub page_size: Option<usize>,
    pub sort: Option<SortKey>,
    pub descending: bool,
}

impl GuideConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("read config: {}", path.display()))?;
        let config: GuideConfig = toml::from_str(&content)
            .with_context(|| format!("parse config: {}", path.display()))?;
        debug!(path = %path.display(), "config loaded");
        Ok(config)
    }
}

/// Effective settings after applying precedence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub assets_dir: PathBuf,
    pub page_size: usize,
    pub sort: SortState,
}

impl Settings {
    pub fn resolve(flag: Option<&Path>, env: Option<String>, config: &GuideConfig) -> Self {
        let assets_dir = flag
            .map(Path::to_path_buf)
            .or_else(|| env.filter(|v| !v.trim().is_empty()).map(PathBuf::from))
            .or_else(|| config.assets_dir.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ASSETS_DIR));
        let direction = if config.descending {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
        let sort = config
            .sort
            .map(|key| SortState::new(key.into(), direction))
            .unwrap_or_default();
        Self {
            assets_dir,
            page_size: config.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
            sort,
        }
    }

    /// Sort for a browse run. A `--sort` column starts ascending; `--desc`
    /// makes it, or the configured column, descending.
    pub fn browse_sort(&self, column: Option<SortKey>, descending: bool) -> Result<SortState> {
        let direction = if descending {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
        match (column, self.sort.active()) {
            (Some(key), _) => Ok(SortState::new(key.into(), direction)),
            (None, Some((configured, _))) if descending => {
                Ok(SortState::new(configured, direction))
            }
            (None, None) if descending => bail!("--desc needs --sort or a configured sort"),
            (None, _) => Ok(self.sort),
        }
    }

    /// Loads the config file (if any) and reads the environment.
    pub fn from_sources(flag: Option<&Path>, config_path: Option<&Path>) -> Result<Self> {
        let config = match config_path {
            Some(path) => GuideConfig::load(path)?,
            None => GuideConfig::default(),
        };
        Ok(Self::resolve(
            flag,
            std::env::var(ASSETS_ENV_VAR).ok(),
            &config,
        ))
    }
}
