//! Configuration management with layered hierarchy

use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_COLLECTION_FILE: &str = "Ps2 games.xlsx";
pub const DEFAULT_WISHLIST_FILE: &str = "wishlist_videogiochi.xlsx";
pub const DEFAULT_SEED_FILE: &str = "data/seed.json";
pub const DEFAULT_PLATFORMS: &[&str] = &["PS1", "PS2", "PS4", "DS WII"];

/// Project-level config file, looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = ".shelfsync.yaml";

/// Shelfsync configuration with layered hierarchy
///
/// Every field is optional so layers can be merged; use the accessors for
/// the effective values.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Collection workbook path
    pub collection: Option<PathBuf>,

    /// Wishlist workbook path
    pub wishlist: Option<PathBuf>,

    /// Seed JSON path
    pub seed: Option<PathBuf>,

    /// Platforms counted on summary sheets and offered in platform drop-downs
    pub platforms: Option<Vec<String>>,

    /// Back up workbooks before overwriting them
    pub backup: Option<bool>,
}

impl Config {
    /// Load configuration from all sources, merging in priority order
    pub fn load() -> Self {
        Self::load_from(Path::new("."))
    }

    /// Same as [`Config::load`] with the project file looked up in `dir`
    pub fn load_from(dir: &Path) -> Self {
        let mut config = Config::default();

        // 1. Built-in defaults (applied by the accessors)

        // 2. Global user config (~/.config/shelfsync/config.yaml)
        if let Some(global_path) = Self::global_config_path() {
            if let Some(global) = Self::read_file(&global_path) {
                config.merge(global);
            }
        }

        // 3. Project config (./.shelfsync.yaml)
        if let Some(project) = Self::read_file(&dir.join(PROJECT_CONFIG_FILE)) {
            config.merge(project);
        }

        // 4. Environment variables
        if let Ok(path) = std::env::var("SHELFSYNC_COLLECTION") {
            config.collection = Some(PathBuf::from(path));
        }
        if let Ok(path) = std::env::var("SHELFSYNC_WISHLIST") {
            config.wishlist = Some(PathBuf::from(path));
        }
        if let Ok(path) = std::env::var("SHELFSYNC_SEED") {
            config.seed = Some(PathBuf::from(path));
        }

        config
    }

    /// Unreadable or invalid files are ignored
    fn read_file(path: &Path) -> Option<Config> {
        let contents = std::fs::read_to_string(path).ok()?;
        serde_yml::from_str::<Config>(&contents).ok()
    }

    /// Get the path to the global config file
    fn global_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "shelfsync")
            .map(|dirs| dirs.config_dir().join("config.yaml"))
    }

    /// Merge another config into this one (other takes precedence)
    fn merge(&mut self, other: Config) {
        if other.collection.is_some() {
            self.collection = other.collection;
        }
        if other.wishlist.is_some() {
            self.wishlist = other.wishlist;
        }
        if other.seed.is_some() {
            self.seed = other.seed;
        }
        if other.platforms.is_some() {
            self.platforms = other.platforms;
        }
        if other.backup.is_some() {
            self.backup = other.backup;
        }
    }

    /// Collection workbook: command-line value, then config, then the default
    pub fn collection_path(&self, cli: Option<PathBuf>) -> PathBuf {
        cli.or_else(|| self.collection.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_COLLECTION_FILE))
    }

    pub fn wishlist_path(&self, cli: Option<PathBuf>) -> PathBuf {
        cli.or_else(|| self.wishlist.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_WISHLIST_FILE))
    }

    pub fn seed_path(&self, cli: Option<PathBuf>) -> PathBuf {
        cli.or_else(|| self.seed.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SEED_FILE))
    }

    pub fn platforms(&self) -> Vec<String> {
        self.platforms
            .clone()
            .unwrap_or_else(|| DEFAULT_PLATFORMS.iter().map(|p| p.to_string()).collect())
    }

    /// Whether to back up, given a `--no-backup` flag
    pub fn backup(&self, no_backup_flag: bool) -> bool {
        !no_backup_flag && self.backup.unwrap_or(true)
    }
}
