use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::ui::messages::warning;

/// Application configuration. Loaded once in `run()` and passed into the
/// components that need it; there is no module-level mutable state.
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Path of the key-value store file holding records and drafts.
    pub store_file: String,
    /// Default directory for exports and backups.
    pub export_dir: String,
    #[serde(default = "default_autosave_quiet_secs")]
    pub autosave_quiet_secs: u64,
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,
}

fn default_autosave_quiet_secs() -> u64 {
    2
}
fn default_recent_limit() -> usize {
    5
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_file: Self::store_file_path().to_string_lossy().to_string(),
            export_dir: Self::config_dir().join("exports").to_string_lossy().to_string(),
            autosave_quiet_secs: default_autosave_quiet_secs(),
            recent_limit: default_recent_limit(),
        }
    }
}

impl Config {
    /// Standard configuration directory depending on the platform.
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = std::env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("stitchbook")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".stitchbook")
        }
    }

    /// Full path of the config file.
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("stitchbook.conf")
    }

    /// Full path of the key-value store file.
    pub fn store_file_path() -> PathBuf {
        Self::config_dir().join("stitchbook.json")
    }

    /// Load configuration from file, or return defaults if not found. A
    /// malformed file degrades to defaults with a warning, never a panic.
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            match fs::read_to_string(&path) {
                Ok(content) => match serde_yaml::from_str(&content) {
                    Ok(cfg) => cfg,
                    Err(e) => {
                        warning(format!("Configuration file is malformed ({e}); using defaults"));
                        Config::default()
                    }
                },
                Err(e) => {
                    warning(format!("Could not read configuration ({e}); using defaults"));
                    Config::default()
                }
            }
        } else {
            Config::default()
        }
    }

    /// Initialize configuration and store files.
    pub fn init_all(custom_store: Option<String>, is_test: bool) -> io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // Store file: user provided or default
        let store_path = if let Some(name) = custom_store {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::store_file_path()
        };

        let config = Config {
            store_file: store_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| io::Error::other(e.to_string()))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        // Create an empty key-value namespace if the store does not exist yet
        if !store_path.exists() {
            if let Some(parent) = store_path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&store_path, "{}")?;
        }

        println!("✅ Store:       {:?}", store_path);

        Ok(())
    }
}
