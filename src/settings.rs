//! User settings
//!
//! A small optional TOML file under the platform config directory, e.g.
//! `~/.config/alsavol/config.toml`:
//!
//! ```toml
//! device = "default"
//! playback = "Master"
//! capture = "Capture"
//! ```
//!
//! A missing file yields the defaults above; a malformed one is logged and
//! ignored.

use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use tracing::{debug, warn};

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Mixer device to attach to.
    pub device: String,
    /// Simple-element name for the playback class.
    pub playback: String,
    /// Simple-element name for the capture class.
    pub capture: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            device: "default".to_string(),
            playback: "Master".to_string(),
            capture: "Capture".to_string(),
        }
    }
}

impl Settings {
    pub fn load() -> Self {
        let dirs = match ProjectDirs::from("tech", "sigsegv", "alsavol") {
            Some(dirs) => dirs,
            None => return Self::default(),
        };
        let path = dirs.config_dir().join("config.toml");
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(_) => return Self::default(),
        };
        match toml::from_str(&text) {
            Ok(settings) => {
                debug!("loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                warn!("ignoring malformed {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}
