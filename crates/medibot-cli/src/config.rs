use std::path::{Path, PathBuf};

use medibot_chat::compose::ChatSettings;
use serde::{Deserialize, Serialize};

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
pub const CURRENT_VERSION: u32 = 1;

pub const CLASSIFIER_URL_ENV: &str = "MEDIBOT_CLASSIFIER_URL";

pub const DEFAULT_CLASSIFIER_URL: &str = "http://localhost:5000";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediBotConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    pub classifier_url: String,
    pub accuracy_range: String,
    /// Added in v1. v0 files always followed up half the time.
    pub follow_up_probability: f64,
    pub reply_delay_ms: u64,
    pub follow_up_delay_ms: u64,
    pub created_at: jiff::Timestamp,
}

impl Default for MediBotConfig {
    fn default() -> Self {
        let chat = ChatSettings::default();
        Self {
            config_version: CURRENT_VERSION,
            classifier_url: DEFAULT_CLASSIFIER_URL.to_string(),
            accuracy_range: chat.accuracy_range,
            follow_up_probability: chat.follow_up_probability,
            reply_delay_ms: chat.reply_delay_ms,
            follow_up_delay_ms: chat.follow_up_delay_ms,
            created_at: jiff::Timestamp::now(),
        }
    }
}

impl MediBotConfig {
    pub fn chat_settings(&self) -> ChatSettings {
        ChatSettings {
            accuracy_range: self.accuracy_range.clone(),
            follow_up_probability: self.follow_up_probability,
            reply_delay_ms: self.reply_delay_ms,
            follow_up_delay_ms: self.follow_up_delay_ms,
        }
    }

    /// Replace the classifier URL when `url` is set and non-blank.
    pub fn with_classifier_url(mut self, url: Option<String>) -> Self {
        if let Some(url) = url.filter(|u| !u.trim().is_empty()) {
            self.classifier_url = url;
        }
        self
    }

    /// Apply `$MEDIBOT_CLASSIFIER_URL`.
    pub fn with_env_overrides(self) -> Self {
        self.with_classifier_url(std::env::var(CLASSIFIER_URL_ENV).ok())
    }
}

pub fn config_dir() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("com.medibot.cli"))
}

pub fn config_path() -> eyre::Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

/// Load the user's config, or defaults when there is no file yet.
pub fn load_or_default() -> eyre::Result<MediBotConfig> {
    let path = config_path()?;
    if path.exists() {
        load_config_from(&path)
    } else {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        Ok(MediBotConfig::default())
    }
}

pub fn load_config_from(path: &Path) -> eyre::Result<MediBotConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let migrated = migrate(json, on_disk_version)?;
    let config: MediBotConfig = serde_json::from_value(migrated)?;
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
/// Each step is a pure transform on the raw JSON value.
pub fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update MediBot."
        ));
    }

    // v0 → v1: follow-up chance became configurable
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        obj.entry("follow_up_probability")
            .or_insert(serde_json::json!(ChatSettings::default().follow_up_probability));
        obj.insert("config_version".to_string(), serde_json::json!(1));
        tracing::info!("migrated config v0 → v1 (added follow_up_probability)");
    }

    Ok(json)
}

pub fn save_config(config: &MediBotConfig) -> eyre::Result<PathBuf> {
    save_config_in(&config_dir()?, config)
}

/// Write `config.json` into `dir` atomically, stamped with the current
/// version. Owner-only permissions on Unix.
pub fn save_config_in(dir: &Path, config: &MediBotConfig) -> eyre::Result<PathBuf> {
    std::fs::create_dir_all(dir)?;

    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;

    let path = dir.join("config.json");
    let json = serde_json::to_string_pretty(&stamped)?;

    let tmp_path = dir.join("config.json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
    }

    std::fs::rename(&tmp_path, &path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(path)
}

pub fn delete_config() -> eyre::Result<bool> {
    let path = config_path()?;
    if !path.exists() {
        return Ok(false);
    }
    std::fs::remove_file(&path)?;
    tracing::info!(path = %path.display(), "config deleted");
    Ok(true)
}
