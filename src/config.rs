use std::path::PathBuf;

use url::Url;

use crate::i18n;

/// Construction payload handed over by the host shell. Immutable for the
/// container's lifetime.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct Session {
    pub config: Config,
    pub logged_user: LoggedUser,
    /// Opaque content payload forwarded by the host, unused by this
    /// sub-application.
    #[serde(default)]
    pub content: serde_json::Value,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct Config {
    pub api_url: Url,
    pub hexcolor: String,
    pub app_config: AppConfig,
    #[serde(default)]
    pub translation: i18n::Bundle,
}

#[derive(Debug, Clone, Copy, serde::Deserialize)]
pub struct AppConfig {
    pub workspace_id: u32,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct LoggedUser {
    pub lang: String,
}

impl Session {
    /// Local fallback used when the host supplies no payload, pointing at a
    /// development API.
    pub fn debug() -> Self {
        Self {
            config: Config {
                api_url: Url::parse("http://localhost:6543/api/v2").unwrap(),
                hexcolor: "#ff9800".to_string(),
                app_config: AppConfig { workspace_id: 1 },
                translation: i18n::Bundle::new(),
            },
            logged_user: LoggedUser {
                lang: i18n::FALLBACK_LANG.to_string(),
            },
            content: serde_json::Value::Null,
        }
    }
}

pub fn init(path: PathBuf) -> Result<Session, Box<dyn std::error::Error>> {
    let string = std::fs::read_to_string(path)?;
    let session: Session = toml::from_str(&string)?;

    Ok(session)
}
