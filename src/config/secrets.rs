//! Remote store credentials.
//!
//! Lookup order: the deployment secrets file (`secrets.yml` in the config
//! directory), then the process environment. A local `.env` file is loaded
//! into the environment first; it never overrides variables already set.

use crate::errors::{AppError, AppResult};
use serde::Deserialize;
use std::env;
use std::fmt;
use std::fs;
use std::path::Path;
use tracing::debug;

pub const URL_VAR: &str = "SUPABASE_URL";
pub const KEY_VAR: &str = "SUPABASE_KEY";

#[derive(Clone)]
pub struct RemoteConfig {
    pub url: String,
    pub key: String,
}

// Keep the key out of logs and panics.
impl fmt::Debug for RemoteConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RemoteConfig")
            .field("url", &self.url)
            .field("key", &"***")
            .finish()
    }
}

#[derive(Deserialize)]
struct SecretsFile {
    #[serde(rename = "SUPABASE_URL")]
    url: Option<String>,
    #[serde(rename = "SUPABASE_KEY")]
    key: Option<String>,
}

impl RemoteConfig {
    /// Resolve the credentials once at startup.
    pub fn resolve(secrets_file: &Path) -> AppResult<Self> {
        if let Some(cfg) = Self::from_secrets_file(secrets_file)? {
            debug!(source = %secrets_file.display(), "remote credentials from secrets file");
            return Ok(cfg);
        }

        if let Ok(path) = dotenvy::dotenv() {
            debug!(source = %path.display(), "loaded .env file");
        }
        Self::from_env()
    }

    /// `Ok(None)` when the file is absent or does not define the endpoint.
    pub fn from_secrets_file(path: &Path) -> AppResult<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(path)?;
        let secrets: SecretsFile = serde_yaml::from_str(&content)?;

        match secrets.url.filter(|u| !u.trim().is_empty()) {
            None => Ok(None),
            Some(url) => {
                let key = secrets
                    .key
                    .filter(|k| !k.trim().is_empty())
                    .ok_or(AppError::MissingCredential(KEY_VAR))?;
                Ok(Some(Self { url, key }))
            }
        }
    }

    pub fn from_env() -> AppResult<Self> {
        let url = non_empty_var(URL_VAR).ok_or(AppError::MissingCredential(URL_VAR))?;
        let key = non_empty_var(KEY_VAR).ok_or(AppError::MissingCredential(KEY_VAR))?;
        Ok(Self { url, key })
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}
