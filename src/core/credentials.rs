//! API Key Resolution
//!
//! Resolves the Google Cloud API key shared by both language endpoints:
//! `GOOGLE_API_KEY` in the environment wins, then the system keychain. The
//! first successful lookup is cached for the life of the process.

use std::sync::OnceLock;

use keyring::Entry;
use thiserror::Error;

const SERVICE_NAME: &str = "jabberwock";
const KEY_NAME: &str = "google_api_key";
const ENV_VAR: &str = "GOOGLE_API_KEY";

#[derive(Error, Debug)]
pub enum CredentialError {
    #[error("Keyring error: {0}")]
    Keyring(#[from] keyring::Error),

    #[error("No Google API key found: set GOOGLE_API_KEY or store one in the keychain")]
    NotFound,
}

pub type CredentialResult<T> = std::result::Result<T, CredentialError>;

static CACHED_KEY: OnceLock<String> = OnceLock::new();

/// Resolve the API key, caching the first successful lookup.
pub fn api_key() -> CredentialResult<String> {
    if let Some(key) = CACHED_KEY.get() {
        return Ok(key.clone());
    }
    let key = lookup()?;
    Ok(CACHED_KEY.get_or_init(|| key).clone())
}

fn lookup() -> CredentialResult<String> {
    if let Ok(key) = std::env::var(ENV_VAR) {
        let key = key.trim();
        if !key.is_empty() {
            log::debug!("Using API key from {ENV_VAR}");
            return Ok(key.to_string());
        }
    }

    let entry = Entry::new(SERVICE_NAME, KEY_NAME)?;
    match entry.get_password() {
        Ok(key) => {
            log::debug!("Using API key from keychain");
            Ok(key)
        }
        Err(keyring::Error::NoEntry) => Err(CredentialError::NotFound),
        Err(e) => Err(CredentialError::Keyring(e)),
    }
}

/// Store the key in the system keychain for later runs.
pub fn store_api_key(key: &str) -> CredentialResult<()> {
    let entry = Entry::new(SERVICE_NAME, KEY_NAME)?;
    entry.set_password(key.trim())?;
    log::info!("Stored Google API key in keychain");
    Ok(())
}

/// Mask an API key for display (show first 4 and last 4 chars).
pub fn mask_api_key(key: &str) -> String {
    if key.len() <= 8 {
        return "********".to_string();
    }
    format!("{}...{}", &key[..4], &key[key.len() - 4..])
}
