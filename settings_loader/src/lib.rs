//! Loading and saving of versioned settings files.
//!
//! Settings are stored as pretty-printed JSON wrapped in a small envelope:
//!
//! ```json
//! { "version": 1, "settings": { ... } }
//! ```
//!
//! Files without a `version` key are read as a bare settings record, which is how records were
//! written before the envelope existed. A missing file is not an error: the record's defaults are
//! returned instead.
//!
//! Records are read field by field over their defaults. A field that fails to deserialize, such as
//! an unknown enum variant or a float where an integer is expected, keeps its default and is logged
//! without discarding the rest of the file.

use anyhow::Context;
use async_trait::async_trait;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use std::{
    io::{Read, Write},
    path::Path,
};
use tokio::io::{self, AsyncReadExt, AsyncWriteExt};

pub use filesystem::DataSource;

pub mod filesystem;

/// Current settings file format version.
pub const SETTINGS_VERSION: u32 = 1;

/// Results that can be returned from this library.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can be returned from this library.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("settings file version {found} is newer than the supported version {supported}")]
    UnsupportedVersion { found: u64, supported: u32 },
    #[error("settings file version `{0}` is not a version number")]
    InvalidVersion(Value),
    #[error("failed to deserialize settings data")]
    Deserialize(anyhow::Error),
    #[error("failed to serialize settings data")]
    Serialize(anyhow::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// The on-disk envelope around a settings record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct SettingsFile<T> {
    pub version: u32,
    pub settings: T,
}

/// Decode a settings record from JSON bytes.
///
/// # Errors
///
/// If the bytes are not valid JSON or were written by a newer or malformed version.
pub fn decode<T: Default + Serialize + DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    let mut value: Value = serde_json::from_slice(bytes)
        .context("failed to parse settings json")
        .map_err(Error::Deserialize)?;
    let version = value
        .get("version")
        .map(|version| version.as_u64().ok_or_else(|| version.clone()));
    let settings = match version {
        None => {
            tracing::debug!("settings file has no version, reading as a bare record");
            value
        }
        Some(Err(version)) => return Err(Error::InvalidVersion(version)),
        Some(Ok(found)) if found > u64::from(SETTINGS_VERSION) => {
            return Err(Error::UnsupportedVersion {
                found,
                supported: SETTINGS_VERSION,
            });
        }
        Some(Ok(_)) => value
            .get_mut("settings")
            .map_or_else(|| Value::Object(serde_json::Map::new()), Value::take),
    };
    let defaults = serde_json::to_value(T::default())
        .context("failed to serialize default settings")
        .map_err(Error::Serialize)?;
    serde_json::from_value(overlay::<T>(defaults, settings))
        .context("failed to deserialize settings record")
        .map_err(Error::Deserialize)
}

/// Write every leaf of `file` over `record`, keeping the existing value wherever the result would
/// no longer deserialize as `T`.
fn overlay<T: DeserializeOwned>(mut record: Value, file: Value) -> Value {
    let mut leaves = Vec::new();
    collect_leaves(&record, file, String::new(), &mut leaves);
    for (pointer, value) in leaves {
        let previous = match record.pointer_mut(&pointer) {
            Some(slot) => std::mem::replace(slot, value),
            None => continue,
        };
        if let Err(err) = serde_json::from_value::<T>(record.clone()) {
            tracing::warn!("ignoring settings value at `{pointer}`, keeping the default: {err}");
            if let Some(slot) = record.pointer_mut(&pointer) {
                *slot = previous;
            }
        }
    }
    record
}

/// Collect the JSON pointer of every value in `file` that has a counterpart in `record`.
fn collect_leaves(record: &Value, file: Value, pointer: String, leaves: &mut Vec<(String, Value)>) {
    match (record, file) {
        (Value::Object(record), Value::Object(file)) => {
            for (key, value) in file {
                let child = format!("{pointer}/{}", key.replace('~', "~0").replace('/', "~1"));
                match record.get(&key) {
                    Some(existing) => collect_leaves(existing, value, child, leaves),
                    None => tracing::debug!("ignoring unknown settings key `{child}`"),
                }
            }
        }
        (_, file) => leaves.push((pointer, file)),
    }
}

/// Encode a settings record as pretty-printed JSON inside the current envelope.
///
/// # Errors
///
/// If the record fails to serialize.
pub fn encode<T: Serialize>(settings: &T) -> Result<Vec<u8>> {
    let file = SettingsFile {
        version: SETTINGS_VERSION,
        settings,
    };
    serde_json::to_vec_pretty(&file)
        .context("failed to serialize settings record")
        .map_err(Error::Serialize)
}

/// A settings record that can be read from and written to disk.
#[async_trait]
pub trait Settings: Default + Send + Sync + Serialize + DeserializeOwned {
    /// Load settings, falling back to defaults when the file does not exist.
    async fn load(source: impl Into<DataSource> + Send) -> Result<Self> {
        match source.into() {
            DataSource::Path(path) => {
                if !path.exists() {
                    tracing::debug!("no settings at {path:?}, using defaults");
                    return Ok(Self::default());
                }
                tracing::debug!("loading settings {path:?}");
                let mut file = filesystem::open_file(&path).await?;
                let mut bytes = Vec::new();
                file.read_to_end(&mut bytes).await?;
                decode(&bytes)
            }
            DataSource::Bytes(bytes) => decode(&bytes),
        }
    }

    /// Blocking version of [`Settings::load`].
    fn load_sync(source: impl Into<DataSource>) -> Result<Self> {
        match source.into() {
            DataSource::Path(path) => {
                if !path.exists() {
                    tracing::debug!("no settings at {path:?}, using defaults");
                    return Ok(Self::default());
                }
                tracing::debug!("loading settings {path:?}");
                let mut file = filesystem::open_file_sync(&path)?;
                let mut bytes = Vec::new();
                file.read_to_end(&mut bytes)?;
                decode(&bytes)
            }
            DataSource::Bytes(bytes) => decode(&bytes),
        }
    }

    /// Save settings to disk, creating parent directories as needed.
    async fn save(&self, path: impl AsRef<Path> + Send) -> Result<()> {
        let path = path.as_ref();
        let bytes = encode(self)?;
        let mut file = filesystem::create_file(path).await?;
        file.write_all(&bytes).await?;
        file.flush().await?;
        tracing::debug!("saved settings {path:?}");
        Ok(())
    }

    /// Blocking version of [`Settings::save`].
    fn save_sync(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let bytes = encode(self)?;
        let mut file = filesystem::create_file_sync(path)?;
        file.write_all(&bytes)?;
        file.flush()?;
        tracing::debug!("saved settings {path:?}");
        Ok(())
    }
}
