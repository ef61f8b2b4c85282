//! Deserialization helpers for upstream payload files.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Deserializer};

use crate::error::{IngestError, Result};

/// Read and deserialize one JSON resource file, keeping the path in any
/// failure.
pub(crate) fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let text = fs::read_to_string(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| IngestError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Upstream entity ids arrive as JSON numbers or strings depending on the
/// resource; both normalize to the opaque string form the model uses.
#[derive(Deserialize)]
#[serde(untagged)]
enum IdValue {
    Number(i64),
    Text(String),
}

impl IdValue {
    fn into_string(self) -> String {
        match self {
            Self::Number(value) => value.to_string(),
            Self::Text(value) => value,
        }
    }
}

pub(crate) fn id_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    IdValue::deserialize(deserializer).map(IdValue::into_string)
}

pub(crate) fn id_strings<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Vec::<IdValue>::deserialize(deserializer)
        .map(|values| values.into_iter().map(IdValue::into_string).collect())
}
