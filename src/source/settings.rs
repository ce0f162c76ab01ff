use crate::error::{GenerateError, GenerateResult};

use std::{fs::read_to_string, io::ErrorKind, path::Path};

use serde::Deserialize;
use toml::from_str as toml_from_str;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSettings {
    conformances: Option<Vec<String>>,
}

/// Per-target generation settings from `<target>.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// Protocols the generated type declares conformance to.
    pub conformances: Vec<String>,
}

impl Settings {
    pub const EXTENSION: &'static str = "toml";

    /// Reads the sidecar; a missing file means defaults.
    pub fn load(path: &Path) -> GenerateResult<Settings> {
        let text = match read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Settings::default()),
            Err(_) => {
                return Err(GenerateError::ReadError {
                    path: path.to_path_buf(),
                })
            }
        };

        let raw: RawSettings = toml_from_str(&text).map_err(|e| GenerateError::InvalidSettings {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Ok(Settings::from_raw(raw))
    }

    fn from_raw(raw: RawSettings) -> Settings {
        let conformances = raw
            .conformances
            .unwrap_or_default()
            .into_iter()
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .collect();

        Settings { conformances }
    }
}
