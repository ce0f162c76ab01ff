mod settings;
mod validation;

pub use self::{settings::Settings, validation::validate_entries};

use crate::error::{GenerateError, GenerateResult};

use std::{
    collections::BTreeMap,
    env,
    path::{Path, PathBuf},
};

use plist::Value;
use tracing::debug;

/// Environment variable overriding the source directory.
pub const SOURCE_DIR_ENV: &str = "PLIST2SWIFT_SOURCE_DIR";

/// Source directory under the home directory.
const DEFAULT_SOURCE_SUBDIR: &str = "Library/XcodeGenerateConstants";

/// Settings resolved from the process environment once per run.
#[derive(Debug, Clone)]
pub struct Environment {
    source_directory: PathBuf,
}

impl Environment {
    pub fn new(source_directory: impl Into<PathBuf>) -> Self {
        Environment {
            source_directory: source_directory.into(),
        }
    }

    /// Reads `PLIST2SWIFT_SOURCE_DIR`, falling back to the home-relative default.
    pub fn from_process() -> GenerateResult<Self> {
        Self::resolve(env::var_os(SOURCE_DIR_ENV).map(PathBuf::from), dirs::home_dir())
    }

    fn resolve(overridden: Option<PathBuf>, home: Option<PathBuf>) -> GenerateResult<Self> {
        match (overridden, home) {
            (Some(dir), _) if !dir.as_os_str().is_empty() => Ok(Environment::new(dir)),
            (_, Some(home)) => Ok(Environment::new(home.join(DEFAULT_SOURCE_SUBDIR))),
            (_, None) => Err(GenerateError::HomeDirectoryUnavailable),
        }
    }

    pub fn source_directory(&self) -> &Path {
        &self.source_directory
    }

    /// The config source for a target in this environment.
    pub fn source_for<'a>(&'a self, target: &'a str) -> ConfigSource<'a> {
        ConfigSource {
            source_directory: &self.source_directory,
            target,
        }
    }
}

/// One key/value pair of the property list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigEntry {
    pub key: String,
    pub value: String,
}

/// Identifies `<source_directory>/<target>.plist` and its sidecar.
#[derive(Debug, Clone, Copy)]
pub struct ConfigSource<'a> {
    source_directory: &'a Path,
    target: &'a str,
}

impl<'a> ConfigSource<'a> {
    pub const EXTENSION: &'static str = "plist";

    pub fn plist_path(&self) -> PathBuf {
        self.source_directory.join(format!("{}.{}", self.target, Self::EXTENSION))
    }

    pub fn settings_path(&self) -> PathBuf {
        self.source_directory.join(format!("{}.{}", self.target, Settings::EXTENSION))
    }

    /// Loads the entries, sorted by key.
    pub fn load_entries(&self) -> GenerateResult<Vec<ConfigEntry>> {
        let path = self.plist_path();
        debug!(path = %path.display(), "reading property list");

        let document =
            Value::from_file(&path).map_err(|_| GenerateError::ReadError { path: path.clone() })?;
        let entries = flatten_dictionary(document).ok_or(GenerateError::InvalidContents { path })?;

        Ok(entries
            .into_iter()
            .map(|(key, value)| ConfigEntry { key, value })
            .collect())
    }

    /// Loads the sidecar settings, or defaults when there is none.
    pub fn load_settings(&self) -> GenerateResult<Settings> {
        Settings::load(&self.settings_path())
    }
}

/// Accepts only a dictionary whose every value is a string.
fn flatten_dictionary(document: Value) -> Option<BTreeMap<String, String>> {
    document
        .into_dictionary()?
        .into_iter()
        .map(|(key, value)| value.into_string().map(|value| (key, value)))
        .collect()
}
