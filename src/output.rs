use crate::error::{GenerateError, GenerateResult};

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use tempfile::Builder;
use tracing::debug;

/// `<output_directory>/<target>.swift`, replaced as a whole on every run.
#[derive(Debug, Clone)]
pub struct OutputFile {
    directory: PathBuf,
    path: PathBuf,
}

impl OutputFile {
    pub const EXTENSION: &'static str = "swift";

    pub fn new(output_directory: &Path, target: &str) -> Self {
        OutputFile {
            directory: output_directory.to_path_buf(),
            path: output_directory.join(format!("{target}.{}", Self::EXTENSION)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes `code` as UTF-8 through a temporary file in the same directory,
    /// then renames it over the destination.
    ///
    /// An existing destination keeps its permissions. A new one gets the
    /// umask-filtered defaults of a plain `File::create`.
    pub fn write_atomically(&self, code: &str) -> GenerateResult<()> {
        let to_write_error = |source| GenerateError::WriteError {
            path: self.path.clone(),
            source,
        };

        let mut builder = Builder::new();
        #[cfg(unix)]
        builder.permissions(default_permissions());
        let mut temp = builder.tempfile_in(&self.directory).map_err(to_write_error)?;
        if let Ok(metadata) = fs::metadata(&self.path) {
            temp.as_file()
                .set_permissions(metadata.permissions())
                .map_err(to_write_error)?;
        }
        debug!(temp = %temp.path().display(), "writing generated code");
        temp.write_all(code.as_bytes()).map_err(to_write_error)?;
        temp.as_file().sync_all().map_err(to_write_error)?;
        temp.persist(&self.path).map_err(|e| to_write_error(e.error))?;

        Ok(())
    }
}

#[cfg(unix)]
fn default_permissions() -> fs::Permissions {
    use std::os::unix::fs::PermissionsExt;

    // Masked by the process umask at creation.
    fs::Permissions::from_mode(0o666)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs;

    use tempfile::tempdir;

    #[test]
    fn test_output_path() {
        let output = OutputFile::new(Path::new("/out"), "Constants");
        assert_eq!(output.path(), Path::new("/out/Constants.swift"));
    }

    #[test]
    fn test_write_replaces_previous_contents() {
        let dir = tempdir().unwrap();
        let output = OutputFile::new(dir.path(), "Constants");
        fs::write(output.path(), "stale contents that are longer than the new ones").unwrap();

        output.write_atomically("struct Constants {\n\n}").unwrap();
        assert_eq!(fs::read_to_string(output.path()).unwrap(), "struct Constants {\n\n}");
    }

    #[test]
    fn test_write_leaves_no_temporary_files() {
        let dir = tempdir().unwrap();
        let output = OutputFile::new(dir.path(), "Keys");
        output.write_atomically("struct Keys {\n\n}").unwrap();

        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(names, ["Keys.swift"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_rewrite_keeps_existing_mode() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        for mode in [0o644, 0o640] {
            let output = OutputFile::new(dir.path(), "Constants");
            fs::write(output.path(), "previous").unwrap();
            fs::set_permissions(output.path(), fs::Permissions::from_mode(mode)).unwrap();

            output.write_atomically("struct Constants {\n\n}").unwrap();
            let after = fs::metadata(output.path()).unwrap().permissions().mode() & 0o777;
            assert_eq!(after, mode);
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_new_file_is_not_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let output = OutputFile::new(dir.path(), "Fresh");
        output.write_atomically("struct Fresh {\n\n}").unwrap();

        // Same mode a plain create gets under the current umask.
        let plain = dir.path().join("plain");
        fs::write(&plain, "").unwrap();
        let expected = fs::metadata(&plain).unwrap().permissions().mode() & 0o777;
        let actual = fs::metadata(output.path()).unwrap().permissions().mode() & 0o777;
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_write_into_missing_directory() {
        let dir = tempdir().unwrap();
        let output = OutputFile::new(&dir.path().join("missing"), "Constants");

        match output.write_atomically("struct Constants {\n\n}") {
            Err(GenerateError::WriteError { path, .. }) => assert_eq!(path, output.path()),
            other => panic!("Expected WriteError, got {other:?}"),
        }
    }
}
