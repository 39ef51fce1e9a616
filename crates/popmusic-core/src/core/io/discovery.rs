use super::error::{FileDiscoveryError, ParseError};
use super::pop::PopFile;
use super::pops::{PopsFile, read_result_set};
use crate::core::models::results::ParsedResultSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// The pair of files making up one PoPMuSiC prediction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultFiles {
    pub summary: PathBuf, // `.pops`
    pub detail: PathBuf,  // `.pop`
}

impl ResultFiles {
    pub fn new(summary: impl Into<PathBuf>, detail: impl Into<PathBuf>) -> Self {
        Self {
            summary: summary.into(),
            detail: detail.into(),
        }
    }

    /// Locates the summary and detail files inside `directory`.
    ///
    /// Entries are visited in file-name order and the first regular file ending in `.pop`
    /// (respectively `.pops`) is taken. Extensions are matched case-sensitively.
    ///
    /// # Errors
    ///
    /// Returns [`FileDiscoveryError::Missing`] naming the first absent extension, or
    /// [`FileDiscoveryError::Io`] if the directory cannot be listed.
    pub fn discover(directory: impl AsRef<Path>) -> Result<Self, FileDiscoveryError> {
        let directory = directory.as_ref();
        let io_err = |source| FileDiscoveryError::Io {
            directory: directory.to_path_buf(),
            source,
        };

        let mut candidates = Vec::new();
        for entry in fs::read_dir(directory).map_err(io_err)? {
            let path = entry.map_err(io_err)?.path();
            if path.is_file() {
                candidates.push(path);
            }
        }
        candidates.sort();

        let find = |extension: &'static str| {
            let suffix = format!(".{}", extension);
            candidates
                .iter()
                .find(|p| {
                    p.file_name()
                        .and_then(|n| n.to_str())
                        .is_some_and(|n| n.ends_with(&suffix))
                })
                .cloned()
                .ok_or_else(|| FileDiscoveryError::Missing {
                    directory: directory.to_path_buf(),
                    extension,
                })
        };

        let detail = find(PopFile::EXTENSION)?;
        let summary = find(PopsFile::EXTENSION)?;
        debug!("Discovered summary {:?} and detail {:?}", summary, detail);
        Ok(Self { summary, detail })
    }

    pub fn load(&self) -> Result<ParsedResultSet, ParseError> {
        read_result_set(&self.summary, &self.detail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, content).expect("Failed to write temporary file for test");
        path
    }

    #[test]
    fn discover_finds_both_files() {
        let dir = tempfile::tempdir().unwrap();
        let pops = touch(dir.path(), "run.pops", "");
        let pop = touch(dir.path(), "run.pop", "");
        touch(dir.path(), "notes.txt", "");

        let files = ResultFiles::discover(dir.path()).unwrap();
        assert_eq!(files, ResultFiles::new(pops, pop));
    }

    #[test]
    fn discover_takes_first_match_in_name_order() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "b.pop", "");
        let first_pop = touch(dir.path(), "a.pop", "");
        let first_pops = touch(dir.path(), "a.pops", "");
        touch(dir.path(), "c.pops", "");

        let files = ResultFiles::discover(dir.path()).unwrap();
        assert_eq!(files.detail, first_pop);
        assert_eq!(files.summary, first_pops);
    }

    #[test]
    fn discover_is_case_sensitive() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "run.POP", "");
        touch(dir.path(), "run.pops", "");

        assert!(matches!(
            ResultFiles::discover(dir.path()),
            Err(FileDiscoveryError::Missing { extension: "pop", .. })
        ));
    }

    #[test]
    fn discover_reports_missing_summary() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "run.pop", "");

        assert!(matches!(
            ResultFiles::discover(dir.path()),
            Err(FileDiscoveryError::Missing { extension: "pops", .. })
        ));
    }

    #[test]
    fn discover_ignores_directories_with_matching_names() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("a.pop")).unwrap();
        let pop = touch(dir.path(), "b.pop", "");
        touch(dir.path(), "b.pops", "");

        assert_eq!(ResultFiles::discover(dir.path()).unwrap().detail, pop);
    }

    #[test]
    fn discover_fails_for_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            ResultFiles::discover(dir.path().join("absent")),
            Err(FileDiscoveryError::Io { .. })
        ));
    }

    #[test]
    fn load_parses_discovered_files() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "run.pops", "A 1 ALA H 0.1 -0.2 -0.1 -0.1\n");
        touch(dir.path(), "run.pop", "A 1 ALA VAL H 0.1 -0.5\n");

        let results = ResultFiles::discover(dir.path()).unwrap().load().unwrap();
        assert_eq!(results.len(), 1);
        assert!(results.get(0).unwrap().mutations.contains_key("VAL"));
    }
}
