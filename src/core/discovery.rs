// LogFileChecker - core/discovery.rs
//
// Single-level directory listing and log-file recognition.
//
// Architecture note: this module uses `walkdir` for directory traversal as an
// OS abstraction. It reads only directory entries and file types, never file
// contents. Listings are one level deep (min_depth = max_depth = 1) and sorted
// by file name so check results are reproducible across platforms.
//
// Error policy:
//   - A missing or non-directory root is fatal (typed CheckError).
//   - Failure to open the root for listing is fatal.
//   - Per-entry access errors below the root are non-fatal warnings.

use crate::util::error::CheckError;
use std::path::{Path, PathBuf};

/// Immediate contents of one unit (directory).
#[derive(Debug, Clone, Default)]
pub struct UnitListing {
    /// Number of immediate entries of any kind (files, dirs, links).
    pub entry_count: usize,

    /// Every immediate entry of any kind, in file-name order.
    pub entries: Vec<PathBuf>,

    /// Immediate subdirectories, in file-name order.
    pub subdirectories: Vec<PathBuf>,

    /// Non-fatal problems encountered while listing.
    pub warnings: Vec<String>,
}

impl UnitListing {
    /// A unit is empty when it has no entries at all.
    pub fn is_empty(&self) -> bool {
        self.entry_count == 0
    }
}

/// Check that `root` exists and is a directory.
///
/// Uses `fs::metadata()` rather than `Path::is_dir()` so an access-denied
/// path is reported as a listing failure instead of "does not exist".
pub fn validate_root(root: &Path) -> Result<(), CheckError> {
    match std::fs::metadata(root) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(CheckError::NotADirectory {
            path: root.to_path_buf(),
        }),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(CheckError::TargetNotFound {
            path: root.to_path_buf(),
        }),
        // Other errors (permission denied, bad name) surface when listing.
        Err(e) => {
            tracing::debug!(root = %root.display(), error = %e, "Root metadata unavailable");
            Ok(())
        }
    }
}

/// List the immediate entries of `dir`.
pub fn list_unit(dir: &Path) -> Result<UnitListing, CheckError> {
    let mut listing = UnitListing::default();

    let walker = walkdir::WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
        .sort_by_file_name();

    for entry_result in walker {
        let entry = match entry_result {
            Ok(e) => e,
            Err(e) => {
                // depth 0 means the root itself could not be opened.
                if e.depth() == 0 {
                    return Err(CheckError::DirectoryRead {
                        path: dir.to_path_buf(),
                        source: e,
                    });
                }
                let path_str = e
                    .path()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "<unknown>".to_string());
                let msg = format!("Cannot access '{path_str}': {e}");
                tracing::debug!(warning = %msg, "Listing warning");
                listing.warnings.push(msg);
                listing.entry_count += 1;
                continue;
            }
        };

        listing.entry_count += 1;

        if entry.file_type().is_dir() {
            listing.subdirectories.push(entry.path().to_path_buf());
        }
        listing.entries.push(entry.into_path());
    }

    tracing::trace!(
        dir = %dir.display(),
        entries = listing.entry_count,
        subdirectories = listing.subdirectories.len(),
        "Unit listed"
    );

    Ok(listing)
}

/// Immediate subdirectories of `root`, in file-name order.
pub fn list_subdirectories(root: &Path) -> Result<Vec<PathBuf>, CheckError> {
    Ok(list_unit(root)?.subdirectories)
}

/// Stem of `file_name` if its final extension is exactly `extension`.
///
/// Matching is case-sensitive and considers only the last extension, so
/// `run.tar.log` yields `run.tar` while `run.log.1` and `run.LOG` yield
/// nothing. A dot-file such as `.log` has no extension and is not a log.
pub fn log_stem<'a>(file_name: &'a str, extension: &str) -> Option<&'a str> {
    let path = Path::new(file_name);
    if path.extension().and_then(|e| e.to_str()) != Some(extension) {
        return None;
    }
    path.file_stem().and_then(|s| s.to_str())
}

/// Display name of a unit directory (its final path component).
pub fn unit_name(dir: &Path) -> String {
    dir.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| dir.display().to_string())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn make_temp_tree() -> TempDir {
        let dir = tempfile::tempdir().expect("tempdir");
        let root = dir.path();

        fs::write(root.join("b_run.log"), "").expect("write b_run.log");
        fs::write(root.join("a_run.log"), "").expect("write a_run.log");
        fs::write(root.join("notes.txt"), "").expect("write notes.txt");
        fs::create_dir(root.join("zeta")).expect("mkdir zeta");
        fs::create_dir(root.join("alpha")).expect("mkdir alpha");
        fs::write(root.join("alpha").join("nested.log"), "").expect("write nested.log");

        dir
    }

    #[test]
    fn test_list_unit_counts_all_entries() {
        let dir = make_temp_tree();
        let listing = list_unit(dir.path()).unwrap();
        assert_eq!(listing.entry_count, 5);
        assert_eq!(listing.entries.len(), 5);
        assert_eq!(listing.subdirectories.len(), 2);
        assert!(listing.warnings.is_empty());
    }

    #[test]
    fn test_list_unit_is_sorted_by_name() {
        let dir = make_temp_tree();
        let listing = list_unit(dir.path()).unwrap();
        let names: Vec<_> = listing
            .entries
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(
            names,
            vec!["a_run.log", "alpha", "b_run.log", "notes.txt", "zeta"]
        );

        let subs: Vec<_> = listing.subdirectories.iter().map(|p| unit_name(p)).collect();
        assert_eq!(subs, vec!["alpha", "zeta"]);
    }

    #[test]
    fn test_list_unit_does_not_descend() {
        let dir = make_temp_tree();
        let listing = list_unit(dir.path()).unwrap();
        assert!(
            !listing
                .entries
                .iter()
                .any(|p| p.ends_with("nested.log")),
            "listing must stay one level deep"
        );
    }

    #[test]
    fn test_list_unit_keeps_directories_as_entries() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("x.log")).unwrap();
        let listing = list_unit(dir.path()).unwrap();
        assert_eq!(listing.entries, vec![dir.path().join("x.log")]);
        assert_eq!(listing.subdirectories, listing.entries);
    }

    #[test]
    fn test_empty_directory_listing() {
        let dir = tempfile::tempdir().unwrap();
        let listing = list_unit(dir.path()).unwrap();
        assert!(listing.is_empty());
    }

    #[test]
    fn test_list_subdirectories() {
        let dir = make_temp_tree();
        let subs = list_subdirectories(dir.path()).unwrap();
        assert_eq!(subs.len(), 2);
        assert!(subs[0].ends_with("alpha"));
    }

    #[test]
    fn test_validate_root_not_found() {
        let result = validate_root(Path::new("/nonexistent/path/logfilechecker"));
        assert!(matches!(result, Err(CheckError::TargetNotFound { .. })));
    }

    #[test]
    fn test_validate_root_not_a_directory() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("not_a_dir.log");
        fs::write(&file, "content").unwrap();
        let result = validate_root(&file);
        assert!(matches!(result, Err(CheckError::NotADirectory { .. })));
    }

    #[test]
    fn test_log_stem() {
        assert_eq!(log_stem("scan_001.log", "log"), Some("scan_001"));
        assert_eq!(log_stem("run.tar.log", "log"), Some("run.tar"));
        assert_eq!(log_stem("scan_001.LOG", "log"), None);
        assert_eq!(log_stem("scan_001.log.1", "log"), None);
        assert_eq!(log_stem("scan_001.txt", "log"), None);
        assert_eq!(log_stem(".log", "log"), None);
        assert_eq!(log_stem("noext", "log"), None);
    }

    #[test]
    fn test_unit_name() {
        assert_eq!(unit_name(Path::new("/data/run_07")), "run_07");
    }
}
