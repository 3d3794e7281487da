// LogFileChecker - core/checker.rs
//
// The reconciliation check: load the archive, list the target directory
// (or each of its subfolders), and sort every log file found into
// "in archive" or "not in archive".
//
// The check is synchronous and stateless. It either returns a complete
// ClassificationResult or a CheckError; it never returns partial lists.

use crate::core::discovery::{self, UnitListing};
use crate::core::manifest::Manifest;
use crate::core::model::{
    CheckOptions, CheckRequest, ClassificationResult, DiscoveredLog, TraversalMode,
};
use crate::util::constants;
use crate::util::error::CheckError;
use chrono::Utc;
use std::path::{Path, PathBuf};

/// Run one reconciliation check.
///
/// Order of operations:
/// 1. Validate that both an archive and a target directory were chosen, and
///    that the target exists and is a directory.
/// 2. Load the archive's filename column.
/// 3. List the target (single folder) or each immediate subfolder.
/// 4. Classify every discovered log stem against the archive.
pub fn check(
    request: &CheckRequest,
    options: &CheckOptions,
) -> Result<ClassificationResult, CheckError> {
    let archive_path =
        non_empty(request.archive_path.as_deref()).ok_or(CheckError::MissingArchive)?;
    let target_dir =
        non_empty(request.target_dir.as_deref()).ok_or(CheckError::MissingDirectory)?;

    discovery::validate_root(target_dir)?;

    tracing::info!(
        archive = %archive_path.display(),
        target = %target_dir.display(),
        mode = ?request.mode,
        "Check started"
    );

    let manifest = Manifest::load(
        archive_path,
        &options.sheet_name,
        &options.filename_column,
    )?;

    let scan = match request.mode {
        TraversalMode::SingleFolder => scan_single_folder(target_dir, &options.log_extension)?,
        TraversalMode::ManyFolders => scan_many_folders(target_dir, &options.log_extension)?,
    };

    let mut discovered = scan.logs;
    let (matched, unmatched) = classify(&mut discovered, &manifest);

    let mut warnings = scan.warnings;
    if warnings.len() > constants::MAX_WARNINGS {
        let dropped = warnings.len() - constants::MAX_WARNINGS;
        warnings.truncate(constants::MAX_WARNINGS);
        warnings.push(format!("{dropped} further listing warnings suppressed."));
    }

    let result = ClassificationResult {
        empty_units: scan.empty_units,
        matched,
        unmatched,
        discovered,
        units_scanned: scan.units_scanned,
        manifest_entries: manifest.len(),
        warnings,
        checked_at: Utc::now(),
    };

    tracing::info!(
        units = result.units_scanned,
        empty = result.empty_units.len(),
        matched = result.matched.len(),
        unmatched = result.unmatched.len(),
        "Check complete"
    );

    Ok(result)
}

/// Split discovered logs into (matched, unmatched) stems by archive membership.
///
/// Sets `in_archive` on every log and preserves discovery order in both lists.
/// A stem found in two units appears twice.
pub fn classify(logs: &mut [DiscoveredLog], manifest: &Manifest) -> (Vec<String>, Vec<String>) {
    let mut matched = Vec::new();
    let mut unmatched = Vec::new();
    for log in logs.iter_mut() {
        log.in_archive = manifest.contains(&log.stem);
        if log.in_archive {
            matched.push(log.stem.clone());
        } else {
            unmatched.push(log.stem.clone());
        }
    }
    (matched, unmatched)
}

// =============================================================================
// Traversal
// =============================================================================

/// Raw traversal output before classification.
#[derive(Debug, Default)]
struct ScanOutput {
    empty_units: Vec<String>,
    logs: Vec<DiscoveredLog>,
    units_scanned: usize,
    warnings: Vec<String>,
}

/// The target directory itself is the only unit.
///
/// An empty target is reported by its full path.
fn scan_single_folder(target_dir: &Path, extension: &str) -> Result<ScanOutput, CheckError> {
    let listing = discovery::list_unit(target_dir)?;
    let mut out = ScanOutput {
        units_scanned: 1,
        ..Default::default()
    };

    if listing.is_empty() {
        tracing::debug!(dir = %target_dir.display(), "Target folder is empty");
        out.empty_units.push(target_dir.display().to_string());
        return Ok(out);
    }

    let unit = discovery::unit_name(target_dir);
    collect_logs(listing, &unit, extension, &mut out);
    Ok(out)
}

/// Every immediate subdirectory of the target is a unit.
///
/// Empty subfolders are reported by name. Files sitting directly in the
/// target are not examined in this mode.
fn scan_many_folders(target_dir: &Path, extension: &str) -> Result<ScanOutput, CheckError> {
    let subdirs = discovery::list_subdirectories(target_dir)?;
    if subdirs.is_empty() {
        tracing::warn!(dir = %target_dir.display(), "No subdirectories to check");
        return Err(CheckError::NoSubdirectories {
            path: target_dir.to_path_buf(),
        });
    }

    let mut out = ScanOutput::default();
    for subdir in subdirs {
        let listing = discovery::list_unit(&subdir)?;
        out.units_scanned += 1;
        let unit = discovery::unit_name(&subdir);
        if listing.is_empty() {
            tracing::debug!(unit = %unit, "Empty folder");
            out.empty_units.push(unit);
            continue;
        }
        collect_logs(listing, &unit, extension, &mut out);
    }
    Ok(out)
}

/// Record every log entry of a non-empty unit.
///
/// Only the entry name is tested, so a folder named `x.log` counts as log `x`.
fn collect_logs(listing: UnitListing, unit: &str, extension: &str, out: &mut ScanOutput) {
    out.warnings.extend(listing.warnings);
    for path in listing.entries {
        let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
            out.warnings
                .push(format!("Skipping '{}': non-UTF-8 filename", path.display()));
            continue;
        };
        if let Some(stem) = discovery::log_stem(file_name, extension) {
            tracing::trace!(unit, stem, "Log file found");
            out.logs.push(DiscoveredLog {
                stem: stem.to_string(),
                path: path.clone(),
                unit: unit.to_string(),
                in_archive: false,
            });
        }
    }
}

/// Treat an empty path the same as no path.
fn non_empty(path: Option<&Path>) -> Option<&Path> {
    path.filter(|p| !p.as_os_str().is_empty())
}

/// Convenience for callers holding owned paths.
pub fn request(
    archive: impl Into<PathBuf>,
    target: impl Into<PathBuf>,
    mode: TraversalMode,
) -> CheckRequest {
    CheckRequest {
        archive_path: Some(archive.into()),
        target_dir: Some(target.into()),
        mode,
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn log(stem: &str) -> DiscoveredLog {
        DiscoveredLog {
            stem: stem.to_string(),
            path: PathBuf::from(format!("{stem}.log")),
            unit: "unit".to_string(),
            in_archive: false,
        }
    }

    #[test]
    fn test_classify_partitions_by_membership() {
        let manifest = Manifest::from_stems(["a", "c"]);
        let mut logs = vec![log("a"), log("b"), log("c"), log("d")];
        let (matched, unmatched) = classify(&mut logs, &manifest);
        assert_eq!(matched, vec!["a", "c"]);
        assert_eq!(unmatched, vec!["b", "d"]);
        assert!(logs[0].in_archive);
        assert!(!logs[1].in_archive);
    }

    #[test]
    fn test_classify_empty_manifest_all_unmatched() {
        let manifest = Manifest::default();
        let mut logs = vec![log("a"), log("b")];
        let (matched, unmatched) = classify(&mut logs, &manifest);
        assert!(matched.is_empty());
        assert_eq!(unmatched.len(), 2);
    }

    #[test]
    fn test_classify_keeps_duplicates() {
        let manifest = Manifest::from_stems(["a"]);
        let mut logs = vec![log("a"), log("a")];
        let (matched, _) = classify(&mut logs, &manifest);
        assert_eq!(matched, vec!["a", "a"]);
    }

    #[test]
    fn test_missing_archive_checked_first() {
        let req = CheckRequest {
            archive_path: None,
            target_dir: None,
            mode: TraversalMode::SingleFolder,
        };
        let result = check(&req, &CheckOptions::default());
        assert!(matches!(result, Err(CheckError::MissingArchive)));
    }

    #[test]
    fn test_empty_archive_path_is_missing() {
        let req = CheckRequest {
            archive_path: Some(PathBuf::new()),
            target_dir: Some(PathBuf::from("/tmp")),
            mode: TraversalMode::SingleFolder,
        };
        let result = check(&req, &CheckOptions::default());
        assert!(matches!(result, Err(CheckError::MissingArchive)));
    }

    #[test]
    fn test_missing_directory() {
        let req = CheckRequest {
            archive_path: Some(PathBuf::from("archive.xlsx")),
            target_dir: None,
            mode: TraversalMode::ManyFolders,
        };
        let result = check(&req, &CheckOptions::default());
        assert!(matches!(result, Err(CheckError::MissingDirectory)));
    }

    #[test]
    fn test_nonexistent_target() {
        let req = request(
            "archive.xlsx",
            "/nonexistent/logfilechecker/target",
            TraversalMode::SingleFolder,
        );
        let result = check(&req, &CheckOptions::default());
        assert!(matches!(result, Err(CheckError::TargetNotFound { .. })));
    }

    #[test]
    fn test_scan_single_folder_empty_reports_target() {
        let dir = tempfile::tempdir().unwrap();
        let out = scan_single_folder(dir.path(), "log").unwrap();
        assert_eq!(out.empty_units, vec![dir.path().display().to_string()]);
        assert!(out.logs.is_empty());
    }

    #[test]
    fn test_scan_many_folders_records_real_paths() {
        let dir = tempfile::tempdir().unwrap();
        let sub = dir.path().join("B");
        std::fs::create_dir(&sub).unwrap();
        std::fs::write(sub.join("x.log"), "").unwrap();
        let out = scan_many_folders(dir.path(), "log").unwrap();
        assert_eq!(out.logs.len(), 1);
        assert_eq!(out.logs[0].path, sub.join("x.log"));
        assert_eq!(out.logs[0].unit, "B");
    }

    #[test]
    fn test_scan_single_folder_counts_folder_named_like_log() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("x.log")).unwrap();
        std::fs::write(dir.path().join("y.log"), "").unwrap();
        let out = scan_single_folder(dir.path(), "log").unwrap();
        let stems: Vec<_> = out.logs.iter().map(|l| l.stem.as_str()).collect();
        assert_eq!(stems, vec!["x", "y"]);
    }

    #[test]
    fn test_scan_many_folders_without_subdirectories() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("loose.log"), "").unwrap();
        let result = scan_many_folders(dir.path(), "log");
        assert!(matches!(result, Err(CheckError::NoSubdirectories { .. })));
    }
}
