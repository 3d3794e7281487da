// LogFileChecker - core/export.rs
//
// CSV and JSON export of a check result.
// Core layer: writes to any Write trait object.

use crate::core::model::ClassificationResult;
use crate::util::error::ExportError;
use std::io::Write;
use std::path::Path;

/// Export a result to CSV.
///
/// Writes one `category,name,unit,path` row per empty folder and per log
/// file, in the same order the lists are displayed. Returns the row count.
pub fn export_csv<W: Write>(
    result: &ClassificationResult,
    writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    let csv_err = |source| ExportError::Csv {
        path: export_path.to_path_buf(),
        source,
    };
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["category", "name", "unit", "path"])
        .map_err(csv_err)?;

    let mut count = 0;
    for unit in &result.empty_units {
        csv_writer
            .write_record(["empty_folder", unit.as_str(), unit.as_str(), ""])
            .map_err(csv_err)?;
        count += 1;
    }

    // Matched rows first, then unmatched, mirroring the on-screen columns.
    for in_archive in [true, false] {
        let category = if in_archive { "in_archive" } else { "not_in_archive" };
        for log in result.discovered.iter().filter(|l| l.in_archive == in_archive) {
            let path = log.path.display().to_string();
            csv_writer
                .write_record([category, log.stem.as_str(), log.unit.as_str(), path.as_str()])
                .map_err(csv_err)?;
            count += 1;
        }
    }

    csv_writer.flush().map_err(|e| ExportError::Io {
        path: export_path.to_path_buf(),
        source: e,
    })?;

    Ok(count)
}

/// Export the whole result as a pretty-printed JSON object.
pub fn export_json<W: Write>(
    result: &ClassificationResult,
    writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    serde_json::to_writer_pretty(writer, result).map_err(|e| ExportError::Json {
        path: export_path.to_path_buf(),
        source: e,
    })?;
    Ok(result.empty_units.len() + result.discovered.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::DiscoveredLog;
    use chrono::Utc;
    use std::path::PathBuf;

    fn make_result() -> ClassificationResult {
        let log = |stem: &str, in_archive: bool| DiscoveredLog {
            stem: stem.to_string(),
            path: PathBuf::from(format!("/data/B/{stem}.log")),
            unit: "B".to_string(),
            in_archive,
        };
        ClassificationResult {
            empty_units: vec!["A".to_string()],
            matched: vec!["x".to_string()],
            unmatched: vec!["y".to_string()],
            discovered: vec![log("y", false), log("x", true)],
            units_scanned: 2,
            manifest_entries: 1,
            warnings: Vec::new(),
            checked_at: Utc::now(),
        }
    }

    #[test]
    fn test_csv_export() {
        let result = make_result();
        let mut buf = Vec::new();
        let count = export_csv(&result, &mut buf, Path::new("out.csv")).unwrap();
        assert_eq!(count, 3);

        let output = String::from_utf8(buf).unwrap();
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines[0], "category,name,unit,path");
        assert_eq!(lines[1], "empty_folder,A,A,");
        assert!(lines[2].starts_with("in_archive,x,B,"), "got: {}", lines[2]);
        assert!(lines[3].starts_with("not_in_archive,y,B,"), "got: {}", lines[3]);
    }

    #[test]
    fn test_json_export() {
        let result = make_result();
        let mut buf = Vec::new();
        let count = export_json(&result, &mut buf, Path::new("out.json")).unwrap();
        assert_eq!(count, 3);

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["empty_units"][0], "A");
        assert_eq!(value["matched"][0], "x");
        assert_eq!(value["unmatched"][0], "y");
    }
}
