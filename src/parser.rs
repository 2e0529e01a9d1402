//! CTRF report file loading.

use crate::error::SlackCtrfError;
use crate::types::Report;
use log::debug;
use std::fs;
use std::path::Path;

/// Read and parse a CTRF report from disk.
pub fn parse_ctrf_file(path: &Path) -> Result<Report, SlackCtrfError> {
    debug!("parsing CTRF report from {}", path.display());

    let content = fs::read_to_string(path).map_err(|source| SlackCtrfError::ReportRead {
        path: path.to_path_buf(),
        source,
    })?;

    let report: Report = serde_json::from_str(&content).map_err(SlackCtrfError::ReportParse)?;

    debug!(
        "parsed report from {}: {} tests, {} failed",
        report.results.tool.name, report.results.summary.tests, report.results.summary.failed
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_valid_report() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "results": {{
                    "tool": {{ "name": "playwright" }},
                    "summary": {{ "tests": 1, "passed": 1, "failed": 0,
                                  "skipped": 0, "pending": 0, "other": 0,
                                  "start": 0, "stop": 0 }},
                    "tests": [{{ "name": "a", "status": "passed", "duration": 3 }}]
                }}
            }}"#
        )
        .unwrap();

        let report = parse_ctrf_file(file.path()).unwrap();
        assert_eq!(report.results.tool.name, "playwright");
        assert_eq!(report.results.tests.len(), 1);
    }

    #[test]
    fn test_missing_file_is_a_read_error() {
        let err = parse_ctrf_file(Path::new("/nonexistent/ctrf.json")).unwrap_err();
        assert!(matches!(err, SlackCtrfError::ReportRead { .. }));
    }

    #[test]
    fn test_invalid_json_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let err = parse_ctrf_file(file.path()).unwrap_err();
        assert!(matches!(err, SlackCtrfError::ReportParse(_)));
    }
}
