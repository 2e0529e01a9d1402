//! CTRF report data model.
//!
//! Mirrors the Common Test Report Format JSON schema: tool info, aggregate
//! summary counts, per-test records and optional environment metadata.
//! Field names are camelCase on the wire.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Top-level CTRF report wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub results: Results,
}

/// The test-run record: tool, summary, tests and optional environment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Results {
    pub tool: Tool,
    pub summary: Summary,
    #[serde(default)]
    pub tests: Vec<Test>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment: Option<Environment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra: Option<Map<String, Value>>,
}

/// Aggregate counts for a run. `start` and `stop` are millisecond epoch
/// timestamps; `stop >= start` is assumed but not enforced.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub tests: u64,
    pub passed: u64,
    pub failed: u64,
    pub skipped: u64,
    pub pending: u64,
    pub other: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suites: Option<u64>,
    pub start: u64,
    pub stop: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra: Option<Map<String, Value>>,
}

/// One test case.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Test {
    pub name: String,
    pub status: TestStatus,
    pub duration: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suite: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<String>,
    /// Externally generated free-text failure summary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub test_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retries: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flaky: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attempts: Option<Vec<Test>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub browser: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub screenshot: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<Step>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra: Option<Map<String, Value>>,
}

impl Test {
    /// Whether the test is flagged flaky.
    pub fn is_flaky(&self) -> bool {
        self.flaky.unwrap_or(false)
    }
}

/// Outcome of a single test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestStatus {
    Passed,
    Failed,
    Skipped,
    Pending,
    Other,
}

/// CI / runtime metadata attached to a report. Only the build fields are
/// consumed by message construction; the rest is descriptive.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Environment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub os_platform: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub os_release: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub os_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_environment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra: Option<Map<String, Value>>,
}

/// The tool that produced the report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tool {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra: Option<Map<String, Value>>,
}

/// A named step within a test.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Step {
    pub name: String,
    pub status: TestStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_report() {
        let json = r#"{
            "results": {
                "tool": { "name": "jest" },
                "summary": {
                    "tests": 2, "passed": 1, "failed": 1,
                    "skipped": 0, "pending": 0, "other": 0,
                    "start": 1706644023000, "stop": 1706644048000
                },
                "tests": [
                    { "name": "a", "status": "passed", "duration": 10 },
                    { "name": "b", "status": "failed", "duration": 20, "message": "boom" }
                ]
            }
        }"#;

        let report: Report = serde_json::from_str(json).unwrap();
        assert_eq!(report.results.tool.name, "jest");
        assert_eq!(report.results.summary.failed, 1);
        assert_eq!(report.results.tests.len(), 2);
        assert_eq!(report.results.tests[1].status, TestStatus::Failed);
        assert_eq!(report.results.tests[1].message.as_deref(), Some("boom"));
        assert!(report.results.environment.is_none());
    }

    #[test]
    fn test_parse_camel_case_fields() {
        let json = r#"{
            "name": "t", "status": "failed", "duration": 5,
            "rawStatus": "error", "filePath": "src/a.spec.ts", "flaky": true
        }"#;
        let test: Test = serde_json::from_str(json).unwrap();
        assert_eq!(test.raw_status.as_deref(), Some("error"));
        assert_eq!(test.file_path.as_deref(), Some("src/a.spec.ts"));
        assert!(test.is_flaky());

        let env: Environment = serde_json::from_str(
            r#"{ "buildName": "ctrf", "buildNumber": "123", "buildUrl": "https://ctrf.io/" }"#,
        )
        .unwrap();
        assert_eq!(env.build_name.as_deref(), Some("ctrf"));
        assert_eq!(env.build_number.as_deref(), Some("123"));
        assert_eq!(env.build_url.as_deref(), Some("https://ctrf.io/"));
    }

    #[test]
    fn test_status_round_trip() {
        for (status, tag) in [
            (TestStatus::Passed, "\"passed\""),
            (TestStatus::Failed, "\"failed\""),
            (TestStatus::Skipped, "\"skipped\""),
            (TestStatus::Pending, "\"pending\""),
            (TestStatus::Other, "\"other\""),
        ] {
            assert_eq!(serde_json::to_string(&status).unwrap(), tag);
            assert_eq!(serde_json::from_str::<TestStatus>(tag).unwrap(), status);
        }
    }

    #[test]
    fn test_unknown_status_rejected() {
        assert!(serde_json::from_str::<TestStatus>("\"exploded\"").is_err());
    }
}
