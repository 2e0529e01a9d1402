//! Pie-chart accessory URL for the result summary.

use crate::types::Summary;
use serde_json::json;

/// Segment colors for passed, failed, skipped, pending, other.
const SEGMENT_COLORS: [&str; 5] = ["#36c96d", "#e74c3c", "#d3d3d3", "#f1c40f", "#9b59b6"];

/// Build a quickchart.io doughnut-chart URL encoding the non-zero summary
/// counts as proportional segments, with a centered pass-percentage label
/// (`0%` when the report has no tests).
pub fn chart_image_url(summary: &Summary) -> String {
    let percentage = if summary.tests > 0 {
        (summary.passed as f64 / summary.tests as f64 * 100.0).round() as u64
    } else {
        0
    };

    let values = [
        summary.passed,
        summary.failed,
        summary.skipped,
        summary.pending,
        summary.other,
    ];

    let filtered: Vec<(u64, &str)> = values
        .iter()
        .zip(SEGMENT_COLORS)
        .filter(|(value, _)| **value > 0)
        .map(|(value, color)| (*value, color))
        .collect();

    let chart = json!({
        "type": "doughnut",
        "data": {
            "datasets": [{
                "data": filtered.iter().map(|(value, _)| *value).collect::<Vec<_>>(),
                "backgroundColor": filtered.iter().map(|(_, color)| *color).collect::<Vec<_>>(),
                "borderWidth": 0,
            }],
        },
        "options": {
            "plugins": {
                "datalabels": {
                    "display": true,
                    "color": "#000000",
                    "font": { "family": "lato", "size": 12, "weight": "bold" },
                },
                "legend": { "display": false },
                "tooltip": { "enabled": false },
                "doughnutlabel": {
                    "labels": [{
                        "text": format!("{}%", percentage),
                        "font": { "size": 22, "weight": "bold", "family": "lato" },
                    }],
                },
            },
        },
    });

    format!(
        "https://quickchart.io/chart?w=150&h=150&c={}",
        urlencoding::encode(&chart.to_string())
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(passed: u64, failed: u64, skipped: u64, pending: u64, other: u64) -> Summary {
        Summary {
            tests: passed + failed + skipped + pending + other,
            passed,
            failed,
            skipped,
            pending,
            other,
            ..Summary::default()
        }
    }

    #[test]
    fn test_url_points_at_quickchart() {
        let url = chart_image_url(&summary(5, 2, 1, 1, 1));
        assert!(url.starts_with("https://quickchart.io/chart?w=150&h=150&c="));
    }

    #[test]
    fn test_zero_segments_are_filtered_out() {
        let url = chart_image_url(&summary(10, 0, 0, 0, 0));
        let decoded = urlencoding::decode(&url).unwrap();
        // Only the passed segment and its color survive.
        assert!(decoded.contains("#36c96d"));
        assert!(!decoded.contains("#e74c3c"));
        assert!(!decoded.contains("#d3d3d3"));
    }

    #[test]
    fn test_percentage_label() {
        let url = chart_image_url(&summary(5, 5, 0, 0, 0));
        let decoded = urlencoding::decode(&url).unwrap();
        assert!(decoded.contains("50%"));
    }

    #[test]
    fn test_percentage_rounds() {
        // 2 of 3 passed: 66.66..% rounds to 67%.
        let url = chart_image_url(&summary(2, 1, 0, 0, 0));
        let decoded = urlencoding::decode(&url).unwrap();
        assert!(decoded.contains("67%"));
    }

    #[test]
    fn test_empty_summary_reports_zero_percent() {
        let url = chart_image_url(&summary(0, 0, 0, 0, 0));
        let decoded = urlencoding::decode(&url).unwrap();
        assert!(decoded.contains("0%"));
    }
}
