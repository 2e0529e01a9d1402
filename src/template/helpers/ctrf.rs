//! Report-centric template helpers: membership predicates, selection,
//! rate sorting and duration formatting.

use crate::types::{Test, TestStatus};
use handlebars::{handlebars_helper, Handlebars};
use serde_json::Value;

handlebars_helper!(limit_failed_tests: |tests: Vec<Test>, limit: u64| {
    let limited: Vec<Test> = tests
        .into_iter()
        .filter(|test| test.status == TestStatus::Failed)
        .take(limit as usize)
        .collect();
    serde_json::to_value(limited).unwrap_or_default()
});

handlebars_helper!(more_than: |a: Json, b: Json| {
    match (a.as_f64(), b.as_f64()) {
        (Some(a), Some(b)) => a > b,
        _ => false,
    }
});

handlebars_helper!(count_flaky: |tests: Vec<Test>| {
    tests.iter().filter(|test| test.is_flaky()).count()
});

handlebars_helper!(any_flaky_tests: |tests: Vec<Test>| {
    tests.iter().any(|test| test.is_flaky())
});

handlebars_helper!(any_failed_tests: |tests: Vec<Test>| {
    tests.iter().any(|test| test.status == TestStatus::Failed)
});

handlebars_helper!(any_skipped_tests: |tests: Vec<Test>| {
    tests.iter().any(|test| {
        matches!(
            test.status,
            TestStatus::Skipped | TestStatus::Pending | TestStatus::Other
        )
    })
});

handlebars_helper!(format_duration: |start: Json, stop: Json| {
    match (start.as_f64(), stop.as_f64()) {
        (Some(start), Some(stop)) if !(start == 0.0 && stop == 0.0) => {
            human_duration(stop - start)
        }
        _ => "not captured".to_string(),
    }
});

handlebars_helper!(format_duration_ms: |duration: Json| {
    match duration.as_f64() {
        Some(duration) => human_duration(duration),
        None => "not captured".to_string(),
    }
});

handlebars_helper!(eq: |a: Json, b: Json| a == b);

handlebars_helper!(sort_tests_by_flaky_rate: |tests: Vec<Test>| {
    serde_json::to_value(sorted_by_rate(tests, "flakyRate")).unwrap_or_default()
});

handlebars_helper!(sort_tests_by_fail_rate: |tests: Vec<Test>| {
    serde_json::to_value(sorted_by_rate(tests, "failRate")).unwrap_or_default()
});

handlebars_helper!(format_rate: |rate: f64, fraction_digits: u64| {
    format!("{:.*}", fraction_digits as usize, rate)
});

pub fn register(registry: &mut Handlebars<'_>) {
    registry.register_helper("limitFailedTests", Box::new(limit_failed_tests));
    registry.register_helper("moreThan", Box::new(more_than));
    registry.register_helper("countFlaky", Box::new(count_flaky));
    registry.register_helper("anyFlakyTests", Box::new(any_flaky_tests));
    registry.register_helper("anyFailedTests", Box::new(any_failed_tests));
    registry.register_helper("anySkippedTests", Box::new(any_skipped_tests));
    registry.register_helper("formatDuration", Box::new(format_duration));
    registry.register_helper("formatDurationMs", Box::new(format_duration_ms));
    registry.register_helper("eq", Box::new(eq));
    registry.register_helper("sortTestsByFlakyRate", Box::new(sort_tests_by_flaky_rate));
    registry.register_helper("sortTestsByFailRate", Box::new(sort_tests_by_fail_rate));
    registry.register_helper("formatRate", Box::new(format_rate));
}

/// Human-readable duration from a millisecond count: "1ms" floor, whole
/// milliseconds under a second, one-decimal seconds under a minute,
/// "{m}m{s}s" beyond.
fn human_duration(duration_ms: f64) -> String {
    if !duration_ms.is_finite() {
        "not captured".to_string()
    } else if duration_ms < 1.0 {
        "1ms".to_string()
    } else if duration_ms < 1000.0 {
        format!("{}ms", duration_ms.floor() as u64)
    } else if duration_ms < 60_000.0 {
        format!("{:.1}s", duration_ms / 1000.0)
    } else {
        let minutes = (duration_ms / 60_000.0).floor() as u64;
        let seconds = ((duration_ms % 60_000.0) / 1000.0).floor() as u64;
        format!("{}m{}s", minutes, seconds)
    }
}

/// Tests whose `extra[rate_field]` is a positive number, sorted by that
/// rate descending.
fn sorted_by_rate(tests: Vec<Test>, rate_field: &str) -> Vec<Test> {
    let rate_of = |test: &Test| -> Option<f64> {
        test.extra
            .as_ref()
            .and_then(|extra| extra.get(rate_field))
            .and_then(Value::as_f64)
    };

    let mut rated: Vec<Test> = tests
        .into_iter()
        .filter(|test| rate_of(test).map(|rate| rate > 0.0).unwrap_or(false))
        .collect();

    rated.sort_by(|a, b| {
        let a_rate = rate_of(a).unwrap_or(0.0);
        let b_rate = rate_of(b).unwrap_or(0.0);
        b_rate.partial_cmp(&a_rate).unwrap_or(std::cmp::Ordering::Equal)
    });

    rated
}
