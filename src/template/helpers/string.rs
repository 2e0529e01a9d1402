//! String-shaping helpers: case, escaping, slicing, line splitting and
//! timestamp conversion.

use chrono::DateTime;
use handlebars::{handlebars_helper, Handlebars};

handlebars_helper!(uppercase: |s: str| s.to_uppercase());

handlebars_helper!(escape_markdown: |s: str| {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        if matches!(c, '*' | '_' | '`' | '~') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
});

handlebars_helper!(slice_string: |s: str, start: i64, end: i64| {
    let chars: Vec<char> = s.chars().collect();
    let (from, to) = slice_bounds(chars.len(), start, end);
    chars[from..to].iter().collect::<String>()
});

handlebars_helper!(split_lines: |s: str| {
    s.lines().map(|line| line.to_string()).collect::<Vec<_>>()
});

handlebars_helper!(convert_timestamp: |timestamp: Json| {
    match timestamp.as_i64().and_then(|ms| DateTime::from_timestamp_millis(ms)) {
        Some(datetime) => datetime.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => "not captured".to_string(),
    }
});

pub fn register(registry: &mut Handlebars<'_>) {
    registry.register_helper("uppercase", Box::new(uppercase));
    registry.register_helper("escapeMarkdown", Box::new(escape_markdown));
    registry.register_helper("sliceString", Box::new(slice_string));
    registry.register_helper("splitLines", Box::new(split_lines));
    registry.register_helper("convertTimestamp", Box::new(convert_timestamp));
}

/// Resolve start/end indices with negative-from-the-end semantics, clamped
/// to the value's length; an inverted range is empty.
pub(super) fn slice_bounds(len: usize, start: i64, end: i64) -> (usize, usize) {
    let resolve = |index: i64| -> usize {
        if index < 0 {
            len.saturating_sub(index.unsigned_abs() as usize)
        } else {
            (index as usize).min(len)
        }
    };
    let from = resolve(start);
    let to = resolve(end);
    (from, to.max(from))
}
