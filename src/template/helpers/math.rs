//! Arithmetic helpers.

use handlebars::{handlebars_helper, Handlebars};
use serde_json::{json, Value};

handlebars_helper!(add: |*args| {
    let sum: f64 = args.iter().filter_map(|value| value.as_f64()).sum();
    number(sum)
});

handlebars_helper!(subtract: |a: Json, b: Json| {
    number(a.as_f64().unwrap_or(0.0) - b.as_f64().unwrap_or(0.0))
});

pub fn register(registry: &mut Handlebars<'_>) {
    registry.register_helper("add", Box::new(add));
    registry.register_helper("subtract", Box::new(subtract));
}

/// Render whole results as integers so `{{add 1 2}}` prints `3`, not `3.0`.
fn number(value: f64) -> Value {
    if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        json!(value as i64)
    } else {
        json!(value)
    }
}
