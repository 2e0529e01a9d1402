//! Generic array helpers.

use super::string::slice_bounds;
use handlebars::{handlebars_helper, Handlebars};
use serde_json::Value;

handlebars_helper!(reverse_array: |items: array| {
    items.iter().rev().cloned().collect::<Vec<Value>>()
});

handlebars_helper!(slice_array: |items: array, start: i64, end: i64| {
    let (from, to) = slice_bounds(items.len(), start, end);
    items[from..to].to_vec()
});

pub fn register(registry: &mut Handlebars<'_>) {
    registry.register_helper("reverseArray", Box::new(reverse_array));
    registry.register_helper("sliceArray", Box::new(slice_array));
}
