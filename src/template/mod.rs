//! Handlebars adapter for user-authored message templates.
//!
//! Templates render against `{ "ctrf": <results> }` with a registry of
//! named helpers for querying and formatting report data. Compilation and
//! rendering failures are hard errors; there is no partial recovery.

pub mod helpers;

use crate::error::SlackCtrfError;
use crate::types::Report;
use handlebars::Handlebars;
use serde_json::json;

/// Render a template source against the report. All helpers are
/// registered into a fresh registry per call; registration has no effect
/// beyond the registry itself.
pub fn compile_template(template_source: &str, report: &Report) -> Result<String, SlackCtrfError> {
    let mut registry = Handlebars::new();
    registry.set_prevent_indent(true);
    helpers::register_all_helpers(&mut registry);

    let context = json!({ "ctrf": report.results });
    Ok(registry.render_template(template_source, &context)?)
}
