//! Helper registry exposed to user templates.
//!
//! # Module Organization
//!
//! - `ctrf` - Report-centric predicates, selection and duration formatting
//! - `ansi` - ANSI stripping for console-captured text
//! - `string` - Case, slice, line-split and timestamp formatting
//! - `array` - Generic array reordering and slicing
//! - `math` - Basic arithmetic

mod ansi;
mod array;
mod ctrf;
mod math;
mod string;

use handlebars::Handlebars;

/// Register every helper under its template-facing name. Safe to call on
/// the same registry more than once.
pub fn register_all_helpers(registry: &mut Handlebars<'_>) {
    ctrf::register(registry);
    ansi::register(registry);
    string::register(registry);
    array::register(registry);
    math::register(registry);
}
