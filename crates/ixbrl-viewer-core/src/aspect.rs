//! Aspect label resolution.
//!
//! A missing aspect resolves to the empty string rather than an error: the
//! unique-label computation relies on seeing "no value" as a label of its own.

use crate::types::{AspectName, Fact};

/// Display label of `fact`'s value for the aspect `name`, or `""` when the
/// fact has no value for it.
pub fn aspect_label<'a>(fact: &'a Fact, name: &AspectName) -> &'a str {
    fact.aspect(name).map_or("", |aspect| aspect.label.as_str())
}

/// Labels of `fact` for each aspect in `names`, one slot per aspect.
pub fn label_row<'a>(fact: &'a Fact, names: &[AspectName]) -> Vec<&'a str> {
    names.iter().map(|name| aspect_label(fact, name)).collect()
}
