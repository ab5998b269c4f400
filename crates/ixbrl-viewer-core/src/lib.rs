//! # ixbrl-viewer-core
//!
//! Presentation-independent core of the inline XBRL viewer. The viewer hands
//! this crate pre-parsed fact records and gets display strings back:
//!
//! - **Aspect labels** — resolve the display label of a fact's concept, period,
//!   unit or dimension value (`aspect`)
//! - **Minimally unique labels** — the shortest combination of aspect labels
//!   that tells apart the facts of a [`FactSet`] (`factset`)
//! - **Change descriptions** — percentage change between two numeric facts,
//!   falling back to the formatted starting value when a percentage is
//!   meaningless (`change`)
//! - **Scale menus** — exponent → bucket name options for the scale filter
//!   (`scale`)
//!
//! ## Ordering
//!
//! Dimensions are folded into unique labels in first-seen order: concept,
//! period, then each custom dimension in the order it is first met walking
//! the facts of the set.

#![deny(unsafe_code)]

pub mod aspect;
pub mod change;
pub mod config;
pub mod error;
pub mod factset;
pub mod format;
pub mod scale;
pub mod types;

pub use aspect::aspect_label;
pub use change::{describe_change, describe_change_default};
pub use crate::config::FormatConfig;
pub use error::ViewerError;
pub use factset::{group_by_concept, FactSet};
pub use format::{LocaleNumberFormatter, NumberFormatter};
pub use scale::{
    scale_name, scales_options, select_by_scale, ScaleName, ScaleSelection, ScaleUsage,
    UnitFilter, SCALE_NAMES,
};
pub use types::{Aspect, AspectName, Fact, FactId, FactValue, Unit};
