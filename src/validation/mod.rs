//! Text extraction and validation
//!
//! The core of the linter: tree walk, ignore directives, attribute
//! policy, fragment detection, normalization, and checker dispatch.

pub mod attributes;
pub mod engine;
pub mod fragment;
pub mod ignore;
pub mod normalize;

pub use attributes::{AttributeDisposition, AttributePolicy};
pub use engine::{extract_segments, Diagnostic, SegmentOrigin, TextSegment, Validator};
pub use ignore::{IgnoreTracker, IgnoreTransition};
pub use normalize::normalize;
