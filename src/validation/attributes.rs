//! Attribute classification
//!
//! Decides whether a named JSX attribute carries user-visible text.
//! Only explicitly targeted attributes are checked; the ignore set wins
//! over the target set and supports `prefix-*` wildcard entries.

use std::collections::HashSet;

/// Attributes whose values are presentation-facing copy
pub const DEFAULT_TARGET_ATTRIBUTES: &[&str] = &[
    "placeholder",
    "title",
    "alt",
    "label",
    "aria-label",
    "description",
    "content",
    "tooltip",
    "aria-description",
];

/// Attributes that are code or markup plumbing, never copy
pub const DEFAULT_IGNORE_ATTRIBUTES: &[&str] = &[
    "className",
    "class",
    "style",
    "id",
    "name",
    "type",
    "key",
    "data-testid",
    "data-*",
];

/// Outcome of classifying an attribute name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeDisposition {
    /// Value must be checked
    Checked,
    /// Value must never be checked
    Ignored,
    /// Not listed either way; the engine treats this like ignored
    NotChecked,
}

/// Runtime lookup built from the configured attribute name sets
#[derive(Debug, Clone)]
pub struct AttributePolicy {
    target: HashSet<String>,
    ignore_exact: HashSet<String>,
    ignore_prefixes: Vec<String>,
}

impl AttributePolicy {
    /// Build a policy from raw name lists. Entries in `ignore` ending
    /// with `*` match any name starting with the rest of the entry.
    pub fn new<I, J>(target: I, ignore: J) -> Self
    where
        I: IntoIterator<Item = String>,
        J: IntoIterator<Item = String>,
    {
        let mut ignore_exact = HashSet::new();
        let mut ignore_prefixes = Vec::new();
        for name in ignore {
            if let Some(prefix) = name.strip_suffix('*') {
                ignore_prefixes.push(prefix.to_string());
            } else {
                ignore_exact.insert(name);
            }
        }
        Self {
            target: target.into_iter().collect(),
            ignore_exact,
            ignore_prefixes,
        }
    }

    /// Presentation-facing attributes checked by default, and the common
    /// code-facing ones suppressed by default
    pub fn with_defaults() -> Self {
        Self::new(
            DEFAULT_TARGET_ATTRIBUTES.iter().map(|s| s.to_string()),
            DEFAULT_IGNORE_ATTRIBUTES.iter().map(|s| s.to_string()),
        )
    }

    /// Classify an attribute name. Total: every name yields exactly one
    /// disposition, and unlisted names default to `NotChecked`.
    pub fn classify(&self, name: &str) -> AttributeDisposition {
        if self.ignore_exact.contains(name)
            || self.ignore_prefixes.iter().any(|p| name.starts_with(p.as_str()))
        {
            return AttributeDisposition::Ignored;
        }
        if self.target.contains(name) {
            AttributeDisposition::Checked
        } else {
            AttributeDisposition::NotChecked
        }
    }
}

impl Default for AttributePolicy {
    fn default() -> Self {
        Self::with_defaults()
    }
}
