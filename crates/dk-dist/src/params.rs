//! Alias-tolerant parameter resolution.
//!
//! Callers hand the factory an unordered bag of `ParamEntry` values; each
//! family declares, per logical parameter, an ordered list of accepted
//! case-insensitive aliases. Resolution scans the bag in caller order and
//! returns the first entry whose key matches any alias. Unrecognized keys
//! are deliberately ignored so parameter sets stay forward/backward
//! compatible.

use dk_core::{Error, ParamEntry, Result};

/// A family's view of one caller-supplied parameter bag.
#[derive(Debug, Clone, Copy)]
pub struct Params<'a> {
    entries: &'a [ParamEntry],
    family: &'static str,
}

impl<'a> Params<'a> {
    /// Wrap a parameter bag for resolution on behalf of `family`.
    pub fn new(family: &'static str, entries: &'a [ParamEntry]) -> Self {
        Self { entries, family }
    }

    /// Canonical name of the family doing the resolving.
    pub fn family(&self) -> &'static str {
        self.family
    }

    /// Raw entries, for collectors that do their own key parsing.
    pub fn entries(&self) -> &'a [ParamEntry] {
        self.entries
    }

    /// First entry whose key matches any of `aliases`, case-insensitively.
    ///
    /// The scan is over entries (caller order), not aliases, so duplicate
    /// keys resolve to the first occurrence.
    pub fn find(&self, aliases: &[&str]) -> Option<f64> {
        self.entries.iter().find_map(|e| {
            aliases
                .iter()
                .any(|a| a.eq_ignore_ascii_case(&e.key))
                .then_some(e.value)
        })
    }

    /// Required parameter: absent under every alias is an error.
    ///
    /// `name` is the primary alias, used in the error message.
    pub fn required(&self, name: &'static str, aliases: &[&str]) -> Result<f64> {
        self.find(aliases)
            .ok_or(Error::MissingParameter { family: self.family, name })
    }

    /// Optional parameter with a default.
    pub fn optional(&self, aliases: &[&str], default: f64) -> f64 {
        self.find(aliases).unwrap_or(default)
    }
}
