//! Palindrome detection over a normalized form of the input.
//!
//! Each source `char` normalizes to a unit of zero or more chars, and the
//! palindrome comparison reverses the sequence of units, never the chars
//! inside one. A multi-char lowercase or decomposition is compared whole.

use serde::{Deserialize, Serialize};
use unicode_normalization::char::{decompose_canonical, is_combining_mark};

/// Optional normalization steps on top of lowercasing and whitespace removal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizationPolicy {
    /// Drop every character that is not alphanumeric.
    pub ignore_punctuation: bool,
    /// Decompose accented letters and drop the combining marks.
    pub fold_accents: bool,
}

impl NormalizationPolicy {
    pub fn new(ignore_punctuation: bool, fold_accents: bool) -> Self {
        Self {
            ignore_punctuation,
            fold_accents,
        }
    }

    fn keeps(&self, c: char) -> bool {
        if c.is_whitespace() {
            return false;
        }
        if self.fold_accents && is_combining_mark(c) {
            return false;
        }
        !self.ignore_punctuation || c.is_alphanumeric()
    }

    /// Normalized form of a single source char; empty when it is dropped.
    fn unit(&self, c: char) -> String {
        let mut unit = String::new();
        for lower in c.to_lowercase() {
            if self.fold_accents {
                decompose_canonical(lower, |d| {
                    if self.keeps(d) {
                        unit.push(d);
                    }
                });
            } else if self.keeps(lower) {
                unit.push(lower);
            }
        }
        unit
    }

    fn units<'a>(&'a self, s: &'a str) -> impl Iterator<Item = String> + 'a {
        s.chars()
            .map(move |c| self.unit(c))
            .filter(|unit| !unit.is_empty())
    }
}

/// Lowercases `s` and removes whitespace.
pub fn normalize(s: &str) -> String {
    normalize_with(s, &NormalizationPolicy::default())
}

/// `normalize` with the optional steps of `policy` applied as well.
pub fn normalize_with(s: &str, policy: &NormalizationPolicy) -> String {
    policy.units(s).collect()
}

/// Whether `s` reads the same forwards and backwards once normalized.
pub fn palindromo(s: &str) -> bool {
    palindromo_with(s, &NormalizationPolicy::default())
}

/// `palindromo` under `policy`.
pub fn palindromo_with(s: &str, policy: &NormalizationPolicy) -> bool {
    let units: Vec<String> = policy.units(s).collect();
    let result = units.iter().eq(units.iter().rev());
    tracing::trace!(
        input = s,
        units = units.len(),
        result,
        "palindrome check"
    );
    result
}
