// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Slugify document and tag names for use as workspace keys.

use std::collections::HashSet;

/// Slugify a string.
///
/// Lowercases, replaces every run of non-alphanumeric characters with a
/// single hyphen, and trims leading/trailing hyphens.
pub fn slugify(input: &str) -> String {
    input
        .to_lowercase()
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// Tracks slugs already handed out within one scope (a workspace).
#[derive(Debug, Default, Clone)]
pub struct SlugSet {
    used: HashSet<String>,
}

impl SlugSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve `base`, or the first free `base-1`, `base-2`, ... if taken.
    pub fn claim(&mut self, base: &str) -> String {
        if self.used.insert(base.to_string()) {
            return base.to_string();
        }
        let mut n = 1usize;
        loop {
            let candidate = format!("{base}-{n}");
            if self.used.insert(candidate.clone()) {
                return candidate;
            }
            n += 1;
        }
    }

    pub fn contains(&self, slug: &str) -> bool {
        self.used.contains(slug)
    }
}

#[cfg(test)]
#[path = "slug_tests.rs"]
mod tests;
