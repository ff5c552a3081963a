// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Lenient dotted-version comparison for the persisted data-version marker.
//!
//! Stored markers are written by older releases and may be malformed, so
//! parsing never fails: any missing or non-numeric segment counts as 0.

use std::fmt;

/// A `major.minor.patch` schema version.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Version {
    /// The version assumed when no marker is stored.
    pub const EARLIEST: Version = Version::new(0, 0, 0);

    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Parse a dotted version string. Segments past the third are ignored.
    pub fn parse(input: &str) -> Self {
        let mut segments = input.trim().split('.').map(parse_segment);
        Self {
            major: segments.next().unwrap_or(0),
            minor: segments.next().unwrap_or(0),
            patch: segments.next().unwrap_or(0),
        }
    }
}

fn parse_segment(segment: &str) -> u64 {
    segment.trim().parse::<u64>().unwrap_or(0)
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl From<&str> for Version {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

/// True iff `a` is strictly older than `b`.
pub fn less_than(a: &str, b: &str) -> bool {
    Version::parse(a) < Version::parse(b)
}

#[cfg(test)]
#[path = "semver_tests.rs"]
mod tests;
