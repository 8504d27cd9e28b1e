//! Configuration options for detection and cleaning.

use serde::{Deserialize, Serialize};

/// Lines sampled for delimiter detection when not configured.
pub const DEFAULT_SAMPLE_LINES: usize = 5;

/// Minimum share of sampled lines that must agree on the field count.
pub const DEFAULT_MIN_CONSISTENCY: f64 = 0.6;

/// Tokens treated as NULL (compared case-insensitively after trimming).
pub const DEFAULT_NULL_MARKERS: [&str; 4] = ["N/A", "NA", "NULL", ""];

/// Options for delimiter detection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DetectOptions {
    /// Number of leading lines to sample (at least 1).
    pub sample_lines: usize,
    /// Candidates whose consistency falls below this are not dominant.
    pub min_consistency: f64,
}

impl Default for DetectOptions {
    fn default() -> Self {
        Self {
            sample_lines: DEFAULT_SAMPLE_LINES,
            min_consistency: DEFAULT_MIN_CONSISTENCY,
        }
    }
}

impl DetectOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the sample size; zero is raised to one.
    #[must_use]
    pub fn with_sample_lines(mut self, lines: usize) -> Self {
        self.sample_lines = lines.max(1);
        self
    }

    /// Set the minimum consistency, clamped to `0.0..=1.0`.
    #[must_use]
    pub fn with_min_consistency(mut self, threshold: f64) -> Self {
        self.min_consistency = threshold.clamp(0.0, 1.0);
        self
    }
}

/// How a stripped numeric suffix renders the remaining number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SuffixKind {
    /// Shortest decimal form (`20.8x` -> `20.8`).
    Multiplier,
    /// At least one decimal place (`29%` -> `29.0`).
    Percent,
}

/// A trailing character marking a numeric cell, such as `x` or `%`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumericSuffix {
    pub symbol: char,
    pub kind: SuffixKind,
}

impl NumericSuffix {
    pub const MULTIPLIER: Self = Self {
        symbol: 'x',
        kind: SuffixKind::Multiplier,
    };

    pub const PERCENT: Self = Self {
        symbol: '%',
        kind: SuffixKind::Percent,
    };

    /// Alphabetic suffixes match regardless of case.
    pub fn matches(&self, ch: char) -> bool {
        ch.eq_ignore_ascii_case(&self.symbol)
    }
}

/// Options for cell cleaning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanOptions {
    /// NULL markers, stored as given; matching ignores case.
    pub null_markers: Vec<String>,
    /// Suffixes stripped from numeric cells, checked in order.
    pub numeric_suffixes: Vec<NumericSuffix>,
}

impl Default for CleanOptions {
    fn default() -> Self {
        Self {
            null_markers: DEFAULT_NULL_MARKERS.iter().map(|m| (*m).to_string()).collect(),
            numeric_suffixes: vec![NumericSuffix::MULTIPLIER, NumericSuffix::PERCENT],
        }
    }
}

impl CleanOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the NULL marker set.
    #[must_use]
    pub fn with_null_markers<I, S>(mut self, markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.null_markers = markers.into_iter().map(Into::into).collect();
        self
    }

    /// Add markers on top of the current set.
    #[must_use]
    pub fn with_extra_null_markers<I, S>(mut self, markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for marker in markers {
            let marker = marker.into();
            if !self.is_null_marker(&marker) {
                self.null_markers.push(marker);
            }
        }
        self
    }

    #[must_use]
    pub fn with_numeric_suffixes(mut self, suffixes: Vec<NumericSuffix>) -> Self {
        self.numeric_suffixes = suffixes;
        self
    }

    /// Returns true if the trimmed value is a NULL marker.
    pub fn is_null_marker(&self, value: &str) -> bool {
        let value = value.trim();
        self.null_markers
            .iter()
            .any(|marker| marker.trim().eq_ignore_ascii_case(value))
    }

    /// Finds the suffix configured for the last character of `value`.
    pub fn suffix_for(&self, value: &str) -> Option<NumericSuffix> {
        let last = value.chars().next_back()?;
        self.numeric_suffixes
            .iter()
            .copied()
            .find(|suffix| suffix.matches(last))
    }
}
