//! Delimiter detection by field-count consistency.
//!
//! Each candidate delimiter splits every sampled line. The most frequent
//! field count (the modal count) and how many lines share it determine the
//! candidate's consistency. A candidate that leaves lines unsplit (modal
//! count below two) scores zero. The highest consistency wins, ties going to
//! the earlier entry in [`Delimiter::DETECTABLE`].

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use serde::Serialize;
use tabclean_model::{Delimiter, DetectOptions};

use crate::error::{IngestError, Result};
use crate::sample::{Sample, read_sample};

/// How well one delimiter explains the sample.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidateScore {
    pub delimiter: Delimiter,
    pub format: &'static str,
    /// Most frequent field count across sampled lines.
    pub modal_fields: usize,
    /// Number of lines with the modal field count.
    pub frequency: usize,
    /// Number of lines sampled.
    pub sampled: usize,
    /// Share of lines with the modal field count, or 0.0 when the delimiter
    /// does not split.
    pub consistency: f64,
}

impl CandidateScore {
    /// True if the delimiter produced at least two fields on the modal line.
    pub fn splits(&self) -> bool {
        self.modal_fields >= 2
    }
}

/// Scores for every detectable delimiter, in precedence order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CandidateScores(pub Vec<CandidateScore>);

impl CandidateScores {
    pub fn iter(&self) -> impl Iterator<Item = &CandidateScore> {
        self.0.iter()
    }

    /// Highest-scoring candidate that splits, earliest on ties.
    pub fn best(&self) -> Option<&CandidateScore> {
        let mut best: Option<&CandidateScore> = None;
        for score in self.0.iter().filter(|s| s.consistency > 0.0) {
            match best {
                Some(current) if score.consistency <= current.consistency => {}
                _ => best = Some(score),
            }
        }
        best
    }
}

impl fmt::Display for CandidateScores {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, score) in self.0.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{} {:.1}%", score.format, score.consistency * 100.0)?;
        }
        Ok(())
    }
}

/// Outcome of a successful detection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetectionReport {
    pub delimiter: Delimiter,
    pub format: &'static str,
    /// Consistency of the chosen delimiter, `0.0..=1.0`.
    pub confidence: f64,
    pub sampled_lines: usize,
    pub candidates: CandidateScores,
}

/// Scores a single delimiter against the sampled lines.
pub fn score_candidate(lines: &[String], delimiter: Delimiter) -> CandidateScore {
    let separator = delimiter.as_char();
    let mut counts: BTreeMap<usize, usize> = BTreeMap::new();
    for line in lines {
        *counts.entry(line.split(separator).count()).or_insert(0) += 1;
    }

    // Iterating ascending with `>=` resolves frequency ties toward more fields.
    let mut modal_fields = 0;
    let mut frequency = 0;
    for (&fields, &seen) in &counts {
        if seen >= frequency {
            modal_fields = fields;
            frequency = seen;
        }
    }

    let sampled = lines.len();
    let consistency = if modal_fields >= 2 && sampled > 0 {
        frequency as f64 / sampled as f64
    } else {
        0.0
    };

    CandidateScore {
        delimiter,
        format: delimiter.label(),
        modal_fields,
        frequency,
        sampled,
        consistency,
    }
}

/// Detects the delimiter of an already-read sample.
pub fn detect_from_sample(sample: &Sample, options: &DetectOptions) -> Result<DetectionReport> {
    let scores = CandidateScores(
        Delimiter::DETECTABLE
            .into_iter()
            .map(|delimiter| score_candidate(&sample.lines, delimiter))
            .collect(),
    );
    tracing::debug!(sampled = sample.len(), scores = %scores, "scored delimiter candidates");

    let Some(best) = scores.best().cloned() else {
        return Err(IngestError::NoDelimiterFound { scores });
    };
    if best.consistency < options.min_consistency {
        return Err(IngestError::AmbiguousFormat { scores });
    }
    let tied = scores
        .iter()
        .filter(|score| score.splits() && score.consistency == best.consistency)
        .count();
    if tied > 1 {
        tracing::warn!(
            format = best.format,
            tied,
            "several delimiters split the sample equally well; using precedence order"
        );
    }

    Ok(DetectionReport {
        delimiter: best.delimiter,
        format: best.format,
        confidence: best.consistency,
        sampled_lines: sample.len(),
        candidates: scores,
    })
}

/// Samples a file and detects its delimiter.
pub fn detect_delimiter(path: &Path, options: &DetectOptions) -> Result<DetectionReport> {
    let sample = read_sample(path, options.sample_lines)?;
    let report = detect_from_sample(&sample, options)?;
    tracing::info!(
        path = %path.display(),
        format = report.format,
        confidence = report.confidence,
        "detected delimiter"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(text: &str) -> Vec<String> {
        text.lines().map(str::to_string).collect()
    }

    #[test]
    fn test_score_consistent_candidate() {
        let score = score_candidate(&lines("a,b,c\n1,2,3\n4,5,6"), Delimiter::Comma);
        assert_eq!(score.modal_fields, 3);
        assert_eq!(score.frequency, 3);
        assert!((score.consistency - 1.0).abs() < f64::EPSILON);
        assert!(score.splits());
    }

    #[test]
    fn test_score_non_splitting_candidate_is_zero() {
        let score = score_candidate(&lines("a,b\n1,2"), Delimiter::Tab);
        assert_eq!(score.modal_fields, 1);
        assert_eq!(score.consistency, 0.0);
        assert!(!score.splits());
    }

    #[test]
    fn test_score_partial_consistency() {
        let score = score_candidate(&lines("a|b|c\n1|2|3\n4|5\n6|7|8"), Delimiter::Pipe);
        assert_eq!(score.modal_fields, 3);
        assert!((score.consistency - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_modal_tie_prefers_more_fields() {
        let score = score_candidate(&lines("a;b\n1;2;3"), Delimiter::Semicolon);
        assert_eq!(score.modal_fields, 3);
        assert_eq!(score.frequency, 1);
    }

    #[test]
    fn test_tie_break_precedence() {
        // Both tab and comma split every line into two fields.
        let sample = Sample::from_text("a\tb,c\n1\t2,3\n", 5);
        let report = detect_from_sample(&sample, &DetectOptions::default()).unwrap();
        assert_eq!(report.delimiter, Delimiter::Tab);

        let sample = Sample::from_text("a;b|c\n1;2|3\n", 5);
        let report = detect_from_sample(&sample, &DetectOptions::default()).unwrap();
        assert_eq!(report.delimiter, Delimiter::Pipe);
    }

    #[test]
    fn test_higher_consistency_beats_precedence() {
        let sample = Sample::from_text("a,b\tc\n1,2\n3,4\n", 5);
        let report = detect_from_sample(&sample, &DetectOptions::default()).unwrap();
        assert_eq!(report.delimiter, Delimiter::Comma);
    }

    #[test]
    fn test_no_delimiter_found() {
        let sample = Sample::from_text("hello\nworld\n", 5);
        let err = detect_from_sample(&sample, &DetectOptions::default()).unwrap_err();
        assert!(matches!(err, IngestError::NoDelimiterFound { .. }));
    }

    #[test]
    fn test_ambiguous_below_threshold() {
        // Comma splits, but only two of five lines share the modal count.
        let sample = Sample::from_text("a,b\nc,d\ne\nf,g,h\ni\n", 5);
        let err = detect_from_sample(&sample, &DetectOptions::default()).unwrap_err();
        let IngestError::AmbiguousFormat { scores } = err else {
            panic!("expected ambiguous format");
        };
        assert_eq!(scores.0.len(), 4);
        assert!(scores.to_string().contains("CSV 40.0%"));
    }

    #[test]
    fn test_threshold_is_configurable() {
        let sample = Sample::from_text("a,b\nc,d\ne\nf,g,h\ni\n", 5);
        let options = DetectOptions::default().with_min_consistency(0.2);
        let report = detect_from_sample(&sample, &options).unwrap();
        assert_eq!(report.format, "CSV");
        assert!((report.confidence - 0.4).abs() < 1e-9);
    }

    #[test]
    fn test_scores_display() {
        let sample = Sample::from_text("a,b\n1,2\n", 5);
        let report = detect_from_sample(&sample, &DetectOptions::default()).unwrap();
        assert_eq!(
            report.candidates.to_string(),
            "TSV 0.0%, CSV 100.0%, PIPE 0.0%, SEMICOLON 0.0%"
        );
    }
}
