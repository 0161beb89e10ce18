//! Verdict evaluation.
//!
//! An accusation is sustained when enough of the collected clues are bound to
//! the accused in the association table.

use std::fmt;

use crate::association::AssociationTable;
use crate::clue::ClueSet;

/// Matching clues needed to sustain an accusation when none is configured.
pub const SUSTAIN_THRESHOLD: usize = 2;

/// Outcome of an accusation.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Verdict {
    Sustained,
    Insufficient,
}

impl Verdict {
    /// `Sustained` once `match_count` reaches `threshold`.
    pub fn from_count(match_count: usize, threshold: usize) -> Self {
        if match_count >= threshold {
            Verdict::Sustained
        } else {
            Verdict::Insufficient
        }
    }

    pub fn is_sustained(self) -> bool {
        self == Verdict::Sustained
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Sustained => f.write_str("SUSTAINED"),
            Verdict::Insufficient => f.write_str("INSUFFICIENT"),
        }
    }
}

/// Everything decided about one accusation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Judgement {
    pub accused: String,
    /// Collected clues in display order.
    pub collected: Vec<String>,
    pub match_count: usize,
    pub verdict: Verdict,
}

/// Count collected clues bound to exactly `suspect`. Unbound clues never match.
pub fn count_matches(clues: &ClueSet, table: &AssociationTable, suspect: &str) -> usize {
    clues.count(|clue| table.lookup(clue) == Some(suspect))
}

/// Judge an accusation with the default threshold.
pub fn judge(clues: &ClueSet, table: &AssociationTable, accused: &str) -> Judgement {
    judge_with_threshold(clues, table, accused, SUSTAIN_THRESHOLD)
}

pub fn judge_with_threshold(clues: &ClueSet, table: &AssociationTable, accused: &str, threshold: usize) -> Judgement {
    let match_count = count_matches(clues, table, accused);
    Judgement {
        accused: accused.to_string(),
        collected: clues.iter().map(str::to_string).collect(),
        match_count,
        verdict: Verdict::from_count(match_count, threshold),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evidence() -> (ClueSet, AssociationTable) {
        let mut table = AssociationTable::new();
        table.insert_or_update("clue1", "Black");
        table.insert_or_update("clue2", "White");
        table.insert_or_update("clue3", "Black");
        let mut clues = ClueSet::new();
        for clue in ["clue1", "clue2", "clue3", "unbound clue"] {
            clues.insert(clue);
        }
        (clues, table)
    }

    #[test]
    fn counts_per_suspect() {
        let (clues, table) = evidence();
        assert_eq!(count_matches(&clues, &table, "Black"), 2);
        assert_eq!(count_matches(&clues, &table, "White"), 1);
        assert_eq!(count_matches(&clues, &table, "Green"), 0);
    }

    #[test]
    fn suspect_match_is_exact() {
        let (clues, table) = evidence();
        assert_eq!(count_matches(&clues, &table, "black"), 0);
        assert_eq!(count_matches(&clues, &table, "Black "), 0);
    }

    #[test]
    fn threshold_boundary() {
        assert_eq!(Verdict::from_count(0, SUSTAIN_THRESHOLD), Verdict::Insufficient);
        assert_eq!(Verdict::from_count(1, SUSTAIN_THRESHOLD), Verdict::Insufficient);
        assert_eq!(Verdict::from_count(2, SUSTAIN_THRESHOLD), Verdict::Sustained);
        assert_eq!(Verdict::from_count(5, SUSTAIN_THRESHOLD), Verdict::Sustained);
    }

    #[test]
    fn judge_reports_clues_count_and_verdict() {
        let (clues, table) = evidence();
        let judgement = judge(&clues, &table, "Black");
        assert_eq!(judgement.collected, vec!["clue1", "clue2", "clue3", "unbound clue"]);
        assert_eq!(judgement.match_count, 2);
        assert!(judgement.verdict.is_sustained());

        let judgement = judge(&clues, &table, "White");
        assert_eq!(judgement.verdict, Verdict::Insufficient);
    }

    #[test]
    fn custom_threshold() {
        let (clues, table) = evidence();
        assert_eq!(
            judge_with_threshold(&clues, &table, "White", 1).verdict,
            Verdict::Sustained
        );
        assert_eq!(
            judge_with_threshold(&clues, &table, "Black", 3).verdict,
            Verdict::Insufficient
        );
    }

    #[test]
    fn clue_case_mismatch_is_not_evidence() {
        let mut table = AssociationTable::new();
        table.insert_or_update("Old key", "Black");
        table.insert_or_update("Torn envelope", "Black");
        let mut clues = ClueSet::new();
        clues.insert("old key");
        clues.insert("Torn envelope");
        assert_eq!(count_matches(&clues, &table, "Black"), 1);
    }
}
