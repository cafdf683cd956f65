use serde::{Deserialize, Serialize};

use demosynth_core::{Person, verify_group};

/// Outcome of a bulk declaration-group audit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditReport {
    pub total: usize,
    pub correct: usize,
    pub incorrect: usize,
}

impl AuditReport {
    /// Share of records whose stored group matches the rule, in percent.
    /// An empty audit reports 0.0 rather than dividing by zero.
    pub fn percent_correct(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.correct as f64 * 100.0 / self.total as f64
    }
}

/// Verify every person's declaration group against the classification rule.
///
/// Records with malformed ids are counted as incorrect (the verification
/// layer logs them) instead of aborting the audit.
pub fn audit_groups(people: &[Person]) -> AuditReport {
    let mut correct = 0;
    let mut incorrect = 0;
    for person in people {
        if verify_group(person) {
            correct += 1;
        } else {
            incorrect += 1;
        }
    }
    AuditReport {
        total: people.len(),
        correct,
        incorrect,
    }
}
