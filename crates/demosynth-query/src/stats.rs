use tracing::debug;

use demosynth_core::{DeclarationGroup, Person};

/// Numeric key a group ranking averages over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupMetric {
    NetWorth,
    Age,
}

impl GroupMetric {
    fn value_of(&self, person: &Person) -> f64 {
        match self {
            GroupMetric::NetWorth => person.net_worth,
            GroupMetric::Age => person.age as f64,
        }
    }
}

/// Arithmetic mean of `metric` over a group's members, `None` when the
/// group has no members.
pub fn group_average(
    people: &[Person],
    group: DeclarationGroup,
    metric: GroupMetric,
) -> Option<f64> {
    let mut sum = 0.0;
    let mut count = 0usize;
    for person in people {
        if person.declaration_group == group {
            sum += metric.value_of(person);
            count += 1;
        }
    }
    if count == 0 {
        return None;
    }
    Some(sum / count as f64)
}

/// Group with the highest average of `metric`.
///
/// Groups are visited in the fixed order A, B, C and compared with strict
/// `>`, so the first group to reach the winning average keeps it on ties.
/// Empty groups are skipped; `None` means no group had any members.
pub fn top_group_by_average(people: &[Person], metric: GroupMetric) -> Option<DeclarationGroup> {
    let mut best_group = None;
    let mut best_average = 0.0;
    for group in DeclarationGroup::ALL {
        let Some(average) = group_average(people, group, metric) else {
            continue;
        };
        debug!(%group, ?metric, average, "group average");
        if average > best_average {
            best_average = average;
            best_group = Some(group);
        }
    }
    best_group
}
