use common::{Group, GroupOnContest};
use serde::Serialize;

/// Read access to a recorded score.
///
/// Group scores come from upstream and may include adjustments that member
/// totals do not, so they are never recomputed here.
pub trait RecordedScore {
    fn recorded_score(&self) -> i64;
}

impl RecordedScore for Group {
    fn recorded_score(&self) -> i64 {
        self.score
    }
}

impl RecordedScore for GroupOnContest {
    fn recorded_score(&self) -> i64 {
        self.score
    }
}

/// Head-count of a group's members by eligibility.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, utoipa::ToSchema)]
pub struct Participation {
    pub participating: usize,
    pub not_allowed: usize,
}

impl Participation {
    pub fn of(group: &Group) -> Self {
        let participating = group
            .members
            .iter()
            .filter(|m| m.eligibility.is_eligible())
            .count();
        Self {
            participating,
            not_allowed: group.members.len() - participating,
        }
    }
}
