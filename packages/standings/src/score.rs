use chrono::{DateTime, Utc};
use common::{Member, Submission};

use crate::error::{Result, StandingsError};

/// Sum of submission scores. An empty slice totals zero; `None` means the
/// sum does not fit in an `i64`.
pub fn total_score(submissions: &[Submission]) -> Option<i64> {
    submissions
        .iter()
        .try_fold(0i64, |total, s| total.checked_add(s.score))
}

/// Time of a member's first submission.
///
/// `Never` orders after every real timestamp, so a member who never
/// submitted loses a tie against anyone who did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EarliestSubmission {
    At(DateTime<Utc>),
    Never,
}

impl EarliestSubmission {
    pub fn of(submissions: &[Submission]) -> Self {
        submissions
            .iter()
            .map(|s| s.created_at)
            .min()
            .map_or(Self::Never, Self::At)
    }

    pub fn time(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::At(t) => Some(*t),
            Self::Never => None,
        }
    }
}

/// Aggregated score facts for one member.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MemberTally {
    pub total: i64,
    pub earliest: EarliestSubmission,
}

impl MemberTally {
    /// Tally a member's submissions, rejecting negative scores and totals
    /// that overflow.
    pub fn of(member: &Member) -> Result<Self> {
        if let Some(bad) = member.submissions.iter().find(|s| s.score < 0) {
            return Err(StandingsError::NegativeScore {
                member_id: member.id.clone(),
                submission_id: bad.id.clone(),
                score: bad.score,
            });
        }
        let total =
            total_score(&member.submissions).ok_or_else(|| StandingsError::ScoreOverflow {
                member_id: member.id.clone(),
            })?;
        Ok(Self {
            total,
            earliest: EarliestSubmission::of(&member.submissions),
        })
    }
}
