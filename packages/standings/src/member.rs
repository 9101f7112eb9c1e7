//! Member ordering within a group.
//!
//! Members are compared on a fixed list of keys, highest precedence first:
//!
//! 1. eligibility: disqualified members trail every eligible one;
//! 2. score: higher total first;
//! 3. earliest submission: earlier first, never-submitted last.
//!
//! Anything still tied keeps its input position (the sort is stable).

use std::cmp::Ordering;
use std::collections::HashSet;

use chrono::{DateTime, Utc};
use common::{ContestQuestion, Eligibility, Member};
use serde::Serialize;
use tracing::warn;

use crate::error::Result;
use crate::format;
use crate::score::MemberTally;

/// A member paired with their tally, ready to be ordered.
#[derive(Clone, Copy, Debug)]
pub struct Candidate<'a> {
    pub member: &'a Member,
    pub tally: MemberTally,
}

impl<'a> Candidate<'a> {
    pub fn new(member: &'a Member) -> Result<Self> {
        Ok(Self {
            member,
            tally: MemberTally::of(member)?,
        })
    }
}

/// One key of the member comparator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MemberOrderKey {
    Eligibility,
    Score,
    EarliestSubmission,
}

impl MemberOrderKey {
    /// Keys in the order they are consulted.
    pub const PRECEDENCE: [Self; 3] = [Self::Eligibility, Self::Score, Self::EarliestSubmission];

    /// Total order on a single key. `Less` means `a` ranks ahead of `b`.
    pub fn compare(self, a: &Candidate<'_>, b: &Candidate<'_>) -> Ordering {
        match self {
            Self::Eligibility => {
                let a_out = !a.member.eligibility.is_eligible();
                let b_out = !b.member.eligibility.is_eligible();
                a_out.cmp(&b_out)
            }
            Self::Score => b.tally.total.cmp(&a.tally.total),
            Self::EarliestSubmission => a.tally.earliest.cmp(&b.tally.earliest),
        }
    }
}

pub fn compare_members(a: &Candidate<'_>, b: &Candidate<'_>) -> Ordering {
    MemberOrderKey::PRECEDENCE
        .iter()
        .fold(Ordering::Equal, |ord, key| ord.then_with(|| key.compare(a, b)))
}

/// Order a group's members. The input slice is left untouched.
pub fn order_members(members: &[Member]) -> Result<Vec<Candidate<'_>>> {
    let mut candidates = members
        .iter()
        .map(Candidate::new)
        .collect::<Result<Vec<_>>>()?;
    candidates.sort_by(compare_members);
    Ok(candidates)
}

/// Position of a member in the displayed standings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum MemberRank {
    Ranked(u32),
    /// Disqualified members are listed but never numbered.
    Unranked,
}

impl MemberRank {
    pub fn number(&self) -> Option<u32> {
        match self {
            Self::Ranked(n) => Some(*n),
            Self::Unranked => None,
        }
    }
}

/// Dense ranks 1..K over the eligible members of an ordered list.
pub fn assign_member_ranks(ordered: &[Candidate<'_>]) -> Vec<MemberRank> {
    let mut next = 0;
    ordered
        .iter()
        .map(|c| {
            if c.member.eligibility.is_eligible() {
                next += 1;
                MemberRank::Ranked(next)
            } else {
                MemberRank::Unranked
            }
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, utoipa::ToSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CellState {
    Submitted {
        score: i64,
        submitted_at: DateTime<Utc>,
    },
    /// No submission for this question; rendered as zero.
    NoSubmission,
    /// Member is disqualified; the submission, if any, is hidden.
    Unavailable,
}

/// A member's result on one contest question.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, utoipa::ToSchema)]
pub struct QuestionCell {
    pub question_id: String,
    pub label: String,
    pub state: CellState,
}

/// Per-question cells for a member, one per contest question in list order.
pub fn question_cells(member: &Member, questions: &[ContestQuestion]) -> Vec<QuestionCell> {
    questions
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let question_id = &entry.question.id;
            let state = match member.eligibility {
                Eligibility::Disqualified => CellState::Unavailable,
                Eligibility::Eligible => member
                    .submissions
                    .iter()
                    .find(|s| &s.question.id == question_id)
                    .map_or(CellState::NoSubmission, |s| CellState::Submitted {
                        score: s.score,
                        submitted_at: s.created_at,
                    }),
            };
            QuestionCell {
                question_id: question_id.clone(),
                label: format::question_label(index),
                state,
            }
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, utoipa::ToSchema)]
pub struct MemberStanding {
    pub member_id: String,
    pub username: String,
    /// Serialized as `isAllowedToParticipate`'s resolved value.
    #[schema(value_type = bool)]
    pub eligibility: Eligibility,
    pub total_score: i64,
    pub total_label: String,
    pub rank: MemberRank,
    pub rank_label: String,
    pub earliest_submission: Option<DateTime<Utc>>,
    pub cells: Vec<QuestionCell>,
}

/// Rank a group's members and build their per-question rows.
pub fn rank_members(
    members: &[Member],
    questions: &[ContestQuestion],
) -> Result<Vec<MemberStanding>> {
    let ordered = order_members(members)?;
    let ranks = assign_member_ranks(&ordered);

    let known: HashSet<&str> = questions.iter().map(|q| q.question.id.as_str()).collect();

    let standings = ordered
        .iter()
        .zip(ranks)
        .map(|(candidate, rank)| {
            let member = candidate.member;
            let dangling = member
                .submissions
                .iter()
                .filter(|s| !known.contains(s.question.id.as_str()))
                .count();
            if dangling > 0 {
                warn!(
                    member_id = %member.id,
                    dangling,
                    "Submissions reference questions outside the contest"
                );
            }

            MemberStanding {
                member_id: member.id.clone(),
                username: member.username.clone(),
                eligibility: member.eligibility,
                total_score: candidate.tally.total,
                total_label: format::member_total_label(member.eligibility, candidate.tally.total),
                rank,
                rank_label: format::member_rank_label(rank),
                earliest_submission: candidate.tally.earliest.time(),
                cells: question_cells(member, questions),
            }
        })
        .collect();

    Ok(standings)
}
