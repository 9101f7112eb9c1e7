use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use common::{Contest, ContestQuestion, ContestStatus, Difficulty, Group, GroupOnContest};
use serde::Serialize;
use tracing::{debug, info};

use crate::error::{Result, StandingsError};
use crate::format::{self, RankBadge};
use crate::group::{Participation, RecordedScore};
use crate::member::{MemberStanding, rank_members};

/// A question as it heads a standings column.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, utoipa::ToSchema)]
pub struct QuestionColumn {
    pub question_id: String,
    /// Position letter: A, B, C, ...
    pub label: String,
    /// Column heading, e.g. "QA".
    pub header: String,
    pub slug: String,
    pub url: Option<String>,
    pub difficulty: Difficulty,
    pub difficulty_label: String,
    pub points: i64,
    pub points_label: String,
}

pub fn question_columns(questions: &[ContestQuestion]) -> Vec<QuestionColumn> {
    questions
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let q = &entry.question;
            QuestionColumn {
                question_id: q.id.clone(),
                label: format::question_label(index),
                header: format::question_header(index),
                slug: q.slug.clone(),
                url: format::problem_url(q.link.as_ref()),
                difficulty: q.difficulty,
                difficulty_label: format::difficulty_label(q.difficulty).into(),
                points: q.points,
                points_label: format::points_label(q.points),
            }
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, utoipa::ToSchema)]
pub struct GroupStanding {
    /// Id of the group-on-contest entry.
    pub entry_id: String,
    pub rank: u32,
    pub ordinal: String,
    pub badge: RankBadge,
    /// Contest-scoped score the group was ranked on.
    pub score: i64,
    pub group_id: String,
    pub name: String,
    pub coordinator: Option<String>,
    /// The group's own recorded total.
    pub group_score: i64,
    pub participation: Participation,
    pub members: Vec<MemberStanding>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, utoipa::ToSchema)]
pub struct ContestStandings {
    pub contest_id: i64,
    pub status: ContestStatus,
    pub status_label: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub questions: Vec<QuestionColumn>,
    pub groups: Vec<GroupStanding>,
}

/// Higher contest score first. There is no secondary key; callers rely on a
/// stable sort to keep tied entries in input order.
pub fn compare_entries(a: &GroupOnContest, b: &GroupOnContest) -> Ordering {
    b.recorded_score().cmp(&a.recorded_score())
}

/// Order group entries by descending contest score. Ties keep input order.
pub fn order_groups(entries: &[GroupOnContest]) -> Vec<&GroupOnContest> {
    let mut ordered: Vec<&GroupOnContest> = entries.iter().collect();
    ordered.sort_by(|a, b| compare_entries(a, b));
    ordered
}

/// Resolve every entry's group, failing on the first entry without one.
fn resolve_groups<'a>(
    contest_id: i64,
    entries: Vec<&'a GroupOnContest>,
) -> Result<Vec<(&'a GroupOnContest, &'a Group)>> {
    entries
        .into_iter()
        .map(|entry| {
            entry
                .group
                .as_ref()
                .map(|group| (entry, group))
                .ok_or_else(|| StandingsError::MissingGroup {
                    contest_id,
                    entry_id: entry.id.clone(),
                })
        })
        .collect()
}

/// Compute the full standings for one contest snapshot.
pub fn rank_contest(contest: &Contest) -> Result<ContestStandings> {
    let entries = resolve_groups(contest.id, order_groups(&contest.attempted_groups))?;

    let mut groups = Vec::with_capacity(entries.len());
    for (position, (entry, group)) in entries.into_iter().enumerate() {
        let rank = position as u32 + 1;
        let members = rank_members(&group.members, &contest.questions)?;
        debug!(
            contest_id = contest.id,
            group_id = %group.id,
            rank,
            score = entry.score,
            members = members.len(),
            "Ranked group"
        );
        groups.push(GroupStanding {
            entry_id: entry.id.clone(),
            rank,
            ordinal: format::ordinal(rank),
            badge: RankBadge::for_rank(rank),
            score: entry.recorded_score(),
            group_id: group.id.clone(),
            name: group.name.clone(),
            coordinator: group.coordinator.as_ref().map(|c| c.username.clone()),
            group_score: group.recorded_score(),
            participation: Participation::of(group),
            members,
        });
    }

    info!(
        contest_id = contest.id,
        groups = groups.len(),
        questions = contest.questions.len(),
        "Ranked contest"
    );

    Ok(ContestStandings {
        contest_id: contest.id,
        status: contest.status,
        status_label: format::status_label(contest.status).into(),
        start_time: contest.start_time,
        end_time: contest.end_time,
        questions: question_columns(&contest.questions),
        groups,
    })
}
