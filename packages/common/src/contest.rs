//! Contest snapshot entities.
//!
//! These mirror the payload the data-fetch layer hands over: camelCase JSON,
//! RFC 3339 timestamps, and a few optional fields that are resolved to
//! explicit defaults on the way in.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::Difficulty;
use crate::error::SnapshotError;

/// Lifecycle status of a contest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum ContestStatus {
    Active,
    Completed,
}

/// External judge a question is hosted on.
///
/// A question carries at most one link; both kinds at once is rejected when
/// the snapshot is parsed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProblemLink {
    LeetCode(String),
    Codeforces(String),
}

impl ProblemLink {
    pub fn url(&self) -> &str {
        match self {
            Self::LeetCode(url) | Self::Codeforces(url) => url,
        }
    }
}

/// A problem attached to a contest.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "QuestionWire", into = "QuestionWire")]
pub struct Question {
    pub id: String,
    pub link: Option<ProblemLink>,
    pub difficulty: Difficulty,
    pub points: i64,
    pub slug: String,
}

#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct QuestionWire {
    id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    leetcode_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    codeforces_url: Option<String>,
    difficulty: Difficulty,
    points: i64,
    slug: String,
}

impl TryFrom<QuestionWire> for Question {
    type Error = SnapshotError;

    fn try_from(wire: QuestionWire) -> Result<Self, Self::Error> {
        // Empty strings count as "no link".
        let leetcode = wire.leetcode_url.filter(|u| !u.is_empty());
        let codeforces = wire.codeforces_url.filter(|u| !u.is_empty());
        let link = match (leetcode, codeforces) {
            (Some(_), Some(_)) => {
                return Err(SnapshotError::ConflictingLinks {
                    question_id: wire.id,
                });
            }
            (Some(url), None) => Some(ProblemLink::LeetCode(url)),
            (None, Some(url)) => Some(ProblemLink::Codeforces(url)),
            (None, None) => None,
        };
        Ok(Self {
            id: wire.id,
            link,
            difficulty: wire.difficulty,
            points: wire.points,
            slug: wire.slug,
        })
    }
}

impl From<Question> for QuestionWire {
    fn from(q: Question) -> Self {
        let (leetcode_url, codeforces_url) = match q.link {
            Some(ProblemLink::LeetCode(url)) => (Some(url), None),
            Some(ProblemLink::Codeforces(url)) => (None, Some(url)),
            None => (None, None),
        };
        Self {
            id: q.id,
            leetcode_url,
            codeforces_url,
            difficulty: q.difficulty,
            points: q.points,
            slug: q.slug,
        }
    }
}

/// Entry of a contest's ordered question list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContestQuestion {
    pub question: Question,
}

/// The slice of a question a submission carries with it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRef {
    pub id: String,
    pub slug: String,
    pub points: i64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: String,
    pub score: i64,
    /// Judge status as reported upstream. Not interpreted by ranking.
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub question: QuestionRef,
}

/// Whether a member takes part in the ranked standings.
///
/// On the wire this is the optional `isAllowedToParticipate` flag: absent,
/// `null` and `true` all mean eligible, only an explicit `false` disqualifies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<bool>", into = "Option<bool>")]
pub enum Eligibility {
    #[default]
    Eligible,
    Disqualified,
}

impl Eligibility {
    pub fn is_eligible(&self) -> bool {
        matches!(self, Self::Eligible)
    }
}

impl From<Option<bool>> for Eligibility {
    fn from(flag: Option<bool>) -> Self {
        match flag {
            Some(false) => Self::Disqualified,
            Some(true) | None => Self::Eligible,
        }
    }
}

impl From<Eligibility> for Option<bool> {
    fn from(e: Eligibility) -> Self {
        Some(e.is_eligible())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub submissions: Vec<Submission>,
    #[serde(default, rename = "isAllowedToParticipate")]
    pub eligibility: Eligibility,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coordinator {
    pub username: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub id: String,
    pub name: String,
    /// Recorded total, supplied upstream. Not the sum of member totals.
    pub score: i64,
    #[serde(default)]
    pub coordinator: Option<Coordinator>,
    #[serde(default)]
    pub members: Vec<Member>,
}

/// A group's participation in one contest.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupOnContest {
    pub id: String,
    /// Contest-scoped score. This is what groups are ranked on.
    pub score: i64,
    /// `None` only when the upstream payload is broken; ranking rejects it.
    #[serde(default)]
    pub group: Option<Group>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contest {
    pub id: i64,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub status: ContestStatus,
    #[serde(default)]
    pub questions: Vec<ContestQuestion>,
    #[serde(default)]
    pub attempted_groups: Vec<GroupOnContest>,
}
