//! Display labels for ranked standings.
//!
//! Nothing here decides an ordering; every function maps a position, rank or
//! enum onto the text and badge a renderer shows.

use common::{ContestStatus, Difficulty, Eligibility, ProblemLink};
use serde::Serialize;

use crate::member::MemberRank;

/// Badge styling for a group's contest rank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum RankBadge {
    Gold,
    Silver,
    Bronze,
    Standard,
}

impl RankBadge {
    pub fn for_rank(rank: u32) -> Self {
        match rank {
            1 => Self::Gold,
            2 => Self::Silver,
            3 => Self::Bronze,
            _ => Self::Standard,
        }
    }
}

/// Column label for the question at `index` in the contest's list.
///
/// `0 -> "A"`, `25 -> "Z"`, `26 -> "AA"`, `27 -> "AB"`, ...
pub fn question_label(index: usize) -> String {
    let mut n = index + 1;
    let mut label = Vec::new();
    while n > 0 {
        n -= 1;
        label.push(b'A' + (n % 26) as u8);
        n /= 26;
    }
    label.reverse();
    String::from_utf8_lossy(&label).into_owned()
}

/// Header shown above a question column, e.g. `"QA"`.
pub fn question_header(index: usize) -> String {
    format!("Q{}", question_label(index))
}

pub fn points_label(points: i64) -> String {
    format!("{points} pts")
}

/// English ordinal: 1st, 2nd, 3rd, 4th, 11th, 12th, 13th, 21st, ...
pub fn ordinal(rank: u32) -> String {
    let suffix = match (rank % 10, rank % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{rank}{suffix}")
}

pub fn difficulty_label(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Easy => "Easy",
        Difficulty::Medium => "Medium",
        Difficulty::Hard => "Hard",
    }
}

pub fn status_label(status: ContestStatus) -> &'static str {
    match status {
        ContestStatus::Active => "Active",
        ContestStatus::Completed => "Completed",
    }
}

pub fn problem_url(link: Option<&ProblemLink>) -> Option<String> {
    link.map(|l| l.url().to_string())
}

/// Rank cell text: the number, or `"-"` for unranked members.
pub fn member_rank_label(rank: MemberRank) -> String {
    match rank {
        MemberRank::Ranked(n) => n.to_string(),
        MemberRank::Unranked => "-".into(),
    }
}

/// Total cell text. Disqualified members show `"N/A"` instead of their sum.
pub fn member_total_label(eligibility: Eligibility, total: i64) -> String {
    match eligibility {
        Eligibility::Eligible => total.to_string(),
        Eligibility::Disqualified => "N/A".into(),
    }
}
