//! Contest standings engine.
//!
//! Turns a materialized contest snapshot into ranked groups and ranked
//! members. Every entry point is a pure function over borrowed input; the
//! snapshot is never modified and nothing is cached between calls.

pub mod batch;
pub mod contest;
pub mod error;
pub mod format;
pub mod group;
pub mod member;
pub mod score;
pub mod summary;

pub use batch::rank_contests;
pub use contest::{ContestStandings, GroupStanding, QuestionColumn, rank_contest};
pub use error::StandingsError;
pub use member::{CellState, MemberRank, MemberStanding, QuestionCell};
pub use summary::{PlatformSummary, summarize};
