pub mod config;
pub mod contest;
pub mod difficulty;
pub mod error;
pub mod user;

pub use contest::{
    Contest, ContestQuestion, ContestStatus, Coordinator, Eligibility, Group, GroupOnContest,
    Member, ProblemLink, Question, QuestionRef, Submission,
};
pub use difficulty::Difficulty;
pub use error::SnapshotError;
pub use user::PlatformUser;
