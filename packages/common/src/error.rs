use thiserror::Error;

/// Errors raised while reading a contest snapshot off the wire.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnapshotError {
    #[error("Question {question_id} links to both LeetCode and Codeforces")]
    ConflictingLinks { question_id: String },
}
