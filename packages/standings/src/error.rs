use thiserror::Error;

/// Precondition failures reported by the ranking engine.
///
/// The engine is total over well-formed snapshots; these variants mean the
/// caller handed over a broken contest graph and no standings were produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StandingsError {
    #[error("Contest {contest_id}: group entry '{entry_id}' has no group")]
    MissingGroup { contest_id: i64, entry_id: String },

    #[error("Submission '{submission_id}' of member '{member_id}' has negative score {score}")]
    NegativeScore {
        member_id: String,
        submission_id: String,
        score: i64,
    },

    #[error("Total score of member '{member_id}' overflows")]
    ScoreOverflow { member_id: String },

    #[error("Ranking worker panicked while ranking contest {contest_id}")]
    WorkerPanicked { contest_id: i64 },
}

pub type Result<T> = std::result::Result<T, StandingsError>;
