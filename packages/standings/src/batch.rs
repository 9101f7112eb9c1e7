use common::Contest;
use crossbeam::thread;
use tracing::{info, warn};

use crate::contest::{ContestStandings, rank_contest};
use crate::error::{Result, StandingsError};

/// Rank several contests on up to `threads` scoped worker threads.
///
/// Results come back in input order. Each contest succeeds or fails on its
/// own; a broken snapshot does not affect the others.
pub fn rank_contests(contests: &[Contest], threads: usize) -> Vec<Result<ContestStandings>> {
    if contests.is_empty() {
        return Vec::new();
    }

    let threads = threads.clamp(1, contests.len());
    let chunk_size = contests.len().div_ceil(threads);

    let outcome = thread::scope(|scope| {
        let handles: Vec<_> = contests
            .chunks(chunk_size)
            .map(|chunk| {
                let handle =
                    scope.spawn(move |_| chunk.iter().map(rank_contest).collect::<Vec<_>>());
                (chunk, handle)
            })
            .collect();

        handles
            .into_iter()
            .flat_map(|(chunk, handle)| {
                handle.join().unwrap_or_else(|_| {
                    warn!(contests = chunk.len(), "Ranking worker panicked");
                    panicked(chunk)
                })
            })
            .collect::<Vec<_>>()
    });

    let results = outcome.unwrap_or_else(|_| panicked(contests));

    let failed = results.iter().filter(|r| r.is_err()).count();
    info!(
        contests = contests.len(),
        threads,
        failed,
        "Ranked contest batch"
    );
    results
}

fn panicked(contests: &[Contest]) -> Vec<Result<ContestStandings>> {
    contests
        .iter()
        .map(|c| Err(StandingsError::WorkerPanicked { contest_id: c.id }))
        .collect()
}
