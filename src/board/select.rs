//! Top-level move selection.
//!
//! Orchestrates the tactical short-circuits (win in one, forced block,
//! threat block) before dispatching to the heuristic or search paths per
//! difficulty. Always yields a move: internal failures are recovered with
//! the board-center fallback and recorded on the log.

use rand::seq::SliceRandom;

use super::frontier::frontier;
use super::search::{search_best_move, HARD_DEPTH};
use super::{eval, rules, threat};
use super::{Board, Difficulty, Mark, Pos, ScoredMove, SelectError};

/// Easy mode only looks at this many frontier cells, in generator order
const EASY_CANDIDATES: usize = 3;

/// Select a move for `bot_mark` on `board` at the requested difficulty.
///
/// `last_move` is the opponent's most recent placement, when known; it is
/// only used as an ordering hint by the hard search. The returned cell is
/// empty on the supplied board whenever any playable cell exists; under
/// internal failure the selection degrades to the board center rather
/// than propagating an error.
#[must_use]
pub fn select_move(
    board: &Board,
    bot_mark: Mark,
    difficulty: Difficulty,
    last_move: Option<Pos>,
) -> Pos {
    log::trace!("selecting {difficulty} move for {bot_mark} on\n{board}");
    let fallback = board.center();

    // Final gate: whatever was produced must land on an empty cell of the
    // original board.
    let outcome = try_select(board, bot_mark, difficulty, last_move).and_then(|pos| {
        if board.contains(pos) && board.get(pos).is_none() {
            Ok(pos)
        } else {
            Err(SelectError::Unplayable { pos })
        }
    });

    match outcome {
        Ok(pos) => pos,
        Err(err) => {
            log::warn!("move selection failed ({err}); falling back to {fallback}");
            fallback
        }
    }
}

fn try_select(
    board: &Board,
    bot_mark: Mark,
    difficulty: Difficulty,
    last_move: Option<Pos>,
) -> Result<Pos, SelectError> {
    if board.size() == 0 {
        return Err(SelectError::EmptyBoard);
    }
    if board.is_full() {
        return Err(SelectError::NoCandidates);
    }
    let opponent = bot_mark.opponent();

    // Private copy: all hypothetical placements below mutate the scratch
    // board only, never the caller's.
    let mut scratch = board.clone();

    if let Some(pos) = find_winning_move(&mut scratch, bot_mark) {
        return Ok(pos);
    }
    if let Some(pos) = find_winning_move(&mut scratch, opponent) {
        // Forced block: the opponent completes five there next turn
        return Ok(pos);
    }
    if let Some(block) = threat::dangerous_blocks(&scratch, opponent).first() {
        return Ok(block.pos);
    }

    match difficulty {
        Difficulty::Easy => pick_easy(&mut scratch, bot_mark),
        Difficulty::Medium => pick_heuristic(&mut scratch, bot_mark),
        Difficulty::Hard => {
            search_best_move(&mut scratch, bot_mark, HARD_DEPTH, last_move, rules::is_winning_line)
                .ok_or(SelectError::NoCandidates)
        }
    }
}

/// A frontier placement that completes five-in-a-row for `mark`, if any.
fn find_winning_move(board: &mut Board, mark: Mark) -> Option<Pos> {
    frontier(board).into_iter().find(|&pos| {
        board.get(pos).is_none()
            && board.with_stone(pos, mark, |b| rules::is_winning_line(b, pos))
    })
}

/// Easy: score only the first few frontier cells (the unspecified generator
/// order is the intended weakness) and pick among the best at random.
fn pick_easy(board: &mut Board, bot_mark: Mark) -> Result<Pos, SelectError> {
    let mut candidates = frontier(board);
    candidates.truncate(EASY_CANDIDATES);
    pick_best_random(board, bot_mark, candidates)
}

/// Medium: score the full frontier and pick among the best at random.
fn pick_heuristic(board: &mut Board, bot_mark: Mark) -> Result<Pos, SelectError> {
    let candidates = frontier(board);
    pick_best_random(board, bot_mark, candidates)
}

/// Composite-score the candidates and choose uniformly at random among
/// the cells tied for the maximum.
fn pick_best_random(
    board: &mut Board,
    bot_mark: Mark,
    candidates: Vec<Pos>,
) -> Result<Pos, SelectError> {
    let scored: Vec<ScoredMove> = candidates
        .into_iter()
        .map(|pos| ScoredMove {
            pos,
            score: eval::composite_score(board, pos, bot_mark),
        })
        .collect();
    let best = scored
        .iter()
        .map(|m| m.score)
        .max()
        .ok_or(SelectError::NoCandidates)?;
    let top: Vec<Pos> = scored
        .iter()
        .filter(|m| m.score == best)
        .map(|m| m.pos)
        .collect();
    top.choose(&mut rand::thread_rng())
        .copied()
        .ok_or(SelectError::NoCandidates)
}
