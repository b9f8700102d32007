//! Depth-limited negamax search with alpha-beta pruning.
//!
//! Features:
//! - Negamax with alpha-beta windows, sign-flipped per ply
//! - Candidate ordering by composite heuristic score
//! - Branching caps at depth (12 wide / 8 narrow)
//! - Zobrist-keyed memoization scoped to one computation
//! - Win-oracle terminal detection on the last applied move

mod constants;

use std::sync::Arc;

use crate::tt::TranspositionTable;
use crate::zobrist::ZobristKeys;

use super::eval;
use super::frontier::frontier;
use super::rules::WinOracle;
use super::{Board, Mark, Pos, ScoredMove};

pub(crate) use constants::{HARD_DEPTH, WIN_SCORE};
use constants::{INFINITY, NARROW_BRANCH_LIMIT, SEARCH_TT_MB, WIDE_BRANCH_LIMIT, WIDE_DEPTH};

/// Search context for a single move computation.
///
/// Owns exclusive mutation rights to the board copy for the duration of
/// the search; every placement is lifted before the owning frame returns,
/// so the board is bit-identical once the search completes.
struct Searcher<'a> {
    board: &'a mut Board,
    tt: &'a mut TranspositionTable,
    keys: Arc<ZobristKeys>,
    /// Incrementally maintained board fingerprint
    hash: u64,
    /// The engine's own mark, fixed for leaf evaluation
    bot_mark: Mark,
    oracle: WinOracle,
    nodes: u64,
}

impl<'a> Searcher<'a> {
    fn new(
        board: &'a mut Board,
        tt: &'a mut TranspositionTable,
        bot_mark: Mark,
        oracle: WinOracle,
    ) -> Self {
        let keys = ZobristKeys::for_size(board.size());
        let hash = keys.fingerprint(board);
        Searcher {
            board,
            tt,
            keys,
            hash,
            bot_mark,
            oracle,
            nodes: 0,
        }
    }

    #[inline]
    fn place(&mut self, pos: Pos, mark: Mark) {
        self.board.place(pos, mark);
        self.hash ^= self.keys.key(pos, mark);
    }

    #[inline]
    fn lift(&mut self, pos: Pos, mark: Mark) {
        self.board.lift(pos);
        self.hash ^= self.keys.key(pos, mark);
    }

    /// Frontier candidates for `to_move`, ordered by composite score
    /// descending with explicit tie-breaks (proximity to the last move,
    /// then coordinate) so the search is deterministic.
    fn ordered_candidates(&mut self, to_move: Mark, last_move: Pos) -> Vec<ScoredMove> {
        let mut scored: Vec<ScoredMove> = frontier(self.board)
            .into_iter()
            .map(|pos| ScoredMove {
                pos,
                score: eval::composite_score(self.board, pos, to_move),
            })
            .collect();
        scored.sort_by(|a, b| {
            b.score
                .cmp(&a.score)
                .then(a.pos.distance(last_move).cmp(&b.pos.distance(last_move)))
                .then(a.pos.cmp(&b.pos))
        });
        scored
    }

    /// Negamax over the remaining depth. The returned value is good for
    /// `to_move`; `sign` flips each ply so the win score keeps its meaning
    /// relative to whoever just moved.
    fn negamax(
        &mut self,
        depth: u32,
        mut alpha: i32,
        beta: i32,
        to_move: Mark,
        sign: i32,
        last_move: Pos,
    ) -> i32 {
        self.nodes += 1;

        // Terminal checks, in order: a win by the previous mover is a loss
        // for the side to move, a full board is a draw, depth exhaustion
        // falls back to the static evaluation from the bot's perspective.
        if (self.oracle)(self.board, last_move) {
            return sign * -WIN_SCORE;
        }
        if self.board.is_full() {
            return 0;
        }
        if depth == 0 {
            return eval::static_eval(self.board, self.bot_mark)
                - eval::static_eval(self.board, self.bot_mark.opponent());
        }

        // A memoized value searched at least this deep can bound the
        // window. It is a pruning shortcut, not a fresh result, so the
        // clamped bound is returned without being re-stored.
        if let Some(entry) = self.tt.probe(self.hash) {
            if entry.depth >= depth {
                if entry.value <= alpha {
                    return alpha;
                }
                if entry.value >= beta {
                    return beta;
                }
            }
        }

        let mut candidates = self.ordered_candidates(to_move, last_move);
        if depth > WIDE_DEPTH {
            candidates.truncate(WIDE_BRANCH_LIMIT);
        }

        let mut best = -INFINITY;
        for candidate in candidates {
            self.place(candidate.pos, to_move);
            let value = -self.negamax(
                depth - 1,
                -beta,
                -alpha,
                to_move.opponent(),
                -sign,
                candidate.pos,
            );
            self.lift(candidate.pos, to_move);

            best = best.max(value);
            alpha = alpha.max(value);
            if alpha >= beta {
                break;
            }
        }

        self.tt.store(self.hash, depth, best);
        best
    }
}

/// Search every capped root candidate to the configured depth and return
/// the one with the best negamax value, stopping early once a forced win
/// is located. `last_move` (the opponent's last placement, when known)
/// only breaks ordering ties.
pub(crate) fn search_best_move(
    board: &mut Board,
    bot_mark: Mark,
    depth: u32,
    last_move: Option<Pos>,
    oracle: WinOracle,
) -> Option<Pos> {
    search_with_value(board, bot_mark, depth, last_move, oracle).map(|(pos, _)| pos)
}

/// [`search_best_move`] plus the winning candidate's evaluation value.
pub(crate) fn search_with_value(
    board: &mut Board,
    bot_mark: Mark,
    depth: u32,
    last_move: Option<Pos>,
    oracle: WinOracle,
) -> Option<(Pos, i32)> {
    if board.is_full() {
        return None;
    }
    // At least one ply: the root candidate itself counts as the first
    let depth = depth.max(1);
    let hint = last_move.unwrap_or_else(|| board.center());
    let mut tt = TranspositionTable::new(SEARCH_TT_MB);
    let mut searcher = Searcher::new(board, &mut tt, bot_mark, oracle);

    let mut candidates = searcher.ordered_candidates(bot_mark, hint);
    let cap = if depth >= 4 {
        WIDE_BRANCH_LIMIT
    } else {
        NARROW_BRANCH_LIMIT
    };
    candidates.truncate(cap);

    let mut best: Option<Pos> = None;
    let mut best_value = -INFINITY;
    for candidate in &candidates {
        searcher.place(candidate.pos, bot_mark);
        let value = searcher.negamax(
            depth - 1,
            -INFINITY,
            INFINITY,
            bot_mark.opponent(),
            -1,
            candidate.pos,
        );
        searcher.lift(candidate.pos, bot_mark);

        if best.is_none() || value > best_value {
            best_value = value;
            best = Some(candidate.pos);
        }
        if best_value >= WIN_SCORE {
            break;
        }
    }

    log::debug!(
        "search depth {depth}: {} candidates, {} nodes, best {:?} value {best_value}",
        candidates.len(),
        searcher.nodes,
        best,
    );
    best.map(|pos| (pos, best_value))
}
