//! Minimax search for the computer's move.
//!
//! The search explores the full game tree by placing a hypothetical mark,
//! recursing, and clearing the cell again. The board handed to
//! [`Searcher::best_move`] is left exactly as it was found.
//!
//! Computer is the maximizing side and Human the minimizing side. Among
//! equally scored moves the lowest cell index wins, so results are
//! reproducible.

use crate::error::{EngineError, EngineErrorKind, EngineResult};
use crate::types::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Score of a position Computer has won.
pub const WIN_SCORE: i32 = 10;

/// Score of a drawn position.
pub const DRAW_SCORE: i32 = 0;

/// How terminal positions are scored.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "kebab-case")]
pub enum Scoring {
    /// A win found `d` plies below the root is worth `10 - d`, so a quicker
    /// win outranks a slower one.
    #[default]
    #[serde(alias = "depth-adjusted")]
    DepthAdjusted,
    /// Every win is worth exactly 10 regardless of depth.
    Flat,
}

/// How the game tree is walked.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "kebab-case")]
pub enum Strategy {
    /// Visit every continuation.
    #[default]
    Exhaustive,
    /// Skip branches that cannot change the result. Picks the same move as
    /// `Exhaustive`.
    #[serde(alias = "alpha-beta")]
    AlphaBeta,
}

/// Search settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Terminal scoring scale.
    pub scoring: Scoring,
    /// Tree walk.
    pub strategy: Strategy,
}

/// A candidate move paired with its score.
///
/// `index` is `None` when the evaluated position was already terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Cell index of the move, if one was made.
    pub index: Option<usize>,
    /// Minimax value from Computer's point of view.
    pub score: i32,
}

impl SearchResult {
    fn terminal(score: i32) -> Self {
        Self { index: None, score }
    }

    fn scored(index: usize, score: i32) -> Self {
        Self {
            index: Some(index),
            score,
        }
    }
}

/// True if `candidate` is strictly better than `best` for `side`.
fn improves(side: Player, candidate: i32, best: i32) -> bool {
    match side {
        Player::Computer => candidate > best,
        Player::Human => candidate < best,
    }
}

/// Minimax searcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Searcher {
    config: SearchConfig,
}

impl Searcher {
    /// Creates a searcher with the given settings.
    #[instrument]
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// Returns the search settings.
    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// Returns the optimal cell index for `side` to play.
    ///
    /// # Errors
    ///
    /// `NoLegalMove` if the board is full or someone already has a line.
    #[instrument(skip(self, board), fields(position = %board, ?side))]
    pub fn best_move(&self, board: &mut Board, side: Player) -> EngineResult<usize> {
        if board.status().is_over() {
            return Err(EngineError::new(EngineErrorKind::NoLegalMove));
        }
        self.evaluate(board, side)?
            .index
            .ok_or_else(|| EngineError::new(EngineErrorKind::NoLegalMove))
    }

    /// Evaluates the position with `side` to move.
    ///
    /// On a terminal board the result carries no index and the terminal score.
    #[instrument(skip(self, board), fields(position = %board, ?side))]
    pub fn evaluate(&self, board: &mut Board, side: Player) -> EngineResult<SearchResult> {
        let mut walk = Walk {
            board,
            scoring: self.config.scoring,
            nodes: 0,
        };
        let result = match self.config.strategy {
            Strategy::Exhaustive => walk.minimax(side, 0),
            Strategy::AlphaBeta => walk.alpha_beta_root(side),
        }?;
        debug!(
            nodes = walk.nodes,
            index = ?result.index,
            score = result.score,
            strategy = %self.config.strategy,
            "Search finished"
        );
        Ok(result)
    }
}

/// Returns the optimal cell index for `side` using the default settings.
pub fn best_move(board: &mut Board, side: Player) -> EngineResult<usize> {
    Searcher::default().best_move(board, side)
}

/// One search invocation's mutable state.
struct Walk<'a> {
    board: &'a mut Board,
    scoring: Scoring,
    nodes: u64,
}

impl Walk<'_> {
    /// Score of a terminal position reached `depth` plies below the root.
    ///
    /// Human line, then Computer line, then full board. A won and full board
    /// scores as a win.
    fn terminal_score(&self, depth: u32) -> Option<i32> {
        let discount = match self.scoring {
            Scoring::Flat => 0,
            // At most 9 plies, so the sign never flips.
            Scoring::DepthAdjusted => depth as i32,
        };
        if self.board.has_line(Player::Human) {
            Some(-WIN_SCORE + discount)
        } else if self.board.has_line(Player::Computer) {
            Some(WIN_SCORE - discount)
        } else if self.board.is_full() {
            Some(DRAW_SCORE)
        } else {
            None
        }
    }

    /// Plays `side` into `index`, runs `f`, and clears the cell again even if
    /// `f` failed.
    fn try_move<T>(
        &mut self,
        index: usize,
        side: Player,
        f: impl FnOnce(&mut Self) -> EngineResult<T>,
    ) -> EngineResult<T> {
        self.board.place(index, side)?;
        let result = f(self);
        self.board.clear(index)?;
        result
    }

    fn minimax(&mut self, side: Player, depth: u32) -> EngineResult<SearchResult> {
        self.nodes += 1;
        if let Some(score) = self.terminal_score(depth) {
            return Ok(SearchResult::terminal(score));
        }

        let mut moves = Vec::with_capacity(9);
        for index in self.board.empty_indices() {
            let reply = self.try_move(index, side, |walk| {
                walk.minimax(side.opponent(), depth + 1)
            })?;
            moves.push(SearchResult::scored(index, reply.score));
        }

        moves
            .into_iter()
            .reduce(|best, candidate| {
                if improves(side, candidate.score, best.score) {
                    candidate
                } else {
                    best
                }
            })
            .ok_or_else(|| EngineError::new(EngineErrorKind::NoLegalMove))
    }

    /// Root of the pruned search.
    ///
    /// Children are searched with a window bounded only by the best score so
    /// far, and a child replaces the best only on strict improvement. Values
    /// clipped by the window never beat the incumbent, so ties go to the
    /// lowest index exactly as in [`Walk::minimax`].
    fn alpha_beta_root(&mut self, side: Player) -> EngineResult<SearchResult> {
        self.nodes += 1;
        if let Some(score) = self.terminal_score(0) {
            return Ok(SearchResult::terminal(score));
        }

        let mut best: Option<SearchResult> = None;
        for index in self.board.empty_indices() {
            let (alpha, beta) = match (side, best) {
                (Player::Computer, Some(b)) => (b.score, i32::MAX),
                (Player::Human, Some(b)) => (i32::MIN, b.score),
                (_, None) => (i32::MIN, i32::MAX),
            };
            let score = self.try_move(index, side, |walk| {
                walk.alpha_beta(side.opponent(), 1, alpha, beta)
            })?;
            if best.is_none_or(|b| improves(side, score, b.score)) {
                best = Some(SearchResult::scored(index, score));
            }
        }
        best.ok_or_else(|| EngineError::new(EngineErrorKind::NoLegalMove))
    }

    fn alpha_beta(
        &mut self,
        side: Player,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
    ) -> EngineResult<i32> {
        self.nodes += 1;
        if let Some(score) = self.terminal_score(depth) {
            return Ok(score);
        }

        let mut best = match side {
            Player::Computer => i32::MIN,
            Player::Human => i32::MAX,
        };
        for index in self.board.empty_indices() {
            let score = self.try_move(index, side, |walk| {
                walk.alpha_beta(side.opponent(), depth + 1, alpha, beta)
            })?;
            match side {
                Player::Computer => {
                    best = best.max(score);
                    alpha = alpha.max(best);
                }
                Player::Human => {
                    best = best.min(score);
                    beta = beta.min(best);
                }
            }
            if alpha >= beta {
                break;
            }
        }
        Ok(best)
    }
}
