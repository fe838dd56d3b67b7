//! Medium and hard tiers: fixed-depth alpha-beta over material.

use log::debug;

use crate::engines::engine_trait::Engine;
use crate::game_state::chess_types::{Color, Move};
use crate::game_state::game_state::GameState;
use crate::search::board_scoring::{BoardScorer, MaterialScorer};
use crate::search::minimax::{minimax_search, SearchConfig};

pub struct MinimaxEngine<S: BoardScorer = MaterialScorer> {
    scorer: S,
    config: SearchConfig,
}

impl MinimaxEngine<MaterialScorer> {
    pub fn new(max_depth: u8) -> Self {
        Self::with_scorer(MaterialScorer, SearchConfig { max_depth })
    }
}

impl<S: BoardScorer> MinimaxEngine<S> {
    pub fn with_scorer(scorer: S, config: SearchConfig) -> Self {
        Self { scorer, config }
    }

    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// Search without going through the trait's `&mut self`.
    pub fn search(&self, game_state: &GameState, color: Color) -> Option<Move> {
        let result = minimax_search(&game_state.board_state(), color, &self.scorer, self.config);
        debug!(
            "minimax depth {} for {color}: {} nodes, best {:?} score {}",
            self.config.max_depth,
            result.nodes,
            result.best_move.map(|mv| format!("{}{}", mv.from, mv.to)),
            result.best_score
        );
        result.best_move
    }
}

impl<S: BoardScorer> Engine for MinimaxEngine<S> {
    fn name(&self) -> &str {
        "minimax"
    }

    fn choose_move(&mut self, game_state: &GameState, color: Color) -> Option<Move> {
        self.search(game_state, color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{GameStatus, PieceKind};
    use crate::utils::fen_parser::parse_fen;

    #[test]
    fn engine_takes_hanging_rook() {
        let game = parse_fen("4k3/8/8/8/8/5r2/8/4K2Q w - - 0 1").expect("valid FEN");
        let mut engine = MinimaxEngine::new(2);
        let mv = engine.choose_move(&game, Color::White).expect("a move exists");
        assert_eq!(mv.captured_piece.map(|p| p.kind), Some(PieceKind::Rook));
    }

    #[test]
    fn stalemated_side_yields_nothing() {
        let game = parse_fen("k7/P7/1K6/8/8/8/8/8 b - - 0 1").expect("valid FEN");
        assert_eq!(game.status, GameStatus::Stalemate);
        assert_eq!(MinimaxEngine::new(2).search(&game, Color::Black), None);
    }
}
