use super::state::Position;
use super::types::Move;

impl Position {
    /// Count leaf nodes of the legal move tree to `depth` plies.
    pub fn perft(&mut self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.legal_moves();
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for mv in moves {
            self.apply_move(mv);
            nodes += self.perft(depth - 1);
            self.revert_move();
        }

        nodes
    }

    /// Per-root-move breakdown of [`Position::perft`], in generation order.
    pub fn divide(&mut self, depth: usize) -> Vec<(Move, u64)> {
        if depth == 0 {
            return Vec::new();
        }

        let moves = self.legal_moves();
        let mut counts = Vec::with_capacity(moves.len());
        for mv in moves {
            self.apply_move(mv);
            counts.push((mv, self.perft(depth - 1)));
            self.revert_move();
        }
        log_debug!("divide({}) over {} root moves", depth, counts.len());
        counts
    }
}
