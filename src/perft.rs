use crate::board::GameState;

impl GameState {
    /// Count the move sequences of length `depth` from this position.
    #[must_use]
    pub fn perft(&self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.all_legal_moves();
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for mv in moves {
            let mut next = self.clone();
            if next.play(mv).is_ok() {
                nodes += next.perft(depth - 1);
            }
        }

        nodes
    }
}
