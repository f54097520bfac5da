//! A single two-player game: one position plus the log of moves played.
//!
//! `Game` enforces turn order and stops accepting moves once the game has
//! ended. `SharedGame` puts a game behind its own lock so transport code can
//! hand it to several threads.

use std::fmt;
use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};

use crate::board::{
    Color, FenError, GameStatus, Move, MoveList, MoveParseError, MoveRequest, Position,
};

/// Error type for requests rejected at the game level
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The requesting side is not the side to move
    NotYourTurn { to_move: Color, requested_by: Color },
    /// The game already ended in checkmate or stalemate
    GameOver { status: GameStatus },
    /// The request itself could not be played
    Move(MoveParseError),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::NotYourTurn {
                to_move,
                requested_by,
            } => write!(f, "It is {to_move}'s turn, not {requested_by}'s"),
            GameError::GameOver { status } => write!(f, "Game is over: {status:?}"),
            GameError::Move(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Move(err) => Some(err),
            _ => None,
        }
    }
}

impl From<MoveParseError> for GameError {
    fn from(err: MoveParseError) -> Self {
        GameError::Move(err)
    }
}

#[derive(Clone, Debug)]
pub struct Game {
    position: Position,
    moves: Vec<Move>,
    /// Status of `position`, refreshed whenever it changes
    status: GameStatus,
}

impl Default for Game {
    fn default() -> Self {
        Game::with_position(Position::new())
    }
}

impl Game {
    /// A new game from the standard starting position.
    #[must_use]
    pub fn new() -> Self {
        Game::default()
    }

    fn with_position(mut position: Position) -> Self {
        let status = position.status();
        Game {
            position,
            moves: Vec::new(),
            status,
        }
    }

    /// A game starting from an arbitrary position string.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        Ok(Game::with_position(Position::try_from_fen(fen)?))
    }

    /// Replace the position and discard the move log.
    ///
    /// On error the game is left as it was.
    pub fn load(&mut self, fen: &str) -> Result<(), FenError> {
        self.position.load_from_position_string(fen)?;
        self.moves.clear();
        self.status = self.position.status();
        Ok(())
    }

    #[must_use]
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Moves played so far, oldest first
    #[must_use]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.position.side_to_move()
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn legal_moves(&mut self) -> MoveList {
        self.position.legal_moves()
    }

    #[must_use]
    pub fn board_text(&self) -> String {
        self.position.board_text()
    }

    /// Play a move for whichever side is to move.
    pub fn play(&mut self, request: MoveRequest) -> Result<Move, GameError> {
        let status = self.status;
        if status.is_over() {
            log_warn!("rejected {}: game already over ({:?})", request, status);
            return Err(GameError::GameOver { status });
        }

        let mv = self.position.play(request)?;
        self.moves.push(mv);
        self.status = self.position.status();

        match self.status {
            GameStatus::Checkmate { winner } => log_info!("checkmate after {}, {} wins", mv, winner),
            GameStatus::Stalemate => log_info!("stalemate after {}", mv),
            _ => {}
        }
        Ok(mv)
    }

    /// Play a move on behalf of `color`, rejecting it when `color` is not to move.
    pub fn play_as(&mut self, color: Color, request: MoveRequest) -> Result<Move, GameError> {
        let to_move = self.side_to_move();
        if color != to_move {
            log_warn!("rejected {} from {}: {} to move", request, color, to_move);
            return Err(GameError::NotYourTurn {
                to_move,
                requested_by: color,
            });
        }
        self.play(request)
    }

    /// Take back the last played move, returning it.
    pub fn undo(&mut self) -> Option<Move> {
        let mv = self.moves.pop()?;
        if self.position.try_revert_move().is_err() {
            self.moves.push(mv);
            return None;
        }
        self.status = self.position.status();
        log_debug!("undid {}", mv);
        Some(mv)
    }
}

/// A [`Game`] behind its own lock, cheap to clone and share across threads.
#[derive(Clone, Debug, Default)]
pub struct SharedGame(Arc<Mutex<Game>>);

impl SharedGame {
    #[must_use]
    pub fn new(game: Game) -> Self {
        SharedGame(Arc::new(Mutex::new(game)))
    }

    /// Lock the game for exclusive use.
    pub fn lock(&self) -> MutexGuard<'_, Game> {
        self.0.lock()
    }

    /// Run `f` with the game locked.
    pub fn with<R>(&self, f: impl FnOnce(&mut Game) -> R) -> R {
        f(&mut self.0.lock())
    }
}

impl From<Game> for SharedGame {
    fn from(game: Game) -> Self {
        SharedGame::new(game)
    }
}
