mod input;

pub use input::{parse_move_input, MoveInput};

use crate::config::GameConfig;
use crate::core::{Board, Move, PlayerId};
use crate::display::{render_board, TokenSymbols};
use crate::error::GameError;
use crate::logic::{check_winner, is_valid_move, place_token};
use crate::player::{prompt_player_name, Players};
use crate::ui::Console;
use tracing::{debug, info};

pub const WELCOME_MSG: &str = "Welcome to Grid Four!";
pub const INSTRUCTIONS_MSG: &str =
    "Take turns placing tokens by entering a row and column (0-based). Four in a row or column wins.";
pub const INVALID_MOVE_MSG: &str = "Invalid move. Try again.";
pub const INVALID_INPUT_MSG: &str = "Invalid input, try again.";
pub const DRAW_MSG: &str = "It's a draw!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(PlayerId),
    Draw,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    AwaitingMove,
    Won(PlayerId),
    Draw,
}

pub struct Game {
    board: Board,
    current_player: PlayerId,
    players: Players,
    symbols: TokenSymbols,
    state: TurnState,
}

impl Game {
    pub fn new(board: Board, players: Players) -> Self {
        Game {
            board,
            current_player: PlayerId::Player1,
            players,
            symbols: TokenSymbols::default(),
            state: TurnState::AwaitingMove,
        }
    }

    pub fn with_symbols(mut self, symbols: TokenSymbols) -> Self {
        self.symbols = symbols;
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    /// Run turns until someone wins or the board fills up.
    pub fn play(&mut self, console: &mut dyn Console) -> Result<GameOutcome, GameError> {
        loop {
            match self.state {
                TurnState::AwaitingMove => self.take_turn(console)?,
                TurnState::Won(id) => return Ok(GameOutcome::Winner(id)),
                TurnState::Draw => return Ok(GameOutcome::Draw),
            }
        }
    }

    /// One pass of the turn cycle. Rejected input leaves board and player unchanged.
    fn take_turn(&mut self, console: &mut dyn Console) -> Result<(), GameError> {
        self.render(console)?;
        let name = self.players.name(self.current_player);
        console.write_line(&format!("{}, enter your move (row col):", name))?;

        let line = console.read_line()?.ok_or(GameError::InputClosed)?;
        let (row, col) = match parse_move_input(&line) {
            MoveInput::Coordinates { row, col } => (row, col),
            MoveInput::Malformed => {
                debug!(player = ?self.current_player, %line, "malformed move input");
                console.alert(INVALID_INPUT_MSG)?;
                return Ok(());
            }
        };

        let pos = match self.board.position(row, col) {
            Some(pos) if is_valid_move(&self.board, row, col) => pos,
            _ => {
                debug!(player = ?self.current_player, row, col, "rejected move");
                console.alert(INVALID_MOVE_MSG)?;
                return Ok(());
            }
        };

        let mv = Move::new(pos, self.current_player);
        self.board = place_token(&self.board, &mv);
        debug!(%mv, "move applied");

        if check_winner(&self.board, pos, self.current_player) {
            let winner = self.players.get(self.current_player);
            self.state = TurnState::Won(winner.id);
            info!(winner = ?winner.id, name = %winner.name, "game won");
            self.render(console)?;
            console.alert(&format!("{} wins!", winner.name))?;
        } else if self.board.is_full() {
            self.state = TurnState::Draw;
            info!("board full, game drawn");
            self.render(console)?;
            console.alert(DRAW_MSG)?;
        } else {
            self.current_player = self.current_player.opponent();
        }
        Ok(())
    }

    fn render(&self, console: &mut dyn Console) -> Result<(), GameError> {
        for line in render_board(&self.board, &self.symbols) {
            console.write_line(&line)?;
        }
        Ok(())
    }
}

/// Full session: banner, both names, then the game itself.
pub fn run_session(
    console: &mut dyn Console,
    config: &GameConfig,
) -> Result<GameOutcome, GameError> {
    config.validate()?;
    console.write_line(WELCOME_MSG)?;
    console.write_line(INSTRUCTIONS_MSG)?;

    let one = prompt_player_name(console, PlayerId::Player1)?;
    let two = prompt_player_name(console, PlayerId::Player2)?;
    info!(player1 = %one, player2 = %two, "players seated");

    let board = config.board.build()?;
    let mut game = Game::new(board, Players::new(&one, &two)).with_symbols(config.symbols);
    game.play(console)
}
