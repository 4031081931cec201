use std::io::{self, Write};

use thiserror::Error;

use crate::board::{Board, BoardError};
use crate::command::{Command, CommandError, Commands};
use crate::game::Game;

/// Error type for a game session. Per-command rejections are not errors;
/// these cover malformed input and the output sink only.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("invalid board: {0}")]
    Board(#[from] BoardError),
    #[error("invalid command stream: {0}")]
    Command(#[from] CommandError),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Split a script into the board section (everything before the first blank
/// line) and the command section (everything after it). A line holding only
/// a carriage return counts as blank, so CRLF scripts split the same way.
fn split_script(script: &str) -> (&str, &str) {
    let mut offset = 0;
    for line in script.split_inclusive('\n') {
        if line.trim_end_matches(['\r', '\n']).is_empty() {
            return (&script[..offset], &script[offset + line.len()..]);
        }
        offset += line.len();
    }
    (script, "")
}

/// Run one game session: load the board, render it once, then execute
/// commands one at a time, rendering the board after every command whether
/// it succeeded or was rejected. Rendering stops at the stream terminator.
pub fn run(script: &str, out: &mut impl Write) -> Result<(), SessionError> {
    let (board_text, command_text) = split_script(script);
    let board = Board::from_text(board_text)?;
    let mut game = Game::new(board)?;

    write!(out, "{}", game.board())?;

    for command in Commands::new(command_text) {
        match command? {
            Command::Push(push) => {
                game.push(push);
            }
            Command::Undo => {
                game.undo();
            }
        }
        write!(out, "{}", game.board())?;
    }
    Ok(())
}
