use std::fmt;
use std::str::Chars;

use thiserror::Error;

use crate::square::ChestId;

/// Error type for command stream parsing.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("unrecognized command '{0}'")]
    UnknownCommand(char),
    #[error("push command '{0}' is missing its direction")]
    MissingDirection(char),
    #[error("unrecognized direction '{direction}' for push command '{chest}'")]
    UnknownDirection { chest: char, direction: char },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

/// Neighbor enumeration order used by the reachability search.
pub const ALL_DIRECTIONS: [Direction; 4] = [
    Direction::Up,
    Direction::Right,
    Direction::Down,
    Direction::Left,
];

impl Direction {
    /// (row, col) deltas: rows grow downwards, columns to the right.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
        }
    }

    /// The command stream encodes directions as numpad digits.
    pub fn from_symbol(ch: char) -> Option<Direction> {
        match ch {
            '8' => Some(Direction::Up),
            '6' => Some(Direction::Right),
            '2' => Some(Direction::Down),
            '4' => Some(Direction::Left),
            _ => None,
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Up => write!(f, "up"),
            Direction::Right => write!(f, "right"),
            Direction::Down => write!(f, "down"),
            Direction::Left => write!(f, "left"),
        }
    }
}

/// A request to push one chest one square in a direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PushCommand {
    pub chest: ChestId,
    pub direction: Direction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Push(PushCommand),
    Undo,
}

const UNDO_SYMBOL: char = '0';
const END_SYMBOL: char = '.';

/// Iterator over a textual command stream.
///
/// A push is a chest letter immediately followed by a direction digit; `0`
/// is undo. Whitespace between commands is skipped. The stream ends at `.`
/// or end of input; anything else is a parse error.
pub struct Commands<'a> {
    chars: Chars<'a>,
    done: bool,
}

impl<'a> Commands<'a> {
    pub fn new(text: &'a str) -> Commands<'a> {
        Commands {
            chars: text.chars(),
            done: false,
        }
    }
}

impl Iterator for Commands<'_> {
    type Item = Result<Command, CommandError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let ch = loop {
            match self.chars.next() {
                Some(ch) if ch.is_whitespace() => continue,
                Some(ch) => break ch,
                None => {
                    self.done = true;
                    return None;
                }
            }
        };
        if ch == END_SYMBOL {
            self.done = true;
            return None;
        }
        if ch == UNDO_SYMBOL {
            return Some(Ok(Command::Undo));
        }
        let Some(chest) = ChestId::from_symbol(ch) else {
            self.done = true;
            return Some(Err(CommandError::UnknownCommand(ch)));
        };
        let Some(dir_ch) = self.chars.next() else {
            self.done = true;
            return Some(Err(CommandError::MissingDirection(ch)));
        };
        let Some(direction) = Direction::from_symbol(dir_ch) else {
            self.done = true;
            return Some(Err(CommandError::UnknownDirection {
                chest: ch,
                direction: dir_ch,
            }));
        };
        Some(Ok(Command::Push(PushCommand { chest, direction })))
    }
}
