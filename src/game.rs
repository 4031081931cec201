use std::collections::VecDeque;

use crate::board::{Board, BoardError, Position};
use crate::command::{ALL_DIRECTIONS, PushCommand};
use crate::square::{ChestId, NUM_CHESTS, Square};

/// History record: the chest that was pushed and where the player stood
/// immediately before the push. Enough to reverse the push exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Move {
    chest: ChestId,
    prev_player: Position,
}

/// One game in progress: the board, the player's position, the position of
/// every chest present on the board, and the push history for undo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    player: Position,
    chests: [Option<Position>; NUM_CHESTS],
    history: Vec<Move>,
}

impl Game {
    /// Build a game from a parsed board. Requires exactly one player square
    /// and at most one square per chest letter.
    pub fn new(board: Board) -> Result<Game, BoardError> {
        let mut player = None;
        let mut chests = [None; NUM_CHESTS];

        for (pos, square) in board.cells() {
            if square.is_player() {
                if player.is_some() {
                    return Err(BoardError::MultiplePlayers);
                }
                player = Some(pos);
            } else if let Some(id) = square.chest_id() {
                if chests[id.index()].is_some() {
                    return Err(BoardError::DuplicateChest((b'a' + id.0) as char));
                }
                chests[id.index()] = Some(pos);
            }
        }

        let player = player.ok_or(BoardError::NoPlayer)?;
        Ok(Game {
            board,
            player,
            chests,
            history: Vec::new(),
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn player_position(&self) -> Position {
        self.player
    }

    /// Current position of a chest, or `None` if that letter is absent
    /// from the board.
    pub fn chest_position(&self, id: ChestId) -> Option<Position> {
        self.chests[id.index()]
    }

    /// Where the chest would land if the command were executed.
    fn chest_destination(&self, chest_pos: Position, command: PushCommand) -> Position {
        chest_pos.step(command.direction)
    }

    /// Where the player has to stand to perform the push: the opposite side
    /// of the chest from the push direction.
    fn approach_position(&self, chest_pos: Position, command: PushCommand) -> Position {
        chest_pos.step(command.direction.opposite())
    }

    fn is_chest_push_possible(&self, chest_pos: Position, command: PushCommand) -> bool {
        let dest = self.chest_destination(chest_pos, command);
        self.board.is_in_range(dest) && self.board.get(dest).is_legal()
    }

    fn is_approach_possible(&self, chest_pos: Position, command: PushCommand) -> bool {
        let approach = self.approach_position(chest_pos, command);
        self.board.is_in_range(approach)
            && self.board.get(approach).is_legal()
            && self.path_exists(approach)
    }

    /// Check whether a push command is legal: the square beyond the chest
    /// must be free, and the player must be able to walk to the approach
    /// square.
    pub fn can_push(&self, command: PushCommand) -> bool {
        match self.chest_position(command.chest) {
            Some(chest_pos) => {
                self.is_chest_push_possible(chest_pos, command)
                    && self.is_approach_possible(chest_pos, command)
            }
            None => false,
        }
    }

    /// Execute a push command if it is legal. Returns whether anything
    /// happened; an illegal command leaves the game untouched.
    pub fn push(&mut self, command: PushCommand) -> bool {
        let Some(chest_pos) = self.chest_position(command.chest) else {
            return false;
        };
        if !self.is_chest_push_possible(chest_pos, command)
            || !self.is_approach_possible(chest_pos, command)
        {
            return false;
        }

        self.history.push(Move {
            chest: command.chest,
            prev_player: self.player,
        });

        // The player leaves its square and takes the chest's; each rewrite
        // keeps the target flag of the cell being overwritten.
        let player_cell = self.board.get(self.player);
        self.board.set(
            self.player,
            Square::Floor {
                target: player_cell.on_target(),
            },
        );
        let chest_cell = self.board.get(chest_pos);
        self.board.set(
            chest_pos,
            Square::Player {
                target: chest_cell.on_target(),
            },
        );
        self.player = chest_pos;

        let dest = self.chest_destination(chest_pos, command);
        let dest_cell = self.board.get(dest);
        self.board.set(
            dest,
            Square::Chest {
                id: command.chest,
                target: dest_cell.on_target(),
            },
        );
        self.chests[command.chest.index()] = Some(dest);
        true
    }

    /// Reverse the most recent push. Returns false (and does nothing) when
    /// the history is empty.
    pub fn undo(&mut self) -> bool {
        let Some(last) = self.history.pop() else {
            return false;
        };
        let chest_pos = self.chests[last.chest.index()]
            .expect("chest recorded in history must be on the board");
        let player_pos = self.player;

        // The chest steps back onto the square the player stands on; the
        // player returns to where it stood before the push.
        let chest_cell = self.board.get(chest_pos);
        self.board.set(
            chest_pos,
            Square::Floor {
                target: chest_cell.on_target(),
            },
        );
        let player_cell = self.board.get(player_pos);
        self.board.set(
            player_pos,
            Square::Chest {
                id: last.chest,
                target: player_cell.on_target(),
            },
        );
        let prev_cell = self.board.get(last.prev_player);
        self.board.set(
            last.prev_player,
            Square::Player {
                target: prev_cell.on_target(),
            },
        );

        self.chests[last.chest.index()] = Some(player_pos);
        self.player = last.prev_player;
        true
    }

    /// Breadth-first search from the player's position through walkable
    /// squares (floor or player; never walls or chests). The visited set is
    /// kept outside the board, so the query has no observable side effects.
    /// An out-of-range target is simply never found.
    pub fn path_exists(&self, target: Position) -> bool {
        let mut visited: Vec<Vec<bool>> = (0..self.board.row_count())
            .map(|row| vec![false; self.board.row_len(row)])
            .collect();
        let mut queue = VecDeque::new();

        visited[self.player.row as usize][self.player.col as usize] = true;
        queue.push_back(self.player);

        while let Some(pos) = queue.pop_front() {
            if pos == target {
                return true;
            }
            for dir in ALL_DIRECTIONS {
                let next = pos.step(dir);
                if self.board.is_in_range(next)
                    && self.board.get(next).is_legal()
                    && !visited[next.row as usize][next.col as usize]
                {
                    visited[next.row as usize][next.col as usize] = true;
                    queue.push_back(next);
                }
            }
        }
        false
    }
}
