pub const NUM_CHESTS: usize = 26;

/// Identity of a chest: 0 for `a`/`A` through 25 for `z`/`Z`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChestId(pub u8);

impl ChestId {
    /// Decode a chest identity from its rendered symbol. Either case names
    /// the same chest; the case only reflects whether it sits on a target.
    pub fn from_symbol(ch: char) -> Option<ChestId> {
        match ch {
            'a'..='z' => Some(ChestId(ch as u8 - b'a')),
            'A'..='Z' => Some(ChestId(ch as u8 - b'A')),
            _ => None,
        }
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A single board cell. Floor, player and chest cells carry a flag telling
/// whether the underlying cell is target floor; a chest's flag is recomputed
/// from the cell it lands on every time it moves, never inherited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Square {
    Wall,
    Floor { target: bool },
    Player { target: bool },
    Chest { id: ChestId, target: bool },
}

impl Square {
    /// Decode a board symbol:
    /// - `-` = blank floor
    /// - `+` = target floor
    /// - `@` = player on blank floor
    /// - `*` = player on target floor
    /// - `a`-`z` = chest on blank floor
    /// - `A`-`Z` = chest on target floor
    /// - `#` = wall
    pub fn from_symbol(ch: char) -> Option<Square> {
        match ch {
            '-' => Some(Square::Floor { target: false }),
            '+' => Some(Square::Floor { target: true }),
            '@' => Some(Square::Player { target: false }),
            '*' => Some(Square::Player { target: true }),
            '#' => Some(Square::Wall),
            'a'..='z' => Some(Square::Chest {
                id: ChestId(ch as u8 - b'a'),
                target: false,
            }),
            'A'..='Z' => Some(Square::Chest {
                id: ChestId(ch as u8 - b'A'),
                target: true,
            }),
            _ => None,
        }
    }

    /// Encode back to the rendered symbol alphabet.
    pub fn symbol(self) -> char {
        match self {
            Square::Wall => '#',
            Square::Floor { target: false } => '-',
            Square::Floor { target: true } => '+',
            Square::Player { target: false } => '@',
            Square::Player { target: true } => '*',
            Square::Chest { id, target: false } => (b'a' + id.0) as char,
            Square::Chest { id, target: true } => (b'A' + id.0) as char,
        }
    }

    pub fn is_player(self) -> bool {
        matches!(self, Square::Player { .. })
    }

    pub fn is_chest(self) -> bool {
        matches!(self, Square::Chest { .. })
    }

    pub fn is_blank(self) -> bool {
        matches!(self, Square::Floor { .. })
    }

    /// Chest currently resting on a target cell.
    pub fn is_final_chest(self) -> bool {
        matches!(self, Square::Chest { target: true, .. })
    }

    /// Traversability: the player can walk here, and a chest can be pushed
    /// here. Walls and chests fail.
    pub fn is_legal(self) -> bool {
        self.is_blank() || self.is_player()
    }

    /// Whether the underlying cell is target floor. Walls are never targets.
    pub fn on_target(self) -> bool {
        match self {
            Square::Wall => false,
            Square::Floor { target }
            | Square::Player { target }
            | Square::Chest { target, .. } => target,
        }
    }

    pub fn chest_id(self) -> Option<ChestId> {
        match self {
            Square::Chest { id, .. } => Some(id),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_round_trip() {
        for ch in ['-', '+', '@', '*', '#', 'a', 'z', 'A', 'Z', 'm', 'M'] {
            let square = Square::from_symbol(ch).unwrap();
            assert_eq!(square.symbol(), ch);
        }
    }

    #[test]
    fn test_unknown_symbols_rejected() {
        for ch in [' ', '.', '0', '2', '?', '\n'] {
            assert_eq!(Square::from_symbol(ch), None);
        }
    }

    #[test]
    fn test_chest_id_from_either_case() {
        assert_eq!(ChestId::from_symbol('a'), Some(ChestId(0)));
        assert_eq!(ChestId::from_symbol('A'), Some(ChestId(0)));
        assert_eq!(ChestId::from_symbol('z'), Some(ChestId(25)));
        assert_eq!(ChestId::from_symbol('Z'), Some(ChestId(25)));
        assert_eq!(ChestId::from_symbol('-'), None);
    }

    #[test]
    fn test_classification() {
        let floor = Square::from_symbol('-').unwrap();
        let target_floor = Square::from_symbol('+').unwrap();
        let player = Square::from_symbol('@').unwrap();
        let player_on_target = Square::from_symbol('*').unwrap();
        let chest = Square::from_symbol('c').unwrap();
        let final_chest = Square::from_symbol('C').unwrap();
        let wall = Square::from_symbol('#').unwrap();

        assert!(floor.is_blank() && target_floor.is_blank());
        assert!(player.is_player() && player_on_target.is_player());
        assert!(chest.is_chest() && final_chest.is_chest());
        assert!(!chest.is_final_chest());
        assert!(final_chest.is_final_chest());
        assert!(!wall.is_legal());
        assert!(!chest.is_legal());
        assert!(floor.is_legal() && player.is_legal());
        assert_eq!(chest.chest_id(), Some(ChestId(2)));
        assert_eq!(floor.chest_id(), None);
    }

    #[test]
    fn test_on_target() {
        assert!(!Square::from_symbol('-').unwrap().on_target());
        assert!(Square::from_symbol('+').unwrap().on_target());
        assert!(Square::from_symbol('*').unwrap().on_target());
        assert!(Square::from_symbol('B').unwrap().on_target());
        assert!(!Square::from_symbol('b').unwrap().on_target());
        assert!(!Square::from_symbol('#').unwrap().on_target());
    }
}
