use serde::{Deserialize, Serialize};

/// The eight compass directions, clockwise starting at North.
///
/// The discriminant order is load-bearing: the stochastic deviation model
/// rotates an intended direction by one step either way, and that step is
/// an index shift modulo 8.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    /// All directions in clockwise order, starting at North.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// Index of this direction in the clockwise ordering (North = 0).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Direction at `index % 8` in the clockwise ordering.
    pub fn from_index(index: usize) -> Direction {
        Self::ALL[index % 8]
    }

    /// Rotate by `steps` compass steps (45° each), wrapping in both
    /// directions: rotating North by −1 gives NorthWest.
    pub fn rotated(self, steps: i32) -> Direction {
        let idx = (self.index() as i32 + steps).rem_euclid(8);
        Self::ALL[idx as usize]
    }

    /// Grid displacement for one step in this direction. The y axis grows
    /// downward, so North is y − 1.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::NorthEast => (1, -1),
            Direction::East => (1, 0),
            Direction::SouthEast => (1, 1),
            Direction::South => (0, 1),
            Direction::SouthWest => (-1, 1),
            Direction::West => (-1, 0),
            Direction::NorthWest => (-1, -1),
        }
    }

    /// Diagonal moves displace on both axes and pay the longer-step cost.
    pub fn is_diagonal(self) -> bool {
        self.index() % 2 == 1
    }

    /// Glyph for text rendering of a policy.
    pub fn arrow(self) -> char {
        match self {
            Direction::North => '↑',
            Direction::NorthEast => '↗',
            Direction::East => '→',
            Direction::SouthEast => '↘',
            Direction::South => '↓',
            Direction::SouthWest => '↙',
            Direction::West => '←',
            Direction::NorthWest => '↖',
        }
    }
}
