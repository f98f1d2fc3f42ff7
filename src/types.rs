use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Parses a move token. Only the exact single letters `U`, `D`, `L`, `R` are accepted.
    pub fn parse_move(value: &str) -> Option<Self> {
        match value {
            "U" => Some(Self::Up),
            "D" => Some(Self::Down),
            "L" => Some(Self::Left),
            "R" => Some(Self::Right),
            _ => None,
        }
    }
}

/// Ghost color. The declaration order is the report tie-break: blue ghosts sort before red.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum GhostColor {
    #[serde(rename = "B")]
    Blue,
    #[serde(rename = "R")]
    Red,
}

impl GhostColor {
    pub fn letter(self) -> char {
        match self {
            Self::Blue => 'B',
            Self::Red => 'R',
        }
    }

    pub fn axis(self) -> Axis {
        match self {
            Self::Red => Axis::Horizontal,
            Self::Blue => Axis::Vertical,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Vec2 {
    pub x: i32,
    pub y: i32,
}

impl Vec2 {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn axis(self, axis: Axis) -> i32 {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }

    pub fn set_axis(&mut self, axis: Axis, value: i32) {
        match axis {
            Axis::Horizontal => self.x = value,
            Axis::Vertical => self.y = value,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EndReason {
    /// `tick` is 0 when the pieces already overlapped before any move.
    Collision { tick: u64 },
    MovesExhausted,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BoardEvent {
    PathExhausted {
        tick: u64,
    },
    Collision {
        tick: u64,
        x: i32,
        y: i32,
        colors: Vec<GhostColor>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GhostStart {
    pub color: GhostColor,
    pub position: Vec2,
}

/// Validated game description produced by the input parser.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameSetup {
    pub board_size: i32,
    pub packman: Vec2,
    pub ghosts: Vec<GhostStart>,
    pub moves: Vec<Direction>,
}
