#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Right,
    Down,
    Left,
    Up,
}

/// A number of clockwise quarter turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rotation {
    #[default]
    Identity,
    Clockwise,
    Half,
    CounterClockwise,
}

impl Direction {
    pub fn all() -> [Direction; 4] {
        [
            Direction::Right,
            Direction::Down,
            Direction::Left,
            Direction::Up,
        ]
    }

    pub fn from_i32(n: i32) -> Direction {
        match n.rem_euclid(4) {
            0 => Direction::Right,
            1 => Direction::Down,
            2 => Direction::Left,
            3 => Direction::Up,
            _ => unreachable!("invalid result of mod 4"),
        }
    }

    pub fn to_i32(&self) -> i32 {
        match self {
            Direction::Right => 0,
            Direction::Down => 1,
            Direction::Left => 2,
            Direction::Up => 3,
        }
    }

    pub fn index(&self) -> usize {
        self.to_i32() as usize
    }

    pub fn opposite(&self) -> Direction {
        self.turn_right(2)
    }

    pub fn turn_right(&self, n: i32) -> Direction {
        Direction::from_i32(self.to_i32() + n)
    }

    pub fn rotate(&self, rotation: Rotation) -> Direction {
        self.turn_right(rotation.quarter_turns())
    }

    pub fn is_horizontal(&self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    pub fn dx(&self) -> i32 {
        match self {
            Direction::Right => 1,
            Direction::Left => -1,
            _ => 0,
        }
    }

    pub fn dy(&self) -> i32 {
        match self {
            Direction::Up => -1,
            Direction::Down => 1,
            _ => 0,
        }
    }

    pub fn step(&self, origin: (i32, i32)) -> (i32, i32) {
        (origin.0 + self.dx(), origin.1 + self.dy())
    }
}

impl Rotation {
    pub fn all() -> [Rotation; 4] {
        [
            Rotation::Identity,
            Rotation::Clockwise,
            Rotation::Half,
            Rotation::CounterClockwise,
        ]
    }

    pub fn from_quarter_turns(n: i32) -> Rotation {
        match n.rem_euclid(4) {
            0 => Rotation::Identity,
            1 => Rotation::Clockwise,
            2 => Rotation::Half,
            3 => Rotation::CounterClockwise,
            _ => unreachable!("invalid result of mod 4"),
        }
    }

    pub fn quarter_turns(&self) -> i32 {
        match self {
            Rotation::Identity => 0,
            Rotation::Clockwise => 1,
            Rotation::Half => 2,
            Rotation::CounterClockwise => 3,
        }
    }

    pub fn inverse(&self) -> Rotation {
        Rotation::from_quarter_turns(-self.quarter_turns())
    }

    pub fn then(&self, other: Rotation) -> Rotation {
        Rotation::from_quarter_turns(self.quarter_turns() + other.quarter_turns())
    }

    /// The rotation that turns `from` into `to`.
    pub fn between(from: Direction, to: Direction) -> Rotation {
        Rotation::from_quarter_turns(to.to_i32() - from.to_i32())
    }
}
