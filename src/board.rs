use crate::direction::Direction;
use crate::error::{Error, Result};
use crate::map::Map;

/// Read-only occupancy queries over a net.
pub trait Grid {
    fn width(&self) -> i32;
    fn height(&self) -> i32;
    fn occupied(&self, pos: (i32, i32)) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Void,
    Open,
    Wall,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
    pub facing: Direction,
}

#[derive(Debug, Clone)]
pub struct Board {
    tiles: Map<Tile>,
}

impl Position {
    pub fn new((x, y): (i32, i32), facing: Direction) -> Position {
        Position { x, y, facing }
    }

    pub fn coords(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    pub fn turn_right(&self, n: i32) -> Position {
        Position {
            facing: self.facing.turn_right(n),
            ..*self
        }
    }
}

impl Tile {
    fn from_char(ch: char) -> Result<Tile> {
        match ch {
            ' ' => Ok(Tile::Void),
            '.' => Ok(Tile::Open),
            '#' => Ok(Tile::Wall),
            _ => Err(Error::Parse(format!("invalid tile {:?}", ch))),
        }
    }
}

impl Board {
    pub fn from_string(s: &str) -> Result<Board> {
        let rows = s
            .lines()
            .map(|line| line.chars().map(Tile::from_char).collect::<Result<Vec<Tile>>>())
            .collect::<Result<Vec<Vec<Tile>>>>()?;

        if rows.is_empty() {
            return Err(Error::Parse("empty board".to_string()));
        }

        Ok(Board {
            tiles: Map::from_rows(rows, &Tile::Void),
        })
    }

    pub fn tile(&self, pos: (i32, i32)) -> Tile {
        self.tiles.at(pos).copied().unwrap_or(Tile::Void)
    }

    pub fn is_wall(&self, pos: (i32, i32)) -> bool {
        self.tile(pos) == Tile::Wall
    }

    /// Leftmost open tile of the top row, facing right.
    pub fn starting_position(&self) -> Result<Position> {
        (0..self.width())
            .find(|x| self.tile((*x, 0)) == Tile::Open)
            .map(|x| Position::new((x, 0), Direction::Right))
            .ok_or_else(|| Error::Parse("no open tile on the top row".to_string()))
    }
}

impl Grid for Board {
    fn width(&self) -> i32 {
        self.tiles.number_of_columns()
    }

    fn height(&self) -> i32 {
        self.tiles.number_of_rows()
    }

    fn occupied(&self, pos: (i32, i32)) -> bool {
        self.tile(pos) != Tile::Void
    }
}
