use regex::Regex;

use crate::board::{Board, Position};
use crate::error::{Error, Result};
use crate::topology::Topology;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    StepForward(i32),
    TurnRight(i32),
}

pub fn parse_path(s: &str) -> Result<Vec<Instruction>> {
    let path = s.trim();
    let re = Regex::new(r"[0-9]+|[LR]").map_err(|e| Error::Parse(e.to_string()))?;

    let mut rv = Vec::new();
    let mut end = 0;
    for token in re.find_iter(path) {
        if token.start() != end {
            return Err(Error::Parse(format!(
                "unexpected {:?} in path",
                &path[end..token.start()]
            )));
        }
        end = token.end();

        rv.push(match token.as_str() {
            "L" => Instruction::TurnRight(-1),
            "R" => Instruction::TurnRight(1),
            n => Instruction::StepForward(
                n.parse()
                    .map_err(|e| Error::Parse(format!("bad step count {:?}: {}", n, e)))?,
            ),
        });
    }

    if end != path.len() {
        return Err(Error::Parse(format!(
            "unexpected {:?} at end of path",
            &path[end..]
        )));
    }
    if rv.is_empty() {
        return Err(Error::Parse("empty path".to_string()));
    }

    Ok(rv)
}

/// Splits a scenario into the board and the path below it.
pub fn parse_scenario(s: &str) -> Result<(Board, Vec<Instruction>)> {
    let parts: Vec<&str> = s.trim_end().split("\n\n").collect();

    if parts.len() != 2 {
        return Err(Error::Parse(format!(
            "invalid input: wrong number of components: {}",
            parts.len()
        )));
    }

    let board = Board::from_string(parts[0])?;
    let path = parse_path(parts[1])?;
    Ok((board, path))
}

pub fn password(pos: Position) -> i64 {
    1000 * (pos.y as i64 + 1) + 4 * (pos.x as i64 + 1) + pos.facing.to_i32() as i64
}

pub struct Walker<'a, T: Topology + ?Sized> {
    board: &'a Board,
    topology: &'a T,
    position: Position,
}

impl<'a, T: Topology + ?Sized> Walker<'a, T> {
    pub fn new(board: &'a Board, topology: &'a T) -> Result<Walker<'a, T>> {
        Ok(Walker {
            board,
            topology,
            position: board.starting_position()?,
        })
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Returns false when a wall is in the way.
    fn step_forward(&mut self) -> Result<bool> {
        let next = self
            .topology
            .next(self.position)
            .ok_or(Error::OffBoard(self.position))?;

        if self.board.is_wall(next.coords()) {
            return Ok(false);
        }

        tracing::trace!(?next, "step");
        self.position = next;
        Ok(true)
    }

    pub fn apply(&mut self, ins: Instruction) -> Result<()> {
        match ins {
            Instruction::StepForward(n) => {
                for _ in 0..n {
                    if !self.step_forward()? {
                        break;
                    }
                }
            }
            Instruction::TurnRight(n) => {
                self.position = self.position.turn_right(n);
            }
        }

        Ok(())
    }

    pub fn run(&mut self, path: &[Instruction]) -> Result<Position> {
        for ins in path {
            self.apply(*ins)?;
        }
        Ok(self.position)
    }

    pub fn password(&self) -> i64 {
        password(self.position)
    }
}
