use crate::direction::{Direction, Rotation};
use crate::error::{Error, Result};
use crate::net::{Bindings, Face};

impl Bindings {
    /// Cells along one side of the face, left to right or top to bottom.
    pub fn side_cells(&self, side: Direction) -> Vec<(i32, i32)> {
        let last_x = self.min_x + self.size - 1;
        let last_y = self.min_y + self.size - 1;

        (0..self.size)
            .map(|k| match side {
                Direction::Right => (last_x, self.min_y + k),
                Direction::Down => (self.min_x + k, last_y),
                Direction::Left => (self.min_x, self.min_y + k),
                Direction::Up => (self.min_x + k, self.min_y),
            })
            .collect()
    }
}

/// Cells along the side of a placed face that the reference cube calls
/// `side`, ordered the way the reference face runs along that side.
pub fn edge_cells(face: &Face, side: Direction) -> Result<Vec<(i32, i32)>> {
    let bindings = face
        .bindings
        .ok_or_else(|| Error::InvalidCube("face is not bound to the net".to_string()))?;

    let mut rv = bindings.side_cells(side.rotate(face.orientation.inverse()));

    let reversed = match face.orientation {
        Rotation::Identity => false,
        Rotation::Half => true,
        Rotation::Clockwise => !side.is_horizontal(),
        Rotation::CounterClockwise => side.is_horizontal(),
    };
    if reversed {
        rv.reverse();
    }

    Ok(rv)
}
