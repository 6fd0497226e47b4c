use crate::direction::{Direction, Rotation};
use crate::net::{Connection, Face, FaceId, NUM_FACES};

pub const TOP: FaceId = FaceId(4);
pub const BOTTOM: FaceId = FaceId(5);

/// The four faces around the equator, in ring order.
pub const fn band(i: usize) -> FaceId {
    FaceId(i % 4)
}

/// Edge endpoints whose cells run in opposite order on the two faces.
const INVERTED: [(FaceId, Direction); 8] = [
    (band(0), Direction::Up),
    (band(0), Direction::Down),
    (band(1), Direction::Down),
    (band(3), Direction::Up),
    (TOP, Direction::Up),
    (TOP, Direction::Right),
    (BOTTOM, Direction::Down),
    (BOTTOM, Direction::Left),
];

/// Connectivity of an abstract cube, used as the target when folding a net.
#[derive(Debug, Clone)]
pub struct ReferenceCube {
    faces: Vec<Face>,
}

impl ReferenceCube {
    pub fn new() -> ReferenceCube {
        let mut faces = vec![Face::default(); NUM_FACES];

        // Walking around the band, the edge shared with the top (and the
        // bottom) moves a quarter turn per face.
        let mut top_side = Direction::Up;
        let mut bottom_side = Direction::Down;

        for i in 0..4 {
            let side = band(i);
            let face = &mut faces[side.0];
            face.connect(
                Direction::Left,
                Connection::new(band(i + 3), Direction::Right),
            );
            face.connect(
                Direction::Right,
                Connection::new(band(i + 1), Direction::Left),
            );
            face.connect(Direction::Up, Connection::new(TOP, top_side));
            face.connect(Direction::Down, Connection::new(BOTTOM, bottom_side));

            faces[TOP.0].connect(top_side, Connection::new(side, Direction::Up));
            faces[BOTTOM.0].connect(bottom_side, Connection::new(side, Direction::Down));

            top_side = top_side.rotate(Rotation::CounterClockwise);
            bottom_side = bottom_side.rotate(Rotation::Clockwise);
        }

        for (id, direction) in INVERTED {
            faces[id.0].set_inverted(direction);
        }

        ReferenceCube { faces }
    }

    pub fn root(&self) -> FaceId {
        band(0)
    }

    pub fn face(&self, id: FaceId) -> &Face {
        &self.faces[id.0]
    }

    pub fn ids(&self) -> impl Iterator<Item = FaceId> {
        (0..NUM_FACES).map(FaceId)
    }
}

impl Default for ReferenceCube {
    fn default() -> Self {
        ReferenceCube::new()
    }
}
