use itertools::{Itertools, MinMaxResult};

use crate::board::Grid;
use crate::direction::{Direction, Rotation};
use crate::error::{Error, Result};
use crate::map::Map;

pub const NUM_FACES: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FaceId(pub usize);

/// Where a face sits in the net: top-left pixel and edge length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bindings {
    pub min_x: i32,
    pub min_y: i32,
    pub size: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Connection {
    pub face: FaceId,
    pub side: Direction,
    pub invert: bool,
}

#[derive(Debug, Clone, Default)]
pub struct Face {
    pub bindings: Option<Bindings>,
    /// Turns a net direction into the matched reference face's direction.
    pub orientation: Rotation,
    pub reference: Option<FaceId>,
    connections: [Option<Connection>; 4],
}

#[derive(Debug, Clone)]
pub struct Net {
    face_size: i32,
    faces: Vec<Face>,
    blocks: Map<Option<FaceId>>,
}

impl Bindings {
    pub fn block(&self) -> (i32, i32) {
        (self.min_x / self.size, self.min_y / self.size)
    }

    pub fn contains(&self, (x, y): (i32, i32)) -> bool {
        x >= self.min_x
            && x < self.min_x + self.size
            && y >= self.min_y
            && y < self.min_y + self.size
    }

    pub fn local(&self, (x, y): (i32, i32)) -> (i32, i32) {
        (x - self.min_x, y - self.min_y)
    }

    /// All cells of the face, row by row.
    pub fn cells(self) -> impl Iterator<Item = (i32, i32)> {
        (0..self.size)
            .cartesian_product(0..self.size)
            .map(move |(dy, dx)| (self.min_x + dx, self.min_y + dy))
    }
}

impl Connection {
    pub fn new(face: FaceId, side: Direction) -> Connection {
        Connection {
            face,
            side,
            invert: false,
        }
    }
}

impl Face {
    pub fn connection(&self, direction: Direction) -> Option<Connection> {
        self.connections[direction.index()]
    }

    pub fn connect(&mut self, direction: Direction, connection: Connection) {
        self.connections[direction.index()] = Some(connection);
    }

    pub fn set_inverted(&mut self, direction: Direction) {
        if let Some(connection) = self.connections[direction.index()].as_mut() {
            connection.invert = true;
        }
    }
}

impl Net {
    pub fn from_grid<G: Grid>(grid: &G) -> Result<Net> {
        let face_size = detect_face_size(grid)?;
        let mut net = locate_faces(grid, face_size)?;
        link_adjacent(&mut net);
        Ok(net)
    }

    pub fn face_size(&self) -> i32 {
        self.face_size
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    pub fn face(&self, id: FaceId) -> &Face {
        &self.faces[id.0]
    }

    pub fn face_mut(&mut self, id: FaceId) -> &mut Face {
        &mut self.faces[id.0]
    }

    pub fn ids(&self) -> impl Iterator<Item = FaceId> {
        (0..self.faces.len()).map(FaceId)
    }

    /// The face covering a pixel, if any.
    pub fn face_at(&self, (x, y): (i32, i32)) -> Option<FaceId> {
        if x < 0 || y < 0 {
            return None;
        }
        self.blocks
            .at((x / self.face_size, y / self.face_size))
            .copied()
            .flatten()
    }
}

fn gcd(mut x: i32, mut y: i32) -> i32 {
    while y != 0 {
        (x, y) = (y, x % y);
    }
    x
}

fn run_length(run: MinMaxResult<i32>) -> Option<i32> {
    match run {
        MinMaxResult::NoElements => None,
        MinMaxResult::OneElement(_) => Some(1),
        MinMaxResult::MinMax(first, last) => Some(last - first + 1),
    }
}

/// Edge length of the cube: the gcd of every row and column span.
pub fn detect_face_size<G: Grid>(grid: &G) -> Result<i32> {
    let rows = (0..grid.height()).map(|y| {
        run_length((0..grid.width()).filter(|x| grid.occupied((*x, y))).minmax())
            .ok_or_else(|| Error::MalformedNet(format!("row {} is empty", y)))
    });
    let columns = (0..grid.width()).map(|x| {
        run_length((0..grid.height()).filter(|y| grid.occupied((x, *y))).minmax())
            .ok_or_else(|| Error::MalformedNet(format!("column {} is empty", x)))
    });

    let mut rv = 0;
    for run in rows.chain(columns) {
        rv = gcd(rv, run?);
    }

    if rv == 0 {
        return Err(Error::MalformedNet("net is empty".to_string()));
    }

    tracing::debug!(face_size = rv, "detected face size");
    Ok(rv)
}

pub fn locate_faces<G: Grid>(grid: &G, face_size: i32) -> Result<Net> {
    if face_size <= 0 || grid.width() % face_size != 0 || grid.height() % face_size != 0 {
        return Err(Error::MalformedNet(format!(
            "{}x{} grid is not made of {}x{} faces",
            grid.width(),
            grid.height(),
            face_size,
            face_size
        )));
    }

    let faces_wide = grid.width() / face_size;
    let faces_tall = grid.height() / face_size;
    let mut blocks = Map::new(faces_wide, faces_tall, &None);
    let mut faces = Vec::new();

    for (j, i) in (0..faces_tall).cartesian_product(0..faces_wide) {
        let bindings = Bindings {
            min_x: i * face_size,
            min_y: j * face_size,
            size: face_size,
        };
        let occupied = bindings.cells().filter(|p| grid.occupied(*p)).count() as i32;
        if occupied == 0 {
            continue;
        }
        if occupied != face_size * face_size {
            return Err(Error::MalformedNet(format!(
                "block {:?} is only partly occupied",
                (i, j)
            )));
        }

        let id = FaceId(faces.len());
        if let Some(slot) = blocks.at_mut((i, j)) {
            *slot = Some(id);
        }
        faces.push(Face {
            bindings: Some(bindings),
            ..Face::default()
        });
    }

    tracing::debug!(
        count = faces.len(),
        faces_wide,
        faces_tall,
        "located faces"
    );

    if faces.len() != NUM_FACES {
        return Err(Error::InvalidCube(format!(
            "expected {} faces, found {}",
            NUM_FACES,
            faces.len()
        )));
    }

    Ok(Net {
        face_size,
        faces,
        blocks,
    })
}

/// Connects faces that touch in the flat net.
pub fn link_adjacent(net: &mut Net) {
    for index in 0..net.faces.len() {
        let block = match net.faces[index].bindings {
            Some(bindings) => bindings.block(),
            None => continue,
        };
        for d in Direction::all() {
            if let Some(Some(other)) = net.blocks.at(d.step(block)).copied() {
                net.faces[index].connect(d, Connection::new(other, d.opposite()));
            }
        }
    }
}
