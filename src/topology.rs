use crate::board::{Grid, Position};
use crate::direction::Direction;
use crate::edge::edge_cells;
use crate::error::{Error, Result};
use crate::mapper::{match_to_reference, Matching};
use crate::net::{FaceId, Net, NUM_FACES};
use crate::reference::ReferenceCube;

/// Where a single step forward leads.
pub trait Topology {
    fn next(&self, from: Position) -> Option<Position>;
}

/// Steps off an edge re-enter at the far end of the same row or column.
pub struct FlatTopology<'a, G: Grid> {
    grid: &'a G,
}

/// Transition table for a net folded into a cube.
#[derive(Debug, Clone)]
pub struct CubeTopology {
    net: Net,
    entries: Vec<Option<Position>>,
}

impl<'a, G: Grid> FlatTopology<'a, G> {
    pub fn new(grid: &'a G) -> FlatTopology<'a, G> {
        FlatTopology { grid }
    }
}

impl<G: Grid> Topology for FlatTopology<'_, G> {
    fn next(&self, from: Position) -> Option<Position> {
        if !self.grid.occupied(from.coords()) {
            return None;
        }

        let (mut x, mut y) = from.coords();
        loop {
            x = (x + from.facing.dx()).rem_euclid(self.grid.width());
            y = (y + from.facing.dy()).rem_euclid(self.grid.height());
            if self.grid.occupied((x, y)) {
                return Some(Position::new((x, y), from.facing));
            }
        }
    }
}

fn slot(net: &Net, pos: Position) -> Option<usize> {
    let face = net.face_at(pos.coords())?;
    let (local_x, local_y) = net.face(face).bindings?.local(pos.coords());
    let face_size = net.face_size() as usize;
    Some(
        ((face.0 * face_size + local_y as usize) * face_size + local_x as usize) * 4
            + pos.facing.index(),
    )
}

fn record(
    net: &Net,
    entries: &mut [Option<Position>],
    from: Position,
    to: Position,
) -> Result<()> {
    let index = slot(net, from).ok_or(Error::OffBoard(from))?;
    match entries[index] {
        Some(existing) if existing != to => Err(Error::MismatchedTopology {
            at: from,
            existing,
            derived: to,
        }),
        _ => {
            entries[index] = Some(to);
            Ok(())
        }
    }
}

impl CubeTopology {
    pub fn from_grid<G: Grid>(grid: &G) -> Result<CubeTopology> {
        CubeTopology::from_grid_with_root(grid, FaceId(0))
    }

    /// Same table, but the fold starts from a chosen net face.
    pub fn from_grid_with_root<G: Grid>(grid: &G, root: FaceId) -> Result<CubeTopology> {
        let mut net = Net::from_grid(grid)?;
        let cube = ReferenceCube::new();
        let matching = match_to_reference(&mut net, &cube, root)?;
        CubeTopology::build(net, &cube, &matching)
    }

    pub fn build(net: Net, cube: &ReferenceCube, matching: &Matching) -> Result<CubeTopology> {
        let face_size = net.face_size() as usize;
        let mut entries = vec![None; NUM_FACES * face_size * face_size * 4];

        // Steps that stay flat on the net, including between touching faces.
        for face in net.faces() {
            let bindings = face
                .bindings
                .ok_or_else(|| Error::InvalidCube("face is not bound to the net".to_string()))?;
            for p in bindings.cells() {
                for d in Direction::all() {
                    let q = d.step(p);
                    if net.face_at(q).is_some() {
                        record(&net, &mut entries, Position::new(p, d), Position::new(q, d))?;
                    }
                }
            }
        }

        for id in net.ids() {
            let face = net.face(id);
            let reference = face
                .reference
                .ok_or_else(|| Error::InvalidCube(format!("{:?} was never placed", id)))?;

            for d in Direction::all() {
                let conn = cube.face(reference).connection(d).ok_or_else(|| {
                    Error::InvalidCube(format!("{:?} has no side {:?}", reference, d))
                })?;
                let neighbour = net.face(matching.net_face(conn.face));

                let from_cells = edge_cells(face, d)?;
                let mut to_cells = edge_cells(neighbour, conn.side)?;
                if conn.invert {
                    to_cells.reverse();
                }

                let exit = d.rotate(face.orientation.inverse());
                let entry = conn
                    .side
                    .opposite()
                    .rotate(neighbour.orientation.inverse());

                for (p, q) in from_cells.into_iter().zip(to_cells) {
                    record(
                        &net,
                        &mut entries,
                        Position::new(p, exit),
                        Position::new(q, entry),
                    )?;
                }
            }
        }

        for bindings in net.faces().iter().filter_map(|face| face.bindings) {
            for p in bindings.cells() {
                for d in Direction::all() {
                    let at = Position::new(p, d);
                    if slot(&net, at).and_then(|index| entries[index]).is_none() {
                        return Err(Error::IncompleteTopology { at });
                    }
                }
            }
        }

        tracing::debug!(
            entries = entries.len(),
            face_size,
            "built cube topology"
        );

        Ok(CubeTopology { net, entries })
    }

    pub fn face_size(&self) -> i32 {
        self.net.face_size()
    }

    pub fn net(&self) -> &Net {
        &self.net
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn lookup(&self, from: Position) -> Option<Position> {
        slot(&self.net, from).and_then(|index| self.entries[index])
    }

    /// Every (from, to) pair, face by face.
    pub fn transitions(&self) -> impl Iterator<Item = (Position, Position)> + '_ {
        self.net
            .faces()
            .iter()
            .filter_map(|face| face.bindings)
            .flat_map(|bindings| bindings.cells())
            .flat_map(|p| {
                Direction::all()
                    .into_iter()
                    .map(move |d| Position::new(p, d))
            })
            .filter_map(move |from| self.lookup(from).map(|to| (from, to)))
    }
}

impl Topology for CubeTopology {
    fn next(&self, from: Position) -> Option<Position> {
        self.lookup(from)
    }
}
