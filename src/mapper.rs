use crate::direction::{Direction, Rotation};
use crate::error::{Error, Result};
use crate::net::{FaceId, Net, NUM_FACES};
use crate::reference::ReferenceCube;

/// Which net face landed on each reference face.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matching {
    by_reference: [FaceId; NUM_FACES],
}

impl Matching {
    pub fn net_face(&self, reference: FaceId) -> FaceId {
        self.by_reference[reference.0]
    }
}

/// Folds the net onto the reference cube, starting with `root` on the
/// reference root. Every net face gets its `reference` and `orientation`.
pub fn match_to_reference(net: &mut Net, cube: &ReferenceCube, root: FaceId) -> Result<Matching> {
    let count = net.faces().len();
    if root.0 >= count {
        return Err(Error::InvalidCube(format!(
            "root {:?} is not a face of the net",
            root
        )));
    }

    let mut placed: Vec<Option<(FaceId, Rotation)>> = vec![None; count];
    let mut claimed: [Option<FaceId>; NUM_FACES] = [None; NUM_FACES];
    let mut stack = vec![(root, cube.root(), Rotation::Identity)];

    while let Some((face, reference, orientation)) = stack.pop() {
        if let Some(previous) = placed[face.0] {
            if previous != (reference, orientation) {
                return Err(Error::InvalidCube(format!(
                    "{:?} folds onto both {:?} and {:?}",
                    face,
                    previous,
                    (reference, orientation)
                )));
            }
            continue;
        }
        if let Some(other) = claimed[reference.0] {
            return Err(Error::InvalidCube(format!(
                "{:?} and {:?} both fold onto {:?}",
                other, face, reference
            )));
        }

        tracing::debug!(
            face = face.0,
            reference = reference.0,
            ?orientation,
            "placed face"
        );
        placed[face.0] = Some((reference, orientation));
        claimed[reference.0] = Some(face);

        for d in Direction::all() {
            let conn = match net.face(face).connection(d) {
                Some(conn) => conn,
                None => continue,
            };
            let target = cube
                .face(reference)
                .connection(d.rotate(orientation))
                .ok_or_else(|| {
                    Error::InvalidCube(format!("{:?} has no side {:?}", reference, d))
                })?;
            stack.push((
                conn.face,
                target.face,
                Rotation::between(conn.side, target.side),
            ));
        }
    }

    let mut by_reference = [FaceId(0); NUM_FACES];
    for (index, slot) in placed.into_iter().enumerate() {
        let (reference, orientation) = slot.ok_or_else(|| {
            Error::InvalidCube(format!("face {} is not connected to the net", index))
        })?;
        let face = net.face_mut(FaceId(index));
        face.reference = Some(reference);
        face.orientation = orientation;
        by_reference[reference.0] = FaceId(index);
    }

    Ok(Matching { by_reference })
}
