//! Folds a flat cube net into a cube and tabulates where every step off a
//! face edge lands.

pub mod board;
pub mod direction;
pub mod edge;
pub mod error;
pub mod map;
pub mod mapper;
pub mod net;
pub mod reference;
pub mod topology;
pub mod walk;

#[cfg(test)]
mod fixtures;

pub use board::{Board, Grid, Position, Tile};
pub use direction::{Direction, Rotation};
pub use error::{Error, Result};
pub use net::{FaceId, Net};
pub use topology::{CubeTopology, FlatTopology, Topology};
pub use walk::{parse_path, parse_scenario, password, Instruction, Walker};
