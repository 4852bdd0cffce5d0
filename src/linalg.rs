//! Some shared linear algebra concepts

pub mod momentum;

use crate::numeric::Float;

/// Re-export of some nalgebra types
pub use nalgebra::Vector3;

/// Point or displacement in 3D space (cm unless stated otherwise)
pub type Position = Vector3<Float>;

/// Build a position from its cartesian coordinates
pub fn position(x: Float, y: Float, z: Float) -> Position {
    Position::new(x, y, z)
}
