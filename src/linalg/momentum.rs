//! This module implements some domain-specific 4-momentum handling logic.

use crate::numeric::{floats::consts::PI, Float};
use nalgebra::{SVector, Vector3};
use prefix_num_ops::real::*;

/// 4-momentum dimension
pub const MOMENTUM_DIM: usize = 4;

/// Relativistic 4-momentum, stored as (Px, Py, Pz, E)
pub type Momentum = SVector<Float, MOMENTUM_DIM>;

/// Convenience const for accessing the X coordinate of a 4-vector
pub const X: usize = 0;

/// Convenience const for accessing the Y coordinate of a 4-vector
pub const Y: usize = 1;

/// Convenience const for accessing the Z coordinate of a 4-vector
pub const Z: usize = 2;

/// Convenience const for accessing the E coordinate of a 4-vector
pub const E: usize = 3;

/// Pseudorapidity returned along the beam axis, where it is infinite
const BEAM_AXIS_ETA: Float = 1e10;

/// Build a 4-momentum from its components
pub fn momentum(px: Float, py: Float, pz: Float, e: Float) -> Momentum {
    Momentum::new(px, py, pz, e)
}

/// Spatial part of a 4-momentum
pub fn xyz(p: &Momentum) -> Vector3<Float> {
    p.fixed_rows::<3>(X).into_owned()
}

/// Transverse momentum
pub fn pt(p: &Momentum) -> Float {
    sqrt(p[X] * p[X] + p[Y] * p[Y])
}

/// Norm of the 3-momentum
pub fn p_abs(p: &Momentum) -> Float {
    xyz(p).norm()
}

/// Polar angle with respect to the beam axis, in [0, π]
pub fn theta(p: &Momentum) -> Float {
    pt(p).atan2(p[Z])
}

/// Azimuthal angle in (-π, π], as used for jet 4-vectors
pub fn phi_signed(p: &Momentum) -> Float {
    if p[X] == 0. && p[Y] == 0. {
        0.
    } else {
        p[Y].atan2(p[X])
    }
}

/// Azimuthal angle in [0, 2π), as used for generated particles
pub fn phi_positive(p: &Momentum) -> Float {
    PI + (-p[Y]).atan2(-p[X])
}

/// Pseudorapidity, saturating at ±1e10 along the beam axis
pub fn eta(p: &Momentum) -> Float {
    let p_norm = p_abs(p);
    if p_norm == 0. {
        return 0.;
    }
    let cos_theta = p[Z] / p_norm;
    if cos_theta * cos_theta < 1. {
        -0.5 * ln((1. - cos_theta) / (1. + cos_theta))
    } else if p[Z] > 0. {
        BEAM_AXIS_ETA
    } else {
        -BEAM_AXIS_ETA
    }
}

/// Rapidity, saturating at ±1e10 for massless particles along the beam axis
pub fn rapidity(p: &Momentum) -> Float {
    if p[E] > p[Z].abs() {
        0.5 * ln((p[E] + p[Z]) / (p[E] - p[Z]))
    } else {
        BEAM_AXIS_ETA.copysign(p[Z])
    }
}

/// Boost a 4-momentum along the beam axis by a rapidity shift
pub fn boost_z(p: &Momentum, dy: Float) -> Momentum {
    let (sinh_dy, cosh_dy) = (dy.sinh(), dy.cosh());
    momentum(
        p[X],
        p[Y],
        cosh_dy * p[Z] + sinh_dy * p[E],
        cosh_dy * p[E] + sinh_dy * p[Z],
    )
}
