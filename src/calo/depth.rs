//! Shower depth estimation

use super::CaloGeometry;
use crate::numeric::Float;

use prefix_num_ops::real::*;

use std::fmt::{self, Display};

/// Radiation length of the calorimeter material (cm)
const RADIATION_LENGTH: Float = 1.23;

/// Critical energy of the calorimeter material (MeV)
const CRITICAL_ENERGY: Float = 8.;

/// Assumed nature of the particle which produced a cluster
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ParticleType {
    /// Electromagnetic shower initiated by a photon
    #[default]
    Photon,

    /// Electromagnetic shower initiated by an electron
    Electron,

    /// Hadronic shower
    Hadron,
}
//
impl ParticleType {
    /// Decode the numerical code used in configuration files
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Photon),
            1 => Some(Self::Electron),
            2 => Some(Self::Hadron),
            _ => None,
        }
    }

    /// Numerical code used in configuration files
    pub fn code(self) -> i32 {
        match self {
            Self::Photon => 0,
            Self::Electron => 1,
            Self::Hadron => 2,
        }
    }
}

impl Display for ParticleType {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "{}", self.code())
    }
}

/// Longitudinal shower maximum, for a given cluster energy (GeV)
///
/// Hadronic showers are assumed to develop half-way through the super module
/// when the geometry knows how long it is, and like an electron otherwise.
///
pub fn shower_depth(
    energy: Float,
    particle: ParticleType,
    module: usize,
    geometry: &impl CaloGeometry,
) -> Float {
    let energy_mev = energy * 1000.;
    let electron = || RADIATION_LENGTH * ln(energy_mev / CRITICAL_ENERGY - 0.5);
    match particle {
        ParticleType::Photon => RADIATION_LENGTH * ln(energy_mev / CRITICAL_ENERGY + 0.5),
        ParticleType::Electron => electron(),
        ParticleType::Hadron => match geometry.module_half_length(module) {
            Some(half_length) => 0.5 * (2. * half_length),
            None => electron(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{calo::test_geometry::GridGeometry, numeric::assert_close};

    #[test]
    fn electromagnetic_depths() {
        let geom = GridGeometry::new();
        let e: Float = 2.;
        assert_close(
            shower_depth(e, ParticleType::Photon, 0, &geom),
            1.23 * ln(2000. / 8. + 0.5),
        );
        assert_close(
            shower_depth(e, ParticleType::Electron, 0, &geom),
            1.23 * ln(2000. / 8. - 0.5),
        );
    }

    #[test]
    fn hadron_depth_uses_geometry() {
        let mut geom = GridGeometry::new();
        let e: Float = 5.;
        assert_close(
            shower_depth(e, ParticleType::Hadron, 3, &geom),
            shower_depth(e, ParticleType::Electron, 3, &geom),
        );
        geom.half_length = Some(17.5);
        assert_close(shower_depth(e, ParticleType::Hadron, 3, &geom), 17.5);
    }

    #[test]
    fn depth_grows_with_energy() {
        let geom = GridGeometry::new();
        let low = shower_depth(0.5, ParticleType::Photon, 0, &geom);
        let high = shower_depth(50., ParticleType::Photon, 0, &geom);
        assert!(high > low);
    }
}
