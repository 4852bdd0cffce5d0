//! Particles produced by the collision engine

use crate::{
    linalg::{
        momentum::{self, Momentum},
        Position,
    },
    numeric::Float,
};

/// PDG code of the string/cluster placeholder that heads hadronization
/// chains in the engine output
pub const PDG_PLACEHOLDER: i32 = 92;

/// PDG code of the photon
pub const PDG_GAMMA: i32 = 22;

/// PDG code of the neutral pion
pub const PDG_PI0: i32 = 111;

/// PDG code of the proton
pub const PDG_PROTON: i32 = 2212;

/// PDG code of the neutron
pub const PDG_NEUTRON: i32 = 2112;

/// Species tag of direct photons
pub const SPECIES_DIRECT_GAMMA: u32 = 40;

/// Origin of a spectator nucleon, from its species tag
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpectatorSide {
    /// Spectator from the projectile nucleus
    Projectile,

    /// Spectator from the target nucleus
    Target,
}
//
impl SpectatorSide {
    /// Classify a species tag, None for particles that are no spectators
    pub fn from_species(species: u32) -> Option<Self> {
        match species {
            0 | 1 => Some(Self::Projectile),
            10 | 11 => Some(Self::Target),
            _ => None,
        }
    }
}

/// Particle record, as imported from the collision engine
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    /// PDG code
    pub pdg: i32,

    /// Engine status code
    pub status: i32,

    /// Engine-specific species tag (spectators, direct photons...)
    pub species: Option<u32>,

    /// 4-momentum (GeV)
    pub momentum: Momentum,

    /// Production vertex (mm)
    pub vertex: Position,

    /// Production time (mm/c)
    pub time: Float,

    /// Index of the mother particle, if any
    pub mother: Option<usize>,

    /// Inclusive index range of the daughter particles, if any
    pub daughters: Option<(usize, usize)>,
}
//
impl Particle {
    /// Build a particle at the origin, with no mother nor daughters
    pub fn new(pdg: i32, momentum: Momentum) -> Self {
        Self {
            pdg,
            status: 1,
            species: None,
            momentum,
            vertex: Position::zeros(),
            time: 0.,
            mother: None,
            daughters: None,
        }
    }

    /// A particle is stable if it has no recorded daughters
    pub fn is_stable(&self) -> bool {
        self.daughters.is_none()
    }

    /// Transverse momentum
    pub fn pt(&self) -> Float {
        momentum::pt(&self.momentum)
    }

    /// Norm of the 3-momentum
    pub fn p(&self) -> Float {
        momentum::p_abs(&self.momentum)
    }

    /// Polar angle
    pub fn theta(&self) -> Float {
        momentum::theta(&self.momentum)
    }

    /// Azimuthal angle in [0, 2π)
    pub fn phi(&self) -> Float {
        momentum::phi_positive(&self.momentum)
    }

    /// Pseudorapidity
    pub fn eta(&self) -> Float {
        momentum::eta(&self.momentum)
    }

    /// Rapidity
    pub fn rapidity(&self) -> Float {
        momentum::rapidity(&self.momentum)
    }

    /// Spectator classification of this particle
    pub fn spectator_side(&self) -> Option<SpectatorSide> {
        self.species.and_then(SpectatorSide::from_species)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linalg::momentum::momentum;

    #[test]
    fn stability_follows_daughters() {
        let mut particle = Particle::new(PDG_PI0, momentum(0.1, 0., 0., 0.2));
        assert!(particle.is_stable());
        particle.daughters = Some((3, 4));
        assert!(!particle.is_stable());
        assert_eq!(particle.spectator_side(), None);
        particle.species = Some(11);
        assert_eq!(particle.spectator_side(), Some(SpectatorSide::Target));
    }

    #[test]
    fn spectator_tags() {
        assert_eq!(SpectatorSide::from_species(0), Some(SpectatorSide::Projectile));
        assert_eq!(SpectatorSide::from_species(1), Some(SpectatorSide::Projectile));
        assert_eq!(SpectatorSide::from_species(10), Some(SpectatorSide::Target));
        assert_eq!(SpectatorSide::from_species(11), Some(SpectatorSide::Target));
        assert_eq!(SpectatorSide::from_species(2), None);
        assert_eq!(SpectatorSide::from_species(SPECIES_DIRECT_GAMMA), None);
    }
}
