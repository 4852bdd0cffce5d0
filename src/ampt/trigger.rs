//! Event-level trigger conditions

use super::{
    engine::CollisionEngine,
    particle::{Particle, PDG_GAMMA, SPECIES_DIRECT_GAMMA},
    selection::Window,
};
use crate::{
    linalg::momentum::{self, Momentum},
    numeric::{floats::consts::PI, Float},
};

/// Pseudorapidity and azimuth window of the triggered object
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct JetWindow {
    /// Pseudorapidity window
    pub eta: Window,

    /// Azimuthal window (rad)
    pub phi: Window,
}
//
impl JetWindow {
    /// Truth that a direction lies strictly within the window
    pub fn contains(&self, eta: Float, phi: Float) -> bool {
        self.eta.contains_strictly(eta) && self.phi.contains_strictly(phi)
    }
}
//
impl Default for JetWindow {
    fn default() -> Self {
        Self {
            eta: Window::new(-20., 20.),
            phi: Window::new(0., 2. * PI),
        }
    }
}

/// Trigger condition gating the acceptance of whole events
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Trigger {
    /// Accept every event
    #[default]
    None,

    /// One of the two jets (after final state radiation) within the window
    DiJet(JetWindow),

    /// A direct photon within the window
    GammaJet(JetWindow),
}
//
impl Trigger {
    /// Build a trigger from its configuration code
    pub fn from_code(code: i32, window: JetWindow) -> Option<Self> {
        match code {
            0 => Some(Self::None),
            1 => Some(Self::DiJet(window)),
            2 => Some(Self::GammaJet(window)),
            _ => None,
        }
    }

    /// Configuration code of this trigger, also understood by the engine
    pub fn code(&self) -> i32 {
        match self {
            Self::None => 0,
            Self::DiJet(_) => 1,
            Self::GammaJet(_) => 2,
        }
    }

    /// Evaluate the trigger condition on the last generated event
    ///
    /// Jet azimuths are taken in (-π, π] while particle azimuths are taken in
    /// [0, 2π), following the conventions of the engine's output records.
    ///
    pub fn check(&self, engine: &impl CollisionEngine, particles: &[Particle]) -> bool {
        match self {
            Self::None => true,
            Self::DiJet(window) => engine
                .jets_after_radiation()
                .iter()
                .any(|jet: &Momentum| window.contains(momentum::eta(jet), momentum::phi_signed(jet))),
            Self::GammaJet(window) => particles
                .iter()
                .filter(|p| p.pdg == PDG_GAMMA && p.species == Some(SPECIES_DIRECT_GAMMA))
                .any(|p| window.contains(p.eta(), p.phi())),
        }
    }
}
