//! Selection of the generated particles which are written to the stack

use super::particle::{Particle, PDG_GAMMA, PDG_PI0};
use crate::numeric::{floats::consts::PI, Float};

/// Closed interval of accepted values
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Window {
    /// Lower bound
    pub min: Float,

    /// Upper bound
    pub max: Float,
}
//
impl Window {
    /// Build a window from its bounds
    pub fn new(min: Float, max: Float) -> Self {
        Self { min, max }
    }

    /// Truth that a value lies within the window, bounds included
    pub fn contains(&self, value: Float) -> bool {
        self.min <= value && value <= self.max
    }

    /// Truth that a value lies strictly within the window
    pub fn contains_strictly(&self, value: Float) -> bool {
        self.min < value && value < self.max
    }
}

/// Kinematic acceptance of generated particles
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KinematicCuts {
    /// Transverse momentum (GeV)
    pub pt: Window,

    /// Momentum (GeV)
    pub momentum: Window,

    /// Polar angle (rad)
    pub theta: Window,

    /// Azimuthal angle (rad, in [0, 2π))
    pub phi: Window,

    /// Rapidity
    pub rapidity: Window,
}
//
impl KinematicCuts {
    /// Truth that a particle lies within the acceptance
    pub fn accept(&self, particle: &Particle) -> bool {
        self.pt.contains(particle.pt())
            && self.momentum.contains(particle.p())
            && self.theta.contains(particle.theta())
            && self.phi.contains(particle.phi())
            && self.rapidity.contains(particle.rapidity())
    }
}
//
impl Default for KinematicCuts {
    /// Full acceptance
    fn default() -> Self {
        const HUGE: Float = 1e10;
        Self {
            pt: Window::new(0., HUGE),
            momentum: Window::new(0., HUGE),
            theta: Window::new(0., PI),
            phi: Window::new(0., 2. * PI),
            rapidity: Window::new(-HUGE, HUGE),
        }
    }
}

/// Per-particle selection criteria
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ParticleFilter {
    /// Flavor class: 0 selects everything, otherwise the leading heavy quark
    /// digit of the PDG code must match (4 = charm, 5 = beauty)
    pub flavor: u32,

    /// Reject photons and neutral pions
    pub no_gammas: bool,

    /// Kinematic acceptance
    pub cuts: KinematicCuts,
}
//
impl ParticleFilter {
    /// Flavor selection on a PDG code
    pub fn select_flavor(&self, pdg: i32) -> bool {
        let flavor_ok = if self.flavor == 0 {
            true
        } else {
            let mut leading = (pdg / 100).unsigned_abs();
            if leading > 10 {
                leading /= 10;
            }
            leading == self.flavor
        };
        flavor_ok && !(self.no_gammas && (pdg == PDG_GAMMA || pdg == PDG_PI0))
    }

    /// Kinematic selection
    pub fn kinematic_selection(&self, particle: &Particle) -> bool {
        self.cuts.accept(particle)
    }

    /// Combined flavor and kinematic selection of one particle
    pub fn select(&self, particle: &Particle) -> bool {
        self.kinematic_selection(particle) && self.select_flavor(particle.pdg)
    }

    /// Truth that one of the descendants of a particle is selected
    ///
    /// Daughters are inspected in order, each one before its own descendants,
    /// and the search stops at the first selected particle. Daughter indices
    /// which do not point into the event are ignored.
    ///
    pub fn has_selected_descendant(&self, particles: &[Particle], idx: usize) -> bool {
        let Some((first, last)) = particles.get(idx).and_then(|p| p.daughters) else {
            return false;
        };
        (first..=last).any(|daughter_idx| match particles.get(daughter_idx) {
            Some(daughter) => {
                self.select(daughter) || self.has_selected_descendant(particles, daughter_idx)
            }
            None => false,
        })
    }
}
