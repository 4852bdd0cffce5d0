//! Driver of the AMPT heavy-ion event generator
//!
//! The collision physics itself is delegated to a `CollisionEngine`. This
//! module configures it, filters the particles which it produces, enforces
//! the event trigger, and writes the selected particles to a `ParticleStack`
//! together with an event header.

pub mod engine;
pub mod generator;
pub mod header;
pub mod particle;
pub mod selection;
pub mod settings;
pub mod stack;
pub mod trigger;
pub mod xsection;

pub use self::{
    engine::{
        CollisionEngine, Collisions, EngineSetup, Nucleus, Participants, QuenchParameters,
        Quenching, Radiation,
    },
    generator::AmptGenerator,
    header::{EventHeader, Spectators},
    particle::{Particle, SpectatorSide},
    selection::{KinematicCuts, ParticleFilter, Window},
    settings::{AmptSettings, VertexSmearing},
    stack::{ParticleStack, Track, VecStack},
    trigger::{JetWindow, Trigger},
    xsection::CrossSections,
};

/// Collision engine replaying pre-recorded events
#[cfg(test)]
pub(crate) mod test_engine {
    use super::{
        engine::{CollisionEngine, Collisions, EngineSetup, Participants},
        particle::Particle,
    };
    use crate::{
        linalg::momentum::{momentum, Momentum},
        numeric::Float,
        Result,
    };

    use std::collections::VecDeque;

    fn gaussian_thickness(b: Float) -> Float {
        2. * (-b * b / 18.).exp()
    }

    /// Engine which hands out a fixed sequence of events, then empty ones
    pub struct ScriptedEngine {
        events: VecDeque<Vec<Particle>>,
        current: Vec<Particle>,
        pub setup: Option<EngineSetup>,
        pub initialized: bool,
        pub num_generated: usize,
        pub jets_before: [Momentum; 2],
        pub jets_after: [Momentum; 2],
        pub thickness: fn(Float) -> Float,
        pub sigma_nn: Float,
    }
    //
    impl ScriptedEngine {
        pub fn new(events: Vec<Vec<Particle>>) -> Self {
            Self {
                events: events.into(),
                current: Vec::new(),
                setup: None,
                initialized: false,
                num_generated: 0,
                jets_before: [momentum(0., 10., 0., 10.), momentum(0., -10., 0., 10.)],
                jets_after: [momentum(0., 9., 0., 9.), momentum(0., -9., 0., 9.)],
                thickness: gaussian_thickness,
                sigma_nn: 4.,
            }
        }
    }
    //
    impl CollisionEngine for ScriptedEngine {
        fn configure(&mut self, setup: &EngineSetup) -> Result<()> {
            self.setup = Some(setup.clone());
            Ok(())
        }

        fn initialize(&mut self) -> Result<()> {
            self.initialized = true;
            Ok(())
        }

        fn generate_event(&mut self) {
            self.num_generated += 1;
            self.current = self.events.pop_front().unwrap_or_default();
        }

        fn particles(&self) -> Vec<Particle> {
            self.current.clone()
        }

        fn impact_parameter(&self) -> Float {
            2.5
        }

        fn reaction_plane_angle(&self) -> Float {
            0.3
        }

        fn total_energy(&self) -> Float {
            1000.
        }

        fn hard_scatters(&self) -> u32 {
            3
        }

        fn participants(&self) -> Participants {
            Participants {
                projectile: 10,
                target: 12,
            }
        }

        fn collisions(&self) -> Collisions {
            Collisions {
                n: 20,
                n_wounded_proj: 5,
                n_wounded_targ: 6,
                n_wounded_both: 7,
            }
        }

        fn jets_before_radiation(&self) -> [Momentum; 2] {
            self.jets_before
        }

        fn jets_after_radiation(&self) -> [Momentum; 2] {
            self.jets_after
        }

        fn projectile_radius(&self) -> Float {
            7.
        }

        fn target_radius(&self) -> Float {
            7.
        }

        fn nn_inelastic_cross_section(&self) -> Float {
            self.sigma_nn
        }

        fn profile(&self, b: Float) -> Float {
            (self.thickness)(b)
        }
    }
}
