//! Event generation loop of the AMPT driver

use super::{
    engine::CollisionEngine,
    header::{EventHeader, Spectators},
    particle::{Particle, SpectatorSide, PDG_NEUTRON, PDG_PLACEHOLDER, PDG_PROTON},
    settings::{AmptSettings, VertexSmearing},
    stack::{ParticleStack, Track},
    xsection::CrossSections,
};
use crate::{
    linalg::{
        momentum::{self, X, Y, Z},
        Position, Vector3,
    },
    numeric::{floats::consts::PI, Float, SPEED_OF_LIGHT_CM_S},
    random::{EngineRandom, UniformSource},
    Result,
};

use eyre::WrapErr;
use prefix_num_ops::real::*;
use tracing::info;

/// Conversion factor from mm/c to seconds
const MM_PER_C_TO_S: Float = 0.1 / SPEED_OF_LIGHT_CM_S;

/// AMPT event generator, producing one event per `generate` call
pub struct AmptGenerator<E: CollisionEngine> {
    /// Generator configuration
    settings: AmptSettings,

    /// Collision engine doing the physics
    engine: E,

    /// Geometrical cross sections, if they were evaluated
    cross_sections: Option<CrossSections>,

    /// Header of the last generated event
    header: Option<EventHeader>,

    /// Number of engine calls spent on the last event
    trials: u32,

    /// Kinematic bias of the last event
    kine_bias: Float,
}
//
impl<E: CollisionEngine> AmptGenerator<E> {
    /// Configure and initialize the collision engine
    pub fn new(settings: AmptSettings, mut engine: E) -> Result<Self> {
        settings.validate()?;
        engine
            .configure(&settings.engine_setup())
            .wrap_err("Failed to configure the collision engine")?;
        engine
            .initialize()
            .wrap_err("Failed to initialize the collision engine")?;
        let cross_sections = settings
            .evaluate_cross_sections
            .then(|| CrossSections::evaluate(&engine, settings.impact_range));
        Ok(Self {
            settings,
            engine,
            cross_sections,
            header: None,
            trials: 0,
            kine_bias: 1.,
        })
    }

    /// Generate one event and write its selected particles to the stack
    ///
    /// Engine events are requested until one passes the trigger and yields
    /// selected particles, or until the target multiplicity is reached if
    /// one is configured. Every engine call counts as one trial.
    ///
    pub fn generate(
        &mut self,
        rng: &mut impl UniformSource,
        stack: &mut impl ParticleStack,
    ) -> Result<()> {
        let mut rng = EngineRandom::with_generator(rng);
        let settings = &self.settings;

        // ### EVENT SETUP ###

        self.trials = 0;
        let vertex = draw_vertex(settings.origin, settings.vertex_smearing, &mut rng);
        let sign = if settings.random_pz && rng.draw() < 0.5 {
            -1.
        } else {
            1.
        };

        let mut accumulated = 0;
        let mut n_produced = 0;
        let mut spectators = Spectators::default();
        let mut interaction_time = 0.;
        let mut last_primary = None;

        // ### GENERATION LOOP ###

        loop {
            self.engine.generate_event();
            self.trials += 1;
            let mut particles = self.engine.particles();
            if particles.is_empty() {
                continue;
            }
            if !settings.trigger.check(&self.engine, &particles) {
                continue;
            }
            if let Some(dy) = settings.lab_boost {
                for particle in &mut particles {
                    particle.momentum = momentum::boost_z(&particle.momentum, dy);
                }
            }

            let selected = select_particles(settings, &particles);
            spectators = count_spectators(&particles);

            // Interaction time of this engine event
            interaction_time = if settings.vertex_range_time {
                sign * vertex[2] / SPEED_OF_LIGHT_CM_S
            } else if settings.pile_up_window > 0. {
                settings.pile_up_window * (2. * rng.draw() - 1.)
            } else {
                0.
            };

            // Write particles to the stack, remapping mother indices
            let mut new_pos = vec![None; particles.len()];
            let mut num_written = 0;
            for (idx, particle) in particles.iter().enumerate() {
                if !selected[idx] {
                    continue;
                }
                let parent = particle.mother.and_then(|mother_idx| {
                    let mother = particles.get(mother_idx)?;
                    if mother.pdg == PDG_PLACEHOLDER {
                        None
                    } else {
                        new_pos[mother_idx]
                    }
                });
                let p = &particle.momentum;
                let track = Track {
                    tracked: settings.track_it && particle.is_stable(),
                    parent,
                    pdg: particle.pdg,
                    momentum: Vector3::new(p[X], p[Y], p[Z] * sign),
                    origin: vertex + particle.vertex / 10.,
                    polarization: Vector3::zeros(),
                    time_of_flight: MM_PER_C_TO_S * particle.time + interaction_time,
                    weight: 1.,
                    status: particle.status,
                };
                let stack_idx = stack.push_track(track);
                new_pos[idx] = Some(stack_idx);
                last_primary = Some(stack_idx);
                num_written += 1;
            }
            info!("Put {num_written} particles on the stack");
            n_produced += num_written;

            if num_written > 0 {
                accumulated += num_written;
                let target = settings.target_multiplicity;
                if target.map_or(true, |n| accumulated >= n) {
                    self.kine_bias = target.map_or(-1., |n| n as Float) / self.trials as Float;
                    info!(
                        "Trials: {}, target multiplicity: {target:?}, accumulated: {accumulated}",
                        self.trials
                    );
                    break;
                }
            }
        }

        // ### EVENT HEADER ###

        let header = EventHeader::from_engine(
            &self.engine,
            n_produced,
            spectators,
            self.trials,
            vertex,
            interaction_time,
        );
        stack.add_header(header.clone());
        self.header = Some(header);
        if let Some(last_primary) = last_primary {
            stack.set_high_water_mark(last_primary);
        }
        Ok(())
    }

    /// Generator configuration
    pub fn settings(&self) -> &AmptSettings {
        &self.settings
    }

    /// Collision engine
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Header of the last generated event
    pub fn header(&self) -> Option<&EventHeader> {
        self.header.as_ref()
    }

    /// Number of engine calls spent on the last event
    pub fn trials(&self) -> u32 {
        self.trials
    }

    /// Ratio of the target multiplicity to the number of trials of the last
    /// event, negative when no target multiplicity is configured
    pub fn kine_bias(&self) -> Float {
        self.kine_bias
    }

    /// Geometrical cross sections, if requested in the settings
    pub fn cross_sections(&self) -> Option<&CrossSections> {
        self.cross_sections.as_ref()
    }
}

/// Decide which particles of an engine event go to the stack
///
/// Unstable particles are kept when they pass the filter or when one of their
/// descendants does. String placeholders are never kept.
///
fn select_particles(settings: &AmptSettings, particles: &[Particle]) -> Vec<bool> {
    let filter = &settings.filter;
    particles
        .iter()
        .enumerate()
        .map(|(idx, particle)| {
            if particle.is_stable() {
                if settings.select_all {
                    return true;
                }
                let is_spectator = particle
                    .species
                    .and_then(SpectatorSide::from_species)
                    .is_some();
                filter.select(particle) && (settings.spectators || !is_spectator)
            } else if particle.pdg == PDG_PLACEHOLDER {
                false
            } else {
                settings.select_all
                    || filter.select(particle)
                    || filter.has_selected_descendant(particles, idx)
            }
        })
        .collect()
}

/// Count the spectator nucleons among the stable particles
fn count_spectators(particles: &[Particle]) -> Spectators {
    let mut spectators = Spectators::default();
    for particle in particles.iter().filter(|p| p.is_stable()) {
        let Some(side) = particle.species.and_then(SpectatorSide::from_species) else {
            continue;
        };
        let counter = match (side, particle.pdg) {
            (SpectatorSide::Projectile, PDG_NEUTRON) => &mut spectators.projectile_neutrons,
            (SpectatorSide::Projectile, PDG_PROTON) => &mut spectators.projectile_protons,
            (SpectatorSide::Target, PDG_NEUTRON) => &mut spectators.target_neutrons,
            (SpectatorSide::Target, PDG_PROTON) => &mut spectators.target_protons,
            _ => continue,
        };
        *counter += 1;
    }
    spectators
}

/// Event vertex, smeared around the origin if requested
fn draw_vertex<R: UniformSource>(
    origin: Position,
    smearing: VertexSmearing,
    rng: &mut EngineRandom<R>,
) -> Position {
    let VertexSmearing::PerEvent { sigma, cut } = smearing else {
        return origin;
    };
    let mut vertex = origin;
    for axis in 0..3 {
        let deviation = loop {
            let z = cos(2. * PI * rng.draw()) * sqrt(-2. * ln(rng.draw()));
            if cut.map_or(true, |cut| z.abs() <= cut) {
                break z;
            }
        };
        vertex[axis] += sigma[axis] * deviation;
    }
    vertex
}
