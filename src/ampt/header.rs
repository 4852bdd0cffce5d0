//! Summary record of a generated event

use super::engine::{Collisions, CollisionEngine, Participants};
use crate::{
    linalg::{momentum::Momentum, Position},
    numeric::Float,
};

/// Spectator nucleon counts
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Spectators {
    /// Projectile spectator neutrons
    pub projectile_neutrons: u32,

    /// Projectile spectator protons
    pub projectile_protons: u32,

    /// Target spectator neutrons
    pub target_neutrons: u32,

    /// Target spectator protons
    pub target_protons: u32,
}

/// Event header, filled once per accepted event
#[derive(Clone, Debug, PartialEq)]
pub struct EventHeader {
    /// Number of particles written to the stack
    pub n_produced: usize,

    /// Impact parameter (fm)
    pub impact_parameter: Float,

    /// Total energy of the collision (GeV)
    pub total_energy: Float,

    /// Number of hard scatterings
    pub hard_scatters: u32,

    /// Participant nucleons
    pub participants: Participants,

    /// Binary collisions
    pub collisions: Collisions,

    /// Spectator nucleons
    pub spectators: Spectators,

    /// Reaction plane angle (rad)
    pub reaction_plane_angle: Float,

    /// Triggered jets before final state radiation
    pub jets_before_radiation: [Momentum; 2],

    /// Triggered jets after final state radiation
    pub jets_after_radiation: [Momentum; 2],

    /// Number of engine calls needed to produce this event
    pub trials: u32,

    /// Primary vertex (cm)
    pub primary_vertex: Position,

    /// Interaction time (s)
    pub interaction_time: Float,
}
//
impl EventHeader {
    /// Collect the engine observables of the last event, together with the
    /// bookkeeping of the generator
    pub fn from_engine(
        engine: &impl CollisionEngine,
        n_produced: usize,
        spectators: Spectators,
        trials: u32,
        primary_vertex: Position,
        interaction_time: Float,
    ) -> Self {
        Self {
            n_produced,
            impact_parameter: engine.impact_parameter(),
            total_energy: engine.total_energy(),
            hard_scatters: engine.hard_scatters(),
            participants: engine.participants(),
            collisions: engine.collisions(),
            spectators,
            reaction_plane_angle: engine.reaction_plane_angle(),
            jets_before_radiation: engine.jets_before_radiation(),
            jets_after_radiation: engine.jets_after_radiation(),
            trials,
            primary_vertex,
            interaction_time,
        }
    }
}
