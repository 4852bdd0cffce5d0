//! Output particle stack

use super::header::EventHeader;
use crate::{
    linalg::{Position, Vector3},
    numeric::Float,
};

/// Particle record written to the output stack
#[derive(Clone, Debug, PartialEq)]
pub struct Track {
    /// Whether the particle should be transported through the detector
    pub tracked: bool,

    /// Stack index of the mother particle, if it is on the stack
    pub parent: Option<usize>,

    /// PDG code
    pub pdg: i32,

    /// 3-momentum (GeV)
    pub momentum: Vector3<Float>,

    /// Production vertex (cm)
    pub origin: Position,

    /// Polarization vector
    pub polarization: Vector3<Float>,

    /// Time of flight (s)
    pub time_of_flight: Float,

    /// Statistical weight
    pub weight: Float,

    /// Engine status code
    pub status: i32,
}
//
impl Track {
    /// Stack index of the parent, with -1 standing for "no parent"
    pub fn parent_index(&self) -> i64 {
        self.parent.map_or(-1, |idx| idx as i64)
    }
}

/// Destination of the particles selected by the generator
pub trait ParticleStack {
    /// Append a particle, returning its index within the stack
    fn push_track(&mut self, track: Track) -> usize;

    /// Attach the header of the event being written
    fn add_header(&mut self, header: EventHeader);

    /// Record the index of the last primary particle of the event
    fn set_high_water_mark(&mut self, _last_primary: usize) {}
}

/// In-memory particle stack
#[derive(Clone, Debug, Default)]
pub struct VecStack {
    /// Particles in stack order
    pub tracks: Vec<Track>,

    /// Headers of the events written so far
    pub headers: Vec<EventHeader>,

    /// Index of the last primary particle
    pub high_water_mark: Option<usize>,
}
//
impl VecStack {
    /// Start with an empty stack
    pub fn new() -> Self {
        Self::default()
    }
}

impl ParticleStack for VecStack {
    fn push_track(&mut self, track: Track) -> usize {
        self.tracks.push(track);
        self.tracks.len() - 1
    }

    fn add_header(&mut self, header: EventHeader) {
        self.headers.push(header);
    }

    fn set_high_water_mark(&mut self, last_primary: usize) {
        self.high_water_mark = Some(last_primary);
    }
}
