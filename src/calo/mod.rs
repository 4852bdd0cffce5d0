//! Calorimeter cluster reconstruction utilities
//!
//! Clusters are groups of adjacent calorimeter cells in which one particle
//! deposited its energy. This module recomputes their energy (non-linearity
//! correction, per-channel recalibration) and their position (shower depth,
//! weighted cell centroid, misalignment correction).
//!
//! The detector geometry and the cell amplitude storage are provided by the
//! embedding code through the `CaloGeometry` and `CaloCells` traits.

mod depth;
mod nonlinearity;
mod recalib;
mod recoutils;
mod settings;

pub use self::{
    depth::{shower_depth, ParticleType},
    nonlinearity::{NonLinearity, NonLinearityParams},
    recalib::{RecalibrationMap, NUM_COLUMNS, NUM_MODULES, NUM_ROWS},
    recoutils::{CellWeighting, MaxCell, PositionAlgorithm, RecoUtils},
    settings::{MisalignmentShifts, RecoSettings, NUM_SECTORS},
};

use crate::{linalg::Position, numeric::Float};

use std::collections::BTreeMap;

/// One cell contributing to a cluster
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClusterCell {
    /// Absolute cell identifier
    pub abs_id: usize,

    /// Fraction of the cell amplitude attributed to this cluster. Zero when
    /// cluster unfolding is disabled, in which case the whole cell counts.
    pub fraction: Float,
}

/// Calorimeter cluster
#[derive(Clone, Debug, PartialEq)]
pub struct Cluster {
    /// Constituent cells
    pub cells: Vec<ClusterCell>,

    /// Total cluster energy (GeV)
    pub energy: Float,

    /// Global position of the cluster (cm)
    pub position: Position,
}
//
impl Cluster {
    /// Build a cluster from its constituents and energy, at the origin
    pub fn new(cells: Vec<ClusterCell>, energy: Float) -> Self {
        Self {
            cells,
            energy,
            position: Position::zeros(),
        }
    }
}

/// Location of a cell within the calorimeter
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellLocation {
    /// Super module number
    pub module: usize,

    /// Phi row within the super module
    pub row: usize,

    /// Eta column within the super module
    pub col: usize,
}

/// Measured cell amplitudes
pub trait CaloCells {
    /// Energy measured in a cell (GeV)
    fn amplitude(&self, abs_id: usize) -> Float;
}

/// Cells which are absent from the map did not fire
impl CaloCells for BTreeMap<usize, Float> {
    fn amplitude(&self, abs_id: usize) -> Float {
        self.get(&abs_id).copied().unwrap_or(0.)
    }
}

/// Calorimeter geometry services
pub trait CaloGeometry {
    /// Convert an absolute cell id into super module / row / column indices
    fn cell_location(&self, abs_id: usize) -> CellLocation;

    /// Position of a cell center within its super module, at a given depth
    fn relative_position_in_module(&self, abs_id: usize, depth: Float) -> Position;

    /// Transform a super module local position into the global frame
    fn local_to_global(&self, local: &Position, module: usize) -> Position;

    /// Global position of a (possibly fractional) tower index, corrected
    /// for the misalignment of the super module
    fn recalculate_tower_position(
        &self,
        row: Float,
        col: Float,
        module: usize,
        depth: Float,
        shifts: &MisalignmentShifts,
    ) -> Position;

    /// Half of the radial length of a super module, when a detailed geometry
    /// description is available
    fn module_half_length(&self, module: usize) -> Option<Float>;
}
