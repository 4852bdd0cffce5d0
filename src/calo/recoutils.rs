//! Cluster energy and position recalculation

use super::{
    shower_depth, CaloCells, CaloGeometry, CellLocation, Cluster, MisalignmentShifts,
    NonLinearity, NonLinearityParams, ParticleType, RecalibrationMap, RecoSettings,
};
use crate::{linalg::Position, numeric::Float};

use prefix_num_ops::real::*;
use tracing::debug;

use std::fmt::{self, Display};

/// Below this amplitude fraction, cells count fully (unfolding is off)
const MIN_FRACTION: Float = 1e-4;

/// Same as MIN_FRACTION, when recalibrating the cluster energy
const MIN_FRACTION_RECALIBRATION: Float = 1e-5;

/// Super modules beyond this one belong to the second sector
const LAST_MODULE_OF_FIRST_SECTOR: usize = 1;

/// Algorithm used to recompute cluster positions
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PositionAlgorithm {
    /// Leave cluster positions alone
    Unchanged,

    /// Average the tower indices, then convert them to a global position
    #[default]
    TowerIndex,

    /// Average the global positions of the towers
    TowerGlobal,
}
//
impl PositionAlgorithm {
    /// Decode the numerical code used in configuration files
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            -1 => Some(Self::Unchanged),
            0 => Some(Self::TowerIndex),
            1 => Some(Self::TowerGlobal),
            _ => None,
        }
    }

    /// Numerical code used in configuration files
    pub fn code(self) -> i32 {
        match self {
            Self::Unchanged => -1,
            Self::TowerIndex => 0,
            Self::TowerGlobal => 1,
        }
    }
}

impl Display for PositionAlgorithm {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "{}", self.code())
    }
}

/// Weight of a cell's contribution to the cluster position
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CellWeighting {
    /// `w0 + ln(e_cell / e_cluster)`, which may be negative
    Logarithmic {
        /// Weight offset, sets the energy fraction below which cells drop out
        w0: Float,
    },

    /// `e_cell / e_cluster`, yielding the plain energy centroid
    Linear,
}
//
impl CellWeighting {
    /// Weight of a cell, given its energy and the cluster energy
    pub fn weight(self, e_cell: Float, e_cluster: Float) -> Float {
        match self {
            Self::Logarithmic { w0 } => w0 + ln(e_cell / e_cluster),
            Self::Linear => e_cell / e_cluster,
        }
    }
}

impl Default for CellWeighting {
    fn default() -> Self {
        Self::Logarithmic { w0: 4. }
    }
}

impl Display for CellWeighting {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Logarithmic { w0 } => write!(fmt, "fW0 {w0:.2}"),
            Self::Linear => write!(fmt, "linear weights"),
        }
    }
}

/// Most energetic cell of a cluster
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MaxCell {
    /// Absolute cell identifier
    pub abs_id: usize,

    /// Location of the cell within the calorimeter
    pub location: CellLocation,

    /// Effective cell energy (amplitude x fraction x recalibration)
    pub energy: Float,
}

/// Calorimeter cluster recalculation toolbox
#[derive(Clone, Debug, Default)]
pub struct RecoUtils {
    settings: RecoSettings,
    recalibration: RecalibrationMap,
}
//
impl RecoUtils {
    // ### CONFIGURATION ###

    /// Set up the recalculation tools, with unit recalibration factors
    pub fn new(settings: RecoSettings) -> Self {
        Self {
            settings,
            recalibration: RecalibrationMap::new(),
        }
    }

    /// Current settings
    pub fn settings(&self) -> &RecoSettings {
        &self.settings
    }

    /// Select the non-linearity correction function
    pub fn set_non_linearity(&mut self, function: NonLinearity, params: NonLinearityParams) {
        self.settings.non_linearity = function;
        self.settings.non_linearity_params = params;
    }

    /// Select the particle type assumed for shower depth computations
    pub fn set_particle_type(&mut self, particle: ParticleType) {
        self.settings.particle_type = particle;
    }

    /// Select the position recalculation algorithm
    pub fn set_position_algorithm(&mut self, algorithm: PositionAlgorithm) {
        self.settings.position_algorithm = algorithm;
    }

    /// Select the cell weighting used by position recalculation
    pub fn set_cell_weighting(&mut self, weighting: CellWeighting) {
        self.settings.cell_weighting = weighting;
    }

    /// Set the misalignment corrections
    pub fn set_misalignment(&mut self, shifts: MisalignmentShifts) {
        self.settings.misalignment = shifts;
    }

    /// Toggle the per-channel recalibration
    pub fn switch_recalibration(&mut self, on: bool) {
        self.settings.recalibration_on = on;
    }

    /// Truth that per-channel recalibration is applied
    pub fn is_recalibration_on(&self) -> bool {
        self.settings.recalibration_on
    }

    /// Access the recalibration factors
    pub fn recalibration(&self) -> &RecalibrationMap {
        &self.recalibration
    }

    /// Modify the recalibration factors
    pub fn recalibration_mut(&mut self) -> &mut RecalibrationMap {
        &mut self.recalibration
    }

    // ### ENERGY ###

    /// Apply the non-linearity correction to a raw energy
    pub fn correct_energy_linearity(&self, energy: Float) -> Float {
        self.settings
            .non_linearity
            .correct(energy, &self.settings.non_linearity_params)
    }

    /// Apply the non-linearity correction to a cluster, returning the result
    pub fn correct_cluster_energy_linearity(&self, cluster: &mut Cluster) -> Float {
        cluster.energy = self.correct_energy_linearity(cluster.energy);
        cluster.energy
    }

    /// Shower depth of a cluster of a given energy in a given super module
    pub fn depth(&self, energy: Float, module: usize, geometry: &impl CaloGeometry) -> Float {
        shower_depth(energy, self.settings.particle_type, module, geometry)
    }

    /// Find the cell with the largest effective energy
    ///
    /// When several cells share the maximal energy, the first one wins.
    ///
    pub fn max_energy_cell(
        &self,
        geometry: &impl CaloGeometry,
        cells: &impl CaloCells,
        cluster: &Cluster,
    ) -> Option<MaxCell> {
        let mut max_cell: Option<MaxCell> = None;
        for cell in &cluster.cells {
            let location = geometry.cell_location(cell.abs_id);
            let energy = self.effective_cell_energy(cells, cell.abs_id, cell.fraction, &location);
            if max_cell.map_or(true, |max| energy > max.energy) {
                max_cell = Some(MaxCell {
                    abs_id: cell.abs_id,
                    location,
                    energy,
                });
            }
        }
        max_cell
    }

    /// Recompute the cluster energy from its cells and the recalibration map
    ///
    /// Cells from super modules that the map does not cover are dropped.
    ///
    pub fn recalibrate_cluster_energy(
        &self,
        geometry: &impl CaloGeometry,
        cells: &impl CaloCells,
        cluster: &mut Cluster,
    ) {
        let mut energy = 0.;
        for cell in &cluster.cells {
            let fraction = if cell.fraction < MIN_FRACTION_RECALIBRATION {
                1.
            } else {
                cell.fraction
            };
            let location = geometry.cell_location(cell.abs_id);
            if location.module >= self.recalibration.modules() {
                continue;
            }
            let factor = self.channel_factor(&location);
            let amplitude = cells.amplitude(cell.abs_id);
            debug!(
                "Recalibrate cell: module {}, col {}, row {}, cell fraction {fraction}, \
                 recalibration factor {factor}, cell energy {amplitude}",
                location.module, location.col, location.row
            );
            energy += amplitude * factor * fraction;
        }
        debug!("Cluster energy before {}, after {energy}", cluster.energy);
        cluster.energy = energy;
    }

    // ### POSITION ###

    /// Weight of a cell in position recalculation
    pub fn cell_weight(&self, e_cell: Float, e_cluster: Float) -> Float {
        self.settings.cell_weighting.weight(e_cell, e_cluster)
    }

    /// Recompute the cluster position with the configured algorithm
    ///
    /// The cluster energy is expected to be recalibrated already.
    ///
    pub fn recalculate_cluster_position(
        &self,
        geometry: &impl CaloGeometry,
        cells: &impl CaloCells,
        cluster: &mut Cluster,
    ) {
        match self.settings.position_algorithm {
            PositionAlgorithm::TowerGlobal => {
                self.recalculate_position_from_tower_global(geometry, cells, cluster)
            }
            PositionAlgorithm::TowerIndex => {
                self.recalculate_position_from_tower_index(geometry, cells, cluster)
            }
            PositionAlgorithm::Unchanged => {}
        }
    }

    /// Average the global positions of the cells, then correct for the
    /// translation misalignment of the sector of the most energetic cell
    ///
    /// Negative logarithmic weights are used as they are here, unlike in the
    /// tower index algorithm.
    ///
    pub fn recalculate_position_from_tower_global(
        &self,
        geometry: &impl CaloGeometry,
        cells: &impl CaloCells,
        cluster: &mut Cluster,
    ) {
        let Some(max_cell) = self.max_energy_cell(geometry, cells, cluster) else {
            return;
        };
        let max_module = max_cell.location.module;
        let cl_energy = cluster.energy;
        let depth = self.depth(cl_energy, max_module, geometry);

        let mut new_pos = Position::zeros();
        let mut total_weight = 0.;
        for cell in &cluster.cells {
            let location = geometry.cell_location(cell.abs_id);
            let e_cell = self.effective_cell_energy(cells, cell.abs_id, cell.fraction, &location);
            let weight = self.cell_weight(e_cell, cl_energy);
            total_weight += weight;
            let local = geometry.relative_position_in_module(cell.abs_id, depth);
            let global = geometry.local_to_global(&local, max_module);
            new_pos += weight * global;
        }
        if total_weight > 0. {
            new_pos /= total_weight;
        }

        let sector = if max_module > LAST_MODULE_OF_FIRST_SECTOR { 1 } else { 0 };
        new_pos += self.settings.misalignment.sector_translation(sector);
        cluster.position = new_pos;
    }

    /// Average the tower indices of the cells, then let the geometry convert
    /// them into a global position with the full misalignment correction
    ///
    /// Clusters spanning several super modules are located at the most
    /// energetic cell instead.
    ///
    pub fn recalculate_position_from_tower_index(
        &self,
        geometry: &impl CaloGeometry,
        cells: &impl CaloCells,
        cluster: &mut Cluster,
    ) {
        let Some(max_cell) = self.max_energy_cell(geometry, cells, cluster) else {
            return;
        };
        let max_loc = max_cell.location;
        let cl_energy = cluster.energy;
        let depth = self.depth(cl_energy, max_loc.module, geometry);

        let (mut weighted_col, mut weighted_row, mut total_weight) = (0., 0., 0.);
        let first_module = geometry.cell_location(cluster.cells[0].abs_id).module;
        let mut same_module = true;
        for cell in &cluster.cells {
            let location = geometry.cell_location(cell.abs_id);
            same_module &= location.module == first_module;
            let e_cell = self.effective_cell_energy(cells, cell.abs_id, cell.fraction, &location);
            let weight = self.cell_weight(e_cell, cl_energy).max(0.);
            total_weight += weight;
            weighted_col += location.col as Float * weight;
            weighted_row += location.row as Float * weight;
        }

        let (row, col) = if same_module && total_weight > 0. {
            (weighted_row / total_weight, weighted_col / total_weight)
        } else {
            (max_loc.row as Float, max_loc.col as Float)
        };
        cluster.position = geometry.recalculate_tower_position(
            row,
            col,
            max_loc.module,
            depth,
            &self.settings.misalignment,
        );
    }

    // ### INTERNALS ###

    /// Recalibration factor of the channel at a given location
    fn channel_factor(&self, location: &CellLocation) -> Float {
        self.recalibration
            .factor(location.module, location.col, location.row)
    }

    /// Cell energy attributed to a cluster, recalibrated if enabled
    fn effective_cell_energy(
        &self,
        cells: &impl CaloCells,
        abs_id: usize,
        fraction: Float,
        location: &CellLocation,
    ) -> Float {
        let fraction = if fraction < MIN_FRACTION { 1. } else { fraction };
        let recal_factor = if self.is_recalibration_on() {
            self.channel_factor(location)
        } else {
            1.
        };
        cells.amplitude(abs_id) * fraction * recal_factor
    }
}

impl Display for RecoUtils {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.settings, fmt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        calo::{
            test_geometry::{GridGeometry, MODULE_OFFSET, PITCH, RADIUS},
            ClusterCell, NUM_MODULES,
        },
        linalg::position,
        numeric::assert_close,
    };
    use std::collections::BTreeMap;

    /// Build a cluster and the matching cell amplitudes from
    /// (module, row, col, amplitude, fraction) tuples
    fn make_cluster(cells: &[(usize, usize, usize, Float, Float)]) -> (Cluster, BTreeMap<usize, Float>) {
        let mut amplitudes = BTreeMap::new();
        let mut members = Vec::new();
        let mut energy = 0.;
        for &(module, row, col, amplitude, fraction) in cells {
            let abs_id = GridGeometry::abs_id(module, row, col);
            amplitudes.insert(abs_id, amplitude);
            members.push(ClusterCell { abs_id, fraction });
            energy += amplitude;
        }
        (Cluster::new(members, energy), amplitudes)
    }

    fn assert_position_close(actual: &Position, expected: &Position) {
        for i in 0..3 {
            assert_close(actual[i], expected[i]);
        }
    }

    #[test]
    fn max_cell_is_order_invariant() {
        let geom = GridGeometry::new();
        let utils = RecoUtils::default();
        let cells = [(0, 1, 1, 0.5, 0.), (0, 1, 2, 2.5, 0.), (0, 2, 1, 1.5, 0.)];
        let (cluster, amplitudes) = make_cluster(&cells);
        let max = utils.max_energy_cell(&geom, &amplitudes, &cluster).unwrap();
        assert_eq!(max.abs_id, GridGeometry::abs_id(0, 1, 2));
        assert_eq!(max.location, CellLocation { module: 0, row: 1, col: 2 });
        assert_eq!(max.energy, 2.5);

        let mut reversed = cells;
        reversed.reverse();
        let (cluster, amplitudes) = make_cluster(&reversed);
        let max2 = utils.max_energy_cell(&geom, &amplitudes, &cluster).unwrap();
        assert_eq!(max, max2);
    }

    #[test]
    fn max_cell_ties_keep_first() {
        let geom = GridGeometry::new();
        let utils = RecoUtils::default();
        let (cluster, amplitudes) = make_cluster(&[(1, 3, 3, 2., 0.), (1, 3, 4, 2., 0.)]);
        let max = utils.max_energy_cell(&geom, &amplitudes, &cluster).unwrap();
        assert_eq!(max.abs_id, GridGeometry::abs_id(1, 3, 3));
        assert!(utils
            .max_energy_cell(&geom, &amplitudes, &Cluster::new(Vec::new(), 0.))
            .is_none());
    }

    #[test]
    fn max_cell_uses_fractions_and_factors() {
        let geom = GridGeometry::new();
        let mut utils = RecoUtils::default();
        // Second cell only gets 30% of its amplitude, tiny fractions count fully
        let (cluster, amplitudes) = make_cluster(&[(0, 0, 0, 2., 0.5e-4), (0, 0, 1, 3., 0.3)]);
        let max = utils.max_energy_cell(&geom, &amplitudes, &cluster).unwrap();
        assert_eq!(max.abs_id, GridGeometry::abs_id(0, 0, 0));

        // Recalibration factors only matter once recalibration is on
        utils.recalibration_mut().set_factor(0, 1, 0, 10.).unwrap();
        let max = utils.max_energy_cell(&geom, &amplitudes, &cluster).unwrap();
        assert_eq!(max.abs_id, GridGeometry::abs_id(0, 0, 0));
        utils.switch_recalibration(true);
        let max = utils.max_energy_cell(&geom, &amplitudes, &cluster).unwrap();
        assert_eq!(max.abs_id, GridGeometry::abs_id(0, 0, 1));
        assert_close(max.energy, 9.);
    }

    #[test]
    fn recalibration_with_unit_factors_keeps_energy() {
        let geom = GridGeometry::new();
        let utils = RecoUtils::default();
        let (mut cluster, amplitudes) = make_cluster(&[(0, 4, 4, 1.25, 0.), (0, 4, 5, 0.5, 0.)]);
        let before = cluster.energy;
        utils.recalibrate_cluster_energy(&geom, &amplitudes, &mut cluster);
        assert_close(cluster.energy, before);
    }

    #[test]
    fn recalibration_is_deterministic() {
        let geom = GridGeometry::new();
        let mut utils = RecoUtils::default();
        utils.recalibration_mut().set_factor(3, 7, 2, 1.1).unwrap();
        let (mut cluster, amplitudes) = make_cluster(&[(3, 2, 7, 2., 0.), (3, 2, 8, 1., 0.5)]);
        utils.recalibrate_cluster_energy(&geom, &amplitudes, &mut cluster);
        let first = cluster.energy;
        assert_close(first, 2. * 1.1 + 0.5);
        utils.recalibrate_cluster_energy(&geom, &amplitudes, &mut cluster);
        assert_eq!(cluster.energy, first);
    }

    #[test]
    fn recalibration_skips_unknown_modules() {
        let geom = GridGeometry::new();
        let utils = RecoUtils::default();
        let (mut cluster, amplitudes) =
            make_cluster(&[(0, 0, 0, 1., 0.), (NUM_MODULES, 0, 0, 5., 0.)]);
        utils.recalibrate_cluster_energy(&geom, &amplitudes, &mut cluster);
        assert_close(cluster.energy, 1.);
    }

    #[test]
    fn linearity_correction_on_cluster() {
        let mut utils = RecoUtils::default();
        utils.set_non_linearity(
            NonLinearity::Pi0GammaGamma,
            NonLinearityParams([2., 0., 1., 0., 0., 0.]),
        );
        let (mut cluster, _) = make_cluster(&[(0, 0, 0, 3., 0.)]);
        assert_close(utils.correct_cluster_energy_linearity(&mut cluster), 1.5);
        assert_close(cluster.energy, 1.5);
    }

    #[test]
    fn global_position_is_energy_centroid() {
        let geom = GridGeometry::new();
        let mut utils = RecoUtils::default();
        utils.set_position_algorithm(PositionAlgorithm::TowerGlobal);
        utils.set_cell_weighting(CellWeighting::Linear);
        let (mut cluster, amplitudes) = make_cluster(&[(0, 2, 3, 1., 0.), (0, 2, 4, 3., 0.)]);
        utils.recalculate_cluster_position(&geom, &amplitudes, &mut cluster);
        let depth = shower_depth(4., ParticleType::Photon, 0, &geom);
        let expected = position(RADIUS + depth, 2. * PITCH, 0.25 * 3. * PITCH + 0.75 * 4. * PITCH);
        assert_position_close(&cluster.position, &expected);
    }

    #[test]
    fn global_position_sector_translation() {
        let geom = GridGeometry::new();
        let mut utils = RecoUtils::default();
        utils.set_position_algorithm(PositionAlgorithm::TowerGlobal);
        utils.set_cell_weighting(CellWeighting::Linear);
        let mut shifts = MisalignmentShifts::default();
        shifts.translation[..6].copy_from_slice(&[1., 2., 3., 10., 20., 30.]);
        utils.set_misalignment(shifts);

        let (mut cluster, amplitudes) = make_cluster(&[(1, 0, 0, 1., 0.)]);
        utils.recalculate_cluster_position(&geom, &amplitudes, &mut cluster);
        let depth = shower_depth(1., ParticleType::Photon, 1, &geom);
        let expected = position(RADIUS + depth + 1., 2., MODULE_OFFSET + 3.);
        assert_position_close(&cluster.position, &expected);

        let (mut cluster, amplitudes) = make_cluster(&[(2, 0, 0, 1., 0.)]);
        utils.recalculate_cluster_position(&geom, &amplitudes, &mut cluster);
        let depth = shower_depth(1., ParticleType::Photon, 2, &geom);
        let expected = position(RADIUS + depth + 10., 20., 2. * MODULE_OFFSET + 30.);
        assert_position_close(&cluster.position, &expected);
    }

    #[test]
    fn index_position_clamps_negative_weights() {
        let geom = GridGeometry::new();
        let utils = RecoUtils::default();
        assert_eq!(utils.settings().position_algorithm, PositionAlgorithm::TowerIndex);
        let cells = [(0, 5, 3, 1., 0.), (0, 6, 4, 3., 0.), (0, 20, 40, 0.001, 0.)];
        let (mut cluster, amplitudes) = make_cluster(&cells);
        let e = cluster.energy;
        utils.recalculate_cluster_position(&geom, &amplitudes, &mut cluster);

        let w1 = 4. + ln(1. / e);
        let w2 = 4. + ln(3. / e);
        assert!(4. + ln(0.001 / e) < 0.);
        let row = (5. * w1 + 6. * w2) / (w1 + w2);
        let col = (3. * w1 + 4. * w2) / (w1 + w2);
        let depth = shower_depth(e, ParticleType::Photon, 0, &geom);
        let expected = position(RADIUS + depth, row * PITCH, col * PITCH);
        assert_position_close(&cluster.position, &expected);
    }

    #[test]
    fn global_position_keeps_negative_weights() {
        let geom = GridGeometry::new();
        let mut utils = RecoUtils::default();
        utils.set_position_algorithm(PositionAlgorithm::TowerGlobal);
        let cells = [(0, 5, 3, 1., 0.), (0, 6, 4, 3., 0.), (0, 20, 40, 0.001, 0.)];
        let (mut cluster, amplitudes) = make_cluster(&cells);
        let e = cluster.energy;
        utils.recalculate_cluster_position(&geom, &amplitudes, &mut cluster);

        let weights: Vec<Float> = cells.iter().map(|c| 4. + ln(c.3 / e)).collect();
        let total: Float = weights.iter().sum();
        let row = cells.iter().zip(&weights).map(|(c, w)| c.1 as Float * w).sum::<Float>() / total;
        let col = cells.iter().zip(&weights).map(|(c, w)| c.2 as Float * w).sum::<Float>() / total;
        let depth = shower_depth(e, ParticleType::Photon, 0, &geom);
        let expected = position(RADIUS + depth, row * PITCH, col * PITCH);
        assert_position_close(&cluster.position, &expected);
    }

    #[test]
    fn index_position_across_modules_uses_max_cell() {
        let geom = GridGeometry::new();
        let mut utils = RecoUtils::default();
        let mut shifts = MisalignmentShifts::default();
        shifts.translation[3] = 5.;
        utils.set_misalignment(shifts);
        let (mut cluster, amplitudes) = make_cluster(&[(2, 1, 47, 1., 0.), (3, 1, 0, 2., 0.)]);
        utils.recalculate_cluster_position(&geom, &amplitudes, &mut cluster);
        let depth = shower_depth(3., ParticleType::Photon, 3, &geom);
        let expected = position(RADIUS + depth + 5., PITCH, 3. * MODULE_OFFSET);
        assert_position_close(&cluster.position, &expected);
    }

    #[test]
    fn unchanged_algorithm_and_empty_clusters() {
        let geom = GridGeometry::new();
        let mut utils = RecoUtils::default();
        let (mut cluster, amplitudes) = make_cluster(&[(0, 1, 1, 1., 0.)]);
        cluster.position = position(1., 2., 3.);
        utils.set_position_algorithm(PositionAlgorithm::Unchanged);
        utils.recalculate_cluster_position(&geom, &amplitudes, &mut cluster);
        assert_eq!(cluster.position, position(1., 2., 3.));

        let mut empty = Cluster::new(Vec::new(), 1.);
        for algo in [PositionAlgorithm::TowerIndex, PositionAlgorithm::TowerGlobal] {
            utils.set_position_algorithm(algo);
            utils.recalculate_cluster_position(&geom, &amplitudes, &mut empty);
            assert_eq!(empty.position, Position::zeros());
        }
    }

    #[test]
    fn hadron_depth_follows_geometry() {
        let mut geom = GridGeometry::new();
        geom.half_length = Some(12.);
        let mut utils = RecoUtils::default();
        utils.set_particle_type(ParticleType::Hadron);
        let (mut cluster, amplitudes) = make_cluster(&[(0, 0, 0, 2., 0.)]);
        utils.recalculate_cluster_position(&geom, &amplitudes, &mut cluster);
        assert_position_close(&cluster.position, &position(RADIUS + 12., 0., 0.));
    }
}
