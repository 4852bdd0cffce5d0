//! Settings of the calorimeter reconstruction utilities

use super::{
    nonlinearity::NUM_PARAMS, recoutils::CellWeighting, NonLinearity, NonLinearityParams,
    ParticleType, PositionAlgorithm,
};
use crate::{
    config::{self, ConfigItems},
    linalg::{position, Position},
    numeric::Float,
    Result,
};

use eyre::{ensure, WrapErr};
use tracing::warn;

use std::{
    fmt::{self, Display},
    path::Path,
};

/// Number of detector sectors with their own misalignment correction
pub const NUM_SECTORS: usize = 5;

/// Number of misalignment shifts of each kind (x, y, z for every sector)
const NUM_SHIFTS: usize = 3 * NUM_SECTORS;

/// Misalignment corrections, as (x, y, z) triplets for each sector
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MisalignmentShifts {
    /// Translation shifts (cm)
    pub translation: [Float; NUM_SHIFTS],

    /// Rotation shifts (rad)
    pub rotation: [Float; NUM_SHIFTS],
}
//
impl MisalignmentShifts {
    /// Translation shift of a sector
    pub fn sector_translation(&self, sector: usize) -> Position {
        Self::triplet(&self.translation, sector)
    }

    /// Rotation shift of a sector
    pub fn sector_rotation(&self, sector: usize) -> Position {
        Self::triplet(&self.rotation, sector)
    }

    fn triplet(shifts: &[Float; NUM_SHIFTS], sector: usize) -> Position {
        let base = 3 * sector;
        position(shifts[base], shifts[base + 1], shifts[base + 2])
    }
}

/// Configuration of the calorimeter reconstruction utilities
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecoSettings {
    /// Non-linearity correction function
    pub non_linearity: NonLinearity,

    /// Parameters of the non-linearity correction function
    pub non_linearity_params: NonLinearityParams,

    /// Particle type assumed when computing the shower depth
    pub particle_type: ParticleType,

    /// Cluster position recalculation algorithm
    pub position_algorithm: PositionAlgorithm,

    /// Cell weighting used by position recalculation
    pub cell_weighting: CellWeighting,

    /// Whether per-channel recalibration factors are applied
    pub recalibration_on: bool,

    /// Misalignment corrections
    pub misalignment: MisalignmentShifts,
}
//
impl RecoSettings {
    /// Load the settings from a file and check them
    pub fn load(file_name: impl AsRef<Path>) -> Result<Self> {
        let text = config::read_file(file_name)?;
        Self::parse(&text).wrap_err("Invalid calorimeter reconstruction settings")
    }

    /// Decode settings from the contents of a configuration file
    ///
    /// Expected items, in order: non-linearity function code, its 6
    /// parameters, particle type code, position algorithm code, cell
    /// weighting code, w0, recalibration switch, 15 translation shifts and
    /// 15 rotation shifts.
    ///
    /// Unknown selector codes are not rejected. They select the fall-through
    /// behavior of each selector, with a warning.
    ///
    pub fn parse(text: &str) -> Result<Self> {
        let mut items = ConfigItems::new(text);

        let nl_code = items.next_item("non_linearity")?.parse::<i32>()?;
        let non_linearity = NonLinearity::from_code(nl_code).unwrap_or_else(|| {
            warn!("Unknown non-linearity function {nl_code}, energy will not be corrected");
            NonLinearity::NoCorrection
        });
        let mut params = [0.; NUM_PARAMS];
        for param in params.iter_mut() {
            *param = items.next_item("non_linearity_param")?.parse::<Float>()?;
        }

        let particle_code = items.next_item("particle_type")?.parse::<i32>()?;
        let particle_type = ParticleType::from_code(particle_code).unwrap_or_else(|| {
            warn!("Unknown particle type {particle_code}, assuming a photon");
            ParticleType::Photon
        });

        let algo_code = items.next_item("position_algorithm")?.parse::<i32>()?;
        let position_algorithm = PositionAlgorithm::from_code(algo_code).unwrap_or_else(|| {
            warn!("Unknown position algorithm {algo_code}, positions will not be changed");
            PositionAlgorithm::Unchanged
        });

        let weighting_code = items.next_item("cell_weighting")?.parse::<i32>()?;
        let w0 = items.next_item("w0")?.parse::<Float>()?;
        let cell_weighting = match weighting_code {
            1 => CellWeighting::Linear,
            0 => CellWeighting::Logarithmic { w0 },
            other => {
                warn!("Unknown cell weighting {other}, using logarithmic weights");
                CellWeighting::Logarithmic { w0 }
            }
        };

        let recalibration_on = items.next_item("recalibration")?.parse_bool()?;

        let mut misalignment = MisalignmentShifts::default();
        for shift in misalignment.translation.iter_mut() {
            *shift = items.next_item("misalignment_translation")?.parse::<Float>()?;
        }
        for shift in misalignment.rotation.iter_mut() {
            *shift = items.next_item("misalignment_rotation")?.parse::<Float>()?;
        }

        let settings = Self {
            non_linearity,
            non_linearity_params: NonLinearityParams(params),
            particle_type,
            position_algorithm,
            cell_weighting,
            recalibration_on,
            misalignment,
        };

        // Shifts which are not finite would poison every cluster position
        let all_shifts = settings.misalignment.translation.iter();
        let all_shifts = all_shifts.chain(settings.misalignment.rotation.iter());
        ensure!(
            all_shifts.copied().all(Float::is_finite),
            "Misalignment shifts must be finite numbers"
        );
        Ok(settings)
    }
}

impl Display for RecoSettings {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shifts = &self.misalignment;
        writeln!(fmt, "Calorimeter reconstruction settings:")?;
        writeln!(fmt, "Misalignment shifts")?;
        for sector in 0..NUM_SECTORS {
            let trans = shifts.sector_translation(sector);
            let rot = shifts.sector_rotation(sector);
            writeln!(
                fmt,
                "\t sector {sector}, translation (x,y,z)=({:.6},{:.6},{:.6}), rotation (x,y,z)=({:.6},{:.6},{:.6})",
                trans.x, trans.y, trans.z, rot.x, rot.y, rot.z
            )?;
        }
        writeln!(fmt, "Non linearity function {}, parameters:", self.non_linearity)?;
        for (i, param) in self.non_linearity_params.0.iter().enumerate() {
            writeln!(fmt, "param[{i}]={param:.6}")?;
        }
        write!(
            fmt,
            "Position Recalculation option {}, Particle Type {}, {}, Recalibrate Data {}",
            self.position_algorithm, self.particle_type, self.cell_weighting, self.recalibration_on
        )
    }
}
