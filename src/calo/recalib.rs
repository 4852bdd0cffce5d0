//! Per-channel energy recalibration factors

use crate::{numeric::Float, Result};

use eyre::ensure;

/// Number of calorimeter super modules
pub const NUM_MODULES: usize = 12;

/// Number of eta columns per super module
pub const NUM_COLUMNS: usize = 48;

/// Number of phi rows per super module
pub const NUM_ROWS: usize = 24;

/// Factors of one super module, indexed as [column][row]
type ModuleFactors = [[Float; NUM_ROWS]; NUM_COLUMNS];

/// Multiplicative recalibration factor of every calorimeter channel
#[derive(Clone, Debug, PartialEq)]
pub struct RecalibrationMap {
    modules: Vec<ModuleFactors>,
}
//
impl RecalibrationMap {
    /// Start with all factors equal to 1
    pub fn new() -> Self {
        Self {
            modules: vec![[[1.; NUM_ROWS]; NUM_COLUMNS]; NUM_MODULES],
        }
    }

    /// Number of super modules covered by the map
    pub fn modules(&self) -> usize {
        self.modules.len()
    }

    /// Recalibration factor of a channel, 1 for channels outside of the map
    pub fn factor(&self, module: usize, col: usize, row: usize) -> Float {
        self.modules
            .get(module)
            .and_then(|factors| factors.get(col))
            .and_then(|column| column.get(row))
            .copied()
            .unwrap_or(1.)
    }

    /// Set the recalibration factor of a channel
    pub fn set_factor(&mut self, module: usize, col: usize, row: usize, factor: Float) -> Result<()> {
        ensure!(
            module < self.modules() && col < NUM_COLUMNS && row < NUM_ROWS,
            "No calorimeter channel at module {module}, column {col}, row {row}"
        );
        self.modules[module][col][row] = factor;
        Ok(())
    }

    /// Truth that all factors are equal to 1
    pub fn is_identity(&self) -> bool {
        self.modules
            .iter()
            .flat_map(|module| module.iter().flatten())
            .all(|&factor| factor == 1.)
    }
}

impl Default for RecalibrationMap {
    fn default() -> Self {
        Self::new()
    }
}
