//! Glauber estimate of the geometrical cross sections

use super::engine::CollisionEngine;
use crate::numeric::{floats::consts::PI, Float};

use prefix_num_ops::real::*;
use tracing::{debug, info};

/// Impact parameter step of the integration (fm)
const B_STEP: Float = 0.2;

/// Cross section of a hard nucleon-nucleon scattering (mb)
const SIGMA_HARD: Float = 0.1;

/// Relative increase of the total cross section below which the integration
/// is considered converged
const CONVERGENCE: Float = 1e-4;

/// Conversion from fm² to barn
const FM2_TO_BARN: Float = 0.01;

/// Geometrical cross sections of the configured collision system
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CrossSections {
    /// Total inelastic cross section (barn)
    pub total: Float,

    /// Hard scattering cross section (barn)
    pub hard: Float,

    /// Cross section within the configured impact parameter range (barn)
    pub partial: Float,

    /// Hard cross section within the configured impact parameter range (barn)
    pub partial_hard: Float,

    /// dσ/db as (b, value) points
    pub dsigma_db: Vec<(Float, Float)>,

    /// Fraction of hard collisions as a function of b, as (b, value) points
    pub dn_db: Vec<(Float, Float)>,
}
//
impl CrossSections {
    /// Integrate the nuclear overlap of the engine's nuclei over the impact
    /// parameter, up to the sum of their radii or until convergence
    pub fn evaluate(engine: &impl CollisionEngine, impact_range: (Float, Float)) -> Self {
        let (b_min_cut, b_max_cut) = impact_range;
        let b_max = engine.projectile_radius() + engine.target_radius();
        let num_steps = (b_max / B_STEP) as usize + 1;
        let sigma_nn = engine.nn_inelastic_cross_section();
        info!("Projectile radius (fm): {}", engine.projectile_radius());
        info!("Target radius (fm): {}", engine.target_radius());

        let mut result = Self::default();
        let mut old_total = 0.;
        for i in 0..num_steps {
            let b = i as Float * B_STEP;
            let overlap = engine.profile(b);
            let ring = 2. * FM2_TO_BARN * PI * B_STEP * b;
            let gb = ring * (1. - exp(-sigma_nn * overlap));
            let gbh = ring * SIGMA_HARD * overlap;
            result.total += gb;
            result.hard += gbh;
            debug!("Profile at b = {b}: {overlap}");

            if b > b_min_cut && b < b_max_cut {
                result.partial += gb;
                result.partial_hard += gbh;
            }

            if old_total != 0. && (result.total - old_total) / old_total < CONVERGENCE {
                break;
            }
            old_total = result.total;
            debug!(
                "Step {i}, b = {b}: total {} barn, hard {} barn",
                result.total, result.hard
            );

            // The first point is pinned below, at b = 0
            let hard_fraction = if gb > 0. { gbh / gb } else { 0. };
            result.dsigma_db.push((b, gb / B_STEP));
            result.dn_db.push((b, hard_fraction));
        }

        if let Some(first) = result.dsigma_db.first_mut() {
            *first = (0., 0.);
        }
        let second_fraction = result.dn_db.get(1).map(|&(_, v)| v);
        if let (Some(first), Some(value)) = (result.dn_db.first_mut(), second_fraction) {
            first.1 = value;
        }

        info!("Total cross section (barn): {}", result.total);
        info!("Hard cross section (barn): {}", result.hard);
        info!(
            "Partial cross section (barn): {} ({}%)",
            result.partial,
            result.partial / result.total * 100.
        );
        info!(
            "Partial hard cross section (barn): {} ({}%)",
            result.partial_hard,
            result.partial_hard / result.hard * 100.
        );
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ampt::test_engine::ScriptedEngine, numeric::assert_close};

    fn black_disk(b: Float) -> Float {
        if b < 5.1 {
            1e3
        } else {
            0.
        }
    }

    #[test]
    fn black_disk_cross_sections() {
        let mut engine = ScriptedEngine::new(Vec::new());
        engine.thickness = black_disk;
        engine.sigma_nn = 1.;
        let xs = CrossSections::evaluate(&engine, (0., 2.1));

        // Rings at b = 0, 0.2, ..., 5.0 are fully absorbing
        assert_close(xs.total, 0.004 * PI * 65.);
        assert_close(xs.hard, 0.004 * PI * 65. * 100.);
        assert_close(xs.partial, 0.004 * PI * 11.);
        assert!(xs.partial_hard < xs.hard);

        // Integration stops at the first empty ring
        assert_eq!(xs.dsigma_db.len(), 26);
        assert_eq!(xs.dn_db.len(), 26);
        assert_eq!(xs.dsigma_db[0], (0., 0.));
        assert_eq!(xs.dn_db[0].1, xs.dn_db[1].1);
        assert_close(xs.dsigma_db[5].1, 2. * 0.01 * PI * 1.);
    }

    #[test]
    fn smooth_profile_converges() {
        let engine = ScriptedEngine::new(Vec::new());
        let xs = CrossSections::evaluate(&engine, (0., 5.));
        assert!(xs.total > 0.);
        assert!(xs.partial > 0. && xs.partial < xs.total);
        let max_b = engine.projectile_radius() + engine.target_radius();
        assert!(xs.dsigma_db.iter().all(|&(b, v)| b <= max_b && v >= 0.));
    }
}
