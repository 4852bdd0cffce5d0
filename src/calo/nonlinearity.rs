//! Cluster energy non-linearity correction

use crate::numeric::{floats::consts::PI, Float};

use prefix_num_ops::real::*;
use tracing::debug;

use std::fmt::{self, Display};

/// Number of parameters of the non-linearity correction functions
pub const NUM_PARAMS: usize = 6;

/// Neutral pion mass (GeV), used to normalize the default parameters
const PI0_MASS: Float = 0.134_976_6;

/// Parametric model of the calorimeter response non-linearity
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NonLinearity {
    /// Fit to Monte-Carlo neutral pions:
    /// `p0·exp(-p1/E) + p2/(2π·p3)·exp(-(E-p4)²/(2·p3²))`
    Pi0Mc,

    /// Fit to neutral pions decaying into two calorimeter photons:
    /// `p0 + p1·exp(-p2·E)`
    #[default]
    Pi0GammaGamma,

    /// Fit to neutral pions with one converted photon:
    /// `p0·(1 - p1·exp(-p2·E))`
    Pi0GammaConversion,

    /// Leave the energy alone
    NoCorrection,
}
//
impl NonLinearity {
    /// Decode the numerical code used in configuration files
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Pi0Mc),
            1 => Some(Self::Pi0GammaGamma),
            2 => Some(Self::Pi0GammaConversion),
            3 => Some(Self::NoCorrection),
            _ => None,
        }
    }

    /// Numerical code used in configuration files
    pub fn code(self) -> i32 {
        match self {
            Self::Pi0Mc => 0,
            Self::Pi0GammaGamma => 1,
            Self::Pi0GammaConversion => 2,
            Self::NoCorrection => 3,
        }
    }

    /// Correct a raw cluster energy
    pub fn correct(self, energy: Float, params: &NonLinearityParams) -> Float {
        let p = &params.0;
        match self {
            Self::Pi0Mc => {
                let gauss_arg = (energy - p[4]) * (energy - p[4]) / (2. * p[3] * p[3]);
                energy
                    / (p[0] * exp(-p[1] / energy)
                        + p[2] / (p[3] * 2. * PI) * exp(-gauss_arg))
            }
            Self::Pi0GammaGamma => energy / (p[0] + p[1] * exp(-p[2] * energy)),
            Self::Pi0GammaConversion => energy / (p[0] * (1. - p[1] * exp(-p[2] * energy))),
            Self::NoCorrection => {
                debug!("No correction on the energy");
                energy
            }
        }
    }
}

impl Display for NonLinearity {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "{}", self.code())
    }
}

/// Parameters of the non-linearity correction function
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NonLinearityParams(pub [Float; NUM_PARAMS]);
//
impl Default for NonLinearityParams {
    /// Parameters of the default `Pi0GammaGamma` correction
    fn default() -> Self {
        let norm = PI0_MASS * 1.038;
        Self([0.1457 / norm, -0.02024 / norm, 1.046, 0., 0., 0.])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::assert_close;

    #[test]
    fn default_gamma_gamma() {
        let params = NonLinearityParams::default();
        let e = 1.5;
        let norm = PI0_MASS * 1.038;
        let expected = e / (0.1457 / norm - 0.02024 / norm * exp(-1.046 * e));
        assert_close(NonLinearity::default().correct(e, &params), expected);
    }

    #[test]
    fn literal_parameter_sets() {
        // p0 + p1·exp(-p2·E) = 1 + 0 => unchanged
        let flat = NonLinearityParams([1., 0., 1., 0., 0., 0.]);
        assert_close(NonLinearity::Pi0GammaGamma.correct(3., &flat), 3.);

        // 2·(1 - 0.5·exp(0)) = 1 => unchanged
        let conv = NonLinearityParams([2., 0.5, 0., 0., 0., 0.]);
        assert_close(NonLinearity::Pi0GammaConversion.correct(4., &conv), 4.);

        // 1.001·exp(0.01264/E) + gaussian term
        let mc = NonLinearityParams([1.001, -0.01264, -0.03632, 0.1798, -0.522, 0.]);
        let e: Float = 2.;
        let expected = e
            / (1.001 * exp(0.01264 / e)
                + (-0.03632) / (0.1798 * 2. * PI)
                    * exp(-(e + 0.522) * (e + 0.522) / (2. * 0.1798 * 0.1798)));
        assert_close(NonLinearity::Pi0Mc.correct(e, &mc), expected);
    }

    #[test]
    fn no_correction_is_identity() {
        let params = NonLinearityParams([9., 9., 9., 9., 9., 9.]);
        assert_eq!(NonLinearity::NoCorrection.correct(7.25, &params), 7.25);
    }

    #[test]
    fn deterministic() {
        let params = NonLinearityParams::default();
        let first = NonLinearity::Pi0GammaGamma.correct(0.8, &params);
        let second = NonLinearity::Pi0GammaGamma.correct(0.8, &params);
        assert_eq!(first, second);
    }

    #[test]
    fn codes() {
        for code in 0..4 {
            assert_eq!(NonLinearity::from_code(code).unwrap().code(), code);
        }
        assert_eq!(NonLinearity::from_code(4), None);
    }
}
