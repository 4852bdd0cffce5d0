//! Interface to the external nuclear collision Monte-Carlo engine
//!
//! The engine itself (AMPT, built on top of HIJING) is a Fortran program which
//! the embedding code wraps into a `CollisionEngine` implementation. This
//! module describes what the generator driver needs from it, and how it
//! configures it.

use super::particle::Particle;
use crate::{
    linalg::momentum::Momentum,
    numeric::Float,
    Result,
};

use eyre::ensure;

/// Collision nucleus or hadron
#[derive(Clone, Debug, PartialEq)]
pub struct Nucleus {
    /// Engine name of the beam particle ("A" for nuclei, "P", "N"...)
    pub name: String,

    /// Mass number
    pub a: u32,

    /// Atomic number
    pub z: u32,
}
//
impl Nucleus {
    /// Lead nucleus
    pub fn lead() -> Self {
        Self {
            name: "A".to_owned(),
            a: 208,
            z: 82,
        }
    }
}

/// Initial and final state radiation switches
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Radiation {
    /// No gluon radiation
    Off,

    /// Initial state radiation only
    InitialState,

    /// Final state radiation only
    FinalState,

    /// Both initial and final state radiation
    #[default]
    Both,
}
//
impl Radiation {
    /// Decode the engine switch value
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Off),
            1 => Some(Self::InitialState),
            2 => Some(Self::FinalState),
            3 => Some(Self::Both),
            _ => None,
        }
    }

    /// Engine switch value
    pub fn code(self) -> i32 {
        match self {
            Self::Off => 0,
            Self::InitialState => 1,
            Self::FinalState => 2,
            Self::Both => 3,
        }
    }
}

/// Jet quenching scenario
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Quenching {
    /// No quenching
    #[default]
    Off,

    /// Engine default parameters
    EngineDefault,

    /// LHC parameters
    Lhc,

    /// RHIC parameters
    Rhic,

    /// LHC parameters with a log(E) dependence of the energy loss
    LhcLogE,

    /// RHIC parameters with a log(E) dependence of the energy loss
    RhicLogE,
}
//
impl Quenching {
    /// Decode the scenario number used in configuration files
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            0 => Some(Self::Off),
            1 => Some(Self::EngineDefault),
            2 => Some(Self::Lhc),
            3 => Some(Self::Rhic),
            4 => Some(Self::LhcLogE),
            5 => Some(Self::RhicLogE),
            _ => None,
        }
    }

    /// Engine parameters implementing this scenario
    pub fn parameters(self) -> QuenchParameters {
        let tuned = |log_e_dependence, energy_loss, min_interacting_pt| QuenchParameters {
            enabled: true,
            log_e_dependence,
            energy_loss: Some(energy_loss),
            min_interacting_pt: Some(min_interacting_pt),
        };
        match self {
            Self::Off => QuenchParameters::default(),
            Self::EngineDefault => QuenchParameters {
                enabled: true,
                ..QuenchParameters::default()
            },
            Self::Lhc => tuned(false, 1.1, 3.7),
            Self::Rhic => tuned(false, 0.20, 2.5),
            Self::LhcLogE => tuned(true, 4. * 0.34, 3.7),
            Self::RhicLogE => tuned(true, 0.34, 2.5),
        }
    }
}

/// Jet quenching parameters handed over to the engine
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct QuenchParameters {
    /// Whether jet quenching is simulated at all
    pub enabled: bool,

    /// Whether the energy loss grows like log(E)
    pub log_e_dependence: bool,

    /// Gluon energy loss per unit length (GeV/fm), engine default if None
    pub energy_loss: Option<Float>,

    /// Minimal pt of a jet interacting with the medium (GeV), engine default
    /// if None
    pub min_interacting_pt: Option<Float>,
}

/// Complete engine configuration
#[derive(Clone, Debug, PartialEq)]
pub struct EngineSetup {
    /// Center of mass energy per nucleon pair (GeV)
    pub energy_cms: Float,

    /// Reference frame ("CMS" or "LAB")
    pub frame: String,

    /// Projectile
    pub projectile: Nucleus,

    /// Target
    pub target: Nucleus,

    /// Impact parameter range (fm)
    pub impact_range: (Float, Float),

    /// Gluon radiation switches
    pub radiation: Radiation,

    /// Jet trigger mode handed over to the engine
    pub trigger_mode: i32,

    /// Nuclear shadowing
    pub shadowing: bool,

    /// Whether particle decays are switched off
    pub decays_off: bool,

    /// Whether the full event history is kept
    pub keep_history: bool,

    /// Hard scattering pt range (GeV), negative maximum means no limit
    pub pt_hard_range: (Float, Float),

    /// Minimal pt of triggered jets (GeV)
    pub pt_min_jet: Float,

    /// Simple jet production without nuclear effects
    pub simple_jet: bool,

    /// Jet quenching parameters
    pub quenching: QuenchParameters,

    /// Whether heavy quark production is switched off
    pub no_heavy_quarks: bool,

    /// String melting (isoft) mode
    pub isoft: i32,

    /// Number of parton cascade time steps
    pub ntmax: i32,

    /// Popcorn mechanism switch
    pub ipop: i32,

    /// Parton screening mass (fm⁻¹)
    pub xmu: Float,

    /// Strong coupling constant of the parton cascade
    pub alpha: Float,

    /// Lund string fragmentation a and b parameters
    pub string_frag: (Float, Float),
}
//
impl EngineSetup {
    /// Check that the engine can make sense of this configuration
    pub fn validate(&self) -> Result<()> {
        const MAX_NAME_LEN: usize = 8;
        ensure!(self.energy_cms > 0., "Center of mass energy must be positive");
        ensure!(
            matches!(self.frame.as_str(), "CMS" | "LAB"),
            "Unsupported reference frame {}",
            self.frame
        );
        for nucleus in [&self.projectile, &self.target] {
            ensure!(
                !nucleus.name.is_empty() && nucleus.name.len() <= MAX_NAME_LEN,
                "Beam particle names must have 1 to {MAX_NAME_LEN} characters, got {:?}",
                nucleus.name
            );
            ensure!(
                nucleus.z <= nucleus.a,
                "Nucleus {} has more protons ({}) than nucleons ({})",
                nucleus.name,
                nucleus.z,
                nucleus.a
            );
        }
        let (b_min, b_max) = self.impact_range;
        ensure!(
            0. <= b_min && b_min <= b_max,
            "Invalid impact parameter range [{b_min}, {b_max}]"
        );
        Ok(())
    }
}

/// Binary collision counts
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Collisions {
    /// Number of binary collisions
    pub n: u32,

    /// Collisions between a wounded projectile and a target nucleon
    pub n_wounded_proj: u32,

    /// Collisions between a projectile and a wounded target nucleon
    pub n_wounded_targ: u32,

    /// Collisions between wounded nucleons
    pub n_wounded_both: u32,
}

/// Participant nucleon counts
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Participants {
    /// Participants from the projectile
    pub projectile: u32,

    /// Participants from the target
    pub target: u32,
}

/// External nuclear collision Monte-Carlo engine
pub trait CollisionEngine {
    /// Hand over the configuration, before initialization
    fn configure(&mut self, setup: &EngineSetup) -> Result<()>;

    /// Initialize the engine
    fn initialize(&mut self) -> Result<()>;

    /// Simulate one collision
    fn generate_event(&mut self);

    /// Particles of the last collision, in engine order
    fn particles(&self) -> Vec<Particle>;

    /// Impact parameter of the last collision (fm)
    fn impact_parameter(&self) -> Float;

    /// Reaction plane angle of the last collision (rad)
    fn reaction_plane_angle(&self) -> Float;

    /// Total energy of the last collision (GeV)
    fn total_energy(&self) -> Float;

    /// Number of hard scatterings of the last collision
    fn hard_scatters(&self) -> u32;

    /// Participant counts of the last collision
    fn participants(&self) -> Participants;

    /// Binary collision counts of the last collision
    fn collisions(&self) -> Collisions;

    /// 4-momenta of the two triggered jets before final state radiation
    fn jets_before_radiation(&self) -> [Momentum; 2];

    /// 4-momenta of the two triggered jets after final state radiation
    fn jets_after_radiation(&self) -> [Momentum; 2];

    /// Radius of the projectile nucleus (fm)
    fn projectile_radius(&self) -> Float;

    /// Radius of the target nucleus (fm)
    fn target_radius(&self) -> Float;

    /// Inelastic nucleon-nucleon cross section (fm²)
    fn nn_inelastic_cross_section(&self) -> Float;

    /// Nuclear overlap function at a given impact parameter (fm⁻²)
    fn profile(&self, b: Float) -> Float;
}
