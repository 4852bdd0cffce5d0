//! Settings of the AMPT event generator driver

use super::{
    engine::{EngineSetup, Nucleus, Quenching, Radiation},
    selection::{ParticleFilter, Window},
    trigger::{JetWindow, Trigger},
};
use crate::{
    config::{self, ConfigItems},
    linalg::{position, Position},
    numeric::{floats::consts::PI, Float},
    Result,
};

use eyre::{ensure, format_err, WrapErr};

use std::{
    fmt::{self, Display},
    path::Path,
};

/// Event vertex randomization
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum VertexSmearing {
    /// All events are produced at the nominal origin
    #[default]
    None,

    /// A gaussian vertex is drawn for each event
    PerEvent {
        /// Standard deviation along each axis (cm)
        sigma: Position,

        /// Truncation of the gaussian, in units of sigma
        cut: Option<Float>,
    },
}

/// Configuration of the AMPT event generator driver
#[derive(Clone, Debug, PartialEq)]
pub struct AmptSettings {
    /// Center of mass energy per nucleon pair (GeV)
    pub energy_cms: Float,

    /// Reference frame of the engine ("CMS" or "LAB")
    pub frame: String,

    /// Projectile
    pub projectile: Nucleus,

    /// Target
    pub target: Nucleus,

    /// Impact parameter range (fm)
    pub impact_range: (Float, Float),

    /// Number of selected particles to accumulate per event, None to stop
    /// after the first engine event with selected particles
    pub target_multiplicity: Option<usize>,

    /// Write every particle to the stack, bypassing the filter
    pub select_all: bool,

    /// Per-particle selection criteria
    pub filter: ParticleFilter,

    /// Keep spectator nucleons on the stack
    pub spectators: bool,

    /// Event trigger condition
    pub trigger: Trigger,

    /// Jet quenching scenario
    pub quenching: Quenching,

    /// Nuclear shadowing
    pub shadowing: bool,

    /// Switch off particle decays within the engine
    pub decays_off: bool,

    /// Keep the full event history
    pub keep_history: bool,

    /// Gluon radiation switches
    pub radiation: Radiation,

    /// Hard scattering pt range (GeV), negative maximum means no limit
    pub pt_hard_range: (Float, Float),

    /// Minimal pt of triggered jets (GeV)
    pub pt_min_jet: Float,

    /// Simple jet production without nuclear effects
    pub simple_jet: bool,

    /// Switch off heavy quark production
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

    /// Evaluate the geometrical cross sections at initialization
    pub evaluate_cross_sections: bool,

    /// Flip the sign of pz for a random half of the events
    pub random_pz: bool,

    /// Rapidity shift boosting the events into the laboratory frame
    pub lab_boost: Option<Float>,

    /// Transport stable particles through the detector
    pub track_it: bool,

    /// Nominal interaction point (cm)
    pub origin: Position,

    /// Event vertex randomization
    pub vertex_smearing: VertexSmearing,

    /// Derive the interaction time from the vertex position
    pub vertex_range_time: bool,

    /// Width of the pile-up time window (s), zero to disable
    pub pile_up_window: Float,
}
//
impl Default for AmptSettings {
    /// Lead-lead collisions at 5.5 TeV
    fn default() -> Self {
        Self {
            energy_cms: 5500.,
            frame: "CMS".to_owned(),
            projectile: Nucleus::lead(),
            target: Nucleus::lead(),
            impact_range: (0., 5.),
            target_multiplicity: None,
            select_all: false,
            filter: ParticleFilter::default(),
            spectators: true,
            trigger: Trigger::None,
            quenching: Quenching::Off,
            shadowing: true,
            decays_off: true,
            keep_history: false,
            radiation: Radiation::Both,
            pt_hard_range: (2., -1.),
            pt_min_jet: -2.5,
            simple_jet: false,
            no_heavy_quarks: false,
            isoft: 1,
            ntmax: 150,
            ipop: 1,
            xmu: 3.2264,
            alpha: 1. / 3.,
            string_frag: (0.5, 0.9),
            evaluate_cross_sections: false,
            random_pz: false,
            lab_boost: None,
            track_it: true,
            origin: Position::zeros(),
            vertex_smearing: VertexSmearing::None,
            vertex_range_time: false,
            pile_up_window: 0.,
        }
    }
}
//
impl AmptSettings {
    /// Load the settings from a file and check them
    pub fn load(file_name: impl AsRef<Path>) -> Result<Self> {
        let text = config::read_file(file_name)?;
        Self::parse(&text).wrap_err("Invalid AMPT generator settings")
    }

    /// Decode settings from the contents of a configuration file
    pub fn parse(text: &str) -> Result<Self> {
        let mut items = ConfigItems::new(text);
        let mut next = |name: &'static str| items.next_item(name);

        let energy_cms = next("energy_cms")?.parse::<Float>()?;
        let frame = next("frame")?.as_str().to_uppercase();
        let mut nucleus = |name_tag: &'static str, a_tag, z_tag| -> Result<Nucleus> {
            Ok(Nucleus {
                name: next(name_tag)?.as_str().to_uppercase(),
                a: next(a_tag)?.parse::<u32>()?,
                z: next(z_tag)?.parse::<u32>()?,
            })
        };
        let projectile = nucleus("projectile", "projectile_a", "projectile_z")?;
        let target = nucleus("target", "target_a", "target_z")?;
        let impact_range = (
            next("b_min")?.parse::<Float>()?,
            next("b_max")?.parse::<Float>()?,
        );
        let target_multiplicity = next("n_part")?.parse_limit()?;

        let select_all = next("select_all")?.parse_bool()?;
        let mut filter = ParticleFilter {
            flavor: next("flavor")?.parse::<u32>()?,
            no_gammas: next("no_gammas")?.parse_bool()?,
            ..ParticleFilter::default()
        };
        let spectators = next("spectators")?.parse_bool()?;
        filter.cuts.pt = Window::new(next("pt_min")?.parse()?, next("pt_max")?.parse()?);
        filter.cuts.rapidity = Window::new(next("y_min")?.parse()?, next("y_max")?.parse()?);

        let trigger_code = next("trigger")?.parse::<i32>()?;
        let jet_window = JetWindow {
            eta: Window::new(next("eta_min_jet")?.parse()?, next("eta_max_jet")?.parse()?),
            phi: Window::new(next("phi_min_jet")?.parse()?, next("phi_max_jet")?.parse()?),
        };
        let trigger = Trigger::from_code(trigger_code, jet_window)
            .ok_or_else(|| format_err!("Unknown trigger mode {trigger_code}"))?;

        let quench_code = next("quench")?.parse::<u32>()?;
        let quenching = Quenching::from_code(quench_code)
            .ok_or_else(|| format_err!("Unknown quenching scenario {quench_code}"))?;
        let shadowing = next("shadowing")?.parse_bool()?;
        let decays_off = next("decays_off")?.parse_bool()?;
        let keep_history = next("keep")?.parse_bool()?;
        let radiation_code = next("radiation")?.parse::<i32>()?;
        let radiation = Radiation::from_code(radiation_code)
            .ok_or_else(|| format_err!("Unknown radiation mode {radiation_code}"))?;
        let pt_hard_range = (
            next("pt_hard_min")?.parse::<Float>()?,
            next("pt_hard_max")?.parse::<Float>()?,
        );
        let pt_min_jet = next("pt_min_jet")?.parse::<Float>()?;
        let simple_jet = next("simple_jet")?.parse_bool()?;
        let no_heavy_quarks = next("no_heavy_quarks")?.parse_bool()?;

        let isoft = next("isoft")?.parse::<i32>()?;
        let ntmax = next("ntmax")?.parse::<i32>()?;
        let ipop = next("ipop")?.parse::<i32>()?;
        let xmu = next("xmu")?.parse::<Float>()?;
        let alpha = next("alpha")?.parse::<Float>()?;
        let string_frag = (
            next("string_a")?.parse::<Float>()?,
            next("string_b")?.parse::<Float>()?,
        );

        let evaluate_cross_sections = next("evaluate")?.parse_bool()?;
        let random_pz = next("random_pz")?.parse_bool()?;
        let lab_boost = Some(next("lab_boost")?.parse::<Float>()?).filter(|&dy| dy != 0.);
        let track_it = next("track_it")?.parse_bool()?;

        let mut vector = |tag_x: &'static str, tag_y, tag_z| -> Result<Position> {
            Ok(position(
                next(tag_x)?.parse()?,
                next(tag_y)?.parse()?,
                next(tag_z)?.parse()?,
            ))
        };
        let origin = vector("origin_x", "origin_y", "origin_z")?;
        let sigma = vector("sigma_x", "sigma_y", "sigma_z")?;
        let cut = next("vertex_cut")?.parse::<Float>()?;
        let vertex_smearing = if sigma == Position::zeros() {
            VertexSmearing::None
        } else {
            VertexSmearing::PerEvent {
                sigma,
                cut: Some(cut).filter(|&c| c > 0.),
            }
        };
        let vertex_range_time = next("vertex_range_time")?.parse_bool()?;
        let pile_up_window = next("pile_up_window")?.parse::<Float>()?;

        let settings = Self {
            energy_cms,
            frame,
            projectile,
            target,
            impact_range,
            target_multiplicity,
            select_all,
            filter,
            spectators,
            trigger,
            quenching,
            shadowing,
            decays_off,
            keep_history,
            radiation,
            pt_hard_range,
            pt_min_jet,
            simple_jet,
            no_heavy_quarks,
            isoft,
            ntmax,
            ipop,
            xmu,
            alpha,
            string_frag,
            evaluate_cross_sections,
            random_pz,
            lab_boost,
            track_it,
            origin,
            vertex_smearing,
            vertex_range_time,
            pile_up_window,
        };
        settings.validate()?;
        Ok(settings)
    }

    /// Check the consistency of the settings
    pub fn validate(&self) -> Result<()> {
        self.engine_setup().validate()?;
        ensure!(
            self.pile_up_window >= 0.,
            "The pile-up time window cannot be negative"
        );
        if let VertexSmearing::PerEvent { sigma, .. } = self.vertex_smearing {
            ensure!(
                sigma.iter().all(|&s| s >= 0.),
                "Vertex spread must be non-negative"
            );
        }
        let phi = self.filter.cuts.phi;
        ensure!(
            phi.min >= 0. && phi.max <= 2. * PI,
            "Azimuthal cuts must lie within [0, 2π]"
        );
        Ok(())
    }

    /// Engine configuration matching these settings
    pub fn engine_setup(&self) -> EngineSetup {
        EngineSetup {
            energy_cms: self.energy_cms,
            frame: self.frame.clone(),
            projectile: self.projectile.clone(),
            target: self.target.clone(),
            impact_range: self.impact_range,
            radiation: self.radiation,
            trigger_mode: self.trigger.code(),
            shadowing: self.shadowing,
            decays_off: self.decays_off,
            keep_history: self.keep_history,
            pt_hard_range: self.pt_hard_range,
            pt_min_jet: self.pt_min_jet,
            simple_jet: self.simple_jet,
            quenching: self.quenching.parameters(),
            no_heavy_quarks: self.no_heavy_quarks,
            isoft: self.isoft,
            ntmax: self.ntmax,
            ipop: self.ipop,
            xmu: self.xmu,
            alpha: self.alpha,
            string_frag: self.string_frag,
        }
    }
}

impl Display for AmptSettings {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        let nucleus = |n: &Nucleus| format!("{} (A={}, Z={})", n.name, n.a, n.z);
        writeln!(fmt, "ECMS           : {}", self.energy_cms)?;
        writeln!(fmt, "FRAME          : {}", self.frame)?;
        writeln!(fmt, "PROJECTILE     : {}", nucleus(&self.projectile))?;
        writeln!(fmt, "TARGET         : {}", nucleus(&self.target))?;
        writeln!(fmt, "BMIN, BMAX     : {}, {}", self.impact_range.0, self.impact_range.1)?;
        let npart = self
            .target_multiplicity
            .map_or_else(|| "-1".to_owned(), |n| n.to_string());
        writeln!(fmt, "NPART          : {npart}")?;
        writeln!(fmt, "SELECT ALL     : {}", self.select_all)?;
        writeln!(fmt, "FLAVOR         : {}", self.filter.flavor)?;
        writeln!(fmt, "NO GAMMAS      : {}", self.filter.no_gammas)?;
        writeln!(fmt, "SPECTATORS     : {}", self.spectators)?;
        writeln!(fmt, "TRIGGER        : {}", self.trigger.code())?;
        writeln!(fmt, "QUENCH         : {:?}", self.quenching)?;
        writeln!(fmt, "RADIATION      : {}", self.radiation.code())?;
        writeln!(fmt, "PTHARD         : {}, {}", self.pt_hard_range.0, self.pt_hard_range.1)?;
        write!(
            fmt,
            "ISOFT, NTMAX   : {}, {}\nXMU, ALPHA     : {}, {}",
            self.isoft, self.ntmax, self.xmu, self.alpha
        )
    }
}
