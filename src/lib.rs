//! ionsim: heavy-ion simulation and reconstruction utilities
//!
//!
//! # Introduction (for the physicist)
//!
//! This crate gathers three pieces of a heavy-ion experiment's software stack:
//!
//! * Reconstruction utilities for an electromagnetic calorimeter, which
//!   correct the energy of clusters for the non-linear response of the
//!   detector, re-apply per-cell calibration factors, and recompute the
//!   cluster position from its cells, taking the depth of the shower into
//!   account.
//! * A driver for the AMPT event generator, which steers a collision engine,
//!   selects the particles that it produces, enforces event triggers and
//!   fills an output stack together with an event header.
//! * A random number bridge for the Fortran-era physics engines, which must
//!   never be handed exactly 0 or 1.
//!
//!
//! # Introduction (for the computer guy)
//!
//! The detector geometry, the calorimeter cell store, the collision engine
//! and the output particle stack are all external collaborators. They are
//! modeled as traits (`CaloGeometry`, `CaloCells`, `CollisionEngine`,
//! `ParticleStack`) so that real implementations can be plugged in and tests
//! can use lightweight fakes.
//!
//! Randomness is never global: every consumer takes a generator handle.
//!
//! Settings are loaded from Fortran-style steering files, where the first
//! chunk of text on each line is the value of the next setting.

#![warn(missing_docs)]

pub mod ampt;
pub mod calo;
pub mod config;
pub mod linalg;
pub mod numeric;
pub mod random;

/// We'll use eyre for general-purpose error handling
pub type Result<T> = eyre::Result<T>;

pub use crate::{
    ampt::{AmptGenerator, AmptSettings},
    calo::{RecoSettings, RecoUtils},
    random::{EngineRandom, RandomGenerator, UniformSource},
};
