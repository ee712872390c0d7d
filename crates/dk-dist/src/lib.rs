//! Runtime-polymorphic probability distributions for DistKit.
//!
//! This crate turns a family name plus a bag of named parameters into a
//! ready-to-evaluate [`Distribution`] handle:
//! - a registry of ~30 families with alias-tolerant parameter resolution
//! - a uniform operation table (density, cdf, survival, hazard,
//!   quantiles, moments, support) with NaN/∞ sentinel conventions
//! - statistics a family does not define come back as `None`
//!
//! Most families evaluate through statrs; the rest (arcsine, logistic,
//! Rayleigh, extreme-value, hyperexponential mixtures, non-central χ²
//! and the fixed-α stable laws) are implemented here.

pub mod arcsine;
pub mod backend;
pub mod dist;
pub mod gumbel;
pub mod hyperexp;
pub mod indexed;
pub mod law;
pub mod logistic;
pub mod math;
pub mod nc_chi_squared;
pub mod neg_binomial;
pub mod params;
pub mod quad;
pub mod rayleigh;
pub mod registry;
pub mod stable;

pub use dist::{Distribution, Op};
pub use dk_core::{Error, ParamEntry, Result};
pub use law::Law;
pub use registry::{families, make, normalize};
