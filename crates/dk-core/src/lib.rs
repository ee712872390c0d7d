//! Core types shared across DistKit crates.
//!
//! This crate deliberately stays tiny: an error enum, a `Result` alias,
//! and the serializable data types that cross crate boundaries.

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::ParamEntry;
