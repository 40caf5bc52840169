//! # plica-types
//!
//! Shared types, identifiers, error types, and numeric constants
//! for the Plica bending core.
//!
//! This crate has no domain logic. It defines the vocabulary
//! that all other Plica crates share.

pub mod constants;
pub mod error;
pub mod ids;

pub use error::{PlicaError, PlicaResult};
pub use ids::ParticleId;
