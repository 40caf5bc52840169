//! Error types for the Plica bending core.
//!
//! All crates return `PlicaResult<T>` from fallible operations.
//! Solve-time numerical trouble is never an error; only setup
//! (construction, validation) can fail.

use thiserror::Error;

use crate::ids::ParticleId;

/// Unified error type for the Plica bending core.
#[derive(Debug, Error)]
pub enum PlicaError {
    /// The four-particle rest stencil cannot define a bending operator
    /// (repeated index, zero-area triangle, collinear edges).
    #[error("Degenerate bending stencil {particles:?}: {reason}")]
    DegenerateStencil {
        particles: [ParticleId; 4],
        reason: String,
    },

    /// A particle index does not exist in the store.
    #[error("Particle {particle} is out of range (particle count: {count})")]
    ParticleOutOfRange { particle: ParticleId, count: usize },

    /// Particle store buffers are malformed or inconsistent.
    #[error("Invalid particle store: {0}")]
    InvalidStore(String),

    /// Mesh data is malformed or inconsistent.
    #[error("Invalid mesh: {0}")]
    InvalidMesh(String),

    /// Configuration value is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Convenience alias for `Result<T, PlicaError>`.
pub type PlicaResult<T> = Result<T, PlicaError>;
