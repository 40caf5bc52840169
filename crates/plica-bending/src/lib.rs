//! # plica-bending
//!
//! Discrete isometric bending between two triangles sharing an edge,
//! expressed as a position-based dynamics (PBD) constraint.
//!
//! ## Key Types
//!
//! - [`ParticleStore`] — Read-only view of positions and inverse masses
//! - [`ParticleBuffer`] — SoA store implementing [`ParticleStore`]
//! - [`BendingConstraint`] — Four particle ids, inverse masses, and the
//!   constant coefficient matrix `Q` built from the rest shape
//! - [`ConstraintProjector`] — Stateless energy/gradient projection
//! - [`BendingConstraintSet`] — One constraint per interior mesh edge
//! - [`BendingConfig`] — Numerical thresholds
//!
//! ## Stencil
//!
//! ```text
//!        i2
//!       /  \
//!     i0 ── i1
//!       \  /
//!        i3
//! ```
//!
//! The outer solver owns the substep loop and stiffness. It calls
//! [`ConstraintProjector::project`] with live positions and applies
//! `correction[k] * inverse_mass[k] * stiffness` to each particle.

pub mod config;
pub mod constraint;
pub mod constraint_set;
pub mod projector;
pub mod store;

pub use config::BendingConfig;
pub use constraint::BendingConstraint;
pub use constraint_set::BendingConstraintSet;
pub use projector::{ConstraintProjector, Corrections};
pub use store::{ParticleBuffer, ParticleStore};
