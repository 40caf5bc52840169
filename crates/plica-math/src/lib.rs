//! # plica-math
//!
//! Linear algebra primitives for the Plica bending core.
//!
//! Provides:
//! - Re-exports of `glam` types (`Vec3`, `Vec4`, `Quat`)
//! - Triangle geometry (area, angle-between, cotangent, dihedral angle)
//! - Fixed-size symmetric 4×4 matrix for four-particle stencils

pub mod geometry;
pub mod sym_mat4;

// Re-export glam types as the canonical math types for Plica.
pub use glam::{Quat, Vec3, Vec4};

pub use sym_mat4::SymMat4;
