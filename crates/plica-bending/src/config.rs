//! Bending configuration.
//!
//! Numerical thresholds used when building constraints from rest
//! geometry and when projecting them. Stiffness is not part of this
//! config; the outer solver supplies it when applying corrections.

use plica_types::constants;
use plica_types::{PlicaError, PlicaResult};
use serde::{Deserialize, Serialize};

/// Configuration for bending constraint construction and projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BendingConfig {
    /// Rest triangles with an area below this are rejected (m²).
    pub degenerate_area_threshold: f32,

    /// Minimum sine of an angle used in a cotangent weight.
    /// Below this the edges are treated as collinear.
    pub min_sine: f32,

    /// Energies below this produce no correction.
    pub energy_threshold: f32,

    /// Minimum mass-weighted squared gradient norm `Σ w_k |∇_k E|²`.
    /// Below this the projection is skipped.
    pub min_gradient_norm: f32,

    /// Rest energy above this marks the stencil as curved at rest.
    /// Such stencils are still built, but a warning is logged since the
    /// isometric model pulls them toward flat.
    pub rest_flatness_tolerance: f32,
}

impl Default for BendingConfig {
    fn default() -> Self {
        Self {
            degenerate_area_threshold: constants::DEGENERATE_AREA_THRESHOLD,
            min_sine: constants::MIN_SINE,
            energy_threshold: constants::ENERGY_THRESHOLD,
            min_gradient_norm: constants::MIN_GRADIENT_NORM,
            rest_flatness_tolerance: constants::REST_FLATNESS_TOLERANCE,
        }
    }
}

impl BendingConfig {
    /// Creates a config for very small or very fine meshes
    /// (tighter degeneracy and energy thresholds).
    pub fn fine() -> Self {
        Self {
            degenerate_area_threshold: 1.0e-14,
            energy_threshold: 1.0e-16,
            min_gradient_norm: 1.0e-14,
            ..Default::default()
        }
    }

    /// Checks that every threshold is finite and non-negative,
    /// and that `min_sine` is below 1.
    pub fn validate(&self) -> PlicaResult<()> {
        let fields = [
            ("degenerate_area_threshold", self.degenerate_area_threshold),
            ("min_sine", self.min_sine),
            ("energy_threshold", self.energy_threshold),
            ("min_gradient_norm", self.min_gradient_norm),
            ("rest_flatness_tolerance", self.rest_flatness_tolerance),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(PlicaError::InvalidConfig(format!(
                    "{name} must be finite and non-negative (got {value})"
                )));
            }
        }
        if self.min_sine >= 1.0 {
            return Err(PlicaError::InvalidConfig(format!(
                "min_sine must be below 1.0 (got {})",
                self.min_sine
            )));
        }
        Ok(())
    }
}
