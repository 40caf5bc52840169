//! Per-substep projection of a bending constraint.
//!
//! Treats the bending energy `E` itself as the constraint value and takes
//! one mass-weighted gradient step (Müller et al., "Position Based
//! Dynamics", appendix A):
//!
//! ```text
//!   s            = E / Σ_k w_k |∇_k E|²
//!   correction_k = -s ∇_k E          (zero when w_k == 0)
//! ```
//!
//! The caller applies `p_k += correction_k · w_k · stiffness`. With
//! stiffness 1 this drives the linearized energy to zero.
//!
//! The projector reads only the constraint and the positions passed in,
//! and returns owned corrections, so different constraints can be
//! projected concurrently.

use plica_math::Vec3;

use crate::config::BendingConfig;
use crate::constraint::BendingConstraint;

/// Per-particle corrections for a four-particle stencil, in stencil order.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Corrections(pub [Vec3; 4]);

impl Corrections {
    /// No correction for any particle.
    pub const ZERO: Self = Self([Vec3::ZERO; 4]);

    /// Returns true if every correction is exactly zero.
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|c| *c == Vec3::ZERO)
    }

    /// Iterates corrections in stencil order.
    pub fn iter(&self) -> impl Iterator<Item = &Vec3> {
        self.0.iter()
    }
}

impl std::ops::Index<usize> for Corrections {
    type Output = Vec3;

    #[inline]
    fn index(&self, k: usize) -> &Vec3 {
        &self.0[k]
    }
}

/// Stateless bending projector.
///
/// Holds only the numerical thresholds; every call is a pure function of
/// the constraint and the positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstraintProjector {
    energy_threshold: f32,
    min_gradient_norm: f32,
}

impl Default for ConstraintProjector {
    fn default() -> Self {
        Self::new(&BendingConfig::default())
    }
}

impl ConstraintProjector {
    /// Creates a projector using the thresholds from `config`.
    pub fn new(config: &BendingConfig) -> Self {
        Self {
            energy_threshold: config.energy_threshold,
            min_gradient_norm: config.min_gradient_norm,
        }
    }

    /// Computes corrections for `positions`, given in the order of
    /// [`BendingConstraint::particles`].
    ///
    /// Returns [`Corrections::ZERO`] when every particle is pinned, when
    /// the energy is below threshold, or when the energy or gradient is
    /// not finite. Pinned particles always get an exactly zero correction.
    pub fn project(&self, constraint: &BendingConstraint, positions: &[Vec3; 4]) -> Corrections {
        let inverse_masses = constraint.inverse_masses();
        if constraint.is_pinned() {
            return Corrections::ZERO;
        }

        let energy = constraint.energy(positions);
        if !energy.is_finite() {
            tracing::trace!(
                particles = ?constraint.particles(),
                "non-finite bending energy; correction clamped to zero"
            );
            return Corrections::ZERO;
        }
        if energy < self.energy_threshold {
            return Corrections::ZERO;
        }

        let gradient = constraint.gradient(positions);
        let weighted_norm: f32 = gradient
            .iter()
            .zip(inverse_masses)
            .map(|(g, w)| w * g.length_squared())
            .sum();
        if !weighted_norm.is_finite() || weighted_norm < self.min_gradient_norm {
            tracing::trace!(
                particles = ?constraint.particles(),
                weighted_norm,
                "bending gradient unusable; correction clamped to zero"
            );
            return Corrections::ZERO;
        }

        let s = energy / weighted_norm;
        let mut corrections = Corrections::ZERO;
        for (k, (g, w)) in gradient.iter().zip(inverse_masses).enumerate() {
            if w > 0.0 {
                corrections.0[k] = -s * *g;
            }
        }

        if !corrections.iter().all(|c| c.is_finite()) {
            return Corrections::ZERO;
        }
        corrections
    }
}

/// Projects with the default thresholds.
pub fn project(constraint: &BendingConstraint, positions: &[Vec3; 4]) -> Corrections {
    ConstraintProjector::default().project(constraint, positions)
}
