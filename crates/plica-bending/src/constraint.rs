//! Isometric bending constraint (Bergou et al. 2006).
//!
//! For two triangles sharing an edge, the discrete mean-curvature
//! operator is a linear combination of the four stencil positions with
//! cotangent weights taken from the rest shape:
//!
//! ```text
//!   K = (cot_a1 + cot_b1,  cot_a0 + cot_b0,  -(cot_a0 + cot_a1),  -(cot_b0 + cot_b1))
//!   Q = 3 / (area_a + area_b) · K Kᵀ
//!   E = Σ_axis xᵀ Q x
//! ```
//!
//! `cot_a0` is the cotangent of triangle A's interior angle at `i0`,
//! `cot_b1` of triangle B's angle at `i1`, and so on. Triangle A is
//! `(i0, i1, i2)`, triangle B is `(i0, i1, i3)`.
//!
//! `K` sums to zero, so `Q` is symmetric with zero row sums and a rigid
//! translation of all four particles leaves `E` unchanged. `K · x`
//! vanishes for any planar stencil, so a flat rest shape has zero energy.
//! Cotangents and areas do not change under isometric deformation, so `Q`
//! is computed once from the rest shape.

use plica_math::geometry::{cotangent, triangle_area};
use plica_math::{SymMat4, Vec3, Vec4};
use plica_types::{ParticleId, PlicaError, PlicaResult};

use crate::config::BendingConfig;
use crate::store::ParticleStore;

/// A bending constraint over the stencil `(i0, i1, i2, i3)`.
///
/// Immutable after construction. Rebuild the constraint set when the
/// mesh topology changes.
///
/// The energy is zero only for planar stencils. A stencil built from a
/// curved rest shape keeps its curvature in [`Self::rest_energy`], and
/// projection pulls it toward flat from its own rest pose instead of
/// holding the rest dihedral angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BendingConstraint {
    particles: [ParticleId; 4],
    inverse_masses: [f32; 4],
    q: SymMat4,
    rest_energy: f32,
}

impl BendingConstraint {
    /// Builds a constraint from the store's current (rest) positions
    /// with the default [`BendingConfig`].
    pub fn create<S: ParticleStore + ?Sized>(
        store: &S,
        particles: [ParticleId; 4],
    ) -> PlicaResult<Self> {
        Self::create_with_config(store, particles, &BendingConfig::default())
    }

    /// Builds a constraint from the store's current (rest) positions.
    ///
    /// Inverse masses are snapshotted; later changes in the store are
    /// not seen by this constraint.
    ///
    /// # Errors
    /// - [`PlicaError::InvalidConfig`] if `config` fails validation.
    /// - [`PlicaError::ParticleOutOfRange`] if any id is not in the store.
    /// - [`PlicaError::DegenerateStencil`] for repeated ids, non-finite
    ///   positions, zero-area triangles or collinear edges.
    pub fn create_with_config<S: ParticleStore + ?Sized>(
        store: &S,
        particles: [ParticleId; 4],
        config: &BendingConfig,
    ) -> PlicaResult<Self> {
        config.validate()?;

        let count = store.len();
        if let Some(&particle) = particles.iter().find(|id| id.index() >= count) {
            return Err(PlicaError::ParticleOutOfRange { particle, count });
        }

        let rest = store.gather(particles);
        let inverse_masses = particles.map(|id| store.inverse_mass(id));
        Self::build(particles, rest, inverse_masses, config)
    }

    /// Builds a constraint from explicit rest positions and inverse masses,
    /// given in stencil order.
    ///
    /// Fails like [`Self::create_with_config`], minus the range check.
    pub fn from_rest_positions(
        particles: [ParticleId; 4],
        rest: [Vec3; 4],
        inverse_masses: [f32; 4],
        config: &BendingConfig,
    ) -> PlicaResult<Self> {
        config.validate()?;
        Self::build(particles, rest, inverse_masses, config)
    }

    fn build(
        particles: [ParticleId; 4],
        rest: [Vec3; 4],
        inverse_masses: [f32; 4],
        config: &BendingConfig,
    ) -> PlicaResult<Self> {
        let degenerate = |reason: String| PlicaError::DegenerateStencil { particles, reason };

        for i in 0..4 {
            for j in (i + 1)..4 {
                if particles[i] == particles[j] {
                    return Err(degenerate(format!(
                        "particle {} appears more than once",
                        particles[i]
                    )));
                }
            }
        }
        if let Some(p) = rest.iter().find(|p| !p.is_finite()) {
            return Err(degenerate(format!("rest position {p} is not finite")));
        }

        let q = local_hessian(&rest, config).map_err(degenerate)?;
        let rest_energy = q.quadratic_form(&relative_to_first(&rest));

        if rest_energy > config.rest_flatness_tolerance {
            tracing::warn!(
                particles = ?particles,
                rest_energy,
                "bending stencil is curved at rest; isometric bending pulls it toward flat"
            );
        }

        Ok(Self {
            particles,
            inverse_masses,
            q,
            rest_energy,
        })
    }

    /// The stencil `(i0, i1, i2, i3)`: shared edge first, then the apexes.
    #[inline]
    pub fn particles(&self) -> [ParticleId; 4] {
        self.particles
    }

    /// Inverse masses snapshotted at construction, in stencil order.
    #[inline]
    pub fn inverse_masses(&self) -> [f32; 4] {
        self.inverse_masses
    }

    /// The constant coefficient matrix `Q`.
    #[inline]
    pub fn q(&self) -> &SymMat4 {
        &self.q
    }

    /// Bending energy of the rest configuration. Zero for flat stencils.
    #[inline]
    pub fn rest_energy(&self) -> f32 {
        self.rest_energy
    }

    /// Returns true if every particle is pinned.
    pub fn is_pinned(&self) -> bool {
        self.inverse_masses.iter().all(|&w| w == 0.0)
    }

    /// Bending energy `E = Σ_axis xᵀ Q x` for positions in stencil order.
    pub fn energy(&self, positions: &[Vec3; 4]) -> f32 {
        self.q.quadratic_form(&relative_to_first(positions))
    }

    /// Energy gradient per particle: `∇_k E = 2 Σ_j Q[k][j] p_j`.
    pub fn gradient(&self, positions: &[Vec3; 4]) -> [Vec3; 4] {
        self.q
            .mul_points(&relative_to_first(positions))
            .map(|g| 2.0 * g)
    }
}

/// Computes `Q` for rest positions in stencil order.
///
/// Returns the reason on failure so the caller can attach the stencil ids.
pub fn local_hessian(rest: &[Vec3; 4], config: &BendingConfig) -> Result<SymMat4, String> {
    let [p0, p1, p2, p3] = *rest;

    let area_a = triangle_area(p0, p1, p2);
    let area_b = triangle_area(p0, p1, p3);
    if area_a < config.degenerate_area_threshold {
        return Err(format!("triangle (i0, i1, i2) has zero area ({area_a:e})"));
    }
    if area_b < config.degenerate_area_threshold {
        return Err(format!("triangle (i0, i1, i3) has zero area ({area_b:e})"));
    }

    let e0 = p1 - p0;
    let e1 = p2 - p0;
    let e2 = p3 - p0;
    let e3 = p2 - p1;
    let e4 = p3 - p1;

    let cot = |a: Vec3, b: Vec3, corner: &str| {
        cotangent(a, b, config.min_sine)
            .ok_or_else(|| format!("edges at {corner} are collinear"))
    };
    let cot_a0 = cot(e0, e1, "i0 in (i0, i1, i2)")?;
    let cot_b0 = cot(e0, e2, "i0 in (i0, i1, i3)")?;
    let cot_a1 = cot(-e0, e3, "i1 in (i0, i1, i2)")?;
    let cot_b1 = cot(-e0, e4, "i1 in (i0, i1, i3)")?;

    let factor = 3.0 / (area_a + area_b);
    let k = Vec4::new(
        cot_a1 + cot_b1,
        cot_a0 + cot_b0,
        -cot_a0 - cot_a1,
        -cot_b0 - cot_b1,
    );

    let q = SymMat4::from_outer_product(k, factor);
    if !q.is_finite() {
        return Err("coefficient matrix is not finite".into());
    }
    Ok(q)
}

/// `Q` annihilates translations, so evaluating relative to the first
/// particle gives the same result with less cancellation far from the origin.
#[inline]
fn relative_to_first(positions: &[Vec3; 4]) -> [Vec3; 4] {
    let origin = positions[0];
    positions.map(|p| p - origin)
}
