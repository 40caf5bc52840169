//! Particle store interface and an SoA implementation.
//!
//! The bending core never owns particle state. It reads positions and
//! inverse masses by id through [`ParticleStore`], and returns owned
//! corrections instead of writing into the store.

use plica_math::Vec3;
use plica_mesh::TriangleMesh;
use plica_types::{ParticleId, PlicaError, PlicaResult};

use crate::projector::Corrections;

/// Read-only access to particle positions and inverse masses.
///
/// `position` and `inverse_mass` may panic for ids `>= len()`;
/// constraint construction checks ids against `len()` first.
pub trait ParticleStore {
    /// Number of particles.
    fn len(&self) -> usize;

    /// Returns true if the store holds no particles.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Current position of particle `id`.
    fn position(&self, id: ParticleId) -> Vec3;

    /// Inverse mass of particle `id`. Zero means pinned.
    fn inverse_mass(&self, id: ParticleId) -> f32;

    /// Gathers the positions of a four-particle stencil, in stencil order.
    fn gather(&self, particles: [ParticleId; 4]) -> [Vec3; 4] {
        particles.map(|id| self.position(id))
    }
}

/// SoA particle buffers.
///
/// # Layout
///
/// All arrays have length `particle_count`:
/// ```text
/// pos_x: [x0, x1, x2, ...]
/// pos_y: [y0, y1, y2, ...]
/// ...
/// ```
#[derive(Debug, Clone)]
pub struct ParticleBuffer {
    pub pos_x: Vec<f32>,
    pub pos_y: Vec<f32>,
    pub pos_z: Vec<f32>,

    /// Per-particle inverse mass (0.0 for pinned particles).
    pub inv_mass: Vec<f32>,
}

impl ParticleBuffer {
    /// Initialize particle buffers from a mesh and per-vertex mass.
    ///
    /// Copies rest positions from the mesh.
    /// Pinned vertices get `inv_mass = 0.0` (infinite mass).
    pub fn from_mesh(mesh: &TriangleMesh, vertex_mass: f32, pinned: &[bool]) -> PlicaResult<Self> {
        let n = mesh.vertex_count();

        if pinned.len() != n {
            return Err(PlicaError::InvalidStore(format!(
                "Pinned array length ({}) != vertex count ({})",
                pinned.len(),
                n
            )));
        }
        if !(vertex_mass.is_finite() && vertex_mass > 0.0) {
            return Err(PlicaError::InvalidStore(format!(
                "Vertex mass must be positive and finite (got {vertex_mass})"
            )));
        }

        let inv_mass = pinned
            .iter()
            .map(|&p| if p { 0.0 } else { 1.0 / vertex_mass })
            .collect();

        Ok(Self {
            pos_x: mesh.pos_x.clone(),
            pos_y: mesh.pos_y.clone(),
            pos_z: mesh.pos_z.clone(),
            inv_mass,
        })
    }

    /// Builds buffers from explicit positions and inverse masses.
    pub fn from_positions(positions: &[Vec3], inverse_masses: &[f32]) -> PlicaResult<Self> {
        if positions.len() != inverse_masses.len() {
            return Err(PlicaError::InvalidStore(format!(
                "Position count ({}) != inverse mass count ({})",
                positions.len(),
                inverse_masses.len()
            )));
        }
        if let Some((i, w)) = inverse_masses
            .iter()
            .enumerate()
            .find(|(_, w)| !(w.is_finite() && **w >= 0.0))
        {
            return Err(PlicaError::InvalidStore(format!(
                "Inverse mass of particle {i} must be finite and non-negative (got {w})"
            )));
        }

        Ok(Self {
            pos_x: positions.iter().map(|p| p.x).collect(),
            pos_y: positions.iter().map(|p| p.y).collect(),
            pos_z: positions.iter().map(|p| p.z).collect(),
            inv_mass: inverse_masses.to_vec(),
        })
    }

    /// Sets the position of particle `id`.
    #[inline]
    pub fn set_position(&mut self, id: ParticleId, p: Vec3) {
        let i = id.index();
        self.pos_x[i] = p.x;
        self.pos_y[i] = p.y;
        self.pos_z[i] = p.z;
    }

    /// Applies projected corrections to a stencil:
    /// `p_k += correction_k * inv_mass_k * stiffness`.
    pub fn apply(&mut self, particles: [ParticleId; 4], corrections: &Corrections, stiffness: f32) {
        for (id, correction) in particles.into_iter().zip(corrections.iter()) {
            let w = self.inverse_mass(id);
            let p = self.position(id) + *correction * (w * stiffness);
            self.set_position(id, p);
        }
    }
}

impl ParticleStore for ParticleBuffer {
    #[inline]
    fn len(&self) -> usize {
        self.pos_x.len()
    }

    #[inline]
    fn position(&self, id: ParticleId) -> Vec3 {
        let i = id.index();
        Vec3::new(self.pos_x[i], self.pos_y[i], self.pos_z[i])
    }

    #[inline]
    fn inverse_mass(&self, id: ParticleId) -> f32 {
        self.inv_mass[id.index()]
    }
}
