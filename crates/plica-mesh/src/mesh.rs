//! Core triangle mesh type with SoA (Structure of Arrays) layout.
//!
//! The SoA layout stores each coordinate channel contiguously:
//! - `pos_x: [x0, x1, x2, ...]`
//! - `pos_y: [y0, y1, y2, ...]`
//! - `pos_z: [z0, z1, z2, ...]`
//!
//! The mesh holds rest geometry only. Live particle state belongs to
//! the particle store owned by the outer solver.

use plica_math::Vec3;
use plica_types::{PlicaError, PlicaResult};
use serde::{Deserialize, Serialize};

/// A triangle mesh stored in Structure-of-Arrays layout.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TriangleMesh {
    /// X coordinates of all vertices.
    pub pos_x: Vec<f32>,
    /// Y coordinates of all vertices.
    pub pos_y: Vec<f32>,
    /// Z coordinates of all vertices.
    pub pos_z: Vec<f32>,

    /// Triangle indices, three per triangle.
    /// Stored flat: `[t0v0, t0v1, t0v2, t1v0, t1v1, t1v2, ...]`
    pub indices: Vec<u32>,
}

impl TriangleMesh {
    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.pos_x.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Returns the position of vertex `i` as a `Vec3`.
    #[inline]
    pub fn position(&self, i: usize) -> Vec3 {
        Vec3::new(self.pos_x[i], self.pos_y[i], self.pos_z[i])
    }

    /// Returns the three vertex indices of triangle `t`.
    #[inline]
    pub fn triangle(&self, t: usize) -> [u32; 3] {
        let base = t * 3;
        [self.indices[base], self.indices[base + 1], self.indices[base + 2]]
    }

    /// Sets the position of vertex `i`.
    #[inline]
    pub fn set_position(&mut self, i: usize, p: Vec3) {
        self.pos_x[i] = p.x;
        self.pos_y[i] = p.y;
        self.pos_z[i] = p.z;
    }

    /// Appends a vertex and returns its index.
    pub fn push_vertex(&mut self, p: Vec3) -> u32 {
        let index = self.pos_x.len() as u32;
        self.pos_x.push(p.x);
        self.pos_y.push(p.y);
        self.pos_z.push(p.z);
        index
    }

    /// Creates an empty mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_capacity: usize, triangle_capacity: usize) -> Self {
        Self {
            pos_x: Vec::with_capacity(vertex_capacity),
            pos_y: Vec::with_capacity(vertex_capacity),
            pos_z: Vec::with_capacity(vertex_capacity),
            indices: Vec::with_capacity(triangle_capacity * 3),
        }
    }

    /// Validates mesh integrity.
    ///
    /// Checks:
    /// - All SoA arrays have the same length
    /// - Triangle indices are within bounds
    /// - No degenerate triangles (repeated vertex indices)
    pub fn validate(&self) -> PlicaResult<()> {
        let n = self.pos_x.len();

        if self.pos_y.len() != n || self.pos_z.len() != n {
            return Err(PlicaError::InvalidMesh(
                "Position arrays have inconsistent lengths".into(),
            ));
        }

        if self.indices.len() % 3 != 0 {
            return Err(PlicaError::InvalidMesh(
                "Index count is not divisible by 3".into(),
            ));
        }

        for (i, &idx) in self.indices.iter().enumerate() {
            if idx as usize >= n {
                return Err(PlicaError::InvalidMesh(format!(
                    "Index {} at position {} is out of range (vertex count: {})",
                    idx, i, n
                )));
            }
        }

        for t in 0..self.triangle_count() {
            let [a, b, c] = self.triangle(t);
            if a == b || b == c || a == c {
                return Err(PlicaError::InvalidMesh(format!(
                    "Triangle {} has repeated vertex indices: [{}, {}, {}]",
                    t, a, b, c
                )));
            }
        }

        Ok(())
    }

    /// Constructs a mesh from interleaved AoS position data
    /// `[x0, y0, z0, x1, y1, z1, ...]`.
    pub fn from_interleaved(positions: &[f32], indices: &[u32]) -> PlicaResult<Self> {
        if positions.len() % 3 != 0 {
            return Err(PlicaError::InvalidMesh(
                "Interleaved positions length not divisible by 3".into(),
            ));
        }

        let n = positions.len() / 3;
        let mut mesh = Self::with_capacity(n, indices.len() / 3);
        for p in positions.chunks_exact(3) {
            mesh.pos_x.push(p[0]);
            mesh.pos_y.push(p[1]);
            mesh.pos_z.push(p[2]);
        }
        mesh.indices = indices.to_vec();

        mesh.validate()?;
        Ok(mesh)
    }
}
