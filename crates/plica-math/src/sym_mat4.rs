//! Symmetric 4×4 matrix acting on four-particle stencils.
//!
//! A bending stencil has four particles, each with a 3D position. The
//! coefficient matrix is a scalar 4×4 operator applied identically and
//! independently to the x, y and z channels, so the "vector" it acts on
//! is `[Vec3; 4]` rather than a flat 12-vector.

use glam::{Vec3, Vec4};
use serde::{Deserialize, Serialize};

/// A symmetric 4×4 matrix stored row-major.
///
/// Symmetry is maintained by construction: [`SymMat4::set`] writes both
/// `(i, j)` and `(j, i)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SymMat4 {
    rows: [[f32; 4]; 4],
}

impl SymMat4 {
    /// The zero matrix.
    pub const ZERO: Self = Self { rows: [[0.0; 4]; 4] };

    /// Builds `scale · k kᵀ`.
    pub fn from_outer_product(k: Vec4, scale: f32) -> Self {
        let k = k.to_array();
        let mut m = Self::ZERO;
        for i in 0..4 {
            for j in i..4 {
                m.set(i, j, scale * k[i] * k[j]);
            }
        }
        m
    }

    /// Returns entry `(i, j)`.
    ///
    /// # Panics
    /// Panics if `i` or `j` is not in `0..4`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f32 {
        self.rows[i][j]
    }

    /// Sets entries `(i, j)` and `(j, i)` to `value`.
    ///
    /// # Panics
    /// Panics if `i` or `j` is not in `0..4`.
    #[inline]
    pub fn set(&mut self, i: usize, j: usize, value: f32) {
        self.rows[i][j] = value;
        self.rows[j][i] = value;
    }

    /// Sum of the entries of row `i`.
    #[inline]
    pub fn row_sum(&self, i: usize) -> f32 {
        self.rows[i].iter().sum()
    }

    /// Returns true if every entry is finite.
    pub fn is_finite(&self) -> bool {
        self.rows.iter().flatten().all(|v| v.is_finite())
    }

    /// Largest absolute entry.
    pub fn max_abs(&self) -> f32 {
        self.rows.iter().flatten().fold(0.0_f32, |acc, v| acc.max(v.abs()))
    }

    /// Evaluates `Σ_axis xᵀ M x` for a stencil of four points.
    ///
    /// Equivalent to `Σ_i Σ_j M[i][j] (p_i · p_j)`.
    pub fn quadratic_form(&self, points: &[Vec3; 4]) -> f32 {
        let mut sum = 0.0;
        for i in 0..4 {
            for j in 0..4 {
                sum += self.rows[i][j] * points[i].dot(points[j]);
            }
        }
        sum
    }

    /// Applies the matrix per channel: `out_i = Σ_j M[i][j] p_j`.
    pub fn mul_points(&self, points: &[Vec3; 4]) -> [Vec3; 4] {
        let mut out = [Vec3::ZERO; 4];
        for (i, out_i) in out.iter_mut().enumerate() {
            for (j, p) in points.iter().enumerate() {
                *out_i += self.rows[i][j] * *p;
            }
        }
        out
    }
}

impl Default for SymMat4 {
    fn default() -> Self {
        Self::ZERO
    }
}

impl std::ops::Index<(usize, usize)> for SymMat4 {
    type Output = f32;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &f32 {
        &self.rows[i][j]
    }
}
