//! Procedural mesh generators for tests and setup code.
//!
//! These generators produce deterministic meshes with consistent
//! counter-clockwise winding.

use plica_math::Vec3;

use crate::mesh::TriangleMesh;

/// Generates a flat rectangular quad grid in the XY plane.
///
/// The grid spans `[-width/2, width/2]` in X and `[-height/2, height/2]` in Y,
/// centered at the origin at Z=0.
///
/// # Arguments
/// - `cols` — Number of quads along X (vertex count = cols + 1).
/// - `rows` — Number of quads along Y (vertex count = rows + 1).
/// - `width` — Total width in meters.
/// - `height` — Total height in meters.
///
/// # Example
/// ```
/// use plica_mesh::generators::quad_grid;
/// let mesh = quad_grid(2, 2, 1.0, 1.0);
/// assert_eq!(mesh.vertex_count(), 9);  // 3×3 vertices
/// assert_eq!(mesh.triangle_count(), 8); // 2×2 quads × 2 tris each
/// ```
pub fn quad_grid(cols: usize, rows: usize, width: f32, height: f32) -> TriangleMesh {
    let verts_x = cols + 1;
    let verts_y = rows + 1;

    let mut mesh = TriangleMesh::with_capacity(verts_x * verts_y, cols * rows * 2);

    let half_w = width / 2.0;
    let half_h = height / 2.0;

    for j in 0..verts_y {
        for i in 0..verts_x {
            let u = i as f32 / cols as f32;
            let v = j as f32 / rows as f32;
            // Top to bottom
            mesh.push_vertex(Vec3::new(-half_w + u * width, half_h - v * height, 0.0));
        }
    }

    for j in 0..rows {
        for i in 0..cols {
            let top_left = (j * verts_x + i) as u32;
            let top_right = top_left + 1;
            let bot_left = top_left + verts_x as u32;
            let bot_right = bot_left + 1;

            // Upper-left triangle
            mesh.indices.extend_from_slice(&[top_left, bot_left, top_right]);
            // Lower-right triangle
            mesh.indices.extend_from_slice(&[top_right, bot_left, bot_right]);
        }
    }

    mesh
}

/// Generates a single two-triangle hinge folded along the X axis.
///
/// Vertices 0 and 1 form the shared edge from `(0,0,0)` to `(length,0,0)`.
/// Vertex 2 is the wing in the +Y half-plane. Vertex 3 is the second wing,
/// rotated about the edge so the dihedral angle between the wings equals
/// `dihedral` (π gives a flat sheet).
///
/// ```text
///        2
///       / \
///      0 ─ 1
///       \ /
///        3
/// ```
pub fn hinge(length: f32, wing: f32, dihedral: f32) -> TriangleMesh {
    let mut mesh = TriangleMesh::with_capacity(4, 2);
    let mid = 0.5 * length;

    mesh.push_vertex(Vec3::ZERO);
    mesh.push_vertex(Vec3::new(length, 0.0, 0.0));
    mesh.push_vertex(Vec3::new(mid, wing, 0.0));
    mesh.push_vertex(Vec3::new(
        mid,
        wing * dihedral.cos(),
        wing * dihedral.sin(),
    ));

    mesh.indices.extend_from_slice(&[0, 1, 2]);
    mesh.indices.extend_from_slice(&[1, 0, 3]);
    mesh
}
