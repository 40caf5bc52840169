//! Mesh topology queries.
//!
//! Builds edge adjacency from the triangle index buffer and extracts
//! the interior edges, each of which becomes one four-particle bending
//! stencil.

use std::collections::BTreeMap;

use crate::mesh::TriangleMesh;

/// Precomputed edge topology for a triangle mesh.
///
/// Built once when a mesh is loaded. Topology changes require a rebuild,
/// along with every bending constraint derived from it.
#[derive(Debug, Clone)]
pub struct Topology {
    /// Unique edges as `(v_min, v_max)` pairs, in ascending order.
    pub edges: Vec<[u32; 2]>,

    /// For each edge, the adjacent triangles.
    /// Boundary edges have exactly 1, interior edges exactly 2.
    pub edge_triangles: Vec<Vec<u32>>,

    /// Interior edges that have exactly 2 adjacent triangles.
    /// These are the edges where bending constraints are applied.
    pub interior_edges: Vec<InteriorEdge>,
}

/// An interior (non-boundary) edge with its two adjacent triangles.
///
/// ```text
///        wing_a
///       /     \
///     v0 ───── v1
///       \     /
///        wing_b
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InteriorEdge {
    /// Index of vertex A of the shared edge.
    pub v0: u32,
    /// Index of vertex B of the shared edge.
    pub v1: u32,
    /// The "wing" vertex of triangle A (not on the edge).
    pub wing_a: u32,
    /// The "wing" vertex of triangle B (not on the edge).
    pub wing_b: u32,
    /// Index of adjacent triangle A.
    pub tri_a: u32,
    /// Index of adjacent triangle B.
    pub tri_b: u32,
}

impl InteriorEdge {
    /// The stencil in bending order: shared edge first, then the two wings.
    #[inline]
    pub fn stencil(&self) -> [u32; 4] {
        [self.v0, self.v1, self.wing_a, self.wing_b]
    }
}

impl Topology {
    /// Build topology from a triangle mesh.
    ///
    /// Edge order is deterministic (sorted by vertex pair), so constraint
    /// sets built from the same mesh always come out in the same order.
    pub fn build(mesh: &TriangleMesh) -> Self {
        // Key: (min_vertex, max_vertex) to canonicalize edge direction
        let mut edge_map: BTreeMap<(u32, u32), Vec<u32>> = BTreeMap::new();

        for t in 0..mesh.triangle_count() {
            let [a, b, c] = mesh.triangle(t);
            for (v0, v1) in [(a, b), (b, c), (c, a)] {
                let key = if v0 < v1 { (v0, v1) } else { (v1, v0) };
                edge_map.entry(key).or_default().push(t as u32);
            }
        }

        let mut edges = Vec::with_capacity(edge_map.len());
        let mut edge_triangles = Vec::with_capacity(edge_map.len());
        let mut interior_edges = Vec::new();

        for ((v0, v1), tris) in edge_map {
            if let &[tri_a, tri_b] = tris.as_slice() {
                interior_edges.push(InteriorEdge {
                    v0,
                    v1,
                    wing_a: find_wing_vertex(mesh, tri_a, v0, v1),
                    wing_b: find_wing_vertex(mesh, tri_b, v0, v1),
                    tri_a,
                    tri_b,
                });
            }
            edges.push([v0, v1]);
            edge_triangles.push(tris);
        }

        Self {
            edges,
            edge_triangles,
            interior_edges,
        }
    }

    /// Returns the number of boundary edges (edges with only 1 adjacent triangle).
    pub fn boundary_edge_count(&self) -> usize {
        self.edge_triangles
            .iter()
            .filter(|tris| tris.len() == 1)
            .count()
    }

    /// Returns the number of non-manifold edges (3 or more adjacent triangles).
    ///
    /// These carry no bending constraint.
    pub fn non_manifold_edge_count(&self) -> usize {
        self.edge_triangles
            .iter()
            .filter(|tris| tris.len() > 2)
            .count()
    }

    /// Returns true if the mesh is closed (no boundary edges).
    pub fn is_closed(&self) -> bool {
        self.boundary_edge_count() == 0
    }
}

/// Find the vertex in triangle `tri` that is not v0 or v1 (the "wing" vertex).
fn find_wing_vertex(mesh: &TriangleMesh, tri: u32, v0: u32, v1: u32) -> u32 {
    let [a, b, c] = mesh.triangle(tri as usize);
    if a != v0 && a != v1 {
        a
    } else if b != v0 && b != v1 {
        b
    } else {
        c
    }
}
