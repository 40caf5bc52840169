//! # plica-mesh
//!
//! Triangle mesh representation with Structure-of-Arrays (SoA) layout,
//! plus the edge topology needed to enumerate bending stencils.
//!
//! ## Key Types
//!
//! - [`TriangleMesh`] — Positions and triangle indices in SoA buffers.
//! - [`Topology`] — Edge adjacency and the interior edges that carry
//!   bending constraints.
//! - Procedural generators (quad grids, folded hinges) for tests.

pub mod generators;
pub mod mesh;
pub mod topology;

pub use mesh::TriangleMesh;
pub use topology::{InteriorEdge, Topology};
