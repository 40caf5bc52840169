//! Bending constraints for a whole mesh.
//!
//! One [`BendingConstraint`] per interior edge, built once during mesh
//! setup from rest positions. Degenerate stencils (slivers, collapsed
//! triangles) are skipped with a warning rather than failing the build,
//! since one bad edge should not prevent the rest of the mesh from bending.

use plica_mesh::Topology;
use plica_types::{ParticleId, PlicaError, PlicaResult};

use crate::config::BendingConfig;
use crate::constraint::BendingConstraint;
use crate::projector::{ConstraintProjector, Corrections};
use crate::store::ParticleStore;

/// All bending constraints of a mesh.
#[derive(Debug, Clone, Default)]
pub struct BendingConstraintSet {
    constraints: Vec<BendingConstraint>,
    skipped: usize,
}

impl BendingConstraintSet {
    /// Builds one constraint per interior edge of `topology`, reading rest
    /// positions and inverse masses from `store`.
    ///
    /// # Errors
    /// Returns [`PlicaError::InvalidConfig`] for an invalid config and
    /// [`PlicaError::ParticleOutOfRange`] if the topology references a
    /// particle the store does not have. Degenerate stencils are skipped.
    pub fn from_topology<S: ParticleStore + ?Sized>(
        store: &S,
        topology: &Topology,
        config: &BendingConfig,
    ) -> PlicaResult<Self> {
        config.validate()?;

        let mut constraints = Vec::with_capacity(topology.interior_edges.len());
        let mut skipped = 0;

        for edge in &topology.interior_edges {
            let particles = edge.stencil().map(ParticleId);
            match BendingConstraint::create_with_config(store, particles, config) {
                Ok(constraint) => constraints.push(constraint),
                Err(PlicaError::DegenerateStencil { reason, .. }) => {
                    tracing::warn!(
                        particles = ?particles,
                        %reason,
                        "skipping degenerate bending stencil"
                    );
                    skipped += 1;
                }
                Err(e) => return Err(e),
            }
        }

        tracing::debug!(
            constraints = constraints.len(),
            skipped,
            "built bending constraint set"
        );

        Ok(Self {
            constraints,
            skipped,
        })
    }

    /// Wraps constraints built elsewhere.
    pub fn from_constraints(constraints: Vec<BendingConstraint>) -> Self {
        Self {
            constraints,
            skipped: 0,
        }
    }

    /// Returns the number of constraints.
    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    /// Returns true if there are no constraints.
    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    /// Number of interior edges skipped as degenerate during the build.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Iterates constraints in build order.
    pub fn iter(&self) -> std::slice::Iter<'_, BendingConstraint> {
        self.constraints.iter()
    }

    /// Sum of the bending energies at the store's current positions.
    pub fn total_energy<S: ParticleStore + ?Sized>(&self, store: &S) -> f32 {
        self.constraints
            .iter()
            .map(|c| c.energy(&store.gather(c.particles())))
            .sum()
    }

    /// Projects every constraint against the store's current positions.
    ///
    /// Returns one correction buffer per constraint, in [`Self::iter`]
    /// order. Nothing is applied; the caller decides how to combine
    /// corrections for particles shared by several constraints.
    pub fn project_all<S: ParticleStore + ?Sized>(
        &self,
        store: &S,
        projector: &ConstraintProjector,
    ) -> Vec<Corrections> {
        self.constraints
            .iter()
            .map(|c| projector.project(c, &store.gather(c.particles())))
            .collect()
    }
}

impl<'a> IntoIterator for &'a BendingConstraintSet {
    type Item = &'a BendingConstraint;
    type IntoIter = std::slice::Iter<'a, BendingConstraint>;

    fn into_iter(self) -> Self::IntoIter {
        self.constraints.iter()
    }
}
