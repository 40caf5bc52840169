//! Numeric thresholds shared by construction and projection.

/// Rest triangles with an area below this are rejected as degenerate.
pub const DEGENERATE_AREA_THRESHOLD: f32 = 1.0e-10;

/// Minimum sine of the angle between two edges when evaluating a cotangent.
///
/// Below this the two edges are treated as collinear.
pub const MIN_SINE: f32 = 1.0e-6;

/// Energies below this produce no correction.
pub const ENERGY_THRESHOLD: f32 = 1.0e-12;

/// Minimum mass-weighted squared gradient norm before a projection is skipped.
pub const MIN_GRADIENT_NORM: f32 = 1.0e-9;

/// Rest energy above this marks a stencil as non-flat at rest.
pub const REST_FLATNESS_TOLERANCE: f32 = 1.0e-5;
