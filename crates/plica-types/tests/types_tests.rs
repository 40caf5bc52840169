//! Integration tests for plica-types.

use plica_types::{ParticleId, PlicaError};

// ─── ID Tests ──────────────────────────────────────────────────

#[test]
fn particle_id_index() {
    let id = ParticleId(42);
    assert_eq!(id.index(), 42);
}

#[test]
fn particle_id_from_u32() {
    let id: ParticleId = 7.into();
    assert_eq!(id, ParticleId(7));
}

#[test]
fn particle_id_display() {
    assert_eq!(ParticleId(3).to_string(), "#3");
}

#[test]
fn ids_are_serializable() {
    let id = ParticleId(100);
    let json = serde_json::to_string(&id).unwrap();
    let deserialized: ParticleId = serde_json::from_str(&json).unwrap();
    assert_eq!(id, deserialized);
}

// ─── Error Tests ──────────────────────────────────────────────

#[test]
fn degenerate_stencil_display() {
    let err = PlicaError::DegenerateStencil {
        particles: [ParticleId(0), ParticleId(1), ParticleId(2), ParticleId(3)],
        reason: "triangle (i0, i1, i2) has zero area".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("ParticleId(2)"));
    assert!(msg.contains("zero area"));
}

#[test]
fn out_of_range_display() {
    let err = PlicaError::ParticleOutOfRange {
        particle: ParticleId(12),
        count: 4,
    };
    let msg = err.to_string();
    assert!(msg.contains("#12"));
    assert!(msg.contains("4"));
}

#[test]
fn invalid_config_display() {
    let err = PlicaError::InvalidConfig("energy_threshold must be finite".into());
    assert!(err.to_string().contains("energy_threshold"));
}
