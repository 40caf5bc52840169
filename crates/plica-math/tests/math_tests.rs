//! Integration tests for plica-math.

use std::f32::consts::{FRAC_PI_2, PI};

use plica_math::geometry::{angle_between, cotangent, dihedral_angle, triangle_area};
use plica_math::{SymMat4, Vec3, Vec4};

// ─── Geometry Tests ───────────────────────────────────────────

#[test]
fn unit_right_triangle_area() {
    let area = triangle_area(Vec3::ZERO, Vec3::X, Vec3::Y);
    assert!((area - 0.5).abs() < 1e-6);
}

#[test]
fn collinear_triangle_has_zero_area() {
    let area = triangle_area(Vec3::ZERO, Vec3::X, Vec3::new(2.0, 0.0, 0.0));
    assert_eq!(area, 0.0);
}

#[test]
fn angle_between_orthogonal() {
    assert!((angle_between(Vec3::X, Vec3::Z) - FRAC_PI_2).abs() < 1e-6);
}

#[test]
fn angle_between_parallel_and_opposite() {
    assert!(angle_between(Vec3::X, Vec3::new(3.0, 0.0, 0.0)).abs() < 1e-3);
    assert!((angle_between(Vec3::X, -Vec3::X) - PI).abs() < 1e-3);
}

#[test]
fn angle_between_is_clamped() {
    // Nearly identical long vectors can push the normalized dot above 1.0
    let a = Vec3::new(1.0e3, 1.0e-3, 0.0);
    let angle = angle_between(a, a);
    assert!(angle.is_finite());
    assert!(angle.abs() < 1e-3);
}

#[test]
fn cotangent_of_45_degrees() {
    let cot = cotangent(Vec3::X, Vec3::new(1.0, 1.0, 0.0), 1e-6).unwrap();
    assert!((cot - 1.0).abs() < 1e-6);
}

#[test]
fn cotangent_matches_angle_between() {
    let a = Vec3::new(0.3, -1.2, 0.7);
    let b = Vec3::new(-0.4, 0.5, 2.0);
    let cot = cotangent(a, b, 1e-6).unwrap();
    let expected = 1.0 / angle_between(a, b).tan();
    assert!((cot - expected).abs() < 1e-4, "cot={cot}, expected={expected}");
}

#[test]
fn cotangent_obtuse_is_negative() {
    let cot = cotangent(Vec3::X, Vec3::new(-1.0, 1.0, 0.0), 1e-6).unwrap();
    assert!((cot + 1.0).abs() < 1e-6);
}

#[test]
fn cotangent_rejects_collinear() {
    assert!(cotangent(Vec3::X, Vec3::new(-2.0, 0.0, 0.0), 1e-6).is_none());
    assert!(cotangent(Vec3::ZERO, Vec3::Y, 1e-6).is_none());
}

#[test]
fn dihedral_flat_is_pi() {
    let angle = dihedral_angle(
        Vec3::ZERO,
        Vec3::X,
        Vec3::new(0.5, 1.0, 0.0),
        Vec3::new(0.5, -1.0, 0.0),
    );
    assert!((angle - PI).abs() < 1e-5);
}

#[test]
fn dihedral_folded_right_angle() {
    let angle = dihedral_angle(
        Vec3::ZERO,
        Vec3::X,
        Vec3::new(0.5, 1.0, 0.0),
        Vec3::new(0.5, 0.0, 1.0),
    );
    assert!((angle - FRAC_PI_2).abs() < 1e-5);
}

// ─── SymMat4 Tests ────────────────────────────────────────────

#[test]
fn set_writes_both_halves() {
    let mut m = SymMat4::ZERO;
    m.set(1, 3, 2.5);
    assert_eq!(m.get(1, 3), 2.5);
    assert_eq!(m.get(3, 1), 2.5);
    assert_eq!(m[(3, 1)], 2.5);
}

#[test]
fn outer_product_entries() {
    let m = SymMat4::from_outer_product(Vec4::new(1.0, 2.0, -1.0, -2.0), 0.5);
    assert!((m.get(0, 0) - 0.5).abs() < 1e-6);
    assert!((m.get(1, 3) + 2.0).abs() < 1e-6);
    assert!((m.get(3, 1) + 2.0).abs() < 1e-6);
}

#[test]
fn outer_product_of_zero_sum_vector_has_zero_row_sums() {
    let m = SymMat4::from_outer_product(Vec4::new(0.7, 1.3, -0.9, -1.1), 3.0);
    for i in 0..4 {
        assert!(m.row_sum(i).abs() < 1e-5, "row {i} sums to {}", m.row_sum(i));
    }
}

#[test]
fn quadratic_form_matches_mul_points() {
    let m = SymMat4::from_outer_product(Vec4::new(1.0, 1.0, -1.0, -1.0), 1.5);
    let points = [
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(0.5, 1.0, 0.2),
        Vec3::new(0.5, -1.0, 0.0),
    ];
    let mx = m.mul_points(&points);
    let via_mul: f32 = points.iter().zip(mx.iter()).map(|(p, q)| p.dot(*q)).sum();
    assert!((m.quadratic_form(&points) - via_mul).abs() < 1e-5);
}

#[test]
fn finiteness_and_max_abs() {
    let mut m = SymMat4::ZERO;
    m.set(0, 2, -4.0);
    assert!(m.is_finite());
    assert_eq!(m.max_abs(), 4.0);
    m.set(1, 1, f32::NAN);
    assert!(!m.is_finite());
}

#[test]
fn sym_mat4_serializable() {
    let m = SymMat4::from_outer_product(Vec4::new(1.0, -1.0, 0.5, -0.5), 2.0);
    let json = serde_json::to_string(&m).unwrap();
    let recovered: SymMat4 = serde_json::from_str(&json).unwrap();
    assert_eq!(m, recovered);
}
