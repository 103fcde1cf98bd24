use super::*;
use crate::state::skills::seed_skills;

#[test]
fn axis_zero_points_straight_up() {
    let (x, y) = vertex(0, 5, 1.0, 150.0, 135.0, 95.0);
    assert!((x - 150.0).abs() < 1e-9);
    assert!((y - 40.0).abs() < 1e-9);
}

#[test]
fn zero_fraction_collapses_to_center() {
    for i in 0..5 {
        let (x, y) = vertex(i, 5, 0.0, 150.0, 135.0, 95.0);
        assert!((x - 150.0).abs() < 1e-9);
        assert!((y - 135.0).abs() < 1e-9);
    }
}

#[test]
fn ring_points_has_one_pair_per_axis() {
    let ring = ring_points(5, 1.0, 150.0, 135.0, 95.0);
    assert_eq!(ring.split(' ').count(), 5);
    assert!(ring.split(' ').all(|p| p.contains(',')));
}

#[test]
fn skill_points_scale_with_scores() {
    let skills = seed_skills();
    let polygon = skill_points(&skills, 150.0, 135.0, 95.0);
    assert_eq!(polygon.split(' ').count(), skills.len());

    // First axis scores 40: its vertex sits 40% up the axis.
    let first = polygon.split(' ').next().unwrap();
    assert_eq!(first, "150.0,97.0");
}
