use super::*;

#[test]
fn seed_skills_has_five_axes() {
    assert_eq!(seed_skills().len(), 5);
}

#[test]
fn seed_scores_fit_the_radar_domain() {
    assert!(seed_skills().iter().all(|s| s.score <= 100));
}
