use super::*;

#[test]
fn seed_reviews_has_three_pending() {
    let reviews = seed_reviews();
    assert_eq!(reviews.len(), 3);
    assert_eq!(reviews[0].project, "Shell v1");
}

#[test]
fn verdict_scores_match_buttons() {
    assert!((Verdict::Superficial.score() - 2.0).abs() < f64::EPSILON);
    assert!((Verdict::Helpful.score() - 4.0).abs() < f64::EPSILON);
    assert!((Verdict::Insightful.score() - 5.0).abs() < f64::EPSILON);
}

#[test]
fn verdict_labels_are_distinct() {
    let labels = [
        Verdict::Superficial.label(),
        Verdict::Helpful.label(),
        Verdict::Insightful.label(),
    ];
    assert_eq!(labels.len(), 3);
    assert_ne!(labels[0], labels[1]);
    assert_ne!(labels[1], labels[2]);
}
