use super::*;

// =============================================================================
// Seeds
// =============================================================================

#[test]
fn seeded_store_has_three_resources() {
    let store = PortalStore::seeded();
    assert_eq!(store.resources.len(), 3);
    assert_eq!(store.resources[0].id, 1);
    assert_eq!(store.resources[1].id, 2);
    assert_eq!(store.resources[2].id, 3);
}

#[test]
fn seeded_reputation_and_progress() {
    let store = PortalStore::seeded();
    assert!((store.reputation.avg - 4.88).abs() < f64::EPSILON);
    assert_eq!(store.reputation.count, 48);
    assert_eq!(store.progress, 0);
}

#[test]
fn default_equals_seeded() {
    let a = PortalStore::default();
    let b = PortalStore::seeded();
    assert_eq!(a.resources.len(), b.resources.len());
    assert_eq!(a.reputation, b.reputation);
    assert_eq!(a.progress, b.progress);
}

#[test]
fn resource_serde_round_trip() {
    let store = PortalStore::seeded();
    let json = serde_json::to_string(&store.resources[0]).unwrap();
    assert!(json.contains(r#""type":"video""#));
    let restored: Resource = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.id, 1);
    assert_eq!(restored.kind, ResourceKind::Video);
    assert_eq!(restored.likes, 124);
    assert_eq!(restored.tags, vec!["C", "Pointers"]);
}

// =============================================================================
// Resource listing
// =============================================================================

#[test]
fn resources_by_likes_sorts_descending() {
    let store = PortalStore::seeded();
    let sorted = store.resources_by_likes();
    assert_eq!(sorted[0].id, 3); // 210 likes
    assert_eq!(sorted[1].id, 1); // 124 likes
    assert_eq!(sorted[2].id, 2); // 89 likes
}

// =============================================================================
// Create
// =============================================================================

#[test]
fn create_resource_assigns_server_fields() {
    let mut store = PortalStore::seeded();
    let created = store.create_resource(test_helpers::dummy_draft(), 1_700_000_000);
    assert_eq!(created.id, 1_700_000_000);
    assert_eq!(created.likes, 0);
    assert_eq!(created.author, LOCAL_AUTHOR);
    assert_eq!(store.resources.len(), 4);
    assert_eq!(store.resources.last().unwrap().id, 1_700_000_000);
}

// =============================================================================
// Like
// =============================================================================

#[test]
fn like_resource_increments_by_one() {
    let mut store = PortalStore::seeded();
    assert_eq!(store.like_resource(1), Some(125));
    assert_eq!(store.like_resource(1), Some(126));
}

#[test]
fn like_unknown_resource_returns_none_and_mutates_nothing() {
    let mut store = PortalStore::seeded();
    assert_eq!(store.like_resource(999), None);
    assert_eq!(store.resources[0].likes, 124);
    assert_eq!(store.resources[1].likes, 89);
    assert_eq!(store.resources[2].likes, 210);
}

// =============================================================================
// Rating
// =============================================================================

#[test]
fn rate_folds_score_into_running_mean() {
    let mut store = PortalStore::seeded();
    // (4.88 * 48 + 5) / 49 = 239.24 / 49 = 4.8824... -> 4.88 at 2dp.
    let rep = store.rate(5.0);
    assert!((rep.avg - 4.88).abs() < f64::EPSILON);
    assert_eq!(rep.count, 49);
}

#[test]
fn rate_low_score_drags_average_down() {
    let mut store = PortalStore::seeded();
    // (4.88 * 48 + 2) / 49 = 236.24 / 49 = 4.8212... -> 4.82 at 2dp.
    let rep = store.rate(2.0);
    assert!((rep.avg - 4.82).abs() < f64::EPSILON);
    assert_eq!(rep.count, 49);
}

#[test]
fn rate_increments_count_each_submission() {
    let mut store = PortalStore::seeded();
    store.rate(4.0);
    store.rate(4.0);
    let rep = store.rate(4.0);
    assert_eq!(rep.count, 51);
}

#[test]
fn round2_truncates_to_two_decimals() {
    assert!((round2(4.8824489) - 4.88).abs() < f64::EPSILON);
    assert!((round2(4.886) - 4.89).abs() < f64::EPSILON);
    assert!((round2(5.0) - 5.0).abs() < f64::EPSILON);
}

// =============================================================================
// Progress
// =============================================================================

#[test]
fn advance_progress_accumulates() {
    let mut store = PortalStore::seeded();
    assert_eq!(store.advance_progress(5), 5);
    assert_eq!(store.advance_progress(5), 10);
}

#[test]
fn advance_progress_clamps_at_hundred() {
    let mut store = PortalStore::seeded();
    store.progress = 98;
    assert_eq!(store.advance_progress(5), 100);
    assert_eq!(store.advance_progress(5), 100);
}
