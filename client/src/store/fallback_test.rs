use super::*;
use crate::store::MemoryStore;

fn draft() -> ResourceDraft {
    ResourceDraft {
        title: "Regex crosswords".to_owned(),
        kind: ResourceKind::Article,
        url: "https://regexcrossword.com".to_owned(),
        tags: vec!["Regex".to_owned()],
    }
}

// =============================================================================
// Resources: fetch
// =============================================================================

#[test]
fn fetch_with_empty_store_returns_seed_list() {
    let store = MemoryStore::new();
    let resources = fetch_resources(&store);
    assert_eq!(resources.len(), 3);
    assert_eq!(
        resources.iter().map(|r| r.id).collect::<Vec<_>>(),
        vec![1, 2, 3]
    );
    assert_eq!(
        resources.iter().map(|r| r.likes).collect::<Vec<_>>(),
        vec![124, 89, 210]
    );
    assert_eq!(resources[0].tags, vec!["C", "Pointers"]);
    assert_eq!(resources[1].tags, vec!["CSS", "Frontend"]);
    assert_eq!(resources[2].tags, vec!["JavaScript"]);
}

#[test]
fn fetch_is_idempotent_without_mutation() {
    let store = MemoryStore::new();
    assert_eq!(fetch_resources(&store), fetch_resources(&store));

    // Also after a persisted snapshot exists.
    create_resource(&store, draft(), 1_000);
    assert_eq!(fetch_resources(&store), fetch_resources(&store));
}

#[test]
fn fetch_with_corrupt_snapshot_falls_back_to_seed() {
    let store = MemoryStore::new();
    store.set(crate::store::RESOURCES_KEY, "{definitely not json");
    assert_eq!(fetch_resources(&store).len(), 3);
}

// =============================================================================
// Resources: create
// =============================================================================

#[test]
fn create_assigns_fresh_id_and_prepends() {
    let store = MemoryStore::new();
    let before = fetch_resources(&store);
    let created = create_resource(&store, draft(), 1_738_000_000_000);

    assert!(!before.iter().any(|r| r.id == created.id));
    assert_eq!(created.id, 1_738_000_000_000);
    assert_eq!(created.likes, 0);
    assert_eq!(created.author, LOCAL_AUTHOR);

    let after = fetch_resources(&store);
    assert_eq!(after.len(), before.len() + 1);
    assert_eq!(after[0].id, created.id);
}

#[test]
fn create_survives_reads_and_further_creates() {
    let store = MemoryStore::new();
    create_resource(&store, draft(), 10_000);
    create_resource(&store, draft(), 20_000);

    let resources = fetch_resources(&store);
    assert_eq!(resources.len(), 5);
    // Newest first.
    assert_eq!(resources[0].id, 20_000);
    assert_eq!(resources[1].id, 10_000);
}

// =============================================================================
// Resources: like
// =============================================================================

#[test]
fn like_increments_by_exactly_one_per_call() {
    let store = MemoryStore::new();
    let initial = fetch_resources(&store)
        .iter()
        .find(|r| r.id == 2)
        .map(|r| r.likes)
        .unwrap();

    let n = 4;
    let mut last = 0;
    for _ in 0..n {
        last = like_resource(&store, 2);
    }
    assert_eq!(last, initial + n);

    let persisted = fetch_resources(&store)
        .iter()
        .find(|r| r.id == 2)
        .map(|r| r.likes)
        .unwrap();
    assert_eq!(persisted, initial + n);
}

#[test]
fn like_unknown_id_returns_zero_and_mutates_nothing() {
    let store = MemoryStore::new();
    assert_eq!(like_resource(&store, 999), 0);
    assert_eq!(
        fetch_resources(&store).iter().map(|r| r.likes).collect::<Vec<_>>(),
        vec![124, 89, 210]
    );
}

// =============================================================================
// Reputation
// =============================================================================

#[test]
fn reputation_seed_values() {
    let store = MemoryStore::new();
    let rep = fetch_reputation(&store);
    assert!((rep.avg - 4.88).abs() < f64::EPSILON);
    assert_eq!(rep.count, 48);
}

#[test]
fn rate_running_mean_oracle() {
    let store = MemoryStore::new();
    // Exact arithmetic: (4.88 * 48 + 5) / 49 = 239.24 / 49 = 4.88244897...
    // which rounds to 4.88 at two decimals.
    let rep = rate_review(&store, 5.0);
    assert!((rep.avg - 4.88).abs() < f64::EPSILON);
    assert_eq!(rep.count, 49);
}

#[test]
fn rate_count_increments_by_one_per_submission() {
    let store = MemoryStore::new();
    rate_review(&store, 2.0);
    rate_review(&store, 4.0);
    let rep = rate_review(&store, 5.0);
    assert_eq!(rep.count, 51);
}

#[test]
fn rate_persists_between_reads() {
    let store = MemoryStore::new();
    // (4.88 * 48 + 2) / 49 = 236.24 / 49 = 4.8212... -> 4.82.
    rate_review(&store, 2.0);
    let rep = fetch_reputation(&store);
    assert!((rep.avg - 4.82).abs() < f64::EPSILON);
    assert_eq!(rep.count, 49);
}

// =============================================================================
// Progress
// =============================================================================

#[test]
fn progress_defaults_to_zero() {
    let store = MemoryStore::new();
    assert_eq!(fetch_progress(&store), 0);
}

#[test]
fn increment_accumulates_and_persists() {
    let store = MemoryStore::new();
    assert_eq!(increment_progress(&store, 5), 5);
    assert_eq!(increment_progress(&store, 5), 10);
    assert_eq!(fetch_progress(&store), 10);
}

#[test]
fn increment_never_exceeds_one_hundred() {
    let store = MemoryStore::new();
    store.set(crate::store::PROGRESS_KEY, "98");
    assert_eq!(increment_progress(&store, 5), 100);
    assert_eq!(increment_progress(&store, 5), 100);
}
