use super::*;

#[test]
fn seed_events_has_four_entries_with_unique_ids() {
    let events = seed_events();
    assert_eq!(events.len(), 4);
    let mut ids: Vec<_> = events.iter().map(|e| e.id).collect();
    ids.dedup();
    assert_eq!(ids.len(), 4);
}

#[test]
fn group_events_carry_team_members() {
    let events = seed_events();
    for event in &events {
        match event.kind {
            EventType::Pld | EventType::Team => assert!(!event.team.is_empty()),
            EventType::Event => assert!(event.team.is_empty()),
        }
    }
}

#[test]
fn team_members_have_discord_handles() {
    let events = seed_events();
    let members: Vec<_> = events.iter().flat_map(|e| &e.team).collect();
    assert!(!members.is_empty());
    assert!(members.iter().all(|m| m.discord.contains('#')));
}
