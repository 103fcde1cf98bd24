#[cfg(test)]
#[path = "events_test.rs"]
mod events_test;

/// Category of an upcoming event — drives the badge next to the title.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventType {
    Event,
    Pld,
    Team,
}

/// A teammate listed on a group event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TeamMember {
    pub name: String,
    pub discord: String,
    pub avatar: String,
}

/// An upcoming calendar entry on the home page.
#[derive(Clone, Debug)]
pub struct EventItem {
    pub id: i64,
    pub date: String,
    pub month: String,
    pub title: String,
    pub time: String,
    pub location: String,
    pub kind: EventType,
    pub team: Vec<TeamMember>,
}

fn member(name: &str, discord: &str, avatar_seed: u32) -> TeamMember {
    TeamMember {
        name: name.to_owned(),
        discord: discord.to_owned(),
        avatar: format!("https://picsum.photos/32/32?random={avatar_seed}"),
    }
}

/// The seeded upcoming-events list.
#[must_use]
pub fn seed_events() -> Vec<EventItem> {
    vec![
        EventItem {
            id: 1,
            date: "05".to_owned(),
            month: "Feb".to_owned(),
            title: "PLD - JavaScript DOM Manipulation".to_owned(),
            time: "09:00 AM".to_owned(),
            location: "Zone 1 - Tables 4-6".to_owned(),
            kind: EventType::Pld,
            team: vec![
                member("Aysel M.", "aysel_m#1234", 11),
                member("Murad T.", "murad_dev#8899", 12),
                member("You", "me#0001", 13),
            ],
        },
        EventItem {
            id: 2,
            date: "05".to_owned(),
            month: "Feb".to_owned(),
            title: "Hack Learning Day 2 - Morning".to_owned(),
            time: "10:30 AM".to_owned(),
            location: "Main Campus".to_owned(),
            kind: EventType::Event,
            team: vec![],
        },
        EventItem {
            id: 3,
            date: "06".to_owned(),
            month: "Feb".to_owned(),
            title: "Team Project: HBnB Evolution".to_owned(),
            time: "11:00 AM".to_owned(),
            location: "Discord - Voice Channel 3".to_owned(),
            kind: EventType::Team,
            team: vec![
                member("Lala Q.", "lala_q#4455", 14),
                member("Kamran S.", "ks_tech#5566", 15),
            ],
        },
        EventItem {
            id: 4,
            date: "07".to_owned(),
            month: "Feb".to_owned(),
            title: "Tech Talk: Life at Google London".to_owned(),
            time: "7:00 PM".to_owned(),
            location: "AIM Hall".to_owned(),
            kind: EventType::Event,
            team: vec![],
        },
    ]
}
