#[cfg(test)]
#[path = "skills_test.rs"]
mod skills_test;

/// One axis of the radar skill chart, scored 0–100.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkillLevel {
    pub subject: String,
    pub score: u32,
}

fn skill(subject: &str, score: u32) -> SkillLevel {
    SkillLevel { subject: subject.to_owned(), score }
}

/// The seeded skill levels rendered on the home page.
#[must_use]
pub fn seed_skills() -> Vec<SkillLevel> {
    vec![
        skill("JavaScript", 40),
        skill("Main Block", 30),
        skill("Python", 20),
        skill("SQL", 60),
        skill("Frontend", 50),
    ]
}
