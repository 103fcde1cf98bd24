#[cfg(test)]
#[path = "reviews_test.rs"]
mod reviews_test;

/// A peer review awaiting a quality assessment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingReview {
    pub id: i64,
    pub project: String,
    pub reviewer: String,
    pub date: String,
    pub avatar: String,
}

/// Quality verdicts a student can give a received review.
///
/// Each verdict maps to the score folded into the reviewer reputation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Superficial,
    Helpful,
    Insightful,
}

impl Verdict {
    /// Score submitted for this verdict.
    #[must_use]
    pub fn score(self) -> f64 {
        match self {
            Self::Superficial => 2.0,
            Self::Helpful => 4.0,
            Self::Insightful => 5.0,
        }
    }

    /// Button label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Superficial => "Superficial",
            Self::Helpful => "Helpful",
            Self::Insightful => "Insightful",
        }
    }
}

fn review(id: i64, project: &str, reviewer: &str, date: &str, avatar_seed: u32) -> PendingReview {
    PendingReview {
        id,
        project: project.to_owned(),
        reviewer: reviewer.to_owned(),
        date: date.to_owned(),
        avatar: format!("https://picsum.photos/40/40?random={avatar_seed}"),
    }
}

/// The seeded pending assessments. Rating one removes it from the
/// visible list only; no review data is persisted anywhere.
#[must_use]
pub fn seed_reviews() -> Vec<PendingReview> {
    vec![
        review(1, "Shell v1", "Aysel M.", "Today", 1),
        review(2, "C - Hello World", "Murad T.", "Yesterday", 2),
        review(3, "Python - Web Scraper", "Lala Q.", "2 days ago", 3),
    ]
}
