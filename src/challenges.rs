use crate::storage::{LocalStore, CHALLENGES_KEY, TOTAL_POINTS_KEY};
use serde::{Deserialize, Serialize};

/// Rough kg CO2 credited per completed challenge.
const SAVINGS_PER_CHALLENGE_KG: u32 = 15;
const RESTART_DEADLINE: &str = "7 days left";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChallengeStatus {
    Active,
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChallengeCategory {
    Transport,
    Energy,
    Food,
    Waste,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Challenge {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub progress: u32,
    pub total: u32,
    pub points: u32,
    pub status: ChallengeStatus,
    pub deadline: String,
    pub category: ChallengeCategory,
}

impl Challenge {
    fn new(
        id: u32,
        title: &str,
        description: &str,
        total: u32,
        points: u32,
        deadline: &str,
        category: ChallengeCategory,
    ) -> Self {
        Self {
            id,
            title: title.to_string(),
            description: description.to_string(),
            progress: 0,
            total,
            points,
            status: ChallengeStatus::Active,
            deadline: deadline.to_string(),
            category,
        }
    }
}

pub fn default_challenges() -> Vec<Challenge> {
    vec![
        Challenge::new(
            1,
            "Green Commuter",
            "Use public transport or cycle for 5 days",
            5,
            50,
            "7 days left",
            ChallengeCategory::Transport,
        ),
        Challenge::new(
            2,
            "Energy Saver",
            "Reduce electricity by 20% this week",
            20,
            75,
            "7 days left",
            ChallengeCategory::Energy,
        ),
        Challenge::new(
            3,
            "Meatless Week",
            "Go vegetarian for 7 days",
            7,
            60,
            "7 days left",
            ChallengeCategory::Food,
        ),
        Challenge::new(
            4,
            "Zero Waste Day",
            "Produce no single-use plastic waste for 3 days",
            3,
            40,
            "5 days left",
            ChallengeCategory::Waste,
        ),
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressOutcome {
    Advanced,
    Completed { points: u32 },
    /// The challenge was already completed.
    Unchanged,
}

/// Returns `None` when no challenge has the given id.
pub fn add_progress(challenges: &mut [Challenge], id: u32) -> Option<ProgressOutcome> {
    let challenge = challenges.iter_mut().find(|c| c.id == id)?;
    if challenge.status != ChallengeStatus::Active {
        return Some(ProgressOutcome::Unchanged);
    }

    challenge.progress = (challenge.progress + 1).min(challenge.total);
    if challenge.progress == challenge.total {
        challenge.status = ChallengeStatus::Completed;
        challenge.deadline = "Completed!".to_string();
        return Some(ProgressOutcome::Completed {
            points: challenge.points,
        });
    }

    Some(ProgressOutcome::Advanced)
}

/// Only completed challenges restart; awarded points are kept.
/// Returns `None` for an unknown id and `Some(false)` when nothing changed.
pub fn restart(challenges: &mut [Challenge], id: u32) -> Option<bool> {
    let challenge = challenges.iter_mut().find(|c| c.id == id)?;
    if challenge.status != ChallengeStatus::Completed {
        return Some(false);
    }

    challenge.progress = 0;
    challenge.status = ChallengeStatus::Active;
    challenge.deadline = RESTART_DEADLINE.to_string();
    Some(true)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChallengeSummary {
    pub active: usize,
    pub completed: usize,
    pub estimated_savings_kg: u32,
}

pub fn summarize(challenges: &[Challenge]) -> ChallengeSummary {
    let completed = challenges
        .iter()
        .filter(|c| c.status == ChallengeStatus::Completed)
        .count();
    ChallengeSummary {
        active: challenges.len() - completed,
        completed,
        estimated_savings_kg: completed as u32 * SAVINGS_PER_CHALLENGE_KG,
    }
}

pub fn load(store: &LocalStore) -> Vec<Challenge> {
    store.get(CHALLENGES_KEY).unwrap_or_else(default_challenges)
}

pub fn total_points(store: &LocalStore) -> u64 {
    store.get_or_default(TOTAL_POINTS_KEY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_completes_and_awards_points() {
        let mut challenges = default_challenges();
        assert_eq!(add_progress(&mut challenges, 4), Some(ProgressOutcome::Advanced));
        assert_eq!(add_progress(&mut challenges, 4), Some(ProgressOutcome::Advanced));
        assert_eq!(
            add_progress(&mut challenges, 4),
            Some(ProgressOutcome::Completed { points: 40 })
        );

        let waste = &challenges[3];
        assert_eq!(waste.progress, 3);
        assert_eq!(waste.status, ChallengeStatus::Completed);
        assert_eq!(waste.deadline, "Completed!");

        assert_eq!(add_progress(&mut challenges, 4), Some(ProgressOutcome::Unchanged));
        assert_eq!(challenges[3].progress, 3);
    }

    #[test]
    fn unknown_ids_are_reported() {
        let mut challenges = default_challenges();
        assert_eq!(add_progress(&mut challenges, 99), None);
        assert_eq!(restart(&mut challenges, 99), None);
    }

    #[test]
    fn restart_only_applies_to_completed() {
        let mut challenges = default_challenges();
        assert_eq!(restart(&mut challenges, 1), Some(false));

        for _ in 0..5 {
            add_progress(&mut challenges, 1);
        }
        assert_eq!(restart(&mut challenges, 1), Some(true));
        let commuter = &challenges[0];
        assert_eq!(commuter.progress, 0);
        assert_eq!(commuter.status, ChallengeStatus::Active);
        assert_eq!(commuter.deadline, "7 days left");
    }

    #[test]
    fn summary_counts_savings() {
        let mut challenges = default_challenges();
        for _ in 0..3 {
            add_progress(&mut challenges, 4);
        }
        let summary = summarize(&challenges);
        assert_eq!(summary.active, 3);
        assert_eq!(summary.completed, 1);
        assert_eq!(summary.estimated_savings_kg, 15);
    }

    #[test]
    fn load_falls_back_to_defaults() {
        let store = LocalStore::default();
        assert_eq!(load(&store), default_challenges());
        assert_eq!(total_points(&store), 0);
    }
}
