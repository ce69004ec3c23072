use crate::challenges::{Challenge, ChallengeSummary};
use crate::emissions::{CalculationResult, Category};
use crate::learn::{Level, LearningModule, QuizScore, Tip};
use crate::notifications::Notification;
use serde::{Deserialize, Serialize};

/// Raw calculator form. Which fields are required depends on `category`.
#[derive(Debug, Deserialize)]
pub struct CalculateRequest {
    pub category: Category,
    pub mode: Option<String>,
    pub distance: Option<FormNumber>,
    pub kwh: Option<FormNumber>,
    pub food_type: Option<String>,
    pub servings: Option<FormNumber>,
}

/// A numeric form field, sent either as a JSON number or as the text typed
/// into the input.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FormNumber {
    Number(f64),
    Text(String),
}

impl FormNumber {
    pub fn parse(&self) -> Option<f64> {
        match self {
            FormNumber::Number(value) => Some(*value),
            FormNumber::Text(text) => text.trim().parse().ok(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CalculateResponse {
    pub result: CalculationResult,
    pub zero_emissions: bool,
    pub car_equivalent_km: f64,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct FactorsResponse {
    pub transport: Vec<FactorEntry>,
    pub energy: f64,
    pub food: Vec<FactorEntry>,
}

#[derive(Debug, Serialize)]
pub struct FactorEntry {
    pub key: &'static str,
    pub factor: f64,
}

#[derive(Debug, Deserialize)]
pub struct CoachRequest {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CoachResponse {
    pub reply: String,
}

#[derive(Debug, Serialize)]
pub struct ChallengesResponse {
    pub challenges: Vec<Challenge>,
    pub total_points: u64,
    pub summary: ChallengeSummary,
}

#[derive(Debug, Serialize)]
pub struct LearnResponse {
    pub modules: Vec<ModuleView>,
    pub tips: &'static [Tip],
    pub progress: u8,
    pub level: &'static Level,
    pub quiz_completed: bool,
    pub tips_viewed: bool,
}

#[derive(Debug, Serialize)]
pub struct ModuleView {
    #[serde(flatten)]
    pub module: &'static LearningModule,
    pub completed: bool,
}

#[derive(Debug, Deserialize)]
pub struct QuizSubmission {
    pub answers: Vec<usize>,
}

#[derive(Debug, Serialize)]
pub struct QuizResult {
    #[serde(flatten)]
    pub score: QuizScore,
    pub progress: u8,
    pub level: &'static Level,
}

#[derive(Debug, Serialize)]
pub struct NotificationsResponse {
    pub notifications: Vec<Notification>,
    pub unread_count: usize,
}

#[derive(Debug, Serialize)]
pub struct DashboardStat {
    pub label: &'static str,
    pub value: f64,
    pub unit: &'static str,
    pub trend: i32,
}

#[derive(Debug, Serialize)]
pub struct BreakdownShare {
    pub category: &'static str,
    pub percent: u32,
}

#[derive(Debug, Serialize)]
pub struct SeriesPoint {
    pub label: &'static str,
    pub transport: f64,
    pub energy: f64,
    pub food: f64,
    pub total: f64,
}

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub stats: Vec<DashboardStat>,
    pub breakdown: Vec<BreakdownShare>,
    pub daily: Vec<SeriesPoint>,
    pub weekly: Vec<SeriesPoint>,
    pub monthly: Vec<SeriesPoint>,
    pub daily_challenge: &'static str,
}
