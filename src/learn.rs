use crate::storage::{LocalStore, COMPLETED_MODULES_KEY, QUIZ_COMPLETED_KEY, TIPS_VIEWED_KEY};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct LearningModule {
    pub id: u32,
    pub title: &'static str,
    pub subtopics: &'static [&'static str],
    pub intro: &'static str,
    pub key_points: &'static [&'static str],
}

#[derive(Debug, Serialize)]
pub struct Tip {
    pub icon: &'static str,
    pub text: &'static str,
    pub saves: &'static str,
}

#[derive(Debug, Serialize)]
pub struct QuizQuestion {
    pub question: &'static str,
    pub options: &'static [&'static str],
    #[serde(skip)]
    pub correct: usize,
}

#[derive(Debug, Serialize)]
pub struct Level {
    pub name: &'static str,
    pub min: u8,
    pub max: u8,
    pub icon: &'static str,
}

pub const MODULES: &[LearningModule] = &[
    LearningModule {
        id: 1,
        title: "What is Carbon Footprint?",
        subtopics: &["CO₂ basics", "Greenhouse gases", "Real-life examples"],
        intro: "A carbon footprint is the total amount of greenhouse gases released because of our actions, like traveling, using electricity, eating food, or buying products. 🌍",
        key_points: &[
            "CO₂ and methane are the main greenhouse gases",
            "They trap heat in Earth's atmosphere",
            "Every action has a carbon cost",
        ],
    },
    LearningModule {
        id: 2,
        title: "Travel & Transportation",
        subtopics: &["Car emissions", "Public transport", "Flying impact"],
        intro: "Transportation is one of the biggest sources of carbon emissions. Different modes have very different impacts! 🚗",
        key_points: &[
            "Cars: 0.192 kg CO₂ per km (petrol)",
            "Bikes: 0 kg CO₂ per km",
            "Trains: 0.041 kg CO₂ per km",
        ],
    },
    LearningModule {
        id: 3,
        title: "Energy & Electricity",
        subtopics: &["Home power", "Appliances", "Grid mix"],
        intro: "The electricity we use comes from different sources. In India, most still comes from coal, which produces CO₂. ⚡",
        key_points: &[
            "1 kWh in India = 0.708 kg CO₂",
            "LED bulbs use 75% less energy",
            "Solar panels produce zero emissions",
        ],
    },
    LearningModule {
        id: 4,
        title: "Food & Lifestyle",
        subtopics: &["Meat vs plant-based", "Local produce", "Food waste"],
        intro: "What we eat has a huge impact on the planet. Animal products generally have higher emissions than plants. 🍽️",
        key_points: &[
            "Beef: 7.19 kg CO₂ per serving",
            "Vegetables: 0.39 kg CO₂ per serving",
            "Going plant-based saves 96% emissions!",
        ],
    },
    LearningModule {
        id: 5,
        title: "Shopping & Waste",
        subtopics: &["Fast fashion", "Plastic use", "Recycling"],
        intro: "Every product we buy has a hidden carbon cost from manufacturing, packaging, and shipping. 🛍️",
        key_points: &[
            "Fast fashion creates 10% of global emissions",
            "Recycling saves energy and reduces waste",
            "Buying local reduces transport emissions",
        ],
    },
    LearningModule {
        id: 6,
        title: "India-Specific Facts",
        subtopics: &["Fuel mix", "Urban transport", "Agriculture"],
        intro: "India faces unique climate challenges. Understanding local context helps make better choices. 🇮🇳",
        key_points: &[
            "70% of India's power is from coal",
            "Delhi has world's highest traffic emissions",
            "Agriculture creates 18% of India's emissions",
        ],
    },
];

pub const TIPS: &[Tip] = &[
    Tip { icon: "🧺", text: "Switch to cold wash", saves: "1.2 kg CO₂e" },
    Tip { icon: "🚌", text: "Use public transport once", saves: "0.9 kg CO₂e" },
    Tip { icon: "🥤", text: "Refuse plastic cutlery", saves: "30g CO₂e" },
    Tip { icon: "💡", text: "Use LED bulbs", saves: "0.5 kg CO₂e/day" },
    Tip { icon: "🚴", text: "Bike instead of drive", saves: "1.5 kg CO₂e" },
    Tip { icon: "🌱", text: "Eat plant-based meal", saves: "2.5 kg CO₂e" },
];

pub const QUIZ: &[QuizQuestion] = &[
    QuizQuestion {
        question: "Which transport mode has the lowest emissions?",
        options: &["Car", "Bus", "Train", "Bike"],
        correct: 3,
    },
    QuizQuestion {
        question: "What percentage of household emissions come from food?",
        options: &["10%", "25%", "50%", "75%"],
        correct: 1,
    },
    QuizQuestion {
        question: "LED bulbs use how much less energy than traditional bulbs?",
        options: &["25%", "50%", "75%", "90%"],
        correct: 2,
    },
];

pub const LEVELS: &[Level] = &[
    Level { name: "Beginner", min: 0, max: 20, icon: "🌱" },
    Level { name: "Curious", min: 20, max: 40, icon: "🔍" },
    Level { name: "Aware", min: 40, max: 60, icon: "💡" },
    Level { name: "Green Thinker", min: 60, max: 80, icon: "🌿" },
    Level { name: "Climate Champion", min: 80, max: 100, icon: "🏆" },
];

// The intro card and the formula breakdown are always shown.
const INTRO_WEIGHT: u8 = 15;
const FORMULA_WEIGHT: u8 = 20;
const TIPS_WEIGHT: u8 = 25;
const QUIZ_WEIGHT: u8 = 40;

pub fn find_module(id: u32) -> Option<&'static LearningModule> {
    MODULES.iter().find(|module| module.id == id)
}

pub fn progress(tips_viewed: bool, quiz_completed: bool) -> u8 {
    let mut total = INTRO_WEIGHT + FORMULA_WEIGHT;
    if tips_viewed {
        total += TIPS_WEIGHT;
    }
    if quiz_completed {
        total += QUIZ_WEIGHT;
    }
    total.min(100)
}

pub fn level_for(progress: u8) -> &'static Level {
    LEVELS
        .iter()
        .find(|level| progress >= level.min && progress < level.max)
        .unwrap_or(&LEVELS[LEVELS.len() - 1])
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuizScore {
    pub correct: usize,
    pub total: usize,
}

/// `None` unless exactly one answer per question is given.
pub fn score_quiz(answers: &[usize]) -> Option<QuizScore> {
    if answers.len() != QUIZ.len() {
        return None;
    }
    let correct = QUIZ
        .iter()
        .zip(answers)
        .filter(|(question, answer)| question.correct == **answer)
        .count();
    Some(QuizScore {
        correct,
        total: QUIZ.len(),
    })
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LearnProgress {
    pub completed_modules: Vec<u32>,
    pub quiz_completed: bool,
    pub tips_viewed: bool,
}

impl LearnProgress {
    pub fn load(store: &LocalStore) -> Self {
        Self {
            completed_modules: store.get_or_default(COMPLETED_MODULES_KEY),
            quiz_completed: store.get_or_default(QUIZ_COMPLETED_KEY),
            tips_viewed: store.get_or_default(TIPS_VIEWED_KEY),
        }
    }

    /// Returns false when the module was already recorded.
    pub fn complete_module(&mut self, id: u32) -> bool {
        if self.completed_modules.contains(&id) {
            return false;
        }
        self.completed_modules.push(id);
        true
    }

    pub fn percent(&self) -> u8 {
        progress(self.tips_viewed, self.quiz_completed)
    }
}
