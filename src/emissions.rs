use serde::{Deserialize, Serialize};

/// kg CO2 per kWh of average grid electricity.
pub const ENERGY_FACTOR: f64 = 0.385;

/// Average petrol car, used for the "equivalent km driven" figure.
pub const REFERENCE_CAR_FACTOR: f64 = 0.192;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Transport,
    Energy,
    Food,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Transport => "transport",
            Category::Energy => "energy",
            Category::Food => "food",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TransportMode {
    Car,
    CarDiesel,
    CarElectric,
    Bus,
    Train,
    Motorcycle,
    Bike,
    Walk,
}

impl TransportMode {
    pub const ALL: [TransportMode; 8] = [
        TransportMode::Car,
        TransportMode::CarDiesel,
        TransportMode::CarElectric,
        TransportMode::Bus,
        TransportMode::Train,
        TransportMode::Motorcycle,
        TransportMode::Bike,
        TransportMode::Walk,
    ];

    /// kg CO2 per km.
    pub fn factor(self) -> f64 {
        match self {
            TransportMode::Car => 0.192,
            TransportMode::CarDiesel => 0.171,
            TransportMode::CarElectric => 0.053,
            TransportMode::Bus => 0.089,
            TransportMode::Train => 0.041,
            TransportMode::Motorcycle => 0.113,
            TransportMode::Bike | TransportMode::Walk => 0.0,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            TransportMode::Car => "car",
            TransportMode::CarDiesel => "car-diesel",
            TransportMode::CarElectric => "car-electric",
            TransportMode::Bus => "bus",
            TransportMode::Train => "train",
            TransportMode::Motorcycle => "motorcycle",
            TransportMode::Bike => "bike",
            TransportMode::Walk => "walk",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| mode.key() == key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FoodType {
    Beef,
    Lamb,
    Pork,
    Chicken,
    Fish,
    Vegetarian,
    Vegan,
}

impl FoodType {
    pub const ALL: [FoodType; 7] = [
        FoodType::Beef,
        FoodType::Lamb,
        FoodType::Pork,
        FoodType::Chicken,
        FoodType::Fish,
        FoodType::Vegetarian,
        FoodType::Vegan,
    ];

    /// kg CO2 per serving.
    pub fn factor(self) -> f64 {
        match self {
            FoodType::Beef => 7.19,
            FoodType::Lamb => 5.6,
            FoodType::Pork => 1.72,
            FoodType::Chicken => 0.87,
            FoodType::Fish => 0.63,
            FoodType::Vegetarian => 0.39,
            FoodType::Vegan => 0.29,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            FoodType::Beef => "beef",
            FoodType::Lamb => "lamb",
            FoodType::Pork => "pork",
            FoodType::Chicken => "chicken",
            FoodType::Fish => "fish",
            FoodType::Vegetarian => "vegetarian",
            FoodType::Vegan => "vegan",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|food| food.key() == key)
    }
}

/// One validated calculator input. Quantities are expected to be finite and
/// non-negative; callers check that before building an activity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Activity {
    Transport { mode: TransportMode, distance_km: f64 },
    Energy { kwh: f64 },
    Food { food: FoodType, servings: f64 },
}

impl Activity {
    pub fn category(&self) -> Category {
        match self {
            Activity::Transport { .. } => Category::Transport,
            Activity::Energy { .. } => Category::Energy,
            Activity::Food { .. } => Category::Food,
        }
    }

    /// Mode or food key, when the category has one.
    pub fn kind_key(&self) -> Option<&'static str> {
        match self {
            Activity::Transport { mode, .. } => Some(mode.key()),
            Activity::Energy { .. } => None,
            Activity::Food { food, .. } => Some(food.key()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub emissions: f64,
    pub category: Category,
    pub details: String,
}

pub fn estimate(activity: &Activity) -> CalculationResult {
    let (emissions, details) = match *activity {
        Activity::Transport { mode, distance_km } => (
            distance_km * mode.factor(),
            format!("{distance_km} km by {}", mode.key().replacen('-', " ", 1)),
        ),
        Activity::Energy { kwh } => (kwh * ENERGY_FACTOR, format!("{kwh} kWh of electricity")),
        Activity::Food { food, servings } => {
            let plural = if servings > 1.0 { "s" } else { "" };
            (
                servings * food.factor(),
                format!("{servings} serving{plural} of {}", food.key()),
            )
        }
    };

    CalculationResult {
        emissions,
        category: activity.category(),
        details,
    }
}

pub fn car_equivalent_km(emissions: f64) -> f64 {
    emissions / REFERENCE_CAR_FACTOR
}

pub fn recommendations(result: &CalculationResult, kind: Option<&str>) -> Vec<&'static str> {
    let emissions = result.emissions;
    let mut tips = Vec::new();

    match result.category {
        Category::Transport => {
            if emissions > 5.0 {
                tips.push("🚆 Consider using public transport to reduce emissions by up to 75%");
                tips.push("🚴 Cycling or walking for short trips can eliminate emissions entirely");
            }
            if matches!(kind, Some("car") | Some("car-diesel")) {
                tips.push("⚡ Switching to an electric vehicle can reduce emissions by 72%");
                tips.push("🚗 Carpooling with 3 people reduces per-person emissions by 75%");
            }
            if emissions < 2.0 {
                tips.push("✨ Great choice! You're using eco-friendly transportation");
            }
        }
        Category::Energy => {
            if emissions > 10.0 {
                tips.push("💡 Switch to LED bulbs to reduce consumption by 75%");
                tips.push("🌡️ Lower your thermostat by 1°C to save 10% on heating");
                tips.push("☀️ Consider solar panels to generate clean energy");
            } else if emissions < 5.0 {
                tips.push("✨ Excellent! You're using energy efficiently");
            }
            tips.push("🔌 Unplug devices when not in use to reduce phantom power");
        }
        Category::Food => {
            if emissions > 10.0 {
                tips.push("🥗 Try having 1-2 meat-free days per week");
                tips.push("🐔 Choosing chicken over beef reduces emissions by 88%");
            }
            if matches!(kind, Some("beef") | Some("lamb")) {
                tips.push("🌱 Plant-based alternatives can reduce food emissions by 96%");
            }
            if emissions < 2.0 {
                tips.push("✨ Fantastic! Your diet has a low carbon footprint");
            }
            tips.push("🍽️ Eating local and seasonal food reduces transportation emissions");
        }
    }

    tips
}
