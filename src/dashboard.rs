use crate::models::{BreakdownShare, DashboardResponse, DashboardStat, SeriesPoint};

impl SeriesPoint {
    fn new(label: &'static str, transport: f64, energy: f64, food: f64) -> Self {
        Self {
            label,
            transport,
            energy,
            food,
            total: round1(transport + energy + food),
        }
    }
}

pub fn build_dashboard() -> DashboardResponse {
    DashboardResponse {
        stats: vec![
            DashboardStat { label: "Today", value: 2.4, unit: "kg CO₂", trend: -12 },
            DashboardStat { label: "This Week", value: 18.5, unit: "kg CO₂", trend: -8 },
            DashboardStat { label: "This Month", value: 76.0, unit: "kg CO₂", trend: -15 },
            DashboardStat { label: "Points", value: 420.0, unit: "pts", trend: 25 },
        ],
        breakdown: vec![
            BreakdownShare { category: "Transport", percent: 45 },
            BreakdownShare { category: "Energy", percent: 30 },
            BreakdownShare { category: "Food", percent: 25 },
        ],
        daily: vec![
            SeriesPoint::new("Mon", 2.4, 1.8, 1.2),
            SeriesPoint::new("Tue", 1.8, 2.1, 1.5),
            SeriesPoint::new("Wed", 3.2, 1.9, 1.3),
            SeriesPoint::new("Thu", 2.1, 2.3, 1.8),
            SeriesPoint::new("Fri", 1.5, 2.0, 1.4),
            SeriesPoint::new("Sat", 0.8, 1.5, 2.1),
            SeriesPoint::new("Sun", 0.6, 1.6, 1.9),
        ],
        weekly: vec![
            SeriesPoint::new("Week 1", 12.5, 10.2, 8.5),
            SeriesPoint::new("Week 2", 14.2, 11.5, 9.2),
            SeriesPoint::new("Week 3", 11.8, 10.8, 8.8),
            SeriesPoint::new("Week 4", 13.5, 12.1, 9.5),
        ],
        monthly: vec![
            SeriesPoint::new("Jan", 52.0, 45.0, 38.0),
            SeriesPoint::new("Feb", 48.0, 42.0, 35.0),
            SeriesPoint::new("Mar", 55.0, 48.0, 40.0),
            SeriesPoint::new("Apr", 45.0, 40.0, 36.0),
            SeriesPoint::new("May", 50.0, 44.0, 38.0),
            SeriesPoint::new("Jun", 42.0, 38.0, 34.0),
        ],
        daily_challenge: "Use public transport or cycle for your commute today",
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
