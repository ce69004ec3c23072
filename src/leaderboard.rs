use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub name: &'static str,
    pub points: u32,
    pub trend: &'static str,
    pub highlight: bool,
}

const fn entry(rank: u32, name: &'static str, points: u32, trend: &'static str) -> LeaderboardEntry {
    LeaderboardEntry {
        rank,
        name,
        points,
        trend,
        highlight: false,
    }
}

/// Display-only sample ranking.
pub const LEADERS: &[LeaderboardEntry] = &[
    entry(1, "Priya S.", 1520, "+12%"),
    entry(2, "Arjun M.", 1380, "+8%"),
    entry(3, "Kavya R.", 1250, "+15%"),
    LeaderboardEntry {
        rank: 4,
        name: "You",
        points: 420,
        trend: "+25%",
        highlight: true,
    },
    entry(5, "Rohan K.", 380, "+5%"),
    entry(6, "Anjali P.", 360, "+10%"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranks_are_sorted_by_points() {
        for pair in LEADERS.windows(2) {
            assert_eq!(pair[0].rank + 1, pair[1].rank);
            assert!(pair[0].points > pair[1].points);
        }
        assert_eq!(LEADERS.iter().filter(|entry| entry.highlight).count(), 1);
    }
}
