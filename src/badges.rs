use serde::{Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    FirstSteps,
    ConsistentCare,
    OneWeekCalm,
    ZenExplorer,
}

impl Badge {
    pub fn title(&self) -> &'static str {
        match self {
            Badge::FirstSteps => "🌱 First Steps",
            Badge::ConsistentCare => "🔥 Consistent Care",
            Badge::OneWeekCalm => "🌸 One Week Calm",
            Badge::ZenExplorer => "💎 Zen Explorer",
        }
    }
}

impl Serialize for Badge {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.title())
    }
}

/// Badges unlocked by coin total and day streak, in display order.
pub fn earned(coins: u32, streak: u32) -> Vec<Badge> {
    let mut badges = Vec::new();
    if coins >= 20 {
        badges.push(Badge::FirstSteps);
    }
    if streak >= 3 {
        badges.push(Badge::ConsistentCare);
    }
    if streak >= 7 {
        badges.push(Badge::OneWeekCalm);
    }
    if coins >= 100 {
        badges.push(Badge::ZenExplorer);
    }
    badges
}
