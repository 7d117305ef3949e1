// src/models/tier.rs

/// Display tier for a health reading. Boundaries are inclusive at the lower
/// bound: 90.00 is still `Good`, 70.00 still `Fair`, 60.00 still `Worn`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthTier {
    /// 90% and above
    Good,
    /// 70% to just under 90%
    Fair,
    /// 60% to just under 70%
    Worn,
    /// below 60%
    Poor,
}

impl HealthTier {
    #[must_use]
    pub fn from_percent(percent: f64) -> Self {
        if percent >= 90.0 {
            Self::Good
        } else if percent >= 70.0 {
            Self::Fair
        } else if percent >= 60.0 {
            Self::Worn
        } else {
            Self::Poor
        }
    }
}
