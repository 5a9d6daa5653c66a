//! Running accumulation state during a projection

/// Corpus and contributions at a point in time during projection
#[derive(Debug, Clone, Default)]
pub struct AccumulationState {
    /// Current projection month (1-indexed, 0 before the first month)
    pub month: u32,

    /// Current corpus value
    pub corpus: f64,

    /// Cumulative contributions posted
    pub total_invested: f64,
}

impl AccumulationState {
    /// Empty state at projection start
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance to next month
    pub fn advance_month(&mut self) {
        self.month += 1;
    }

    /// Post a contribution into both the corpus and the invested total
    pub fn post_contribution(&mut self, amount: f64) {
        self.corpus += amount;
        self.total_invested += amount;
    }

    /// Grow the corpus by one period's rate
    pub fn apply_growth(&mut self, period_rate: f64) {
        self.corpus *= 1.0 + period_rate;
    }

    /// Whether the current month closes a projection year
    pub fn is_year_end(&self) -> bool {
        self.month > 0 && self.month % 12 == 0
    }

    /// Completed projection years
    pub fn completed_years(&self) -> u32 {
        self.month / 12
    }
}
