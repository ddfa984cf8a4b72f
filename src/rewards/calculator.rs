//! Victory reward calculation.
//!
//! The multiplier comes from the game's persistent economy, which lives
//! outside the battle. Granting the reward is the `VictorySink`'s job; the
//! calculation itself has no side effects.

/// Source of the reward multiplier.
pub trait EconomyProvider {
    /// Current multiplier, or `None` if the economy has none configured.
    fn reward_multiplier(&self) -> Option<f64>;
}

/// Receives the reward after a victory and persists it.
pub trait VictorySink {
    fn grant_reward(&mut self, amount: i64);
}

/// An economy with a fixed multiplier.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedMultiplier(pub f64);

impl EconomyProvider for FixedMultiplier {
    fn reward_multiplier(&self) -> Option<f64> {
        Some(self.0)
    }
}

/// `round(max(0, base) × max(0, multiplier.unwrap_or(1.0)))`.
///
/// ```
/// use rust_battler::rewards::calculate_reward;
///
/// assert_eq!(calculate_reward(20, Some(1.25)), 25);
/// assert_eq!(calculate_reward(20, None), 20);
/// assert_eq!(calculate_reward(-5, Some(2.0)), 0);
/// ```
#[must_use]
pub fn calculate_reward(base_reward: i64, multiplier: Option<f64>) -> i64 {
    let clamped = base_reward.max(0) as f64;
    let multiplier = multiplier.unwrap_or(1.0);
    // NaN fails the comparison and is treated as zero too.
    let multiplier = if multiplier > 0.0 { multiplier } else { 0.0 };
    (clamped * multiplier).round() as i64
}

/// Applies the economy's multiplier to base rewards.
#[derive(Default)]
pub struct RewardCalculator {
    economy: Option<Box<dyn EconomyProvider>>,
}

impl RewardCalculator {
    #[must_use]
    pub fn new(economy: Option<Box<dyn EconomyProvider>>) -> Self {
        Self { economy }
    }

    /// Multiplier in effect, 1.0 when no economy is attached.
    #[must_use]
    pub fn multiplier(&self) -> Option<f64> {
        self.economy.as_ref().and_then(|e| e.reward_multiplier())
    }

    #[must_use]
    pub fn calculate(&self, base_reward: i64) -> i64 {
        calculate_reward(base_reward, self.multiplier())
    }
}

impl std::fmt::Debug for RewardCalculator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RewardCalculator")
            .field("multiplier", &self.multiplier())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NoMultiplier;

    impl EconomyProvider for NoMultiplier {
        fn reward_multiplier(&self) -> Option<f64> {
            None
        }
    }

    #[test]
    fn test_reward_examples() {
        assert_eq!(calculate_reward(20, Some(1.25)), 25);
        assert_eq!(calculate_reward(20, Some(0.0)), 0);
        assert_eq!(calculate_reward(-20, Some(1.25)), 0);
    }

    #[test]
    fn test_negative_and_nan_multiplier() {
        assert_eq!(calculate_reward(20, Some(-3.0)), 0);
        assert_eq!(calculate_reward(20, Some(f64::NAN)), 0);
    }

    #[test]
    fn test_rounding() {
        // 15 × 1.1 = 16.5 -> 17
        assert_eq!(calculate_reward(15, Some(1.1)), 17);
        assert_eq!(calculate_reward(3, Some(0.5)), 2);
    }

    #[test]
    fn test_calculator_without_economy() {
        let calc = RewardCalculator::default();
        assert_eq!(calc.multiplier(), None);
        assert_eq!(calc.calculate(20), 20);
    }

    #[test]
    fn test_calculator_with_economy() {
        let calc = RewardCalculator::new(Some(Box::new(FixedMultiplier(1.25))));
        assert_eq!(calc.calculate(20), 25);

        let calc = RewardCalculator::new(Some(Box::new(NoMultiplier)));
        assert_eq!(calc.calculate(20), 20);
    }
}
