//! Enemy intents and the policy that picks them.
//!
//! The next intent is rolled right after the enemy acts and shown to the
//! player for their whole turn. Execution always uses the cached intent, so
//! what the player saw is what happens.

use serde::{Deserialize, Serialize};

use crate::core::config::EnemyConfig;
use crate::core::rng::GameRng;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IntentKind {
    LightAttack,
    HeavyAttack,
    LeechHeal,
}

impl IntentKind {
    #[must_use]
    pub fn is_attack(self) -> bool {
        matches!(self, IntentKind::LightAttack | IntentKind::HeavyAttack)
    }
}

/// A previewed enemy action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnemyIntent {
    pub kind: IntentKind,
    /// Base damage for attacks. Zero for `LeechHeal`; the heal amount is
    /// part of the enemy config and is not previewed.
    pub magnitude: u32,
    pub label: String,
}

impl EnemyIntent {
    #[must_use]
    pub fn light_attack(magnitude: u32) -> Self {
        Self {
            kind: IntentKind::LightAttack,
            magnitude,
            label: format!("Light Attack ({magnitude})"),
        }
    }

    #[must_use]
    pub fn heavy_attack(magnitude: u32) -> Self {
        Self {
            kind: IntentKind::HeavyAttack,
            magnitude,
            label: format!("Heavy Attack ({magnitude})"),
        }
    }

    #[must_use]
    pub fn leech_heal() -> Self {
        Self {
            kind: IntentKind::LeechHeal,
            magnitude: 0,
            label: "Leech".to_string(),
        }
    }
}

/// Chooses the enemy's next intent.
///
/// Implement this to give an enemy scripted or smarter behavior. A battle
/// built without a policy uses `WeightedIntentPolicy`.
pub trait IntentPolicy {
    fn decide_next_intent(&mut self, enemy: &EnemyConfig, rng: &mut GameRng) -> EnemyIntent;
}

/// Weighted random choice between light, heavy and leech.
///
/// Rolls in `[0, max(1, light + heavy + leech))`. The first `light` values
/// pick a light attack, the next `heavy` values a heavy attack, and the
/// rest leech. Attack magnitudes are at least 1.
#[derive(Clone, Copy, Debug, Default)]
pub struct WeightedIntentPolicy;

impl IntentPolicy for WeightedIntentPolicy {
    fn decide_next_intent(&mut self, enemy: &EnemyConfig, rng: &mut GameRng) -> EnemyIntent {
        let (light, heavy, leech) = enemy.weights();
        let sum = light.saturating_add(heavy).saturating_add(leech);
        if sum == 0 {
            tracing::warn!(enemy = %enemy.name, "all intent weights are zero");
        }
        let total = sum.max(1);

        let roll = rng.gen_below(total);
        if roll < light {
            EnemyIntent::light_attack(enemy.light_damage.max(1) as u32)
        } else if roll < light.saturating_add(heavy) {
            EnemyIntent::heavy_attack(enemy.heavy_damage.max(1) as u32)
        } else {
            EnemyIntent::leech_heal()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roll_many(enemy: &EnemyConfig, n: usize) -> Vec<EnemyIntent> {
        let mut policy = WeightedIntentPolicy;
        let mut rng = GameRng::new(42);
        (0..n)
            .map(|_| policy.decide_next_intent(enemy, &mut rng))
            .collect()
    }

    #[test]
    fn test_only_light() {
        let enemy = EnemyConfig::default().with_weights(1, 0, 0).with_damage(7, 20);
        for intent in roll_many(&enemy, 50) {
            assert_eq!(intent, EnemyIntent::light_attack(7));
        }
    }

    #[test]
    fn test_only_heavy() {
        let enemy = EnemyConfig::default().with_weights(0, 3, 0).with_damage(7, 20);
        for intent in roll_many(&enemy, 50) {
            assert_eq!(intent.kind, IntentKind::HeavyAttack);
            assert_eq!(intent.magnitude, 20);
        }
    }

    #[test]
    fn test_all_zero_weights_leech() {
        // total clamps to 1, roll is always 0, no attack band
        let enemy = EnemyConfig::default().with_weights(0, 0, 0);
        for intent in roll_many(&enemy, 10) {
            assert_eq!(intent, EnemyIntent::leech_heal());
        }
    }

    #[test]
    fn test_magnitude_at_least_one() {
        let enemy = EnemyConfig::default().with_weights(1, 0, 0).with_damage(-5, 0);
        let intent = roll_many(&enemy, 1).remove(0);
        assert_eq!(intent.magnitude, 1);
        assert_eq!(intent.label, "Light Attack (1)");
    }

    #[test]
    fn test_negative_weight_treated_as_zero() {
        let enemy = EnemyConfig::default().with_weights(-10, 0, 5);
        for intent in roll_many(&enemy, 30) {
            assert_eq!(intent.kind, IntentKind::LeechHeal);
        }
    }

    #[test]
    fn test_mixed_weights_hit_every_band() {
        let enemy = EnemyConfig::default().with_weights(1, 1, 1);
        let intents = roll_many(&enemy, 300);
        for kind in [IntentKind::LightAttack, IntentKind::HeavyAttack, IntentKind::LeechHeal] {
            assert!(intents.iter().any(|i| i.kind == kind), "{kind:?} never rolled");
        }
    }

    #[test]
    fn test_leech_magnitude_zero() {
        let intent = EnemyIntent::leech_heal();
        assert_eq!(intent.magnitude, 0);
        assert!(!intent.kind.is_attack());
        assert!(IntentKind::HeavyAttack.is_attack());
    }
}
