//! Effect resolution - applying a card effect through a `BattleContext`.

use crate::cards::{CardEffect, EffectId};

use super::context::BattleContext;

/// What happened when an effect resolved.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EffectSummary {
    pub dealt_damage: bool,
    pub gained_armor: bool,
    /// `Some(false)` if a heal was attempted but no uses were left.
    pub healed: Option<bool>,
    pub applied_weak: bool,
    pub applied_vulnerable: bool,
}

/// Applies card effects.
pub struct EffectResolver;

impl EffectResolver {
    /// Resolve every non-zero part of `effect`, in order: damage, armor,
    /// heal, Weak, Vulnerable. Non-positive amounts are skipped.
    pub fn resolve(
        ctx: &mut impl BattleContext,
        effect: &CardEffect,
        key: EffectId,
    ) -> EffectSummary {
        let mut summary = EffectSummary::default();

        if effect.damage_amount > 0 {
            ctx.damage_enemy(effect.damage_amount);
            summary.dealt_damage = true;
        }

        if effect.block_amount > 0 {
            ctx.add_player_armor(effect.block_amount);
            summary.gained_armor = true;
        }

        if effect.heal_amount > 0 {
            let healed = ctx.try_heal_player(key, effect.heal_amount, effect.heal_max_uses);
            summary.healed = Some(healed);
        }

        if effect.weak_stacks_granted > 0 {
            ctx.apply_weak_to_enemy(effect.weak_stacks_granted);
            summary.applied_weak = true;
        }

        if effect.vulnerable_stacks_granted > 0 {
            ctx.apply_vulnerable_to_enemy(effect.vulnerable_stacks_granted);
            summary.applied_vulnerable = true;
        }

        summary
    }
}
