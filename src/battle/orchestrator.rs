//! The battle state machine.
//!
//! `Battle` owns both combatants and sequences the deck, energy, status and
//! intent components through the turn cycle:
//!
//! ```text
//! PlayerTurn --end_turn / energy spent / auto end--> EnemyTurn
//! EnemyTurn  --resolve_enemy_turn-------------------> PlayerTurn | Defeat
//! PlayerTurn --play_card (enemy HP <= 0)-------------> Victory
//! ```
//!
//! Every command runs to completion before returning. Pauses for the
//! presentation layer are modelled as a pending `Continuation`: the battle
//! reports it through `BattleObserver::continuation_scheduled` and the
//! caller fires it with `resume()` when the delay is over.

use crate::ai::{EnemyIntent, IntentKind, IntentPolicy, WeightedIntentPolicy};
use crate::cards::{CardCatalog, CardEffect, CardId, EffectId};
use crate::core::combatant::{Combatant, PlayerCombatant, Side};
use crate::core::config::{
    BattleConfig, LEGACY_ATTACK_EFFECT, LEGACY_GUARD_EFFECT, LEGACY_MEND_EFFECT,
};
use crate::core::energy::Energy;
use crate::core::error::Result;
use crate::core::rng::GameRng;
use crate::effects::{BattleContext, EffectResolver, EffectSummary};
use crate::events::{BattleObserver, NullObserver};
use crate::rewards::{EconomyProvider, RewardCalculator, VictorySink};
use crate::status::{StatusEngine, StatusKind};
use crate::zones::Deck;

use super::phase::{BattlePhase, CommandOutcome, Continuation, RejectReason};
use super::snapshot::BattleSnapshot;

/// Energy cost of the Attack/Guard/Mend helpers.
pub const LEGACY_ACTION_COST: u32 = 1;

/// Collects a battle's configuration and collaborators, then starts it.
///
/// ## Example
///
/// ```
/// use rust_battler::battle::{BattleBuilder, BattlePhase};
/// use rust_battler::cards::starter::{starter_catalog, starter_deck};
/// use rust_battler::core::BattleConfig;
/// use rust_battler::rewards::FixedMultiplier;
///
/// let battle = BattleBuilder::new(BattleConfig::default(), starter_catalog())
///     .with_deck(starter_deck())
///     .with_economy(FixedMultiplier(1.5))
///     .build()
///     .unwrap();
///
/// assert_eq!(battle.phase(), BattlePhase::PlayerTurn);
/// assert_eq!(battle.hand().len(), 5);
/// ```
pub struct BattleBuilder {
    config: BattleConfig,
    catalog: CardCatalog,
    deck: Vec<CardId>,
    policy: Option<Box<dyn IntentPolicy>>,
    economy: Option<Box<dyn EconomyProvider>>,
    sink: Option<Box<dyn VictorySink>>,
}

impl BattleBuilder {
    #[must_use]
    pub fn new(config: BattleConfig, catalog: CardCatalog) -> Self {
        Self {
            config,
            catalog,
            deck: Vec::new(),
            policy: None,
            economy: None,
            sink: None,
        }
    }

    /// Starting deck, as catalog references.
    #[must_use]
    pub fn with_deck(mut self, deck: impl Into<Vec<CardId>>) -> Self {
        self.deck = deck.into();
        self
    }

    /// Enemy AI. Defaults to `WeightedIntentPolicy`.
    #[must_use]
    pub fn with_intent_policy(mut self, policy: impl IntentPolicy + 'static) -> Self {
        self.policy = Some(Box::new(policy));
        self
    }

    /// Reward multiplier source. Without one the multiplier is 1.0.
    #[must_use]
    pub fn with_economy(mut self, economy: impl EconomyProvider + 'static) -> Self {
        self.economy = Some(Box::new(economy));
        self
    }

    /// Receiver for the victory reward.
    #[must_use]
    pub fn with_victory_sink(mut self, sink: impl VictorySink + 'static) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    /// Start the battle without an observer.
    pub fn build(self) -> Result<Battle> {
        self.build_with_observer(NullObserver)
    }

    /// Start the battle, sending notifications to `observer`.
    ///
    /// Fails only if the starting deck references a card missing from the
    /// catalog.
    pub fn build_with_observer<O: BattleObserver>(self, observer: O) -> Result<Battle<O>> {
        self.catalog.validate_deck(&self.deck)?;

        let root = GameRng::new(self.config.seed);
        let mut deck_rng = root.for_context("deck");
        let intent_rng = root.for_context("intent");

        let mut deck = Deck::new();
        deck.build_and_shuffle(&self.deck, &mut deck_rng);

        let energy = Energy::new(self.config.player.max_energy());
        let player = PlayerCombatant::new(
            self.config.player.max_hp(),
            self.config.player.starting_armor(),
        );
        let enemy = Combatant::new(self.config.enemy.max_hp());

        tracing::info!(
            enemy = %self.config.enemy.name,
            seed = self.config.seed,
            cards = deck.total_cards(),
            "battle started"
        );

        let mut battle = Battle {
            config: self.config,
            catalog: self.catalog,
            player,
            enemy,
            status: StatusEngine::new(),
            energy,
            deck,
            intent: EnemyIntent::leech_heal(),
            phase: BattlePhase::PlayerTurn,
            pending: None,
            turn: 0,
            reward: None,
            deck_rng,
            intent_rng,
            policy: self.policy.unwrap_or_else(|| Box::new(WeightedIntentPolicy)),
            rewards: RewardCalculator::new(self.economy),
            sink: self.sink,
            observer,
        };
        battle.start();
        Ok(battle)
    }
}

/// One battle between the player and a single enemy.
pub struct Battle<O: BattleObserver = NullObserver> {
    config: BattleConfig,
    catalog: CardCatalog,
    player: PlayerCombatant,
    enemy: Combatant,
    status: StatusEngine,
    energy: Energy,
    deck: Deck,
    intent: EnemyIntent,
    phase: BattlePhase,
    pending: Option<Continuation>,
    turn: u32,
    reward: Option<i64>,
    deck_rng: GameRng,
    intent_rng: GameRng,
    policy: Box<dyn IntentPolicy>,
    rewards: RewardCalculator,
    sink: Option<Box<dyn VictorySink>>,
    observer: O,
}

impl<O: BattleObserver> Battle<O> {
    // === Queries ===

    #[must_use]
    pub fn phase(&self) -> BattlePhase {
        self.phase
    }

    /// Continuation waiting for `resume()`, if any.
    #[must_use]
    pub fn pending(&self) -> Option<Continuation> {
        self.pending
    }

    /// Player turn number, starting at 1.
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    #[must_use]
    pub fn player(&self) -> &PlayerCombatant {
        &self.player
    }

    #[must_use]
    pub fn enemy(&self) -> &Combatant {
        &self.enemy
    }

    #[must_use]
    pub fn status(&self) -> &StatusEngine {
        &self.status
    }

    #[must_use]
    pub fn energy(&self) -> Energy {
        self.energy
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn hand(&self) -> &[CardId] {
        self.deck.hand()
    }

    /// The previewed enemy action.
    #[must_use]
    pub fn intent(&self) -> &EnemyIntent {
        &self.intent
    }

    #[must_use]
    pub fn catalog(&self) -> &CardCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    /// Reward granted at the end of the battle (0 on defeat).
    #[must_use]
    pub fn reward(&self) -> Option<i64> {
        self.reward
    }

    #[must_use]
    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    pub fn into_observer(self) -> O {
        self.observer
    }

    /// Whether `card` is in hand and affordable right now.
    #[must_use]
    pub fn can_play(&self, card: CardId) -> bool {
        self.phase == BattlePhase::PlayerTurn
            && self.deck.hand_contains(card)
            && self
                .catalog
                .get(card)
                .is_some_and(|t| self.energy.can_afford(t.energy_cost()))
    }

    #[must_use]
    pub fn snapshot(&self) -> BattleSnapshot {
        BattleSnapshot {
            phase: self.phase,
            turn: self.turn,
            pending: self.pending,
            player_hp: self.player.hp(),
            player_max_hp: self.player.max_hp(),
            player_armor: self.player.armor(),
            enemy_name: self.config.enemy.name.clone(),
            enemy_hp: self.enemy.hp(),
            enemy_max_hp: self.enemy.max_hp(),
            player_status: *self.status.state(Side::Player),
            enemy_status: *self.status.state(Side::Enemy),
            energy: self.energy,
            hand: self.deck.hand().to_vec(),
            draw_pile_size: self.deck.draw_pile().len(),
            discard_pile_size: self.deck.discard_pile().len(),
            intent: self.intent.clone(),
            reward: self.reward,
        }
    }

    // === Commands ===

    /// Play one copy of `card` from the hand.
    pub fn play_card(&mut self, card: CardId) -> CommandOutcome {
        if self.phase != BattlePhase::PlayerTurn {
            return CommandOutcome::Rejected(RejectReason::WrongPhase);
        }
        if !self.deck.hand_contains(card) {
            return CommandOutcome::Rejected(RejectReason::NotInHand);
        }
        let Some(template) = self.catalog.get(card) else {
            tracing::warn!(%card, "card in hand is missing from the catalog");
            return CommandOutcome::Rejected(RejectReason::UnknownCard);
        };

        let cost = template.energy_cost();
        let effect = template.effect;
        let key = template.effect_key();
        tracing::debug!(%card, title = %template.title, cost, "playing card");

        self.resolve_player_action(&effect, cost, key, Some(card))
    }

    /// End the player turn early.
    pub fn end_turn(&mut self) -> CommandOutcome {
        if self.phase != BattlePhase::PlayerTurn {
            return CommandOutcome::Rejected(RejectReason::WrongPhase);
        }
        self.end_player_turn();
        CommandOutcome::Applied
    }

    /// Fire the pending continuation.
    pub fn resume(&mut self) -> CommandOutcome {
        match self.pending.take() {
            Some(Continuation::AutoEndTurn) => self.end_turn(),
            Some(Continuation::ResolveEnemyTurn) => self.resolve_enemy_turn(),
            None => CommandOutcome::Rejected(RejectReason::NothingPending),
        }
    }

    /// Carry out the previewed intent, then start the next player turn.
    ///
    /// Only valid in `EnemyTurn`, after `end_turn` (or an automatic end)
    /// has announced the enemy's action.
    pub fn resolve_enemy_turn(&mut self) -> CommandOutcome {
        if self.phase != BattlePhase::EnemyTurn {
            return CommandOutcome::Rejected(RejectReason::WrongPhase);
        }
        self.pending = None;

        let intent = self.intent.clone();
        let name = self.config.enemy.name.clone();
        match intent.kind {
            IntentKind::LightAttack | IntentKind::HeavyAttack => {
                let base = i32::try_from(intent.magnitude).unwrap_or(i32::MAX);
                let damage = self.status.modified_damage(Side::Enemy, base);
                let report = self.player.absorb(damage);
                tracing::debug!(
                    intent = %intent.label,
                    damage,
                    absorbed = report.absorbed,
                    hp_lost = report.hp_lost,
                    "enemy attacks"
                );
                self.publish_player_stats();
                self.observer.info(&format!(
                    "{name} hits for {damage} ({} blocked)",
                    report.absorbed
                ));
            }
            IntentKind::LeechHeal => {
                let healed = self.enemy.heal(self.config.enemy.leech_heal_amount());
                tracing::debug!(healed, "enemy leeches");
                self.publish_enemy_stats();
                self.observer.info(&format!("{name} leeches {healed} HP"));
            }
        }

        if self.player.is_defeated() {
            self.finish(false);
            return CommandOutcome::Applied;
        }

        self.roll_intent();
        self.status.tick_end_of_enemy_turn();
        self.publish_enemy_status();
        self.begin_player_turn();
        CommandOutcome::Applied
    }

    /// Deal the configured Attack damage for one energy.
    pub fn attack(&mut self) -> CommandOutcome {
        let effect = self.config.legacy.attack;
        self.legacy_action(effect, LEGACY_ATTACK_EFFECT)
    }

    /// Gain the configured Guard armor for one energy.
    pub fn guard(&mut self) -> CommandOutcome {
        let effect = self.config.legacy.guard;
        self.legacy_action(effect, LEGACY_GUARD_EFFECT)
    }

    /// Use the configured Mend heal for one energy.
    pub fn mend(&mut self) -> CommandOutcome {
        let effect = self.config.legacy.mend;
        self.legacy_action(effect, LEGACY_MEND_EFFECT)
    }

    // === Pipeline ===

    fn start(&mut self) {
        self.publish_player_stats();
        self.publish_enemy_stats();
        self.publish_player_status();
        self.publish_enemy_status();
        self.roll_intent();
        self.begin_player_turn();
    }

    /// Refused outside `PlayerTurn` and while an automatic end is pending.
    fn legacy_action(&mut self, effect: CardEffect, fallback_key: EffectId) -> CommandOutcome {
        if self.phase != BattlePhase::PlayerTurn
            || self.pending == Some(Continuation::AutoEndTurn)
        {
            return CommandOutcome::Rejected(RejectReason::WrongPhase);
        }
        let key = effect.id.unwrap_or(fallback_key);
        self.resolve_player_action(&effect, LEGACY_ACTION_COST, key, None)
    }

    fn resolve_player_action(
        &mut self,
        effect: &CardEffect,
        cost: u32,
        key: EffectId,
        from_hand: Option<CardId>,
    ) -> CommandOutcome {
        if !self.energy.try_spend(cost) {
            self.observer.info("Not enough energy");
            return CommandOutcome::Rejected(RejectReason::NotEnoughEnergy);
        }
        self.publish_energy();

        self.apply_action_effect(effect, key);

        if let Some(card) = from_hand {
            self.deck.discard_from_hand(card);
            self.publish_hand();
        }

        self.post_player_card_resolved();
        CommandOutcome::Applied
    }

    fn apply_action_effect(&mut self, effect: &CardEffect, key: EffectId) -> EffectSummary {
        let summary = EffectResolver::resolve(&mut EffectScope { battle: self }, effect, key);
        tracing::trace!(?summary, "effect resolved");
        summary
    }

    fn post_player_card_resolved(&mut self) {
        if self.enemy.is_defeated() {
            self.finish(true);
        } else if self.energy.is_empty() {
            self.end_player_turn();
        } else {
            self.check_auto_end();
        }
    }

    /// Schedule an automatic end if nothing in hand is affordable.
    ///
    /// Only cost is considered; a hand of exhausted heals still counts as
    /// playable.
    fn check_auto_end(&mut self) {
        let affordable = self.deck.hand().iter().any(|&card| {
            self.catalog
                .get(card)
                .is_some_and(|t| self.energy.can_afford(t.energy_cost()))
        });
        if !affordable {
            self.schedule(Continuation::AutoEndTurn);
        }
    }

    fn schedule(&mut self, continuation: Continuation) {
        let delay = match continuation {
            Continuation::AutoEndTurn => self.config.pacing.auto_end_delay(),
            Continuation::ResolveEnemyTurn => self.config.pacing.enemy_turn_delay(),
        };
        tracing::debug!(?continuation, ?delay, "continuation scheduled");
        self.pending = Some(continuation);
        self.observer.continuation_scheduled(continuation, delay);
    }

    fn end_player_turn(&mut self) {
        self.pending = None;
        self.status.tick_end_of_player_turn();
        self.publish_player_status();
        self.deck.discard_hand();
        self.publish_hand();
        self.begin_enemy_turn();
    }

    fn begin_enemy_turn(&mut self) {
        self.phase = BattlePhase::EnemyTurn;
        tracing::debug!(turn = self.turn, "enemy turn");
        let message = format!("{} is about to act", self.config.enemy.name);
        self.observer.info(&message);
        self.schedule(Continuation::ResolveEnemyTurn);
    }

    fn begin_player_turn(&mut self) {
        self.phase = BattlePhase::PlayerTurn;
        self.turn += 1;

        self.energy.refill(self.config.player.energy_per_turn());
        self.publish_energy();

        let report = self
            .deck
            .draw(self.config.player.hand_size(), &mut self.deck_rng);
        self.publish_hand();
        tracing::debug!(
            turn = self.turn,
            drawn = report.drawn,
            reshuffles = report.reshuffles,
            "player turn"
        );

        self.check_auto_end();
    }

    fn roll_intent(&mut self) {
        self.intent = self
            .policy
            .decide_next_intent(&self.config.enemy, &mut self.intent_rng);
        self.observer.intent_changed(&self.intent);
    }

    fn finish(&mut self, victory: bool) {
        self.phase = if victory {
            BattlePhase::Victory
        } else {
            BattlePhase::Defeat
        };
        self.pending = None;

        let reward = if victory {
            self.rewards.calculate(self.config.base_reward)
        } else {
            0
        };
        if victory {
            if let Some(sink) = self.sink.as_mut() {
                sink.grant_reward(reward);
            }
        }
        self.reward = Some(reward);

        tracing::info!(victory, reward, turn = self.turn, "battle ended");
        self.observer.info(if victory { "Victory!" } else { "Defeat" });
        self.observer.battle_ended(victory, reward);
    }

    // === Notifications ===

    fn publish_player_stats(&mut self) {
        self.observer
            .player_stats_changed(self.player.hp(), self.player.max_hp(), self.player.armor());
    }

    fn publish_enemy_stats(&mut self) {
        self.observer
            .enemy_stats_changed(self.enemy.hp(), self.enemy.max_hp());
    }

    fn publish_energy(&mut self) {
        self.observer
            .energy_changed(self.energy.current(), self.energy.max());
    }

    fn publish_hand(&mut self) {
        self.observer.hand_changed(self.deck.hand());
    }

    fn publish_player_status(&mut self) {
        let label = self.status.label(Side::Player);
        self.observer.player_status_changed(&label);
    }

    fn publish_enemy_status(&mut self) {
        let label = self.status.label(Side::Enemy);
        self.observer.enemy_status_changed(&label);
    }
}

/// The `BattleContext` card effects see while one action resolves.
struct EffectScope<'a, O: BattleObserver> {
    battle: &'a mut Battle<O>,
}

impl<O: BattleObserver> BattleContext for EffectScope<'_, O> {
    fn damage_enemy(&mut self, amount: i32) {
        let battle = &mut *self.battle;
        let damage = battle.status.modified_damage(Side::Player, amount);
        let lost = battle.enemy.take_damage(damage);
        tracing::debug!(base = amount, damage, lost, "player hits enemy");
        battle.publish_enemy_stats();
    }

    fn add_player_armor(&mut self, amount: i32) {
        self.battle.player.add_armor(amount);
        self.battle.publish_player_stats();
    }

    fn try_heal_player(&mut self, effect: EffectId, amount: i32, max_uses: i32) -> bool {
        let battle = &mut *self.battle;
        if !battle.player.try_consume_heal(effect, max_uses) {
            battle.observer.info("No heals left");
            return false;
        }
        let healed = battle.player.heal(amount);
        tracing::debug!(%effect, healed, "player heals");
        battle.publish_player_stats();
        true
    }

    fn apply_weak_to_enemy(&mut self, stacks: i32) {
        self.battle.status.apply_to_enemy(StatusKind::Weak, stacks);
        self.battle.publish_enemy_status();
    }

    fn apply_vulnerable_to_enemy(&mut self, stacks: i32) {
        self.battle
            .status
            .apply_to_enemy(StatusKind::Vulnerable, stacks);
        self.battle.publish_enemy_status();
    }
}
