//! Configuration and catalog loading tests.
//!
//! Battles are set up from data files: a battle config in TOML or JSON
//! and a card catalog with `[[cards]]` tables.

use rust_battler::battle::{BattleBuilder, BattlePhase, Continuation};
use rust_battler::cards::{CardCatalog, CardId, EffectId};
use rust_battler::core::BattleConfig;
use rust_battler::BattleError;

const CONFIG_TOML: &str = r#"
seed = 7
base_reward = 40

[player]
max_hp = 30
energy_per_turn = 2
max_energy = 2
hand_size = 4

[enemy]
name = "Bog Leech"
max_hp = 25
light_damage = 10
light_weight = 1
heavy_weight = 0
leech_weight = 0

[pacing]
enemy_turn_delay_ms = 0
"#;

const CATALOG_TOML: &str = r#"
[[cards]]
id = 10
title = "Poultice"
cost = 1
effect = { id = 300, heal_amount = 4, heal_max_uses = 1 }

[[cards]]
id = 11
title = "Salve"
cost = 1
effect = { id = 300, heal_amount = 4, heal_max_uses = 1 }

[[cards]]
id = 12
title = "Jab"
cost = -2
effect = { damage_amount = 3 }
"#;

#[test]
fn test_toml_config_overrides_defaults() {
    let config = BattleConfig::from_toml_str(CONFIG_TOML).unwrap();

    assert_eq!(config.seed, 7);
    assert_eq!(config.base_reward, 40);
    assert_eq!(config.player.max_hp, 30);
    assert_eq!(config.player.hand_size(), 4);
    assert_eq!(config.enemy.name, "Bog Leech");
    assert_eq!(config.enemy.weights(), (1, 0, 0));
    // Untouched fields keep their defaults
    assert_eq!(config.player.starting_armor, 0);
    assert_eq!(config.enemy.heavy_damage, 12);
    assert_eq!(config.pacing.auto_end_delay_ms, 400);
    assert_eq!(config.legacy.attack.damage_amount, 5);
}

#[test]
fn test_json_config_matches_toml() {
    let from_toml = BattleConfig::from_toml_str(CONFIG_TOML).unwrap();
    let json = serde_json::to_string(&from_toml).unwrap();
    let from_json = BattleConfig::from_json_str(&json).unwrap();
    assert_eq!(from_json, from_toml);
}

#[test]
fn test_config_from_path_picks_format_by_extension() {
    let dir = std::env::temp_dir();
    let json_path = dir.join(format!("rust_battler_config_{}.json", std::process::id()));
    let toml_path = dir.join(format!("rust_battler_config_{}.toml", std::process::id()));

    let config = BattleConfig::default().with_seed(99).with_base_reward(5);
    std::fs::write(&json_path, serde_json::to_string(&config).unwrap()).unwrap();
    std::fs::write(&toml_path, CONFIG_TOML).unwrap();

    let from_json = BattleConfig::from_path(&json_path).unwrap();
    let from_toml = BattleConfig::from_path(&toml_path).unwrap();

    std::fs::remove_file(&json_path).ok();
    std::fs::remove_file(&toml_path).ok();

    assert_eq!(from_json, config);
    assert_eq!(from_toml.seed, 7);
}

#[test]
fn test_missing_config_file_is_io_error() {
    let result = BattleConfig::from_path("/definitely/not/here.toml");
    assert!(matches!(result, Err(BattleError::Io(_))));
}

#[test]
fn test_malformed_toml_is_reported() {
    let result = BattleConfig::from_toml_str("seed = \"many\"");
    assert!(matches!(result, Err(BattleError::Toml(_))));

    let result = CardCatalog::from_toml_str("[[cards]]\ntitle = \"No id\"");
    assert!(matches!(result, Err(BattleError::Toml(_))));
}

#[test]
fn test_catalog_from_toml() {
    let catalog = CardCatalog::from_toml_str(CATALOG_TOML).unwrap();

    assert_eq!(catalog.len(), 3);
    let salve = catalog.get(CardId::new(11)).unwrap();
    assert_eq!(salve.title, "Salve");
    assert_eq!(salve.effect_key(), EffectId::new(300));
    // Negative cost is free
    assert_eq!(catalog.get(CardId::new(12)).unwrap().energy_cost(), 0);
}

#[test]
fn test_duplicate_card_in_file_rejected() {
    let source = "[[cards]]\nid = 1\ntitle = \"A\"\n\n[[cards]]\nid = 1\ntitle = \"B\"\n";
    let result = CardCatalog::from_toml_str(source);
    assert!(matches!(result, Err(BattleError::DuplicateCard(id)) if id == CardId::new(1)));
}

#[test]
fn test_loaded_battle_shares_heal_budget() {
    let config = BattleConfig::from_toml_str(CONFIG_TOML).unwrap();
    let catalog = CardCatalog::from_toml_str(CATALOG_TOML).unwrap();
    let poultice = CardId::new(10);
    let salve = CardId::new(11);

    let mut battle = BattleBuilder::new(config, catalog)
        .with_deck(vec![poultice, poultice, salve, salve])
        .build()
        .unwrap();
    assert_eq!(battle.hand().len(), 4);
    assert_eq!(battle.energy().current(), 2);

    assert!(battle.end_turn().is_applied());
    assert!(battle.resume().is_applied());
    assert_eq!(battle.player().hp(), 20);

    assert!(battle.play_card(poultice).is_applied());
    assert_eq!(battle.player().hp(), 24);

    // Same effect id, so the single use is already gone
    assert!(battle.play_card(salve).is_applied());
    assert_eq!(battle.player().hp(), 24);
    assert_eq!(battle.player().heal_uses_remaining(EffectId::new(300)), Some(0));

    // Both energy spent
    assert_eq!(battle.phase(), BattlePhase::EnemyTurn);
}

#[test]
fn test_free_cards_cost_no_energy() {
    let config = BattleConfig::from_toml_str(CONFIG_TOML).unwrap();
    let catalog = CardCatalog::from_toml_str(CATALOG_TOML).unwrap();
    let jab = CardId::new(12);

    let mut battle = BattleBuilder::new(config, catalog)
        .with_deck(vec![jab; 6])
        .build()
        .unwrap();

    for _ in 0..4 {
        assert!(battle.play_card(jab).is_applied());
    }
    assert_eq!(battle.energy().current(), 2);
    assert_eq!(battle.enemy().hp(), 13);
    assert!(battle.hand().is_empty());

    // An empty hand has nothing affordable
    assert_eq!(battle.pending(), Some(Continuation::AutoEndTurn));
}

#[test]
fn test_negative_hand_size_draws_nothing() {
    let mut config = BattleConfig::from_toml_str(CONFIG_TOML).unwrap();
    config.player.hand_size = -1;
    let catalog = CardCatalog::from_toml_str(CATALOG_TOML).unwrap();

    let battle = BattleBuilder::new(config, catalog)
        .with_deck(vec![CardId::new(12); 3])
        .build()
        .unwrap();

    assert!(battle.hand().is_empty());
    assert_eq!(battle.deck().draw_pile().len(), 3);
    assert_eq!(battle.pending(), Some(Continuation::AutoEndTurn));
}
