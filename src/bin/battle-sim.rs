//! Headless battle simulator
//!
//! Plays battles with a greedy card policy and prints a summary. Pending
//! continuations are resumed immediately instead of waiting out the
//! presentation delay.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use serde::Serialize;

use rust_battler::battle::{Battle, BattleBuilder, BattlePhase};
use rust_battler::cards::starter::{starter_catalog, starter_deck};
use rust_battler::cards::{CardCatalog, CardId};
use rust_battler::core::BattleConfig;
use rust_battler::events::NullObserver;
use rust_battler::rewards::FixedMultiplier;

/// Headless card battle simulator
#[derive(Parser, Debug)]
#[command(name = "battle-sim")]
#[command(about = "Run card battles with a greedy player and report outcomes")]
struct Args {
    /// Battle config (TOML, or JSON with a .json extension)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Card catalog (TOML with [[cards]] tables); defaults to the starter set
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Starting deck as comma-separated card ids; defaults to the starter deck
    #[arg(long, value_delimiter = ',')]
    deck: Vec<u32>,

    /// Seed of the first battle; later battles use seed + n
    #[arg(long)]
    seed: Option<u64>,

    /// Number of battles
    #[arg(long, default_value_t = 1)]
    battles: u32,

    /// Reward multiplier from the economy
    #[arg(long)]
    multiplier: Option<f64>,

    /// Step limit per battle before giving up
    #[arg(long, default_value_t = 10_000)]
    max_steps: u32,

    /// Output format: json or text
    #[arg(long, default_value = "text")]
    format: String,
}

#[derive(Serialize)]
struct BattleSummary {
    seed: u64,
    outcome: String,
    turns: u32,
    player_hp: i32,
    enemy_hp: i32,
    reward: i64,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err}");
            eprintln!("battle-sim: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> rust_battler::Result<()> {
    let base_config = match &args.config {
        Some(path) => BattleConfig::from_path(path)?,
        None => BattleConfig::default(),
    };
    let catalog = match &args.catalog {
        Some(path) => CardCatalog::from_toml_str(&std::fs::read_to_string(path)?)?,
        None => starter_catalog(),
    };
    let deck: Vec<CardId> = if args.deck.is_empty() {
        starter_deck()
    } else {
        args.deck.iter().copied().map(CardId::new).collect()
    };

    let first_seed = args.seed.unwrap_or(base_config.seed);
    let mut summaries = Vec::with_capacity(args.battles as usize);

    for n in 0..u64::from(args.battles) {
        let seed = first_seed.wrapping_add(n);
        let mut builder = BattleBuilder::new(base_config.clone().with_seed(seed), catalog.clone())
            .with_deck(deck.clone());
        if let Some(multiplier) = args.multiplier {
            builder = builder.with_economy(FixedMultiplier(multiplier));
        }

        let mut battle = builder.build()?;
        play_greedy(&mut battle, args.max_steps);
        summaries.push(summarize(&battle, seed));
    }

    report(&summaries, &args.format);
    Ok(())
}

/// Play the affordable card with the most damage, then block, until the
/// battle ends or the step limit is reached.
fn play_greedy(battle: &mut Battle<NullObserver>, max_steps: u32) {
    for _ in 0..max_steps {
        if battle.phase().is_terminal() {
            return;
        }
        if battle.pending().is_some() {
            let _ = battle.resume();
            continue;
        }

        let choice = battle
            .hand()
            .iter()
            .copied()
            .filter(|&card| battle.can_play(card))
            .max_by_key(|&card| {
                battle
                    .catalog()
                    .get(card)
                    .map_or((0, 0), |t| (t.effect.damage_amount, t.effect.block_amount))
            });

        let _ = match choice {
            Some(card) => battle.play_card(card),
            None => battle.end_turn(),
        };
    }
    tracing::warn!(max_steps, "battle did not finish within the step limit");
}

fn summarize(battle: &Battle<NullObserver>, seed: u64) -> BattleSummary {
    let outcome = match battle.phase() {
        BattlePhase::Victory => "victory",
        BattlePhase::Defeat => "defeat",
        BattlePhase::PlayerTurn | BattlePhase::EnemyTurn => "unfinished",
    };
    BattleSummary {
        seed,
        outcome: outcome.to_string(),
        turns: battle.turn(),
        player_hp: battle.player().hp(),
        enemy_hp: battle.enemy().hp(),
        reward: battle.reward().unwrap_or(0),
    }
}

fn report(summaries: &[BattleSummary], format: &str) {
    if format == "json" {
        match serde_json::to_string_pretty(summaries) {
            Ok(json) => println!("{json}"),
            Err(err) => eprintln!("battle-sim: {err}"),
        }
        return;
    }

    for s in summaries {
        println!(
            "seed {:>6}  {:<10} turns {:>3}  player {:>3} hp  enemy {:>3} hp  reward {}",
            s.seed, s.outcome, s.turns, s.player_hp, s.enemy_hp, s.reward
        );
    }
    let wins = summaries.iter().filter(|s| s.outcome == "victory").count();
    println!("{wins}/{} victories", summaries.len());
}
