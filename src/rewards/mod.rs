//! Victory rewards and the economy collaborators.

mod calculator;

pub use calculator::{
    calculate_reward, EconomyProvider, FixedMultiplier, RewardCalculator, VictorySink,
};
