//! Status effects: Weak and Vulnerable.
//!
//! - `StatusState`: turn counters for one side
//! - `StatusEngine`: both sides, ticks, and damage modifiers
//! - `calculate_damage`: the multiplicative modifier formula

mod engine;

pub use engine::{
    calculate_damage, StatusEngine, StatusKind, StatusState, VULNERABLE_MULTIPLIER,
    WEAK_MULTIPLIER,
};
