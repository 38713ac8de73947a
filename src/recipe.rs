//! Immutable brew recipes.
use std::fmt;
use std::time::Duration;

use crate::constants::MAX_STRENGTH;

/// Parameters of one kind of coffee. Built once at startup and never
/// mutated, orders hold their own copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    name: String,
    strength: u8,
    water_amount: u32,
    brew_time: u64,
}

impl Recipe {
    /// Creates a recipe. Strength above [`MAX_STRENGTH`] is clamped.
    pub fn new(name: &str, strength: u8, water_amount: u32, brew_time: u64) -> Recipe {
        Recipe {
            name: name.to_string(),
            strength: strength.min(MAX_STRENGTH),
            water_amount,
            brew_time,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Strength percentage, between 0 and [`MAX_STRENGTH`].
    pub fn strength(&self) -> u8 {
        self.strength
    }

    /// Water used for one brew, in milliliters.
    pub fn water_amount(&self) -> u32 {
        self.water_amount
    }

    pub fn brew_time_millis(&self) -> u64 {
        self.brew_time
    }

    pub fn brew_time(&self) -> Duration {
        Duration::from_millis(self.brew_time)
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - Strength: {}%, Water: {}ml, Time: {}ms",
            self.name, self.strength, self.water_amount, self.brew_time
        )
    }
}

/// Returns the recipes stronger than `min_strength`, keeping their order.
pub fn stronger_than<'a>(recipes: &[&'a Recipe], min_strength: u8) -> Vec<&'a Recipe> {
    recipes
        .iter()
        .filter(|recipe| recipe.strength() > min_strength)
        .copied()
        .collect()
}
