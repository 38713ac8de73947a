use std::error::Error;
use std::fmt;

/// Failures that can come out of the coffee shop simulation.
#[derive(Debug, PartialEq, Eq)]
pub enum CoffeeShopError {
    /// Brew attempted while the machine was powered off.
    MachineNotReady,
    /// Brew attempted without supplying a recipe.
    MissingRecipe,
    /// The statistics summary could not be rendered.
    StatsSerialization,
}

impl fmt::Display for CoffeeShopError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoffeeShopError::MachineNotReady => write!(f, "Machine not ready to brew"),
            CoffeeShopError::MissingRecipe => write!(f, "No recipe provided"),
            CoffeeShopError::StatsSerialization => write!(f, "Could not render the statistics"),
        }
    }
}

impl Error for CoffeeShopError {}

impl From<serde_json::Error> for CoffeeShopError {
    fn from(_: serde_json::Error) -> Self {
        CoffeeShopError::StatsSerialization
    }
}
