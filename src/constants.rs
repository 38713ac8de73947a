//! Fixed parameters of the coffee shop simulation.

/// How long the machine warms up before it can brew, in milliseconds.
pub const WARM_UP_TIME: u64 = 500;

/// Pause between two orders during the morning rush, in milliseconds.
pub const TIME_BETWEEN_ORDERS: u64 = 1000;

/// Strength above which a recipe counts as strong.
pub const STRONG_RECIPE_THRESHOLD: u8 = 75;

/// Highest strength a recipe can be constructed with.
pub const MAX_STRENGTH: u8 = 100;
