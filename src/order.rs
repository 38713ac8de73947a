use std::time::Duration;

use crate::recipe::Recipe;

/// A served order: the recipe that was brewed and how long the customer
/// waited for it, failures included.
#[derive(Debug)]
pub struct Order {
    pub recipe: Recipe,
    pub time: Duration,
}

impl Order {
    pub fn new(recipe: Recipe, time: Duration) -> Order {
        Order { recipe, time }
    }
}
