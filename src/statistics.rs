//! Summary statistics over the served orders.
use std::collections::HashMap;

use serde::Serialize;

use crate::order::Order;

/// Snapshot derived from the order sequence, recomputed on demand.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ShopStatistics {
    pub total_orders: usize,
    pub average_time_ms: u64,
    pub popular_recipes: HashMap<String, u64>,
}

impl ShopStatistics {
    pub fn from_orders(orders: &[Order]) -> ShopStatistics {
        let mut popular_recipes: HashMap<String, u64> = HashMap::new();
        for order in orders {
            *popular_recipes
                .entry(order.recipe.name().to_string())
                .or_insert(0) += 1;
        }

        ShopStatistics {
            total_orders: orders.len(),
            average_time_ms: average_millis(orders),
            popular_recipes,
        }
    }
}

/// Average waiting time rounded to the nearest millisecond, 0 with no
/// orders so an empty shop never divides by zero.
fn average_millis(orders: &[Order]) -> u64 {
    if orders.is_empty() {
        return 0;
    }
    let total: u64 = orders
        .iter()
        .map(|order| order.time.as_millis() as u64)
        .sum();
    (total as f64 / orders.len() as f64).round() as u64
}
