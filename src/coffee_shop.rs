//! The coffee shop, serves customers and records their orders.
use std::time::Duration;

use tokio::time::Instant;

use crate::brewing::brew_coffee;
use crate::coffee_machine::CoffeeMachine;
use crate::order::Order;
use crate::recipe::Recipe;
use crate::statistics::ShopStatistics;

/// Serves customers on a shared machine and keeps the order history.
/// The machine is borrowed, the shop does not control its lifecycle.
pub struct CoffeeShop<'a> {
    machine: &'a mut CoffeeMachine,
    orders: Vec<Order>,
}

impl<'a> CoffeeShop<'a> {
    pub fn new(machine: &'a mut CoffeeMachine) -> CoffeeShop<'a> {
        CoffeeShop {
            machine,
            orders: Vec::new(),
        }
    }

    /// Brews one order and records how long the customer waited. Exactly
    /// one order is recorded per call, whether the brew succeeded or not.
    pub async fn serve_customer(&mut self, recipe: &Recipe) -> Duration {
        let start = Instant::now();
        brew_coffee(self.machine, recipe).await;
        let total = start.elapsed();

        self.orders.push(Order::new(recipe.clone(), total));
        total
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn stats(&self) -> ShopStatistics {
        ShopStatistics::from_orders(&self.orders)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::WARM_UP_TIME;

    #[tokio::test(start_paused = true)]
    async fn should_record_exactly_one_order_per_served_customer() {
        let mut machine = CoffeeMachine::new("Shop Machine");
        let mut shop = CoffeeShop::new(&mut machine);
        let espresso = Recipe::new("Espresso", 100, 30, 2000);

        shop.serve_customer(&espresso).await;
        assert_eq!(1, shop.orders().len());

        shop.serve_customer(&espresso).await;
        assert_eq!(2, shop.orders().len());
    }

    #[tokio::test(start_paused = true)]
    async fn should_measure_the_warm_up_plus_the_brew_time() {
        let mut machine = CoffeeMachine::new("Shop Machine");
        let mut shop = CoffeeShop::new(&mut machine);
        let espresso = Recipe::new("Espresso", 100, 30, 2000);

        let time = shop.serve_customer(&espresso).await;

        let expected = WARM_UP_TIME + espresso.brew_time_millis();
        assert_eq!(u128::from(expected), time.as_millis());
    }

    #[tokio::test(start_paused = true)]
    async fn should_compute_the_statistics_of_a_morning_rush() {
        let mut machine = CoffeeMachine::new("Shop Machine");
        let mut shop = CoffeeShop::new(&mut machine);
        let espresso = Recipe::new("Espresso", 100, 30, 2000);
        let latte = Recipe::new("Latte", 70, 200, 4000);
        let americano = Recipe::new("Americano", 80, 150, 3000);

        shop.serve_customer(&espresso).await;
        shop.serve_customer(&latte).await;
        shop.serve_customer(&americano).await;

        let stats = shop.stats();
        assert_eq!(3, stats.total_orders);
        assert_eq!(3500, stats.average_time_ms);
        assert_eq!(Some(&1), stats.popular_recipes.get("Espresso"));
        assert_eq!(Some(&1), stats.popular_recipes.get("Latte"));
        assert_eq!(Some(&1), stats.popular_recipes.get("Americano"));
    }

    #[test]
    fn should_return_zeroed_statistics_before_any_customer() {
        let mut machine = CoffeeMachine::new("Shop Machine");
        let shop = CoffeeShop::new(&mut machine);

        let stats = shop.stats();
        assert_eq!(0, stats.total_orders);
        assert_eq!(0, stats.average_time_ms);
    }
}
