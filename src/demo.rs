//! Demo driver, runs the complete coffee shop simulation.
use std::time::Duration;

use log::{error, info};
use tokio::time::sleep;

use crate::brewing::brew_coffee;
use crate::coffee_machine::CoffeeMachine;
use crate::coffee_shop::CoffeeShop;
use crate::constants::{STRONG_RECIPE_THRESHOLD, TIME_BETWEEN_ORDERS};
use crate::errors::CoffeeShopError;
use crate::recipe::{self, Recipe};

/// Runs the whole demo sequence: the error handling checks, a single
/// brew, and the morning rush with its statistics. Brewing failures are
/// absorbed along the way, only a statistics rendering failure reaches
/// the caller.
pub async fn run() -> Result<(), CoffeeShopError> {
    info!("[DEMO] Coffee brewing simulation");

    info!("[DEMO] Creating coffee recipes");
    let espresso = Recipe::new("Espresso", 100, 30, 2000);
    let americano = Recipe::new("Americano", 80, 150, 3000);
    let latte = Recipe::new("Latte", 70, 200, 4000);
    let custom_blend = Recipe::new("Morning Special", 85, 180, 3500);

    let recipes = [&espresso, &americano, &latte, &custom_blend];
    for recipe in recipes {
        info!("[DEMO] {}", recipe);
    }

    let mut machine = CoffeeMachine::new("Professional Barista 3000");
    info!("[DEMO] {} is ready", machine.name());

    log_recipe_overview(&recipes);

    check_error_handling(&mut machine, &espresso).await;

    info!("[DEMO] Simple brew demonstration");
    brew_coffee(&mut machine, &espresso).await;

    let orders = [
        ("Alice", &espresso),
        ("Bob", &latte),
        ("Charlie", &americano),
    ];
    morning_rush(&mut machine, &orders).await?;

    info!("[DEMO] Demo completed");
    Ok(())
}

fn log_recipe_overview(recipes: &[&Recipe]) {
    let strong_names: Vec<&str> = recipe::stronger_than(recipes, STRONG_RECIPE_THRESHOLD)
        .iter()
        .map(|recipe| recipe.name())
        .collect();
    info!(
        "[DEMO] Strong recipes (>{}%): {}",
        STRONG_RECIPE_THRESHOLD,
        strong_names.join(", ")
    );

    info!("[DEMO] Recipe overview");
    for recipe in recipes {
        info!(
            "[DEMO]   {}: {}% strength, {}s brew time",
            recipe.name(),
            recipe.strength(),
            recipe.brew_time_millis() as f64 / 1000.0
        );
    }
}

/// Provokes the two expected failures: brewing on a machine that was
/// never turned on, and brewing without a recipe. Both are caught here,
/// the shared machine is left on afterwards.
async fn check_error_handling(machine: &mut CoffeeMachine, recipe: &Recipe) {
    info!("[DEMO] Checking error handling");

    let test_machine = CoffeeMachine::new("Test Machine");
    match test_machine.brew(Some(recipe)).await {
        Err(error) => info!("[DEMO] Error correctly caught: \"{}\"", error),
        Ok(message) => error!(
            "[DEMO] Expected a failure from a powered off machine, got: {}",
            message
        ),
    }

    machine.turn_on();
    match machine.brew(None).await {
        Err(error) => info!("[DEMO] Error correctly caught: \"{}\"", error),
        Ok(message) => error!(
            "[DEMO] Expected a failure without a recipe, got: {}",
            message
        ),
    }
}

/// Serves the fixed customer queue one by one on a single machine, with a
/// short pause after each order, and reports the shop statistics.
async fn morning_rush(
    machine: &mut CoffeeMachine,
    orders: &[(&str, &Recipe)],
) -> Result<(), CoffeeShopError> {
    info!("[SHOP] Morning rush starting...");
    let mut shop = CoffeeShop::new(machine);

    for &(customer, recipe) in orders {
        info!("[SHOP] Order for {}: {}", customer, recipe.name());
        let time = shop.serve_customer(recipe).await;
        info!("[SHOP] {}'s order completed in {}ms", customer, time.as_millis());
        sleep(Duration::from_millis(TIME_BETWEEN_ORDERS)).await;
    }

    let stats = shop.stats();
    info!(
        "[SHOP] Morning rush statistics: {}",
        serde_json::to_string_pretty(&stats)?
    );
    Ok(())
}
