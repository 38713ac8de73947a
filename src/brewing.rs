//! Brewing workflow around a single order.
use std::time::Duration;

use log::{error, info};
use tokio::time::{sleep, Instant};

use crate::coffee_machine::CoffeeMachine;
use crate::constants::WARM_UP_TIME;
use crate::recipe::Recipe;

/// Runs one complete brew cycle: power on, warm up, brew, power off.
/// A brewing failure is reported and absorbed here, the machine is turned
/// off again no matter the outcome.
pub async fn brew_coffee(machine: &mut CoffeeMachine, recipe: &Recipe) {
    info!("[BARISTA] Preparing {}...", recipe.name());
    machine.turn_on();
    info!("[BARISTA] Machine turned on");

    sleep(Duration::from_millis(WARM_UP_TIME)).await;
    info!("[BARISTA] Machine ready");

    info!(
        "[BARISTA] Brewing {} ({}ms)...",
        recipe.name(),
        recipe.brew_time_millis()
    );
    let start = Instant::now();
    match machine.brew(Some(recipe)).await {
        Ok(message) => {
            info!("[BARISTA] {}", message);
            info!("[BARISTA] Brew time: {}ms", start.elapsed().as_millis());
        }
        Err(error) => error!("[BARISTA] Brewing failed: {}", error),
    }

    machine.turn_off();
    info!("[BARISTA] Machine turned off");
}
