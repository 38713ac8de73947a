//! The coffee machine and its power state.
use log::debug;
use tokio::time::sleep;

use crate::errors::CoffeeShopError;
use crate::recipe::Recipe;

/// Power state of the machine. Brewing only succeeds while `On`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerState {
    Off,
    On,
}

/// A single brewing machine. It is shared by the whole demo and must not
/// run two brews at the same time, the callers keep the calls sequential.
pub struct CoffeeMachine {
    name: String,
    power: PowerState,
}

impl CoffeeMachine {
    /// Creates a machine in the `Off` state.
    pub fn new(name: &str) -> CoffeeMachine {
        CoffeeMachine {
            name: name.to_string(),
            power: PowerState::Off,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn power_state(&self) -> PowerState {
        self.power
    }

    pub fn is_on(&self) -> bool {
        self.power == PowerState::On
    }

    /// Idempotent, a machine that is already on stays on.
    pub fn turn_on(&mut self) {
        if self.power == PowerState::Off {
            debug!("[MACHINE] {} powered on", self.name);
            self.power = PowerState::On;
        }
    }

    /// Idempotent, a machine that is already off stays off.
    pub fn turn_off(&mut self) {
        if self.power == PowerState::On {
            debug!("[MACHINE] {} powered off", self.name);
            self.power = PowerState::Off;
        }
    }

    /// Brews one recipe. Fails without waiting when no recipe was supplied
    /// or when the machine is off, otherwise takes the recipe's brew time
    /// and answers with a confirmation message. Does not change the power
    /// state.
    pub async fn brew(&self, recipe: Option<&Recipe>) -> Result<String, CoffeeShopError> {
        let recipe = recipe.ok_or(CoffeeShopError::MissingRecipe)?;
        if self.power == PowerState::Off {
            return Err(CoffeeShopError::MachineNotReady);
        }

        debug!("[MACHINE] {} brewing {}", self.name, recipe.name());
        sleep(recipe.brew_time()).await;
        Ok(format!("Coffee ready! Brewed {}", recipe.name()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[test]
    fn should_start_powered_off() {
        let machine = CoffeeMachine::new("Test Machine");
        assert_eq!(PowerState::Off, machine.power_state());
    }

    #[test]
    fn should_turn_on_and_off_idempotently() {
        let mut machine = CoffeeMachine::new("Test Machine");
        machine.turn_on();
        machine.turn_on();
        assert_eq!(PowerState::On, machine.power_state());
        machine.turn_off();
        machine.turn_off();
        assert_eq!(PowerState::Off, machine.power_state());
    }

    #[tokio::test(start_paused = true)]
    async fn should_fail_to_brew_while_powered_off_without_waiting() {
        let machine = CoffeeMachine::new("Test Machine");
        let espresso = Recipe::new("Espresso", 100, 30, 2000);

        let start = Instant::now();
        let result = machine.brew(Some(&espresso)).await;

        assert_eq!(Err(CoffeeShopError::MachineNotReady), result);
        assert_eq!(0, start.elapsed().as_millis());
    }

    #[tokio::test]
    async fn should_fail_to_brew_without_a_recipe() {
        let mut machine = CoffeeMachine::new("Test Machine");
        machine.turn_on();
        assert_eq!(Err(CoffeeShopError::MissingRecipe), machine.brew(None).await);
    }

    #[tokio::test(start_paused = true)]
    async fn should_brew_a_recipe_after_its_brew_time() {
        let mut machine = CoffeeMachine::new("Professional Barista 3000");
        machine.turn_on();
        let espresso = Recipe::new("Espresso", 100, 30, 2000);

        let start = Instant::now();
        let result = machine.brew(Some(&espresso)).await;

        assert_eq!(Ok("Coffee ready! Brewed Espresso".to_string()), result);
        assert_eq!(2000, start.elapsed().as_millis());
        assert_eq!(PowerState::On, machine.power_state());
    }
}
