//! Population-control policy for the food supply.

use crate::model::config::SpawnerConfig;
use crate::model::scheduler::Interval;

/// Tops the arena up with food on a fixed cadence, bounded by a cap.
///
/// The spawner only decides *how many* food items to create; the world owns
/// placement and entity creation. `current` tracks live food and is
/// decremented by consumption notifications.
#[derive(Debug)]
pub struct FoodSpawner {
    max_plants: usize,
    plants_per_step: usize,
    start_amount: usize,
    timer: Interval,
    current: usize,
}

impl FoodSpawner {
    pub fn new(config: &SpawnerConfig) -> Self {
        Self {
            max_plants: config.max_plants,
            plants_per_step: config.plants_per_step,
            start_amount: config.start_amount,
            timer: Interval::new(config.spawn_period),
            current: 0,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    /// Number of food items to create at world start. Reserves the budget.
    pub fn initial_budget(&mut self) -> usize {
        let budget = self.start_amount.min(self.max_plants - self.current);
        self.current += budget;
        budget
    }

    /// Advances the cadence by `dt` and returns how many food items to
    /// create this tick, stopping early at the cap. Reserves the budget.
    pub fn step_budget(&mut self, dt: f32) -> usize {
        let fires = self.timer.fire(dt) as usize;
        let want = fires * self.plants_per_step;
        let budget = want.min(self.max_plants.saturating_sub(self.current));
        self.current += budget;
        budget
    }

    /// Consumption notification: one food left the world.
    pub fn notify_eaten(&mut self) {
        self.current = self.current.saturating_sub(1);
    }
}
