//! Energy drain and starvation.

use crate::model::config::EnergyConfig;
use vivarium_data::Animal;

/// Per-second upkeep cost of an animal's traits.
///
/// Speed is charged quadratically; the remaining traits are linear. The
/// base cost keeps even a minimal genome mortal.
pub fn drain_rate(animal: &Animal, config: &EnergyConfig) -> f32 {
    let g = &animal.genome;
    config.base_cost
        + config.speed_sq_cost * g.speed * g.speed
        + config.vision_cost * g.vision_range
        + config.strength_cost * g.strength
        + config.defense_cost * g.defense
}

/// Applies one tick of upkeep. Returns `true` if the animal starved; the
/// carcass stays in place until the end-of-tick purge.
pub fn apply_drain(animal: &mut Animal, config: &EnergyConfig, dt: f32) -> bool {
    animal.energy -= drain_rate(animal, config) * dt;
    if animal.energy <= 0.0 {
        animal.energy = 0.0;
        animal.alive = false;
        true
    } else {
        false
    }
}
