//! Food consumption.

use std::collections::HashMap;
use uuid::Uuid;
use vivarium_data::{Animal, Food, MoveMode};

/// Attempts to eat the targeted food item.
///
/// Requires an active `ChaseFood`, a live target, and contact range.
/// Marks the food dead in place (the world purges it at end of tick) so a
/// second eater in the same tick finds it already claimed and gets nothing.
/// Returns the consumed food's id.
pub fn try_eat(
    animal: &mut Animal,
    foods: &mut [Food],
    food_slots: &HashMap<Uuid, usize>,
    food_energy: f32,
    contact_range: f32,
) -> Option<Uuid> {
    if animal.mode != MoveMode::ChaseFood {
        return None;
    }
    let target = animal.target_food?;
    let idx = *food_slots.get(&target)?;
    if !foods[idx].alive {
        animal.target_food = None;
        return None;
    }
    if animal.position.distance(foods[idx].position) >= contact_range {
        return None;
    }
    foods[idx].alive = false;
    animal.energy = (animal.energy + food_energy).min(animal.genome.max_energy);
    animal.target_food = nearest_live_seen(animal, foods, food_slots);
    Some(target)
}

/// Nearest still-live food among the ones the animal currently sees.
fn nearest_live_seen(
    animal: &Animal,
    foods: &[Food],
    food_slots: &HashMap<Uuid, usize>,
) -> Option<Uuid> {
    animal
        .seen_foods
        .iter()
        .filter_map(|id| food_slots.get(id).map(|&i| &foods[i]))
        .filter(|f| f.alive)
        .min_by(|a, b| {
            animal
                .position
                .distance(a.position)
                .partial_cmp(&animal.position.distance(b.position))
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|f| f.id)
}
