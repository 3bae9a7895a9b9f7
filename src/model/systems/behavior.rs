//! Behavior state machine: targeting, mode transitions, steering.
//!
//! Transitions happen in two places, mirroring the event-driven reference
//! behavior: [`observe_food`] / [`observe_animals`] react to neighbor-set
//! changes (the spatial index's enter/exit notifications, realized by
//! diffing consecutive queries), and [`fallback_transitions`] repairs the
//! mode/target coherence once per tick before movement.

use rand::Rng;
use std::collections::HashSet;
use uuid::Uuid;
use vivarium_data::{Animal, MoveMode, Vec2};

/// A live entity visible to an animal this tick.
#[derive(Debug, Clone, Copy)]
pub struct Neighbor {
    pub id: Uuid,
    pub position: Vec2,
}

fn nearest(from: Vec2, neighbors: &[Neighbor]) -> Option<Uuid> {
    neighbors
        .iter()
        .min_by(|a, b| {
            from.distance(a.position)
                .partial_cmp(&from.distance(b.position))
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|n| n.id)
}

/// Food neighbor-set change: recompute the nearest food target. Food
/// opportunistically overrides idle wandering but never interrupts an
/// active chase or flee.
pub fn observe_food(animal: &mut Animal, foods: &[Neighbor]) {
    let ids: HashSet<Uuid> = foods.iter().map(|n| n.id).collect();
    if ids == animal.seen_foods {
        return;
    }
    animal.target_food = nearest(animal.position, foods);
    if animal.mode == MoveMode::Wander && animal.target_food.is_some() {
        animal.mode = MoveMode::ChaseFood;
    }
    animal.seen_foods = ids;
}

/// Animal neighbor-set change: recompute the nearest rival and re-roll the
/// encounter decision. One uniform roll is tested against `aggression`
/// first and `timidity` second, so a large aggression shadows part of the
/// timidity range; this ordering is deliberate reference behavior.
pub fn observe_animals<R: Rng>(animal: &mut Animal, others: &[Neighbor], rng: &mut R) {
    let ids: HashSet<Uuid> = others.iter().map(|n| n.id).collect();
    if ids == animal.seen_animals {
        return;
    }
    animal.target_animal = nearest(animal.position, others);
    if animal.target_animal.is_some() {
        let roll: f32 = rng.gen();
        animal.mode = if roll < animal.genome.aggression {
            MoveMode::ChaseAnimal
        } else if roll < animal.genome.timidity {
            MoveMode::Flee
        } else {
            MoveMode::Wander
        };
    }
    animal.seen_animals = ids;
}

/// Priority-ordered per-tick repairs, applied before movement:
/// 1. chasing vanished food falls back to `Wander`,
/// 2. chasing or fleeing a vanished rival falls back to `Wander`,
/// 3. wandering with food in sight switches to `ChaseFood`.
pub fn fallback_transitions(
    animal: &mut Animal,
    food_target: Option<Vec2>,
    animal_target: Option<Vec2>,
) {
    if animal.mode == MoveMode::ChaseFood && food_target.is_none() {
        animal.mode = MoveMode::Wander;
        animal.target_food = None;
    }
    if matches!(animal.mode, MoveMode::Flee | MoveMode::ChaseAnimal) && animal_target.is_none() {
        animal.mode = MoveMode::Wander;
        animal.target_animal = None;
    }
    if animal.mode == MoveMode::Wander && food_target.is_some() {
        animal.mode = MoveMode::ChaseFood;
    }
}

/// Recomputes the movement direction from the active mode.
pub fn steer<R: Rng>(
    animal: &mut Animal,
    food_target: Option<Vec2>,
    animal_target: Option<Vec2>,
    redirect_chance: f32,
    rng: &mut R,
) {
    match animal.mode {
        MoveMode::Flee => {
            if let Some(p) = animal_target {
                animal.direction = (animal.position - p).normalized();
            }
        }
        MoveMode::ChaseAnimal => {
            if let Some(p) = animal_target {
                animal.direction = (p - animal.position).normalized();
            }
        }
        MoveMode::ChaseFood => {
            if let Some(p) = food_target {
                animal.direction = (p - animal.position).normalized();
            }
        }
        MoveMode::Wander => {
            if rng.gen::<f32>() < redirect_chance {
                animal.direction = random_unit_direction(rng);
            }
        }
    }
}

/// Uniformly random unit direction.
pub fn random_unit_direction<R: Rng>(rng: &mut R) -> Vec2 {
    loop {
        let v = Vec2::new(rng.gen_range(-1.0..=1.0f32), rng.gen_range(-1.0..=1.0f32));
        let len = v.length();
        if len > f32::EPSILON {
            return v.normalized();
        }
    }
}

/// Advances the position by one tick of travel.
pub fn integrate(animal: &mut Animal, dt: f32) {
    animal.position += animal.direction * (animal.genome.speed * dt);
}

/// Toroidal wraparound: per-axis, exiting one edge re-enters from the
/// opposite edge (a snap, not a bounce).
pub fn wrap_position(mut p: Vec2, min: Vec2, max: Vec2) -> Vec2 {
    if p.x < min.x {
        p.x = max.x;
    } else if p.x > max.x {
        p.x = min.x;
    }
    if p.y < min.y {
        p.y = max.y;
    } else if p.y > max.y {
        p.y = min.y;
    }
    p
}
