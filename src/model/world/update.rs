//! The per-tick update pipeline.
//!
//! Each tick runs in a fixed order: rebuild indices, then for every animal
//! in storage order drain energy, perceive, move, eat, fight, and lay,
//! then advance eggs, compact the entity vectors, replenish food, and
//! sample stats. Mid-tick deaths clear `alive` flags only; every later
//! stage treats a cleared flag as absence, and the vectors are compacted
//! once at the end of the tick.

use super::World;
use crate::model::history;
use crate::model::systems::{behavior, combat, foraging, metabolism, reproduction, stats};
use anyhow::Result;
use vivarium_data::{LiveEvent, MoveMode, Vec2};

impl World {
    /// Advances the simulation by one tick of `tick_dt` simulated seconds.
    /// Returns the events the tick produced, already logged.
    pub fn update(&mut self) -> Result<Vec<LiveEvent>> {
        self.tick += 1;
        let dt = self.config.world.tick_dt;
        let mut events = Vec::new();

        self.rebuild_indices();

        let animal_count = self.animals.len();
        for idx in 0..animal_count {
            if !self.animals[idx].alive {
                continue;
            }

            if metabolism::apply_drain(&mut self.animals[idx], &self.config.energy, dt) {
                events.push(LiveEvent::Death {
                    id: self.animals[idx].id,
                    tick: self.tick,
                    cause: "starvation".to_string(),
                    timestamp: history::timestamp(),
                });
                continue;
            }

            let (food_neighbors, animal_neighbors) = self.gather_neighbors(idx);
            behavior::observe_food(&mut self.animals[idx], &food_neighbors);
            behavior::observe_animals(&mut self.animals[idx], &animal_neighbors, &mut self.rng);

            let (food_target, animal_target) = self.resolve_targets(idx);
            behavior::fallback_transitions(&mut self.animals[idx], food_target, animal_target);
            behavior::steer(
                &mut self.animals[idx],
                food_target,
                animal_target,
                self.config.behavior.wander_redirect_chance,
                &mut self.rng,
            );
            behavior::integrate(&mut self.animals[idx], dt);
            self.animals[idx].position = behavior::wrap_position(
                self.animals[idx].position,
                self.config.world.area_min,
                self.config.world.area_max,
            );

            if foraging::try_eat(
                &mut self.animals[idx],
                &mut self.foods,
                &self.food_slots,
                self.config.energy.food_energy,
                self.config.behavior.contact_range,
            )
            .is_some()
            {
                self.spawner.notify_eaten();
            }

            if self.animals[idx].mode == MoveMode::ChaseAnimal {
                if let Some(outcome) = self.resolve_fight(idx) {
                    events.push(LiveEvent::Death {
                        id: outcome.loser,
                        tick: self.tick,
                        cause: "combat".to_string(),
                        timestamp: history::timestamp(),
                    });
                    if !self.animals[idx].alive {
                        continue;
                    }
                }
            }

            if self.animals[idx].energy >= self.animals[idx].genome.energy_to_reproduce {
                let egg_id = self.next_uuid();
                if let Some(egg) = reproduction::try_reproduce(
                    &mut self.animals[idx],
                    &self.config.reproduction,
                    egg_id,
                    &mut self.rng,
                ) {
                    events.push(LiveEvent::EggLaid {
                        id: egg.id,
                        parent_id: self.animals[idx].id,
                        tick: self.tick,
                        timestamp: history::timestamp(),
                    });
                    self.pending_eggs.push(egg);
                }
            }
        }

        self.advance_eggs(dt, &mut events);

        self.foods.retain(|f| f.alive);
        self.animals.retain(|a| a.alive);

        let budget = self.spawner.step_budget(dt);
        for _ in 0..budget {
            let position = self.random_position();
            self.spawn_food(position);
        }

        for _ in 0..self.stats_timer.fire(dt) {
            let sample = stats::sample(self.tick, &self.animals, self.food_count());
            events.push(LiveEvent::Snapshot {
                tick: self.tick,
                stats: sample.clone(),
                timestamp: history::timestamp(),
            });
            self.stats.push(sample);
        }

        if self.population() > 0 {
            self.extinct = false;
        } else if !self.extinct {
            self.extinct = true;
            events.push(LiveEvent::Extinction {
                tick: self.tick,
                timestamp: history::timestamp(),
            });
        }

        // Log failures must not kill the run; the events are still
        // returned to the caller.
        for event in &events {
            if let Err(e) = self.logger.log_event(event) {
                tracing::warn!(error = %e, "event log write failed");
            }
        }
        Ok(events)
    }

    /// Rebuilds the id-to-slot maps and spatial grids from current storage.
    /// Valid until the end-of-tick compaction.
    fn rebuild_indices(&mut self) {
        self.animal_slots.clear();
        for (i, a) in self.animals.iter().enumerate() {
            if a.alive {
                self.animal_slots.insert(a.id, i);
            }
        }
        self.food_slots.clear();
        for (i, f) in self.foods.iter().enumerate() {
            if f.alive {
                self.food_slots.insert(f.id, i);
            }
        }

        let positions: Vec<Vec2> = self.animals.iter().map(|a| a.position).collect();
        self.animal_grid.build(&positions);
        let positions: Vec<Vec2> = self.foods.iter().map(|f| f.position).collect();
        self.food_grid.build(&positions);
    }

    /// Everything alive within the animal's vision radius, distance-filtered
    /// from the grid's candidate cells.
    fn gather_neighbors(
        &mut self,
        idx: usize,
    ) -> (Vec<behavior::Neighbor>, Vec<behavior::Neighbor>) {
        let me_id = self.animals[idx].id;
        let center = self.animals[idx].position;
        let vision = self.animals[idx].genome.vision_range;

        let mut buf = std::mem::take(&mut self.query_buf);

        self.food_grid.query_into(center, vision, &mut buf);
        let food_neighbors: Vec<behavior::Neighbor> = buf
            .iter()
            .map(|&i| &self.foods[i])
            .filter(|f| f.alive && center.distance(f.position) <= vision)
            .map(|f| behavior::Neighbor {
                id: f.id,
                position: f.position,
            })
            .collect();

        self.animal_grid.query_into(center, vision, &mut buf);
        let animal_neighbors: Vec<behavior::Neighbor> = buf
            .iter()
            .map(|&i| &self.animals[i])
            .filter(|a| a.alive && a.id != me_id && center.distance(a.position) <= vision)
            .map(|a| behavior::Neighbor {
                id: a.id,
                position: a.position,
            })
            .collect();

        self.query_buf = buf;
        (food_neighbors, animal_neighbors)
    }

    /// Resolves the animal's target ids to live positions.
    fn resolve_targets(&self, idx: usize) -> (Option<Vec2>, Option<Vec2>) {
        let animal = &self.animals[idx];
        let food_target = animal
            .target_food
            .and_then(|id| self.food_slots.get(&id))
            .map(|&i| &self.foods[i])
            .filter(|f| f.alive)
            .map(|f| f.position);
        let animal_target = animal
            .target_animal
            .and_then(|id| self.animal_slots.get(&id))
            .map(|&i| &self.animals[i])
            .filter(|a| a.alive)
            .map(|a| a.position);
        (food_target, animal_target)
    }

    /// Fights the attacker's current target and retargets the winner.
    fn resolve_fight(&mut self, idx: usize) -> Option<combat::FightOutcome> {
        let defender = self.animals[idx]
            .target_animal
            .and_then(|id| self.animal_slots.get(&id).copied())?;
        let outcome = combat::try_fight(
            &mut self.animals,
            idx,
            defender,
            self.config.behavior.contact_range,
        )?;
        let winner_idx = if self.animals[idx].id == outcome.winner {
            idx
        } else {
            defender
        };
        let next = combat::nearest_live_seen(&self.animals, winner_idx, &self.animal_slots);
        self.animals[winner_idx].target_animal = next;
        Some(outcome)
    }

    /// Advances hatch countdowns, hatches due eggs, and admits the eggs
    /// laid this tick (they start counting next tick).
    fn advance_eggs(&mut self, dt: f32, events: &mut Vec<LiveEvent>) {
        let mut hatched = Vec::new();
        self.eggs.retain_mut(|egg| {
            egg.hatch_remaining -= dt;
            if egg.hatch_remaining <= 0.0 {
                hatched.push(egg.clone());
                false
            } else {
                true
            }
        });
        for egg in hatched {
            let id = self.spawn_animal(egg.position, egg.genome, egg.start_energy);
            events.push(LiveEvent::Hatched {
                id,
                egg_id: egg.id,
                tick: self.tick,
                timestamp: history::timestamp(),
            });
        }
        self.eggs.append(&mut self.pending_eggs);
    }
}
