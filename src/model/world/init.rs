//! World construction and entity creation.

use super::World;
use crate::model::config::AppConfig;
use crate::model::genetics;
use crate::model::history::{self, HistoryLogger};
use crate::model::scheduler::Interval;
use crate::model::spatial::SpatialGrid;
use crate::model::spawner::FoodSpawner;
use crate::model::systems::behavior;
use crate::model::systems::stats::StatsHistory;
use anyhow::Result;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashMap;
use uuid::Uuid;
use vivarium_data::{Animal, Egg, Food, Genome, LiveEvent, Vec2};

impl World {
    /// Builds a world from a validated config: seeds the generator, spawns
    /// the initial population with random genomes, and places the starting
    /// food burst.
    pub fn new(config: AppConfig, logger: HistoryLogger) -> Result<Self> {
        config.validate()?;

        let seed = config.world.seed.unwrap_or_else(rand::random);
        let rng = ChaCha8Rng::seed_from_u64(seed);
        tracing::info!(seed, "world rng seeded");

        let min = config.world.area_min;
        let max = config.world.area_max;
        let cell_size = (config.behavior.contact_range * 2.0).max(1.0);

        let mut world = Self {
            stats: StatsHistory::new(config.stats.max_samples),
            stats_timer: Interval::new(config.stats.sample_period),
            spawner: FoodSpawner::new(&config.spawner),
            animal_grid: SpatialGrid::new(cell_size, min, max),
            food_grid: SpatialGrid::new(cell_size, min, max),
            config,
            tick: 0,
            animals: Vec::new(),
            foods: Vec::new(),
            eggs: Vec::new(),
            logger,
            rng,
            animal_slots: HashMap::new(),
            food_slots: HashMap::new(),
            pending_eggs: Vec::new(),
            query_buf: Vec::new(),
            extinct: false,
        };

        for _ in 0..world.config.world.initial_population {
            let position = world.random_position();
            let genome = genetics::random_genome(&mut world.rng);
            let energy = genome.max_energy / 3.0;
            let id = world.spawn_animal(position, genome, energy);
            world.logger.log_event(&LiveEvent::Birth {
                id,
                parent_id: None,
                tick: 0,
                timestamp: history::timestamp(),
            })?;
        }

        let burst = world.spawner.initial_budget();
        for _ in 0..burst {
            let position = world.random_position();
            world.spawn_food(position);
        }

        Ok(world)
    }

    /// Creates an animal with a fresh random heading. Returns its id.
    pub fn spawn_animal(&mut self, position: Vec2, genome: Genome, energy: f32) -> Uuid {
        let id = self.next_uuid();
        let mut animal = Animal::new(id, position, genome, energy);
        animal.direction = behavior::random_unit_direction(&mut self.rng);
        self.animals.push(animal);
        id
    }

    /// Creates a food item. Returns its id.
    pub fn spawn_food(&mut self, position: Vec2) -> Uuid {
        let id = self.next_uuid();
        self.foods.push(Food::new(id, position));
        id
    }

    /// Creates an egg with a full hatch countdown ahead of it.
    pub fn spawn_egg(&mut self, position: Vec2, genome: Genome, start_energy: f32) -> Uuid {
        let id = self.next_uuid();
        self.eggs.push(Egg {
            id,
            position,
            genome,
            start_energy,
            hatch_remaining: self.config.reproduction.hatch_time,
        });
        id
    }
}
