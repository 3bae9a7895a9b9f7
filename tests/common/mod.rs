#![allow(dead_code)]

use uuid::Uuid;
use vivarium_data::{Animal, Genome, MoveMode, Vec2};
use vivarium_lib::model::config::AppConfig;
use vivarium_lib::model::history::HistoryLogger;
use vivarium_lib::model::world::World;

/// Builds a deterministic, empty world and populates it piece by piece.
pub struct WorldBuilder {
    config: AppConfig,
    animals: Vec<Animal>,
    foods: Vec<Vec2>,
    eggs: Vec<(Vec2, Genome, f32)>,
}

impl WorldBuilder {
    pub fn new() -> Self {
        let mut config = AppConfig::default();
        config.world.initial_population = 0;
        config.spawner.start_amount = 0;
        config.world.seed = Some(7);
        Self {
            config,
            animals: Vec::new(),
            foods: Vec::new(),
            eggs: Vec::new(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.world.seed = Some(seed);
        self
    }

    pub fn with_config<F>(mut self, modifier: F) -> Self
    where
        F: FnOnce(&mut AppConfig),
    {
        modifier(&mut self.config);
        self
    }

    pub fn with_animal(mut self, animal: Animal) -> Self {
        self.animals.push(animal);
        self
    }

    pub fn with_food(mut self, x: f32, y: f32) -> Self {
        self.foods.push(Vec2::new(x, y));
        self
    }

    pub fn with_egg(mut self, x: f32, y: f32, genome: Genome, start_energy: f32) -> Self {
        self.eggs.push((Vec2::new(x, y), genome, start_energy));
        self
    }

    pub fn build(self) -> World {
        let mut world = World::new(self.config, HistoryLogger::new_dummy())
            .expect("Failed to create world in test builder");
        for animal in self.animals {
            world.animals.push(animal);
        }
        for position in self.foods {
            world.spawn_food(position);
        }
        for (position, genome, start_energy) in self.eggs {
            world.spawn_egg(position, genome, start_energy);
        }
        world
    }
}

pub struct AnimalBuilder {
    animal: Animal,
}

impl AnimalBuilder {
    pub fn new() -> Self {
        Self {
            animal: Animal::new(Uuid::new_v4(), Vec2::ZERO, Genome::default(), 50.0),
        }
    }

    pub fn at(mut self, x: f32, y: f32) -> Self {
        self.animal.position = Vec2::new(x, y);
        self
    }

    pub fn energy(mut self, energy: f32) -> Self {
        self.animal.energy = energy;
        self
    }

    pub fn mode(mut self, mode: MoveMode) -> Self {
        self.animal.mode = mode;
        self
    }

    pub fn target_food(mut self, id: Uuid) -> Self {
        self.animal.target_food = Some(id);
        self
    }

    pub fn target_animal(mut self, id: Uuid) -> Self {
        self.animal.target_animal = Some(id);
        self
    }

    pub fn heading(mut self, x: f32, y: f32) -> Self {
        self.animal.direction = Vec2::new(x, y).normalized();
        self
    }

    pub fn genome<F>(mut self, modifier: F) -> Self
    where
        F: FnOnce(&mut Genome),
    {
        modifier(&mut self.animal.genome);
        self
    }

    pub fn id(&self) -> Uuid {
        self.animal.id
    }

    pub fn build(self) -> Animal {
        self.animal
    }
}
