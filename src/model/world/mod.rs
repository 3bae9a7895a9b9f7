//! The simulation world: entity storage, tick loop, and bookkeeping.

mod init;
mod update;

use crate::model::config::AppConfig;
use crate::model::history::HistoryLogger;
use crate::model::scheduler::Interval;
use crate::model::spatial::SpatialGrid;
use crate::model::spawner::FoodSpawner;
use crate::model::systems::stats::StatsHistory;
use rand_chacha::ChaCha8Rng;
use std::collections::HashMap;
use uuid::Uuid;
use vivarium_data::{Animal, Egg, Food, Vec2};

/// Owns every entity and advances the simulation one fixed step at a time.
///
/// Entities live in plain vectors. During a tick nothing is removed:
/// deaths and consumption only clear `alive` flags, and the vectors are
/// compacted at a single safe point at the end of the tick. The id-to-slot
/// maps and spatial grids are rebuilt at the start of every tick and are
/// valid for that tick only.
pub struct World {
    pub config: AppConfig,
    pub tick: u64,
    pub animals: Vec<Animal>,
    pub foods: Vec<Food>,
    pub eggs: Vec<Egg>,
    pub stats: StatsHistory,
    pub logger: HistoryLogger,
    pub(crate) spawner: FoodSpawner,
    pub(crate) rng: ChaCha8Rng,
    pub(crate) animal_grid: SpatialGrid,
    pub(crate) food_grid: SpatialGrid,
    pub(crate) stats_timer: Interval,
    pub(crate) animal_slots: HashMap<Uuid, usize>,
    pub(crate) food_slots: HashMap<Uuid, usize>,
    pub(crate) pending_eggs: Vec<Egg>,
    pub(crate) query_buf: Vec<usize>,
    pub(crate) extinct: bool,
}

impl World {
    pub fn population(&self) -> usize {
        self.animals.iter().filter(|a| a.alive).count()
    }

    pub fn food_count(&self) -> usize {
        self.foods.iter().filter(|f| f.alive).count()
    }

    pub fn animal(&self, id: Uuid) -> Option<&Animal> {
        self.animals.iter().find(|a| a.id == id)
    }

    pub(crate) fn next_uuid(&mut self) -> Uuid {
        use rand::Rng;
        Uuid::from_u128(self.rng.gen())
    }

    pub(crate) fn random_position(&mut self) -> Vec2 {
        use rand::Rng;
        let min = self.config.world.area_min;
        let max = self.config.world.area_max;
        Vec2::new(
            self.rng.gen_range(min.x..=max.x),
            self.rng.gen_range(min.y..=max.y),
        )
    }
}
