use super::genome::Genome;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::ops::{Add, AddAssign, Mul, Sub};
use uuid::Uuid;

/// 2-D world vector.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn length(&self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Unit vector in the same direction; zero-length input yields zero.
    #[must_use]
    pub fn normalized(&self) -> Self {
        let len = self.length();
        if len > f32::EPSILON {
            Self {
                x: self.x / len,
                y: self.y / len,
            }
        } else {
            Self::ZERO
        }
    }

    pub fn distance(&self, other: Vec2) -> f32 {
        (*self - other).length()
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

/// Movement mode of the behavior state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MoveMode {
    #[default]
    Wander,
    ChaseFood,
    ChaseAnimal,
    Flee,
}

/// A mobile agent competing for food in the arena.
///
/// `target_food` and `target_animal` are weak references: they hold only an
/// id, resolved through the world's per-tick id map, and a dead or missing
/// entity resolves to "absent". `seen_foods` / `seen_animals` are the last
/// observed neighbor sets, diffed against fresh spatial queries to detect
/// enter/exit events.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Animal {
    pub id: Uuid,
    pub position: Vec2,
    pub direction: Vec2,
    pub genome: Genome,
    pub energy: f32,
    pub mode: MoveMode,
    pub target_food: Option<Uuid>,
    pub target_animal: Option<Uuid>,
    pub alive: bool,
    pub seen_foods: HashSet<Uuid>,
    pub seen_animals: HashSet<Uuid>,
}

impl Animal {
    pub fn new(id: Uuid, position: Vec2, genome: Genome, energy: f32) -> Self {
        Self {
            id,
            position,
            direction: Vec2::ZERO,
            genome,
            energy,
            mode: MoveMode::Wander,
            target_food: None,
            target_animal: None,
            alive: true,
            seen_foods: HashSet::new(),
            seen_animals: HashSet::new(),
        }
    }
}

/// Passive food resource. Consumption flips `alive`; physical removal is
/// deferred to the end of the tick so a food can be claimed at most once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Food {
    pub id: Uuid,
    pub position: Vec2,
    pub alive: bool,
}

impl Food {
    pub fn new(id: Uuid, position: Vec2) -> Self {
        Self {
            id,
            position,
            alive: true,
        }
    }
}

/// Timed intermediate between reproduction and a live offspring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Egg {
    pub id: Uuid,
    pub position: Vec2,
    pub genome: Genome,
    pub start_energy: f32,
    pub hatch_remaining: f32,
}
