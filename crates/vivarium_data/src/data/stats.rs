use serde::{Deserialize, Serialize};

/// One periodic sample of population-level averages.
///
/// An empty population reports zero counts and zero averages; that is a
/// simulation outcome, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StatsSample {
    pub tick: u64,
    pub animal_count: usize,
    pub plant_count: usize,
    pub avg_speed: f32,
    pub avg_vision: f32,
    pub avg_strength: f32,
    pub avg_defense: f32,
    pub avg_aggression: f32,
    pub avg_timidity: f32,
}
