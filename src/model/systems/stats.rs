//! Population statistics sampling.

use std::collections::VecDeque;
use vivarium_data::{Animal, StatsSample};

/// Computes one population sample over the live animals.
///
/// With zero animals every average is reported as zero rather than NaN.
pub fn sample(tick: u64, animals: &[Animal], plant_count: usize) -> StatsSample {
    let live: Vec<&Animal> = animals.iter().filter(|a| a.alive).collect();
    let n = live.len();
    if n == 0 {
        return StatsSample {
            tick,
            animal_count: 0,
            plant_count,
            avg_speed: 0.0,
            avg_vision: 0.0,
            avg_strength: 0.0,
            avg_defense: 0.0,
            avg_aggression: 0.0,
            avg_timidity: 0.0,
        };
    }
    let inv = 1.0 / n as f32;
    let mut sum = StatsSample {
        tick,
        animal_count: n,
        plant_count,
        avg_speed: 0.0,
        avg_vision: 0.0,
        avg_strength: 0.0,
        avg_defense: 0.0,
        avg_aggression: 0.0,
        avg_timidity: 0.0,
    };
    for a in live {
        sum.avg_speed += a.genome.speed;
        sum.avg_vision += a.genome.vision_range;
        sum.avg_strength += a.genome.strength;
        sum.avg_defense += a.genome.defense;
        sum.avg_aggression += a.genome.aggression;
        sum.avg_timidity += a.genome.timidity;
    }
    sum.avg_speed *= inv;
    sum.avg_vision *= inv;
    sum.avg_strength *= inv;
    sum.avg_defense *= inv;
    sum.avg_aggression *= inv;
    sum.avg_timidity *= inv;
    sum
}

/// Bounded FIFO ring of recent samples. Pushing past capacity drops the
/// oldest sample.
#[derive(Debug)]
pub struct StatsHistory {
    samples: VecDeque<StatsSample>,
    max_samples: usize,
}

impl StatsHistory {
    pub fn new(max_samples: usize) -> Self {
        Self {
            samples: VecDeque::with_capacity(max_samples),
            max_samples,
        }
    }

    pub fn push(&mut self, sample: StatsSample) {
        if self.samples.len() == self.max_samples {
            self.samples.pop_front();
        }
        self.samples.push_back(sample);
    }

    pub fn latest(&self) -> Option<&StatsSample> {
        self.samples.back()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &StatsSample> {
        self.samples.iter()
    }
}
