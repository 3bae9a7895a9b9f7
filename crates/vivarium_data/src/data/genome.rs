use serde::{Deserialize, Serialize};

/// Smallest value a continuous trait may take after clamping.
pub const TRAIT_FLOOR: f32 = 0.1;

/// Heritable trait bundle of an animal.
///
/// A genome is immutable for the lifetime of its carrier; reproduction
/// produces a perturbed copy (see `model::genetics`). Every field is kept
/// inside its valid domain by [`Genome::clamped`], which is applied at every
/// mutation so out-of-domain values are never observable downstream.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Genome {
    /// World units moved per second.
    pub speed: f32,
    /// Radius of the perception neighborhood.
    pub vision_range: f32,
    /// Energy level that triggers reproduction.
    pub energy_to_reproduce: f32,
    /// Energy ceiling. Inherited unchanged; never mutated.
    pub max_energy: f32,
    pub strength: f32,
    pub defense: f32,
    /// Chance to chase another animal on an encounter, in [0, 1].
    pub aggression: f32,
    /// Chance to flee on an encounter, in [0, 1].
    pub timidity: f32,
}

impl Genome {
    /// Returns a copy with every field forced into its valid domain:
    /// continuous traits at least [`TRAIT_FLOOR`], the two encounter
    /// probabilities inside [0, 1].
    #[must_use]
    pub fn clamped(mut self) -> Self {
        self.speed = self.speed.max(TRAIT_FLOOR);
        self.vision_range = self.vision_range.max(TRAIT_FLOOR);
        self.energy_to_reproduce = self.energy_to_reproduce.max(TRAIT_FLOOR);
        self.max_energy = self.max_energy.max(TRAIT_FLOOR);
        self.strength = self.strength.max(TRAIT_FLOOR);
        self.defense = self.defense.max(TRAIT_FLOOR);
        self.aggression = self.aggression.clamp(0.0, 1.0);
        self.timidity = self.timidity.clamp(0.0, 1.0);
        self
    }

    /// True when every field already lies inside its clamp domain.
    pub fn in_domain(&self) -> bool {
        self.speed >= TRAIT_FLOOR
            && self.vision_range >= TRAIT_FLOOR
            && self.energy_to_reproduce >= TRAIT_FLOOR
            && self.max_energy >= TRAIT_FLOOR
            && self.strength >= TRAIT_FLOOR
            && self.defense >= TRAIT_FLOOR
            && (0.0..=1.0).contains(&self.aggression)
            && (0.0..=1.0).contains(&self.timidity)
    }
}

impl Default for Genome {
    fn default() -> Self {
        Self {
            speed: 2.0,
            vision_range: 3.0,
            energy_to_reproduce: 60.0,
            max_energy: 100.0,
            strength: 1.0,
            defense: 1.0,
            aggression: 0.1,
            timidity: 0.1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamped_restores_domain() {
        let g = Genome {
            speed: -4.0,
            vision_range: 0.0,
            energy_to_reproduce: -1.0,
            max_energy: 0.05,
            strength: -0.5,
            defense: 0.0,
            aggression: 1.7,
            timidity: -0.3,
        }
        .clamped();
        assert!(g.in_domain());
        assert_eq!(g.speed, TRAIT_FLOOR);
        assert_eq!(g.aggression, 1.0);
        assert_eq!(g.timidity, 0.0);
    }

    #[test]
    fn test_clamped_is_identity_inside_domain() {
        let g = Genome::default();
        assert_eq!(g.clamped(), g);
    }
}
