//! Genome creation and mutation.

use crate::model::config::ReproductionConfig;
use rand::Rng;
use vivarium_data::Genome;

/// Randomized genome for a spawner-created animal.
pub fn random_genome<R: Rng>(rng: &mut R) -> Genome {
    Genome {
        speed: rng.gen_range(1.0..3.0),
        vision_range: rng.gen_range(2.0..5.0),
        energy_to_reproduce: rng.gen_range(40.0..80.0),
        max_energy: rng.gen_range(80.0..120.0),
        strength: rng.gen_range(0.5..2.0),
        defense: rng.gen_range(0.5..2.0),
        aggression: rng.gen_range(0.0..0.3),
        timidity: rng.gen_range(0.0..0.3),
    }
    .clamped()
}

/// Offspring genome: every trait independently perturbed by a uniform offset
/// inside its configured bound, then clamped to the trait's domain.
/// `max_energy` is inherited unchanged.
pub fn mutate<R: Rng>(parent: &Genome, config: &ReproductionConfig, rng: &mut R) -> Genome {
    let mut offset = |bound: f32| {
        if bound > 0.0 {
            rng.gen_range(-bound..=bound)
        } else {
            0.0
        }
    };
    Genome {
        speed: parent.speed + offset(config.speed_delta),
        vision_range: parent.vision_range + offset(config.vision_delta),
        energy_to_reproduce: parent.energy_to_reproduce
            + offset(config.energy_to_reproduce_delta),
        max_energy: parent.max_energy,
        strength: parent.strength + offset(config.strength_delta),
        defense: parent.defense + offset(config.defense_delta),
        aggression: parent.aggression + offset(config.aggression_delta),
        timidity: parent.timidity + offset(config.timidity_delta),
    }
    .clamped()
}
