//! Egg laying.

use crate::model::config::ReproductionConfig;
use crate::model::genetics;
use rand::Rng;
use uuid::Uuid;
use vivarium_data::{Animal, Egg};

/// Lays an egg if the animal has reached its reproduction threshold.
///
/// The parent pays half the threshold and the egg starts with exactly that
/// amount, so laying conserves energy. The payment can never kill the
/// parent: the threshold check guarantees at least half the threshold
/// remains afterwards.
pub fn try_reproduce<R: Rng>(
    animal: &mut Animal,
    config: &ReproductionConfig,
    egg_id: Uuid,
    rng: &mut R,
) -> Option<Egg> {
    if animal.energy < animal.genome.energy_to_reproduce {
        return None;
    }
    let share = animal.genome.energy_to_reproduce / 2.0;
    animal.energy -= share;
    let genome = genetics::mutate(&animal.genome, config, rng);
    Some(Egg {
        id: egg_id,
        position: animal.position,
        genome,
        start_energy: share,
        hatch_remaining: config.hatch_time,
    })
}
