//! Contact combat resolution.

use std::collections::HashMap;
use uuid::Uuid;
use vivarium_data::{Animal, MoveMode};

/// Result of a resolved fight.
#[derive(Debug, Clone, Copy)]
pub struct FightOutcome {
    pub winner: Uuid,
    pub loser: Uuid,
    pub transferred: f32,
}

/// Resolves a fight between the attacker at `attacker` and the defender at
/// `defender`, both indices into `animals`.
///
/// Fires only when the attacker is in `ChaseAnimal`, both parties are
/// alive, and they are within contact range. Each side's effective power is
/// its strength minus the opponent's defense; the strictly stronger side
/// wins, and a tie goes to the defender. The winner absorbs half the
/// loser's energy (capped at its own maximum) and the loser is marked dead
/// in place. The alive checks make repeat resolution a no-op, so one
/// corpse can never fuel two fights.
pub fn try_fight(
    animals: &mut [Animal],
    attacker: usize,
    defender: usize,
    contact_range: f32,
) -> Option<FightOutcome> {
    if attacker == defender {
        return None;
    }
    let (atk, def) = pair_mut(animals, attacker, defender);
    if atk.mode != MoveMode::ChaseAnimal || !atk.alive || !def.alive {
        return None;
    }
    if atk.position.distance(def.position) >= contact_range {
        return None;
    }

    let attacker_power = atk.genome.strength - def.genome.defense;
    let defender_power = def.genome.strength - atk.genome.defense;

    let (winner, loser) = if attacker_power > defender_power {
        (atk, def)
    } else {
        (def, atk)
    };
    let transferred = 0.5 * loser.energy;
    winner.energy = (winner.energy + transferred).min(winner.genome.max_energy);
    loser.alive = false;
    Some(FightOutcome {
        winner: winner.id,
        loser: loser.id,
        transferred,
    })
}

/// Nearest live rival among the ones the animal at `idx` currently sees.
pub fn nearest_live_seen(
    animals: &[Animal],
    idx: usize,
    animal_slots: &HashMap<Uuid, usize>,
) -> Option<Uuid> {
    let me = &animals[idx];
    me.seen_animals
        .iter()
        .filter_map(|id| animal_slots.get(id).map(|&i| &animals[i]))
        .filter(|a| a.alive && a.id != me.id)
        .min_by(|a, b| {
            me.position
                .distance(a.position)
                .partial_cmp(&me.position.distance(b.position))
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|a| a.id)
}

/// Disjoint mutable borrows of two slice elements.
fn pair_mut(animals: &mut [Animal], a: usize, b: usize) -> (&mut Animal, &mut Animal) {
    debug_assert_ne!(a, b);
    if a < b {
        let (left, right) = animals.split_at_mut(b);
        (&mut left[a], &mut right[0])
    } else {
        let (left, right) = animals.split_at_mut(a);
        (&mut right[0], &mut left[b])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vivarium_data::{Genome, Vec2};

    fn fighter(id: u128, strength: f32, defense: f32, energy: f32) -> Animal {
        let mut genome = Genome::default();
        genome.strength = strength;
        genome.defense = defense;
        let mut a = Animal::new(Uuid::from_u128(id), Vec2::ZERO, genome, energy);
        a.mode = MoveMode::ChaseAnimal;
        a
    }

    #[test]
    fn test_stronger_attacker_wins() {
        let mut animals = vec![fighter(1, 3.0, 1.0, 40.0), fighter(2, 1.0, 1.0, 40.0)];
        let outcome = try_fight(&mut animals, 0, 1, 1.0).unwrap();
        assert_eq!(outcome.winner, Uuid::from_u128(1));
        assert_eq!(outcome.loser, Uuid::from_u128(2));
        assert_eq!(outcome.transferred, 20.0);
        assert!(animals[0].alive);
        assert!(!animals[1].alive);
        assert_eq!(animals[0].energy, 60.0);
    }

    #[test]
    fn test_tie_goes_to_defender() {
        // Powers: attacker 3 - 2 = 1, defender 2 - 1 = 1. Equal, so the
        // defender survives and the attacker dies.
        let mut animals = vec![fighter(1, 3.0, 1.0, 40.0), fighter(2, 2.0, 2.0, 40.0)];
        let outcome = try_fight(&mut animals, 0, 1, 1.0).unwrap();
        assert_eq!(outcome.winner, Uuid::from_u128(2));
        assert!(!animals[0].alive);
        assert!(animals[1].alive);
        assert_eq!(animals[1].energy, 60.0);
    }

    #[test]
    fn test_winner_gain_capped_at_max() {
        let mut animals = vec![fighter(1, 5.0, 1.0, 99.0), fighter(2, 1.0, 1.0, 80.0)];
        try_fight(&mut animals, 0, 1, 1.0).unwrap();
        assert_eq!(animals[0].energy, animals[0].genome.max_energy);
    }

    #[test]
    fn test_dead_parties_do_not_refight() {
        let mut animals = vec![fighter(1, 3.0, 1.0, 40.0), fighter(2, 1.0, 1.0, 40.0)];
        assert!(try_fight(&mut animals, 0, 1, 1.0).is_some());
        assert!(try_fight(&mut animals, 0, 1, 1.0).is_none());
        assert_eq!(animals[0].energy, 60.0);
    }

    #[test]
    fn test_out_of_range_is_noop() {
        let mut animals = vec![fighter(1, 3.0, 1.0, 40.0), fighter(2, 1.0, 1.0, 40.0)];
        animals[1].position = Vec2::new(5.0, 0.0);
        assert!(try_fight(&mut animals, 0, 1, 1.0).is_none());
        assert!(animals[1].alive);
    }

    #[test]
    fn test_requires_chase_mode() {
        let mut animals = vec![fighter(1, 3.0, 1.0, 40.0), fighter(2, 1.0, 1.0, 40.0)];
        animals[0].mode = MoveMode::Wander;
        assert!(try_fight(&mut animals, 0, 1, 1.0).is_none());
    }
}
