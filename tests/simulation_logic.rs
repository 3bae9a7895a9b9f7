mod common;

use common::{AnimalBuilder, WorldBuilder};
use vivarium_data::{LiveEvent, MoveMode};
use vivarium_lib::model::history::HistoryLogger;

#[test]
fn test_tick_advances_and_drains_energy() {
    let mut world = WorldBuilder::new()
        .with_animal(AnimalBuilder::new().energy(50.0).build())
        .build();

    world.update().expect("update failed");

    assert_eq!(world.tick, 1);
    assert_eq!(world.population(), 1);
    assert!(world.animals[0].energy < 50.0);
}

#[test]
fn test_visible_food_is_chased_and_eaten() {
    let mut world = WorldBuilder::new()
        .with_animal(AnimalBuilder::new().at(0.0, 0.0).energy(50.0).build())
        .with_food(0.5, 0.0)
        .build();

    world.update().expect("update failed");

    // Food inside the vision radius flips the wanderer to ChaseFood, one
    // step closes the 0.5 gap below contact range, and the food is gone.
    assert_eq!(world.food_count(), 0);
    assert!(world.animals[0].energy > 50.0);
}

#[test]
fn test_reproduction_deducts_half_threshold() {
    let mut world = WorldBuilder::new()
        .with_animal(
            AnimalBuilder::new()
                .energy(55.0)
                .genome(|g| g.energy_to_reproduce = 50.0)
                .build(),
        )
        .build();

    let events = world.update().expect("update failed");

    assert_eq!(world.eggs.len(), 1);
    let egg = &world.eggs[0];
    assert_eq!(egg.start_energy, 25.0);
    // Parent paid the egg's energy on top of normal drain.
    let parent = &world.animals[0];
    assert!(parent.energy < 30.0 && parent.energy > 29.0);
    assert!(events
        .iter()
        .any(|e| matches!(e, LiveEvent::EggLaid { parent_id, .. } if *parent_id == parent.id)));
}

#[test]
fn test_energy_never_exceeds_max() {
    let mut world = WorldBuilder::new()
        .with_animal(
            AnimalBuilder::new()
                .at(0.0, 0.0)
                .energy(99.0)
                .genome(|g| g.energy_to_reproduce = 1000.0)
                .build(),
        )
        .with_food(0.3, 0.0)
        .with_food(-0.3, 0.0)
        .with_food(0.0, 0.3)
        .build();

    for _ in 0..5 {
        world.update().expect("update failed");
        for animal in &world.animals {
            assert!(animal.energy <= animal.genome.max_energy);
        }
    }
}

#[test]
fn test_same_seed_same_trajectory() {
    let run = |seed: u64| {
        let mut world = WorldBuilder::new()
            .with_seed(seed)
            .with_config(|c| {
                c.world.initial_population = 8;
                c.spawner.start_amount = 20;
            })
            .build();
        for _ in 0..50 {
            world.update().expect("update failed");
        }
        world
            .animals
            .iter()
            .map(|a| (a.id, a.position.x, a.position.y, a.energy))
            .collect::<Vec<_>>()
    };

    assert_eq!(run(42), run(42));
    assert_ne!(run(42), run(43));
}

#[test]
fn test_stats_sampled_on_cadence() {
    let mut world = WorldBuilder::new()
        .with_config(|c| c.spawner.spawn_period = 1000.0)
        .with_animal(AnimalBuilder::new().energy(50.0).build())
        .with_food(5.0, 5.0)
        .build();

    // Default cadence is one sample per simulated second, dt 0.1.
    for _ in 0..9 {
        world.update().expect("update failed");
    }
    assert!(world.stats.is_empty());

    let events = world.update().expect("update failed");
    assert_eq!(world.stats.len(), 1);
    let sample = world.stats.latest().unwrap();
    assert_eq!(sample.animal_count, 1);
    assert_eq!(sample.plant_count, 1);
    assert!(events
        .iter()
        .any(|e| matches!(e, LiveEvent::Snapshot { .. })));
}

#[test]
fn test_snapshots_round_trip_from_log() {
    let dir = std::env::temp_dir().join("vivarium_snapshot_roundtrip");
    let _ = std::fs::remove_dir_all(&dir);
    let dir = dir.to_str().expect("utf-8 temp path").to_string();

    let mut world = WorldBuilder::new()
        .with_config(|c| c.spawner.spawn_period = 1000.0)
        .with_animal(AnimalBuilder::new().energy(50.0).build())
        .build();
    world.logger = HistoryLogger::new_at(&dir).expect("log dir");

    for _ in 0..10 {
        world.update().expect("update failed");
    }

    let snapshots = world.logger.snapshots().expect("read back");
    assert_eq!(snapshots.len(), 1);
    let (tick, stats) = &snapshots[0];
    assert_eq!(*tick, 10);
    assert_eq!(stats.animal_count, 1);
    assert_eq!(world.stats.latest().unwrap(), stats);
}

#[test]
fn test_wandering_animal_stays_in_bounds() {
    let mut world = WorldBuilder::new()
        .with_config(|c| c.spawner.spawn_period = 1000.0)
        .with_animal(
            AnimalBuilder::new()
                .at(9.9, 0.0)
                .energy(100.0)
                .heading(1.0, 0.0)
                .genome(|g| {
                    g.speed = 3.0;
                    g.energy_to_reproduce = 1000.0;
                })
                .build(),
        )
        .build();

    for _ in 0..100 {
        world.update().expect("update failed");
        let p = world.animals[0].position;
        let min = world.config.world.area_min;
        let max = world.config.world.area_max;
        assert!(p.x >= min.x && p.x <= max.x && p.y >= min.y && p.y <= max.y);
    }
    assert_eq!(world.animals[0].mode, MoveMode::Wander);
}
