//! Plain data types shared between the simulation core and its tests.

pub mod animal;
pub mod events;
pub mod genome;
pub mod stats;

pub use animal::{Animal, Egg, Food, MoveMode, Vec2};
pub use events::LiveEvent;
pub use genome::Genome;
pub use stats::StatsSample;
