pub mod config;
pub mod genetics;
pub mod history;
pub mod scheduler;
pub mod spatial;
pub mod spawner;
pub mod systems;
pub mod world;
