pub mod behavior;
pub mod combat;
pub mod foraging;
pub mod metabolism;
pub mod reproduction;
pub mod stats;
