//! Core data structures for the Vivarium simulation.

pub mod data;

pub use data::*;
