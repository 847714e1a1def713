//! Predator-prey world engine.
//!
//! A bounded grid of ants and doodlebugs advanced one tick at a time. Each
//! tick processes every living organism exactly once, in an independently
//! shuffled order, applying the movement, predation, breeding, and
//! starvation rules for its species.

mod behavior;
pub mod events;
pub mod grid;
pub mod organism;
pub mod registry;
pub mod rng;
pub mod world;

pub use events::Event;
pub use grid::Grid;
pub use organism::Organism;
pub use registry::Registry;
pub use rng::{Entropy, SeededEntropy};
pub use world::{Census, World};
