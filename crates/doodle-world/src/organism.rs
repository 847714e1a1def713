//! Organism state.

use doodle_core::{OrganismId, Position, Species};

/// A single organism on the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Organism {
    pub id: OrganismId,
    pub species: Species,
    pub position: Position,
    /// Ticks since the last breed attempt (or since creation).
    pub breed_counter: u32,
    /// Consecutive ticks without a successful hunt. Stays 0 for ants.
    pub starve_counter: u32,
}

impl Organism {
    pub fn new(id: OrganismId, species: Species, position: Position) -> Self {
        Self {
            id,
            species,
            position,
            breed_counter: 0,
            starve_counter: 0,
        }
    }

    pub fn symbol(&self) -> char {
        self.species.symbol()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_organism_has_fresh_counters() {
        let org = Organism::new(OrganismId(3), Species::Doodlebug, Position::new(1, 2));
        assert_eq!(org.breed_counter, 0);
        assert_eq!(org.starve_counter, 0);
        assert_eq!(org.position, Position::new(1, 2));
        assert_eq!(org.symbol(), 'X');
    }
}
