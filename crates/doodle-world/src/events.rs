//! Per-tick event log.

use doodle_core::{OrganismId, Position, Species};
use serde::Serialize;

/// Something that happened during a tick.
///
/// [`World::advance`](crate::World::advance) returns the tick's events in
/// the order they occurred. They are a report for callers and tests; the
/// engine never reads them back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Event {
    /// An organism moved into an empty neighbor cell.
    Moved {
        id: OrganismId,
        from: Position,
        to: Position,
    },
    /// A doodlebug ate an adjacent ant and took its cell.
    Ate {
        predator: OrganismId,
        prey: OrganismId,
        at: Position,
    },
    /// A doodlebug starved and was removed before acting.
    Starved { id: OrganismId, at: Position },
    /// A parent placed an offspring in an empty neighbor cell.
    Born {
        parent: OrganismId,
        child: OrganismId,
        species: Species,
        at: Position,
    },
}

impl Event {
    /// The organism this event removed from the world, if any.
    pub fn removed(&self) -> Option<OrganismId> {
        match self {
            Event::Ate { prey, .. } => Some(*prey),
            Event::Starved { id, .. } => Some(*id),
            _ => None,
        }
    }

    /// The organism this event added to the world, if any.
    pub fn born(&self) -> Option<OrganismId> {
        match self {
            Event::Born { child, .. } => Some(*child),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removed_and_born_accessors() {
        let at = Position::new(0, 0);
        let ate = Event::Ate {
            predator: OrganismId(1),
            prey: OrganismId(2),
            at,
        };
        assert_eq!(ate.removed(), Some(OrganismId(2)));
        assert_eq!(ate.born(), None);

        let born = Event::Born {
            parent: OrganismId(1),
            child: OrganismId(3),
            species: Species::Ant,
            at,
        };
        assert_eq!(born.born(), Some(OrganismId(3)));
        assert_eq!(born.removed(), None);

        let moved = Event::Moved {
            id: OrganismId(1),
            from: at,
            to: Position::new(0, 1),
        };
        assert_eq!(moved.removed(), None);
        assert_eq!(moved.born(), None);
    }
}
