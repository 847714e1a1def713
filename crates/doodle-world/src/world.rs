//! World state and the tick scheduler.

use doodle_core::{Cell, Error, OrganismId, Position, Result, SimConfig, Species};
use serde::Serialize;
use tracing::debug;

use crate::behavior::{self, TickCtx};
use crate::events::Event;
use crate::grid::Grid;
use crate::organism::Organism;
use crate::registry::Registry;
use crate::rng::{Entropy, SeededEntropy};

/// Head count of the living population.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Census {
    pub ants: usize,
    pub doodlebugs: usize,
}

impl Census {
    pub fn total(&self) -> usize {
        self.ants + self.doodlebugs
    }
}

/// The simulation world: occupancy grid, population registry, and the tick
/// scheduler driving them.
///
/// The grid and the registry are two views of one state. Every mutation goes
/// through the scheduler-driven organism updates, one organism at a time, so
/// the pair is consistent between any two updates; a full cross-check runs
/// after each tick in debug builds.
pub struct World {
    grid: Grid,
    registry: Registry,
    entropy: Box<dyn Entropy>,
    config: SimConfig,
    tick: u64,
}

impl World {
    /// Build an empty world seeded from `config.seed`.
    pub fn new(config: SimConfig) -> Result<Self> {
        let entropy = Box::new(SeededEntropy::new(config.seed));
        Self::with_entropy(config, entropy)
    }

    /// Build an empty world with a caller-supplied randomness source.
    pub fn with_entropy(config: SimConfig, entropy: Box<dyn Entropy>) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            grid: Grid::new(config.grid_side, config.grid_side),
            registry: Registry::new(),
            entropy,
            config,
            tick: 0,
        })
    }

    /// Scatter the initial population over distinct random empty cells,
    /// doodlebugs first, then ants.
    pub fn populate(&mut self) -> Result<()> {
        if !self.registry.is_empty() {
            return Err(Error::InvalidState("world is already populated".into()));
        }

        for _ in 0..self.config.initial_doodlebugs {
            self.place_random(Species::Doodlebug);
        }
        for _ in 0..self.config.initial_ants {
            self.place_random(Species::Ant);
        }

        let census = self.census();
        debug!(
            ants = census.ants,
            doodlebugs = census.doodlebugs,
            "world populated"
        );
        Ok(())
    }

    /// Draw cells until an empty one comes up. Terminates because
    /// [`SimConfig::validate`] guarantees the population fits the grid.
    fn place_random(&mut self, species: Species) {
        loop {
            let pos = Position::new(
                self.entropy.coord(self.grid.width()),
                self.entropy.coord(self.grid.height()),
            );
            if self.grid.get(pos).is_empty() {
                let id = self.registry.spawn(species, pos);
                self.grid.set(pos, Cell::Occupied(id));
                return;
            }
        }
    }

    /// Put an organism at `pos` if that is a free in-bounds cell.
    pub fn spawn(&mut self, species: Species, pos: Position) -> Option<OrganismId> {
        if !self.grid.in_bounds(pos) || !self.grid.get(pos).is_empty() {
            return None;
        }
        let id = self.registry.spawn(species, pos);
        self.grid.set(pos, Cell::Occupied(id));
        Some(id)
    }

    /// Run one tick.
    ///
    /// Snapshots the living population, shuffles the snapshot, then updates
    /// each entry still alive when its turn comes. Organisms removed earlier
    /// in the tick are skipped; organisms born during the tick are not in
    /// the snapshot and first act next tick. Never halts on its own, even
    /// with nothing left alive.
    pub fn advance(&mut self) -> Vec<Event> {
        self.tick += 1;

        let mut schedule = self.registry.ids();
        self.entropy.shuffle_schedule(&mut schedule);

        let mut events = Vec::new();
        for id in schedule {
            // Eaten or starved earlier this tick; its turn lapses.
            if !self.registry.contains(id) {
                continue;
            }
            let mut ctx = TickCtx {
                grid: &mut self.grid,
                registry: &mut self.registry,
                entropy: self.entropy.as_mut(),
                config: &self.config,
                events: &mut events,
            };
            behavior::update(&mut ctx, id);
        }

        let census = self.census();
        debug!(
            tick = self.tick,
            ants = census.ants,
            doodlebugs = census.doodlebugs,
            events = events.len(),
            "tick complete"
        );

        #[cfg(debug_assertions)]
        self.audit();

        events
    }

    /// Ticks advanced so far.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn census(&self) -> Census {
        Census {
            ants: self.registry.count(Species::Ant),
            doodlebugs: self.registry.count(Species::Doodlebug),
        }
    }

    pub fn organism(&self, id: OrganismId) -> Option<&Organism> {
        self.registry.get(id)
    }

    pub fn organisms(&self) -> impl Iterator<Item = &Organism> {
        self.registry.iter()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Row-major view of the board for rendering: each cell is `None` or
    /// the occupant's species.
    pub fn cells(&self) -> impl Iterator<Item = (Position, Option<Species>)> + '_ {
        self.grid.iter().map(move |(pos, cell)| {
            let species = cell.occupant().map(|id| {
                self.registry
                    .get(id)
                    .expect("grid occupant is registered")
                    .species
            });
            (pos, species)
        })
    }

    /// Cross-check grid and registry. Panics on divergence; runs after each
    /// tick in debug builds and is available to tests directly.
    pub fn audit(&self) {
        for org in self.registry.iter() {
            assert_eq!(
                self.grid.get(org.position),
                Cell::Occupied(org.id),
                "organism {} at {:?} disagrees with the grid",
                org.id,
                org.position
            );
        }
        for (pos, cell) in self.grid.iter() {
            if let Cell::Occupied(id) = cell {
                let org = self
                    .registry
                    .get(id)
                    .unwrap_or_else(|| panic!("grid cell {pos:?} holds unregistered organism {id}"));
                assert_eq!(org.position, pos, "organism {id} thinks it is elsewhere");
            }
        }
    }
}
