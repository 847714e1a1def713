//! Per-tick behavior rules for both species.
//!
//! Every phase derives its candidate cells fresh from the grid at the
//! organism's current position and shuffles them independently, then takes
//! the first cell passing the phase's predicate. All grid and registry
//! mutations happen in matched pairs so the two stay consistent between any
//! two organism updates.

use doodle_core::{Cell, OrganismId, SimConfig, Species};
use tracing::{debug, trace};

use crate::events::Event;
use crate::grid::Grid;
use crate::registry::Registry;
use crate::rng::Entropy;

/// Mutable view of the world handed to one organism's update.
pub(crate) struct TickCtx<'a> {
    pub grid: &'a mut Grid,
    pub registry: &'a mut Registry,
    pub entropy: &'a mut dyn Entropy,
    pub config: &'a SimConfig,
    pub events: &'a mut Vec<Event>,
}

/// Run one organism's update for this tick.
///
/// The scheduler has already checked liveness; a missing id here is a
/// scheduling bug, not a runtime condition.
pub(crate) fn update(ctx: &mut TickCtx<'_>, id: OrganismId) {
    let species = ctx
        .registry
        .get(id)
        .expect("scheduled organism is alive")
        .species;

    match species {
        Species::Ant => update_ant(ctx, id),
        Species::Doodlebug => update_doodlebug(ctx, id),
    }
}

/// Ant tick: wander, then breed on cadence.
fn update_ant(ctx: &mut TickCtx<'_>, id: OrganismId) {
    try_move(ctx, id);
    try_breed(ctx, id);
}

/// Doodlebug tick: starve check first, then hunt, wander only on a failed
/// hunt, and finally breed on cadence.
fn update_doodlebug(ctx: &mut TickCtx<'_>, id: OrganismId) {
    let (position, starving) = {
        let org = ctx.registry.get(id).expect("scheduled organism is alive");
        (
            org.position,
            org.starve_counter >= ctx.config.doodlebug_starve_threshold,
        )
    };

    if starving {
        ctx.registry.remove(id);
        ctx.grid.set(position, Cell::Empty);
        debug!(%id, ?position, "doodlebug starved");
        ctx.events.push(Event::Starved { id, at: position });
        return;
    }

    if !try_eat(ctx, id) {
        try_move(ctx, id);
        // The hunt failed, moved or not.
        ctx.registry.get_mut(id).unwrap().starve_counter += 1;
    }

    try_breed(ctx, id);
}

/// Move into the first empty shuffled neighbor, staying put if none is free.
fn try_move(ctx: &mut TickCtx<'_>, id: OrganismId) -> bool {
    let from = ctx.registry.get(id).unwrap().position;
    let mut candidates = ctx.grid.neighbors(from);
    ctx.entropy.shuffle_cells(&mut candidates);

    for to in candidates {
        if ctx.grid.get(to).is_empty() {
            ctx.grid.set(from, Cell::Empty);
            ctx.grid.set(to, Cell::Occupied(id));
            ctx.registry.get_mut(id).unwrap().position = to;
            trace!(%id, ?from, ?to, "moved");
            ctx.events.push(Event::Moved { id, from, to });
            return true;
        }
    }
    false
}

/// Eat the first adjacent ant found, taking over its cell.
fn try_eat(ctx: &mut TickCtx<'_>, id: OrganismId) -> bool {
    let from = ctx.registry.get(id).unwrap().position;
    let mut candidates = ctx.grid.neighbors(from);
    ctx.entropy.shuffle_cells(&mut candidates);

    for at in candidates {
        let Cell::Occupied(occupant) = ctx.grid.get(at) else {
            continue;
        };
        if !ctx
            .registry
            .get(occupant)
            .is_some_and(|org| org.species.is_prey())
        {
            continue;
        }

        // The prey leaves the registry and the grid together, so no later
        // update this tick can see it.
        ctx.registry.remove(occupant);
        ctx.grid.set(at, Cell::Occupied(id));
        ctx.grid.set(from, Cell::Empty);

        let org = ctx.registry.get_mut(id).unwrap();
        org.position = at;
        org.starve_counter = 0;

        debug!(predator = %id, prey = %occupant, ?at, "ant eaten");
        ctx.events.push(Event::Ate {
            predator: id,
            prey: occupant,
            at,
        });
        return true;
    }
    false
}

/// Advance the breed counter; at the species threshold, place an offspring
/// in the first empty shuffled neighbor if there is one.
fn try_breed(ctx: &mut TickCtx<'_>, id: OrganismId) {
    let (species, position, count) = {
        let org = ctx.registry.get_mut(id).unwrap();
        org.breed_counter += 1;
        (org.species, org.position, org.breed_counter)
    };

    if count < species.breed_threshold(ctx.config) {
        return;
    }

    let mut candidates = ctx.grid.neighbors(position);
    ctx.entropy.shuffle_cells(&mut candidates);

    for at in candidates {
        if ctx.grid.get(at).is_empty() {
            let child = ctx.registry.spawn(species, at);
            ctx.grid.set(at, Cell::Occupied(child));
            debug!(parent = %id, %child, species = species.name(), ?at, "offspring placed");
            ctx.events.push(Event::Born {
                parent: id,
                child,
                species,
                at,
            });
            break;
        }
    }

    // The attempt spends the counter whether or not a cell was free.
    ctx.registry.get_mut(id).unwrap().breed_counter = 0;
}
