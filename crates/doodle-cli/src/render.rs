//! Text rendering of the world grid.

use doodle_world::World;

/// Render the board row-major with one symbol per cell, headed by the
/// iteration about to be shown.
pub fn render(world: &World) -> String {
    let width = world.grid().width();
    let mut out = format!("World at iteration {}:\n", world.tick() + 1);

    for (pos, species) in world.cells() {
        out.push(species.map_or('-', |s| s.symbol()));
        out.push(if pos.x == width - 1 { '\n' } else { ' ' });
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use doodle_core::{Position, SimConfig, Species};

    fn empty_world(side: i32) -> World {
        let config = SimConfig {
            grid_side: side,
            initial_ants: 0,
            initial_doodlebugs: 0,
            ..Default::default()
        };
        World::new(config).unwrap()
    }

    #[test]
    fn test_render_empty_world() {
        let world = empty_world(2);
        assert_eq!(render(&world), "World at iteration 1:\n- -\n- -\n");
    }

    #[test]
    fn test_render_places_symbols() {
        let mut world = empty_world(3);
        world.spawn(Species::Ant, Position::new(0, 0)).unwrap();
        world.spawn(Species::Doodlebug, Position::new(2, 1)).unwrap();

        let expected = "World at iteration 1:\no - -\n- - X\n- - -\n";
        assert_eq!(render(&world), expected);
    }
}
