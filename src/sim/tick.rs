//! Fixed-step simulation tick

use glam::Vec2;

use crate::consts::*;
use crate::sim::World;

/// Input sampled by the platform layer for one tick.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Cursor position in normalized device coordinates, if known
    pub cursor: Option<Vec2>,
    /// Left button held: spawn a small random-coloured ball at the cursor
    pub spawn_small: bool,
    /// Middle button held: spawn a large blue ball at the cursor
    pub spawn_large: bool,
    /// Right button held: remove the most recent ball
    pub pop: bool,
}

/// Advance the world by one fixed step. Buttons act while held, so a held
/// button spawns or pops once per tick.
pub fn tick(world: &mut World, input: &TickInput) {
    if let Some(cursor) = input.cursor {
        if input.spawn_small {
            world.add_random_ball(cursor, SMALL_BALL_RADIUS);
        }
        if input.spawn_large {
            world.add_ball(cursor, LARGE_BALL_COLOUR.into(), LARGE_BALL_RADIUS);
        }
    }
    if input.pop {
        world.pop_ball();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_small_at_cursor() {
        let mut world = World::new(16, 1);
        let input = TickInput {
            cursor: Some(Vec2::new(0.25, -0.5)),
            spawn_small: true,
            ..Default::default()
        };
        tick(&mut world, &input);
        assert_eq!(world.ball_count(), 1);
        let ball = &world.pool().balls()[0];
        assert_eq!(ball.position, [0.25, -0.5]);
        assert_eq!(ball.scale, SMALL_BALL_RADIUS);
    }

    #[test]
    fn test_spawn_large_is_blue() {
        let mut world = World::new(16, 1);
        let input = TickInput {
            cursor: Some(Vec2::ZERO),
            spawn_large: true,
            ..Default::default()
        };
        tick(&mut world, &input);
        let ball = &world.pool().balls()[0];
        assert_eq!(ball.colour, LARGE_BALL_COLOUR);
        assert_eq!(ball.scale, LARGE_BALL_RADIUS);
    }

    #[test]
    fn test_no_cursor_no_spawn() {
        let mut world = World::new(16, 1);
        let input = TickInput {
            cursor: None,
            spawn_small: true,
            spawn_large: true,
            ..Default::default()
        };
        tick(&mut world, &input);
        assert_eq!(world.ball_count(), 0);
    }

    #[test]
    fn test_pop() {
        let mut world = World::new(16, 1);
        let spawn = TickInput {
            cursor: Some(Vec2::ZERO),
            spawn_small: true,
            ..Default::default()
        };
        tick(&mut world, &spawn);
        tick(&mut world, &spawn);
        assert_eq!(world.ball_count(), 2);

        let pop = TickInput {
            pop: true,
            ..Default::default()
        };
        tick(&mut world, &pop);
        assert_eq!(world.ball_count(), 1);
        // The floor: a held pop never drains the last ball.
        tick(&mut world, &pop);
        assert_eq!(world.ball_count(), 1);
    }

    #[test]
    fn test_spawning_past_capacity_is_safe() {
        let mut world = World::new(4, 1);
        let input = TickInput {
            cursor: Some(Vec2::ZERO),
            spawn_small: true,
            ..Default::default()
        };
        for _ in 0..10 {
            tick(&mut world, &input);
        }
        assert_eq!(world.ball_count(), 3);
    }
}
