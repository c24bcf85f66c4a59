//! The world: simulation-side owner of the ball pool

use glam::{Vec2, Vec3};
use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::pool::{BallPool, PoolError};

/// Simulation driver over a [`BallPool`]. Owns the spawn policy and a
/// seeded RNG so runs with the same seed produce the same colours.
pub struct World {
    pool: BallPool,
    rng: Pcg32,
}

impl World {
    /// Create a world with a fresh pool of `capacity` slots.
    pub fn new(capacity: usize, seed: u64) -> Self {
        Self {
            pool: BallPool::new(capacity),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn pool(&self) -> &BallPool {
        &self.pool
    }

    pub fn pool_mut(&mut self) -> &mut BallPool {
        &mut self.pool
    }

    /// Number of live balls.
    pub fn ball_count(&self) -> usize {
        self.pool.len()
    }

    /// Add a ball, dropping the request when the pool is full. Returns
    /// whether the ball was placed.
    pub fn add_ball(&mut self, position: Vec2, colour: Vec3, radius: f32) -> bool {
        match self.pool.add(position, colour, radius) {
            Ok(()) => true,
            Err(err) => {
                log::warn!("ball dropped: {err}");
                false
            }
        }
    }

    /// Add a ball with a random colour, components in [0, 2).
    pub fn add_random_ball(&mut self, position: Vec2, radius: f32) -> bool {
        let colour = Vec3::new(
            self.rng.random_range(0.0..2.0),
            self.rng.random_range(0.0..2.0),
            self.rng.random_range(0.0..2.0),
        );
        self.add_ball(position, colour, radius)
    }

    /// Remove the most recently added ball, if more than one is live.
    pub fn pop_ball(&mut self) {
        self.pool.remove_last();
    }

    /// Remove the ball at `index` by swapping it to the end of the live
    /// prefix and popping. Order of the remaining balls changes. Subject
    /// to the pool's floor: the final live ball is never removed.
    pub fn remove_ball(&mut self, index: usize) -> Result<(), PoolError> {
        let last = self.pool.len().checked_sub(1).ok_or(
            PoolError::IndexOutOfRange { index, live: 0 },
        )?;
        self.pool.swap(index, last)?;
        self.pool.remove_last();
        Ok(())
    }

    /// Recolour the ball at `index`.
    pub fn set_ball_colour(&mut self, index: usize, colour: Vec3) -> Result<(), PoolError> {
        if index >= self.pool.len() {
            return Err(PoolError::IndexOutOfRange {
                index,
                live: self.pool.len(),
            });
        }
        self.pool.balls_mut()[index].colour = colour.to_array();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_count() {
        let mut world = World::new(8, 1);
        assert!(world.add_ball(Vec2::ZERO, Vec3::ONE, 0.1));
        assert!(world.add_random_ball(Vec2::new(0.5, 0.5), 0.03));
        assert_eq!(world.ball_count(), 2);
    }

    #[test]
    fn test_add_rejected_when_full() {
        let mut world = World::new(3, 1);
        assert!(world.add_ball(Vec2::ZERO, Vec3::ONE, 0.1));
        assert!(world.add_ball(Vec2::ZERO, Vec3::ONE, 0.1));
        assert!(!world.add_ball(Vec2::ZERO, Vec3::ONE, 0.1));
        assert_eq!(world.ball_count(), 2);
    }

    #[test]
    fn test_random_colours_are_deterministic() {
        let mut a = World::new(8, 42);
        let mut b = World::new(8, 42);
        for _ in 0..3 {
            a.add_random_ball(Vec2::ZERO, 0.03);
            b.add_random_ball(Vec2::ZERO, 0.03);
        }
        assert_eq!(a.pool().balls(), b.pool().balls());
    }

    #[test]
    fn test_random_colour_range() {
        let mut world = World::new(8, 7);
        world.add_random_ball(Vec2::ZERO, 0.03);
        let colour = world.pool().balls()[0].colour;
        assert!(colour.iter().all(|c| (0.0..2.0).contains(c)));
    }

    #[test]
    fn test_remove_ball_swaps_last_into_place() {
        let mut world = World::new(8, 1);
        world.add_ball(Vec2::new(0.1, 0.0), Vec3::X, 0.1);
        world.add_ball(Vec2::new(0.2, 0.0), Vec3::Y, 0.1);
        world.add_ball(Vec2::new(0.3, 0.0), Vec3::Z, 0.1);

        world.remove_ball(0).unwrap();
        assert_eq!(world.ball_count(), 2);
        // The former last ball now occupies slot 0.
        assert_eq!(world.pool().balls()[0].position, [0.3, 0.0]);
        assert_eq!(world.pool().balls()[1].position, [0.2, 0.0]);
    }

    #[test]
    fn test_remove_ball_out_of_range() {
        let mut world = World::new(8, 1);
        assert!(world.remove_ball(0).is_err());
        world.add_ball(Vec2::ZERO, Vec3::ONE, 0.1);
        assert!(world.remove_ball(3).is_err());
    }

    #[test]
    fn test_set_ball_colour() {
        let mut world = World::new(8, 1);
        world.add_ball(Vec2::ZERO, Vec3::ONE, 0.1);
        world.set_ball_colour(0, Vec3::new(0.0, 0.0, 1.0)).unwrap();
        assert_eq!(world.pool().balls()[0].colour, [0.0, 0.0, 1.0]);
        assert!(world.set_ball_colour(1, Vec3::ONE).is_err());
    }
}
