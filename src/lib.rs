//! Parched - a GPU-resident ball pool renderer
//!
//! A fixed-capacity object pool of circular "ball" entities, backed by a
//! single persistent GPU storage buffer and drawn from it every frame.
//!
//! Core modules:
//! - `pool`: Ball record layout and the fixed-capacity object pool
//! - `renderer`: WebGPU pipeline and per-frame CPU/GPU synchronization
//! - `sim`: Simulation driver that adds, removes and recolours balls
//! - `settings`: Runtime configuration

pub mod pool;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use pool::{BallPool, BallRecord, Metadata, PoolError};
pub use settings::Settings;

use glam::Vec2;

/// Configuration constants
pub mod consts {
    /// Default slot count of the ball pool. Fixed for the pool's lifetime;
    /// at most `capacity - 1` balls can be live at once.
    pub const DEFAULT_BALL_CAPACITY: usize = 1024;

    /// Fixed simulation timestep (input sampling at 60 Hz)
    pub const TICK_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Radius of balls spawned with the left mouse button
    pub const SMALL_BALL_RADIUS: f32 = 0.03;
    /// Radius of balls spawned with the middle mouse button
    pub const LARGE_BALL_RADIUS: f32 = 0.3;
    /// Colour of the large balls
    pub const LARGE_BALL_COLOUR: [f32; 3] = [0.0, 0.0, 1.0];

    /// Background clear colour (parched sand)
    pub const CLEAR_COLOUR: [f64; 3] = [0.64, 0.55, 0.49];
}

/// Convert a cursor position in physical pixels to normalized device
/// coordinates. NDC y grows upward; screen y is flipped.
#[inline]
pub fn screen_to_ndc(pos: Vec2, width: u32, height: u32) -> Vec2 {
    Vec2::new(
        pos.x / (width as f32 * 0.5) - 1.0,
        pos.y / (height as f32 * -0.5) + 1.0,
    )
}
