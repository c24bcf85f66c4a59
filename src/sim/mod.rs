//! Simulation driver
//!
//! Decides when balls are added, removed and recoloured, and with what
//! values. All mutation goes through the pool's operations; no physics or
//! collision lives here.
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod state;
pub mod tick;

pub use state::World;
pub use tick::{TickInput, tick};
