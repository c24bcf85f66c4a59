//! Fixed-capacity GPU-resident ball pool
//!
//! The pool owns the CPU-side mirror of the ball storage buffer plus the
//! allocation cursor. Two liveness signals are kept deliberately distinct:
//! - the cursor (`len`) gates CPU-side allocation; live slots are always a
//!   prefix of the array
//! - the per-slot `active` flag gates visibility in the shader, which draws
//!   every slot of the fixed capacity and discards inactive ones

pub mod record;
pub mod store;

pub use record::{BallRecord, Metadata};
pub use store::{BallPool, PoolError};
