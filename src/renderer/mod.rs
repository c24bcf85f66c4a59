//! WebGPU rendering module
//!
//! The pool's backing buffer lives here; the renderer uploads the pool's
//! dirty slots and draws the full capacity every frame.

pub mod pipeline;

pub use pipeline::RenderState;
