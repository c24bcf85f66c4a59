//! GPU data structures (must match shader.wgsl)

use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec3};

/// One slot of the ball storage buffer.
///
/// Layout mirrors the WGSL `Ball` struct: `colour` is a vec3 and therefore
/// 16-byte aligned, padding the record to 32 bytes.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct BallRecord {
    /// Center in normalized device coordinates, [-1, 1] per axis
    pub position: [f32; 2], // offset 0
    /// Radius multiplier, positive
    pub scale: f32, // offset 8
    active: u32,    // offset 12 - bool as u32 for the shader
    /// Linear colour, unclamped (clamping is the shader's concern)
    pub colour: [f32; 3], // offset 16
    _pad: u32,      // offset 28 - pad to 32 bytes
}

impl BallRecord {
    /// A live record with the given fields.
    pub fn new(position: Vec2, colour: Vec3, scale: f32) -> Self {
        Self {
            position: position.to_array(),
            scale,
            active: 1,
            colour: colour.to_array(),
            _pad: 0,
        }
    }

    /// The default slot contents: origin, red, unit scale, not drawn.
    pub const fn inactive() -> Self {
        Self {
            position: [0.0, 0.0],
            scale: 1.0,
            active: 0,
            colour: [1.0, 0.0, 0.0],
            _pad: 0,
        }
    }

    /// Whether the renderer should draw this slot.
    pub fn is_active(&self) -> bool {
        self.active != 0
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = u32::from(active);
    }
}

impl Default for BallRecord {
    fn default() -> Self {
        Self::inactive()
    }
}

/// Frame-scoped scalar state, one instance in a uniform buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, Pod, Zeroable)]
pub struct Metadata {
    /// Viewport width over height, recomputed every frame
    pub aspect_ratio: f32,
    _pad: [f32; 3], // pad to 16 bytes
}

impl Metadata {
    pub fn new(aspect_ratio: f32) -> Self {
        Self {
            aspect_ratio,
            _pad: [0.0; 3],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::{offset_of, size_of};

    #[test]
    fn test_ball_record_layout() {
        assert_eq!(size_of::<BallRecord>(), 32);
        assert_eq!(offset_of!(BallRecord, position), 0);
        assert_eq!(offset_of!(BallRecord, scale), 8);
        assert_eq!(offset_of!(BallRecord, active), 12);
        assert_eq!(offset_of!(BallRecord, colour), 16);
    }

    #[test]
    fn test_metadata_layout() {
        assert_eq!(size_of::<Metadata>(), 16);
        assert_eq!(offset_of!(Metadata, aspect_ratio), 0);
    }

    #[test]
    fn test_active_flag() {
        let mut ball = BallRecord::new(Vec2::ZERO, Vec3::ONE, 0.5);
        assert!(ball.is_active());
        ball.set_active(false);
        assert!(!ball.is_active());
    }

    #[test]
    fn test_inactive_default() {
        let ball = BallRecord::default();
        assert!(!ball.is_active());
        assert_eq!(ball.position, [0.0, 0.0]);
        assert_eq!(ball.scale, 1.0);
    }
}
