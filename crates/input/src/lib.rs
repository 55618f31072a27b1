//! Movement axis input for driving agents.
//!
//! The sim runs headless, so there is no event loop feeding this; hosts
//! write axis values from whatever source they have (a scripted route, a
//! replay, eventually a real device) and movers read a direction out.

use glam::Vec3;

/// Horizontal/vertical movement axes in the [-1, 1] range.
#[derive(Debug, Default, Clone, Copy)]
pub struct AxisPair {
    horizontal: f32,
    vertical: f32,
}

impl AxisPair {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set both axes, clamped to the [-1, 1] range.
    pub fn set(&mut self, horizontal: f32, vertical: f32) {
        self.horizontal = horizontal.clamp(-1.0, 1.0);
        self.vertical = vertical.clamp(-1.0, 1.0);
    }

    /// Zero both axes.
    pub fn clear(&mut self) {
        self.horizontal = 0.0;
        self.vertical = 0.0;
    }

    pub fn horizontal(&self) -> f32 {
        self.horizontal
    }

    pub fn vertical(&self) -> f32 {
        self.vertical
    }

    /// Movement direction on the ground plane: horizontal maps to world X,
    /// vertical to world Z. Normalized so diagonals are no faster than
    /// straight lines; zero input yields zero.
    pub fn dir(&self) -> Vec3 {
        Vec3::new(self.horizontal, 0.0, self.vertical).normalize_or_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagonal_is_unit_length() {
        let mut axes = AxisPair::new();
        axes.set(1.0, 1.0);
        assert!((axes.dir().length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn axes_clamp_to_unit_range() {
        let mut axes = AxisPair::new();
        axes.set(3.0, -7.5);
        assert_eq!(axes.horizontal(), 1.0);
        assert_eq!(axes.vertical(), -1.0);
    }

    #[test]
    fn idle_axes_yield_zero_direction() {
        let mut axes = AxisPair::new();
        axes.set(0.4, -0.2);
        axes.clear();
        assert_eq!(axes.dir(), Vec3::ZERO);
    }

    #[test]
    fn vertical_axis_maps_to_z() {
        let mut axes = AxisPair::new();
        axes.set(0.0, 1.0);
        assert_eq!(axes.dir(), Vec3::Z);
    }
}
