use glam::Vec2;

/// Side-scrolling camera. Only the horizontal axis tracks the subject; the
/// level is exactly one viewport tall.
#[derive(Debug, Clone, Copy)]
pub struct Camera2D {
    /// World-space position of the viewport's top-left corner.
    pub position: Vec2,
    pub viewport: (u32, u32),
    /// Fraction of the remaining distance closed per frame.
    pub smoothing: f32,
    /// Where the subject sits, as a fraction of viewport width from the left.
    pub lead_fraction: f32,
}

impl Camera2D {
    pub fn new(viewport_width: u32, viewport_height: u32) -> Self {
        Self {
            position: Vec2::ZERO,
            viewport: (viewport_width, viewport_height),
            smoothing: 0.1,
            lead_fraction: 1.0 / 3.0,
        }
    }

    pub fn follow(&mut self, subject_x: f32) {
        let goal = subject_x - self.viewport.0 as f32 * self.lead_fraction;
        self.position.x += (goal - self.position.x) * self.smoothing;
        if self.position.x < 0.0 {
            self.position.x = 0.0;
        }
    }

    /// Horizontal shift to apply to world coordinates before drawing.
    pub fn offset_x(&self) -> f32 {
        -self.position.x
    }
}
