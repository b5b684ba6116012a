//! Per-frame draw list.
//!
//! The simulation never talks to the GPU. Each step it fills a [`FramePlan`]
//! with primitive commands in paint order; the renderer walks the plan, and
//! tests inspect it directly. The plan is reused across frames to avoid
//! per-frame allocation once the vectors have grown to steady state.

use crate::visuals::{LinearGradient, Rgba};
use glam::Vec2;

/// A filled circle in pixel coordinates.
#[derive(Debug, Clone, Copy)]
pub struct CircleCmd {
    pub center: Vec2,
    pub radius: f32,
    pub color: Rgba,
    /// 0.0 draws a crisp disc; 1.0 draws a radial glow fading to transparent
    /// at the rim.
    pub softness: f32,
}

/// A stroked segment in pixel coordinates.
#[derive(Debug, Clone, Copy)]
pub struct LineCmd {
    pub from: Vec2,
    pub to: Vec2,
    pub color: Rgba,
    pub width: f32,
}

/// Everything one frame draws, in paint order: background, base circles
/// (particles), lines (links and ring outlines), overlay circles (orbit dots,
/// glows, drifting blobs).
#[derive(Debug, Default)]
pub struct FramePlan {
    pub background: Option<LinearGradient>,
    pub circles: Vec<CircleCmd>,
    pub lines: Vec<LineCmd>,
    pub overlay: Vec<CircleCmd>,
}

/// Segments used to approximate a ring outline.
pub const RING_SEGMENTS: u32 = 64;

impl FramePlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every command from the previous frame, keeping capacity.
    pub fn clear(&mut self) {
        self.background = None;
        self.circles.clear();
        self.lines.clear();
        self.overlay.clear();
    }

    /// True when the frame draws nothing at all.
    pub fn is_empty(&self) -> bool {
        self.background.is_none()
            && self.circles.is_empty()
            && self.lines.is_empty()
            && self.overlay.is_empty()
    }

    pub fn push_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.circles.push(CircleCmd {
            center,
            radius,
            color,
            softness: 0.0,
        });
    }

    pub fn push_line(&mut self, from: Vec2, to: Vec2, color: Rgba, width: f32) {
        self.lines.push(LineCmd {
            from,
            to,
            color,
            width,
        });
    }

    /// A crisp disc painted above the lines.
    pub fn push_overlay_dot(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.overlay.push(CircleCmd {
            center,
            radius,
            color,
            softness: 0.0,
        });
    }

    /// A radial glow painted above the lines; alpha fades linearly from
    /// `color.a` at the center to zero at `radius`.
    pub fn push_overlay_glow(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.overlay.push(CircleCmd {
            center,
            radius,
            color,
            softness: 1.0,
        });
    }

    /// Ring outline approximated by [`RING_SEGMENTS`] segments.
    pub fn push_ring(&mut self, center: Vec2, radius: f32, color: Rgba, width: f32) {
        let step = std::f32::consts::TAU / RING_SEGMENTS as f32;
        let mut prev = center + Vec2::new(radius, 0.0);
        for i in 1..=RING_SEGMENTS {
            let angle = step * i as f32;
            let next = center + Vec2::new(angle.cos(), angle.sin()) * radius;
            self.push_line(prev, next, color, width);
            prev = next;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_empties_everything() {
        let mut plan = FramePlan::new();
        plan.push_circle(Vec2::new(1.0, 2.0), 3.0, Rgba::new(1.0, 0.0, 0.0, 1.0));
        plan.push_line(
            Vec2::ZERO,
            Vec2::new(5.0, 5.0),
            Rgba::new(0.0, 1.0, 0.0, 0.5),
            0.5,
        );
        plan.push_overlay_glow(Vec2::ZERO, 20.0, Rgba::new(0.0, 0.0, 1.0, 0.3));
        assert!(!plan.is_empty());

        plan.clear();
        assert!(plan.is_empty());
    }

    #[test]
    fn test_ring_is_closed() {
        let mut plan = FramePlan::new();
        let center = Vec2::new(100.0, 100.0);
        plan.push_ring(center, 50.0, Rgba::new(1.0, 1.0, 1.0, 0.1), 1.0);
        assert_eq!(plan.lines.len(), RING_SEGMENTS as usize);

        // Last segment ends where the first begins.
        let first = plan.lines.first().unwrap();
        let last = plan.lines.last().unwrap();
        assert!((first.from - last.to).length() < 1e-3);

        // Every vertex sits on the circle.
        for line in &plan.lines {
            assert!(((line.from - center).length() - 50.0).abs() < 1e-3);
        }
    }

    #[test]
    fn test_softness_distinguishes_dot_from_glow() {
        let mut plan = FramePlan::new();
        plan.push_overlay_dot(Vec2::ZERO, 4.0, Rgba::new(1.0, 1.0, 1.0, 0.8));
        plan.push_overlay_glow(Vec2::ZERO, 20.0, Rgba::new(1.0, 1.0, 1.0, 0.3));
        assert_eq!(plan.overlay[0].softness, 0.0);
        assert_eq!(plan.overlay[1].softness, 1.0);
    }
}
