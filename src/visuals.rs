//! Colors, palettes, and background treatments.
//!
//! Every particle owns a color drawn from a small fixed [`Palette`] plus its
//! own opacity. Palette entries carry a placeholder alpha; at draw time the
//! particle's opacity is substituted into that slot via [`Rgba::with_alpha`],
//! so the base color is never redefined per particle.

use glam::Vec2;

/// An RGBA color with straight (non-premultiplied) alpha, channels 0.0-1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Construct from 8-bit channels and a float alpha, the form palette
    /// colors are usually written in.
    pub const fn from_u8(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a,
        }
    }

    /// Same color with the alpha slot replaced.
    ///
    /// This is how a particle's fixed opacity is applied to its palette
    /// color: the RGB channels are untouched.
    #[inline]
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self { a: alpha, ..self }
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub const TRANSPARENT: Rgba = Rgba::new(0.0, 0.0, 0.0, 0.0);
}

/// A small fixed set of colors particles pick from at spawn time.
#[derive(Debug, Clone)]
pub struct Palette {
    colors: Vec<Rgba>,
}

impl Palette {
    pub fn new(colors: Vec<Rgba>) -> Self {
        assert!(!colors.is_empty(), "palette needs at least one color");
        Self { colors }
    }

    pub fn colors(&self) -> &[Rgba] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color at `index`, wrapping past the end.
    pub fn color(&self, index: usize) -> Rgba {
        self.colors[index % self.colors.len()]
    }
}

/// A linear gradient along the top-left to bottom-right diagonal of the
/// surface, with two or three stops.
#[derive(Debug, Clone, Copy)]
pub struct LinearGradient {
    pub start: Rgba,
    /// Optional interior stop: position along the diagonal (0-1) and color.
    pub mid: Option<(f32, Rgba)>,
    pub end: Rgba,
}

impl LinearGradient {
    pub fn two_stop(start: Rgba, end: Rgba) -> Self {
        Self {
            start,
            mid: None,
            end,
        }
    }

    pub fn three_stop(start: Rgba, mid_pos: f32, mid: Rgba, end: Rgba) -> Self {
        Self {
            start,
            mid: Some((mid_pos, mid)),
            end,
        }
    }

    /// Evaluate the gradient at `t` in 0-1. Used by tests; the GPU fragment
    /// shader performs the same two-segment mix.
    pub fn sample(&self, t: f32) -> Rgba {
        let t = t.clamp(0.0, 1.0);
        let lerp = |a: Rgba, b: Rgba, t: f32| {
            Rgba::new(
                a.r + (b.r - a.r) * t,
                a.g + (b.g - a.g) * t,
                a.b + (b.b - a.b) * t,
                a.a + (b.a - a.a) * t,
            )
        };
        match self.mid {
            None => lerp(self.start, self.end, t),
            Some((pos, mid)) if t < pos => lerp(self.start, mid, t / pos.max(f32::EPSILON)),
            Some((pos, mid)) => lerp(mid, self.end, (t - pos) / (1.0 - pos).max(f32::EPSILON)),
        }
    }
}

/// Full-surface paint applied before particles each frame.
#[derive(Debug, Clone, Copy, Default)]
pub enum Background {
    /// Bare clear color only.
    #[default]
    None,
    /// Near-transparent wash over the clear color.
    Gradient(LinearGradient),
}

/// Slow-moving soft radial blobs layered over the background.
///
/// Blob `i` traces `x = sin(t + 0.5 i) * 0.25 w + 0.5 w`,
/// `y = cos(t + 0.8 i) * 0.25 h + 0.5 h` with `t` = elapsed seconds * 0.5,
/// and breathes between radius 20 and 80.
#[derive(Debug, Clone, Copy)]
pub struct GlowDrift {
    pub count: u32,
    pub color: Rgba,
}

impl GlowDrift {
    /// Center of blob `i` at time `t` (already scaled) on a `w` x `h` surface.
    pub fn blob_center(&self, i: u32, t: f32, w: f32, h: f32) -> Vec2 {
        let i = i as f32;
        Vec2::new(
            (t + i * 0.5).sin() * w * 0.25 + w * 0.5,
            (t + i * 0.8).cos() * h * 0.25 + h * 0.5,
        )
    }

    /// Radius of blob `i` at time `t`.
    pub fn blob_radius(&self, i: u32, t: f32) -> f32 {
        50.0 + (t * 0.8 + i as f32).sin() * 30.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_alpha_preserves_rgb() {
        let base = Rgba::from_u8(124, 58, 237, 0.8);
        let tinted = base.with_alpha(0.37);
        assert_eq!(tinted.r, base.r);
        assert_eq!(tinted.g, base.g);
        assert_eq!(tinted.b, base.b);
        assert_eq!(tinted.a, 0.37);
    }

    #[test]
    fn test_palette_wraps() {
        let palette = Palette::new(vec![
            Rgba::new(1.0, 0.0, 0.0, 1.0),
            Rgba::new(0.0, 1.0, 0.0, 1.0),
        ]);
        assert_eq!(palette.color(0), palette.color(2));
        assert_eq!(palette.color(1), palette.color(5));
    }

    #[test]
    fn test_two_stop_gradient_endpoints() {
        let g = LinearGradient::two_stop(
            Rgba::new(0.0, 0.0, 0.0, 0.0),
            Rgba::new(1.0, 1.0, 1.0, 1.0),
        );
        assert_eq!(g.sample(0.0), Rgba::new(0.0, 0.0, 0.0, 0.0));
        assert_eq!(g.sample(1.0), Rgba::new(1.0, 1.0, 1.0, 1.0));
        let mid = g.sample(0.5);
        assert!((mid.r - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_three_stop_gradient_hits_mid() {
        let mid = Rgba::new(0.2, 0.4, 0.6, 0.1);
        let g = LinearGradient::three_stop(
            Rgba::TRANSPARENT,
            0.5,
            mid,
            Rgba::new(1.0, 1.0, 1.0, 0.2),
        );
        let sampled = g.sample(0.5);
        assert!((sampled.r - mid.r).abs() < 1e-6);
        assert!((sampled.b - mid.b).abs() < 1e-6);
    }

    #[test]
    fn test_glow_drift_stays_in_center_band() {
        let drift = GlowDrift {
            count: 5,
            color: Rgba::from_u8(20, 184, 166, 0.01),
        };
        for i in 0..5 {
            for step in 0..100 {
                let t = step as f32 * 0.3;
                let c = drift.blob_center(i, t, 800.0, 600.0);
                assert!(c.x >= 800.0 * 0.25 && c.x <= 800.0 * 0.75);
                assert!(c.y >= 600.0 * 0.25 && c.y <= 600.0 * 0.75);
                let r = drift.blob_radius(i, t);
                assert!(r >= 20.0 && r <= 80.0);
            }
        }
    }
}
