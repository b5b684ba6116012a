//! Field configuration and the built-in presets.
//!
//! A [`FieldConfig`] fixes every constant of a particle field at mount time:
//! population, geometry ranges, palette, link pass thresholds, background
//! treatment, and the optional orbit rings / pointer attraction of the hero
//! preset. None of these are runtime parameters; a field never re-reads its
//! config after spawn.

use crate::visuals::{Background, GlowDrift, LinearGradient, Palette, Rgba};

/// Distance below which two particles are linked by a line.
pub const LINK_RADIUS: f32 = 150.0;

/// Stroke opacity of a link at distance zero; fades linearly to 0 at
/// [`LINK_RADIUS`].
pub const LINK_MAX_OPACITY: f32 = 0.1;

/// Stroke width of link lines, in pixels.
pub const LINK_WIDTH: f32 = 0.5;

/// Pointer influence radius, in pixels.
pub const POINTER_RADIUS: f32 = 200.0;

/// Fraction of the pointer offset applied per frame inside the influence
/// radius.
pub const POINTER_STRENGTH: f32 = 0.01;

/// Complete description of a particle field.
///
/// Use one of the presets ([`ambient`](FieldConfig::ambient),
/// [`premium`](FieldConfig::premium), [`hero`](FieldConfig::hero),
/// [`aurora`](FieldConfig::aurora)) or start from [`FieldConfig::new`] and
/// chain `with_*` methods.
#[derive(Debug, Clone)]
pub struct FieldConfig {
    /// Number of particles, fixed for the lifetime of the field.
    pub particle_count: u32,
    /// Radius range particles sample from at spawn, in pixels.
    pub size_range: (f32, f32),
    /// Per-axis velocity spread: each axis gets `(random - 0.5) * spread`
    /// pixels per frame.
    pub drift_spread: f32,
    /// Opacity range particles sample from at spawn.
    pub opacity_range: (f32, f32),
    /// Colors particles pick from at spawn.
    pub palette: Palette,
    /// Link pass threshold distance.
    pub link_radius: f32,
    /// Link stroke opacity at distance zero.
    pub link_opacity: f32,
    /// Link stroke width in pixels.
    pub link_width: f32,
    /// Base color of link lines; the computed opacity replaces its alpha.
    pub link_color: Rgba,
    /// Full-surface paint under the particles.
    pub background: Background,
    /// Drifting glow blobs over the background, if any.
    pub glow_drift: Option<GlowDrift>,
    /// Surface clear color (stands in for the page behind the canvas).
    pub clear_color: Rgba,
    /// Whether to trace the two decorative orbit rings.
    pub orbit_rings: bool,
    /// Whether particles are nudged toward the pointer.
    pub pointer_attraction: bool,
    /// Pointer influence radius in pixels.
    pub pointer_radius: f32,
    /// Pointer nudge strength per frame.
    pub pointer_strength: f32,
    /// Seed for the spawn RNG. `None` seeds from the wall clock.
    pub seed: Option<u64>,
}

impl FieldConfig {
    /// A minimal starting point: 70 drifting particles, white palette, no
    /// background, no orbits, no pointer response.
    pub fn new() -> Self {
        Self {
            particle_count: 70,
            size_range: (1.0, 4.0),
            drift_spread: 0.5,
            opacity_range: (0.1, 0.6),
            palette: Palette::new(vec![Rgba::new(1.0, 1.0, 1.0, 0.8)]),
            link_radius: LINK_RADIUS,
            link_opacity: LINK_MAX_OPACITY,
            link_width: LINK_WIDTH,
            link_color: Rgba::new(1.0, 1.0, 1.0, 1.0),
            background: Background::None,
            glow_drift: None,
            clear_color: Rgba::new(0.02, 0.02, 0.05, 1.0),
            orbit_rings: false,
            pointer_attraction: false,
            pointer_radius: POINTER_RADIUS,
            pointer_strength: POINTER_STRENGTH,
            seed: None,
        }
    }

    /// The site-wide backdrop: 70 particles in indigo/violet/emerald/sky over
    /// a faint light-gray wash.
    pub fn ambient() -> Self {
        Self {
            particle_count: 70,
            palette: Palette::new(vec![
                Rgba::from_u8(79, 70, 229, 0.8),
                Rgba::from_u8(139, 92, 246, 0.8),
                Rgba::from_u8(16, 185, 129, 0.8),
                Rgba::from_u8(14, 165, 233, 0.8),
            ]),
            link_color: Rgba::from_u8(79, 70, 229, 1.0),
            background: Background::Gradient(LinearGradient::two_stop(
                Rgba::from_u8(249, 250, 251, 0.01),
                Rgba::from_u8(243, 244, 246, 0.01),
            )),
            clear_color: Rgba::new(1.0, 1.0, 1.0, 1.0),
            ..Self::new()
        }
    }

    /// Denser, finer-grained variant: 100 small slow particles in
    /// purple/violet/pink/indigo over a light purple wash.
    pub fn premium() -> Self {
        Self {
            particle_count: 100,
            size_range: (0.5, 2.5),
            drift_spread: 0.3,
            palette: Palette::new(vec![
                Rgba::from_u8(123, 97, 255, 0.8),
                Rgba::from_u8(147, 51, 234, 0.8),
                Rgba::from_u8(236, 72, 153, 0.8),
                Rgba::from_u8(99, 102, 241, 0.8),
            ]),
            link_color: Rgba::from_u8(123, 97, 255, 1.0),
            background: Background::Gradient(LinearGradient::two_stop(
                Rgba::from_u8(245, 243, 255, 0.03),
                Rgba::from_u8(237, 233, 254, 0.03),
            )),
            clear_color: Rgba::new(0.98, 0.98, 1.0, 1.0),
            ..Self::new()
        }
    }

    /// The hero banner field: 100 particles, orbit rings, and pointer
    /// attraction, on a dark clear color.
    pub fn hero() -> Self {
        Self {
            particle_count: 100,
            palette: Palette::new(vec![
                Rgba::from_u8(124, 58, 237, 0.8),
                Rgba::from_u8(139, 92, 246, 0.8),
                Rgba::from_u8(79, 70, 229, 0.8),
                Rgba::from_u8(6, 182, 212, 0.8),
            ]),
            link_color: Rgba::from_u8(124, 58, 237, 1.0),
            orbit_rings: true,
            pointer_attraction: true,
            ..Self::new()
        }
    }

    /// No particles at all: a teal/cyan gradient with five drifting glow
    /// blobs.
    pub fn aurora() -> Self {
        Self {
            particle_count: 0,
            background: Background::Gradient(LinearGradient::three_stop(
                Rgba::from_u8(204, 251, 241, 0.2),
                0.5,
                Rgba::from_u8(153, 246, 228, 0.1),
                Rgba::from_u8(207, 250, 254, 0.2),
            )),
            glow_drift: Some(GlowDrift {
                count: 5,
                color: Rgba::from_u8(20, 184, 166, 0.01),
            }),
            clear_color: Rgba::new(1.0, 1.0, 1.0, 1.0),
            ..Self::new()
        }
    }

    /// Set the number of particles.
    pub fn with_particle_count(mut self, count: u32) -> Self {
        self.particle_count = count;
        self
    }

    /// Set the spawn radius range in pixels.
    pub fn with_size_range(mut self, min: f32, max: f32) -> Self {
        self.size_range = (min, max);
        self
    }

    /// Set the per-axis velocity spread in pixels per frame.
    pub fn with_drift_spread(mut self, spread: f32) -> Self {
        self.drift_spread = spread;
        self
    }

    /// Set the spawn opacity range.
    pub fn with_opacity_range(mut self, min: f32, max: f32) -> Self {
        self.opacity_range = (min, max);
        self
    }

    /// Set the spawn palette.
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Set the link pass threshold and base color.
    pub fn with_links(mut self, radius: f32, color: Rgba) -> Self {
        self.link_radius = radius;
        self.link_color = color;
        self
    }

    /// Set the background paint.
    pub fn with_background(mut self, background: Background) -> Self {
        self.background = background;
        self
    }

    /// Set the surface clear color.
    pub fn with_clear_color(mut self, color: Rgba) -> Self {
        self.clear_color = color;
        self
    }

    /// Enable or disable the orbit rings.
    pub fn with_orbit_rings(mut self, enabled: bool) -> Self {
        self.orbit_rings = enabled;
        self
    }

    /// Enable or disable pointer attraction.
    pub fn with_pointer_attraction(mut self, enabled: bool) -> Self {
        self.pointer_attraction = enabled;
        self
    }

    /// Seed the spawn RNG for reproducible layouts.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_populations() {
        assert_eq!(FieldConfig::ambient().particle_count, 70);
        assert_eq!(FieldConfig::premium().particle_count, 100);
        assert_eq!(FieldConfig::hero().particle_count, 100);
        assert_eq!(FieldConfig::aurora().particle_count, 0);
    }

    #[test]
    fn test_hero_is_the_only_interactive_preset() {
        assert!(FieldConfig::hero().pointer_attraction);
        assert!(FieldConfig::hero().orbit_rings);
        assert!(!FieldConfig::ambient().pointer_attraction);
        assert!(!FieldConfig::premium().orbit_rings);
    }

    #[test]
    fn test_link_constants_shared_by_all_presets() {
        for config in [
            FieldConfig::ambient(),
            FieldConfig::premium(),
            FieldConfig::hero(),
        ] {
            assert_eq!(config.link_radius, 150.0);
            assert_eq!(config.link_opacity, 0.1);
            assert_eq!(config.link_width, 0.5);
        }
    }

    #[test]
    fn test_builder_chain() {
        let config = FieldConfig::new()
            .with_particle_count(12)
            .with_drift_spread(0.1)
            .with_seed(7);
        assert_eq!(config.particle_count, 12);
        assert_eq!(config.drift_spread, 0.1);
        assert_eq!(config.seed, Some(7));
    }
}
