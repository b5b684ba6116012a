//! The particle field simulation.
//!
//! A [`ParticleField`] owns a fixed population of drifting particles and, in
//! the hero configuration, two decorative orbit rings and the latest pointer
//! coordinate. [`ParticleField::step`] advances the simulation by exactly one
//! frame and emits the frame's draw list. Velocities are expressed in pixels
//! per frame, matching the host's per-frame callback cadence, so stepping is
//! independent of wall-clock delta.

use crate::config::FieldConfig;
use crate::frame::FramePlan;
use crate::spawn::SpawnContext;
use crate::visuals::{Background, Rgba};
use glam::Vec2;
use std::f32::consts::FRAC_PI_4;

/// One drifting point. Only `position` changes after spawn; size, velocity,
/// color, and opacity are fixed at creation.
#[derive(Debug, Clone, Copy)]
pub struct Particle {
    pub position: Vec2,
    pub size: f32,
    pub velocity: Vec2,
    pub color: Rgba,
    pub opacity: f32,
}

/// A glowing point tracing a fixed circle. Only `angle` changes per frame.
#[derive(Debug, Clone, Copy)]
pub struct Orbit {
    pub center: Vec2,
    pub radius: f32,
    pub angle: f32,
    pub speed: f32,
}

impl Orbit {
    /// Point on the circle at the current angle.
    pub fn point(&self) -> Vec2 {
        self.center + Vec2::new(self.angle.cos(), self.angle.sin()) * self.radius
    }
}

/// Orbit layout of the hero variant: (radius as a fraction of surface width,
/// initial angle, angular speed per frame).
const ORBIT_LAYOUT: [(f32, f32, f32); 2] = [(0.2, 0.0, 0.0005), (0.3, FRAC_PI_4, 0.0003)];

const ORBIT_DOT_RADIUS: f32 = 4.0;
const ORBIT_GLOW_RADIUS: f32 = 20.0;
const ORBIT_RING_WIDTH: f32 = 1.0;

/// A mounted particle field.
pub struct ParticleField {
    config: FieldConfig,
    width: f32,
    height: f32,
    particles: Vec<Particle>,
    orbits: Vec<Orbit>,
    pointer: Option<Vec2>,
    stopped: bool,
}

impl ParticleField {
    /// Create a field sized to the surface, spawning the configured number of
    /// particles with randomized position, size, velocity, color, and
    /// opacity.
    pub fn new(config: FieldConfig, width: f32, height: f32) -> Self {
        let particles = (0..config.particle_count)
            .map(|i| {
                let mut ctx =
                    SpawnContext::new(i, config.particle_count, width, height, config.seed);
                let (size_min, size_max) = config.size_range;
                let (op_min, op_max) = config.opacity_range;
                Particle {
                    position: ctx.random_position(),
                    size: ctx.random_range(size_min, size_max),
                    velocity: ctx.drift_velocity(config.drift_spread),
                    color: ctx.palette_color(&config.palette),
                    opacity: ctx.random_range(op_min, op_max),
                }
            })
            .collect();

        Self::assemble(config, width, height, particles)
    }

    /// Create a field from an explicit particle layout. Intended for tests
    /// and hand-placed arrangements; the config's count and ranges are
    /// ignored in favor of the given particles.
    pub fn with_particles(
        config: FieldConfig,
        width: f32,
        height: f32,
        particles: Vec<Particle>,
    ) -> Self {
        Self::assemble(config, width, height, particles)
    }

    fn assemble(
        config: FieldConfig,
        width: f32,
        height: f32,
        particles: Vec<Particle>,
    ) -> Self {
        // Orbit geometry is fixed at mount from the initial surface size and
        // deliberately not recomputed on resize.
        let orbits = if config.orbit_rings {
            let center = Vec2::new(width / 2.0, height / 2.0);
            ORBIT_LAYOUT
                .iter()
                .map(|&(radius_frac, angle, speed)| Orbit {
                    center,
                    radius: width * radius_frac,
                    angle,
                    speed,
                })
                .collect()
        } else {
            Vec::new()
        };

        Self {
            config,
            width,
            height,
            particles,
            orbits,
            pointer: None,
            stopped: false,
        }
    }

    /// Reassign the surface dimensions after a viewport resize.
    ///
    /// Existing particles are not repositioned; on shrink some may sit
    /// outside the new bounds until their own motion trips the wraparound.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    /// Record the latest pointer coordinate.
    pub fn set_pointer(&mut self, position: Vec2) {
        self.pointer = Some(position);
    }

    /// Stop the field. Subsequent [`step`](Self::step) calls clear the plan
    /// and emit nothing. Safe to call any number of times.
    pub fn stop(&mut self) {
        self.stopped = true;
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn orbits(&self) -> &[Orbit] {
        &self.orbits
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Advance one frame and fill `plan` with this frame's draw commands.
    ///
    /// `elapsed` is total wall-clock time in seconds; it only drives the
    /// drifting glow background, never the particles.
    pub fn step(&mut self, elapsed: f32, plan: &mut FramePlan) {
        plan.clear();
        if self.stopped {
            return;
        }

        if let Background::Gradient(gradient) = self.config.background {
            plan.background = Some(gradient);
        }

        if let Some(drift) = self.config.glow_drift {
            let t = elapsed * 0.5;
            for i in 0..drift.count {
                plan.push_overlay_glow(
                    drift.blob_center(i, t, self.width, self.height),
                    drift.blob_radius(i, t),
                    drift.color,
                );
            }
        }

        self.advance_particles(plan);
        self.link_particles(plan);
        self.trace_orbits(plan);
        self.apply_pointer_pull();
    }

    fn advance_particles(&mut self, plan: &mut FramePlan) {
        let (w, h) = (self.width, self.height);
        for p in &mut self.particles {
            p.position += p.velocity;
            p.position.x = wrap(p.position.x, w);
            p.position.y = wrap(p.position.y, h);
            plan.push_circle(p.position, p.size, p.color.with_alpha(p.opacity));
        }
    }

    /// O(n^2) pass over unordered pairs. Fine at the fixed populations this
    /// crate runs (n <= 100); a spatial grid would only pay off well beyond
    /// that.
    fn link_particles(&self, plan: &mut FramePlan) {
        let radius = self.config.link_radius;
        for (i, a) in self.particles.iter().enumerate() {
            for b in &self.particles[i + 1..] {
                let distance = a.position.distance(b.position);
                if distance < radius {
                    let opacity = self.config.link_opacity * (1.0 - distance / radius);
                    plan.push_line(
                        a.position,
                        b.position,
                        self.config.link_color.with_alpha(opacity),
                        self.config.link_width,
                    );
                }
            }
        }
    }

    fn trace_orbits(&mut self, plan: &mut FramePlan) {
        let base = self.config.link_color;
        for orbit in &mut self.orbits {
            orbit.angle += orbit.speed;
            let point = orbit.point();

            plan.push_ring(
                orbit.center,
                orbit.radius,
                base.with_alpha(0.1),
                ORBIT_RING_WIDTH,
            );
            plan.push_overlay_dot(point, ORBIT_DOT_RADIUS, base.with_alpha(0.8));
            plan.push_overlay_glow(point, ORBIT_GLOW_RADIUS, base.with_alpha(0.3));
        }
    }

    /// Nudge particles toward the last recorded pointer position. Applied
    /// after drawing, so it perturbs next frame's positions ahead of that
    /// frame's wraparound check.
    fn apply_pointer_pull(&mut self) {
        if !self.config.pointer_attraction {
            return;
        }
        let Some(pointer) = self.pointer else {
            return;
        };
        let max = self.config.pointer_radius;
        let strength = self.config.pointer_strength;
        for p in &mut self.particles {
            let offset = pointer - p.position;
            let distance = offset.length();
            if distance < max {
                let force = (max - distance) / max;
                p.position += offset * force * strength;
            }
        }
    }
}

/// Hard edge reset: a coordinate leaving on one side reappears exactly at the
/// opposite edge, regardless of how far past it travelled.
#[inline]
fn wrap(coord: f32, dimension: f32) -> f32 {
    if coord < 0.0 {
        dimension
    } else if coord >= dimension {
        0.0
    } else {
        coord
    }
}
