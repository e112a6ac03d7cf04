//! Particle field simulation, independent of any drawing surface.
//!
//! The field owns a transient particle population sized to the surface
//! area. Positions advance by per-frame velocity with toroidal wrap at the
//! bounds; pairs closer than the connection threshold are linked with an
//! opacity that falls off linearly with distance. Resizing discards the
//! population and regenerates it for the new area.

use super::config::{Color, FieldConfig, ShapePolicy};

/// A single floating particle. Carries no identity beyond its slot in the
/// field's vector.
#[derive(Clone, Debug)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	/// Velocity in pixels per frame (at the 60 fps reference rate).
	pub vx: f64,
	pub vy: f64,
	pub radius: f64,
	pub color: Color,
	/// Phase offset for wave motion variants.
	pub phase: f64,
}

/// One section's particle population plus its surface dimensions.
pub struct ParticleField {
	pub particles: Vec<Particle>,
	config: FieldConfig,
	width: f64,
	height: f64,
	elapsed: f64,
}

/// Euclidean wrap of `value` into `[0, bound)`.
pub fn wrap(value: f64, bound: f64) -> f64 {
	if bound <= 0.0 {
		return 0.0;
	}
	value.rem_euclid(bound)
}

/// Population for a surface: `min(max_count, floor(area / density))`.
pub fn population(config: &FieldConfig, width: f64, height: f64) -> usize {
	if config.density <= 0.0 {
		return 0;
	}
	let area = (width * height).max(0.0);
	let by_area = (area / config.density).floor() as usize;
	by_area.min(config.max_count)
}

/// Opacity of the line between two particles `distance` apart, or `None`
/// when they are at or beyond the threshold.
pub fn connection_alpha(distance: f64, threshold: f64, base: f64) -> Option<f64> {
	if distance >= threshold {
		return None;
	}
	Some(base * (1.0 - distance / threshold))
}

impl ParticleField {
	pub fn new(config: FieldConfig, width: f64, height: f64) -> Self {
		let particles = Self::spawn(&config, width, height);
		Self {
			particles,
			config,
			width,
			height,
			elapsed: 0.0,
		}
	}

	/// Deterministic pseudo-random in `[0, 1)`, seeded by particle index so
	/// a field of a given size always looks the same.
	fn pseudo_random(seed: f64) -> f64 {
		let x = (seed * 12.9898 + seed * 78.233).sin() * 43758.5453;
		x - x.floor()
	}

	fn spawn(config: &FieldConfig, width: f64, height: f64) -> Vec<Particle> {
		let count = population(config, width, height);
		let mut particles = Vec::with_capacity(count);

		for i in 0..count {
			let seed = i as f64 + 1.0;
			let mut stream = (1..).map(move |j| Self::pseudo_random(seed * 1.1 + j as f64 * 2.3));
			let mut unit = move || stream.next().unwrap_or(0.5);

			let (size_min, size_max) = config.size_range;
			particles.push(Particle {
				x: unit() * width,
				y: unit() * height,
				vx: (unit() - 0.5) * 2.0 * config.speed,
				vy: (unit() - 0.5) * 2.0 * config.speed,
				radius: size_min + unit() * (size_max - size_min),
				color: config.color_band.sample(&mut unit),
				phase: unit() * std::f64::consts::TAU,
			});
		}

		particles
	}

	/// Advance every particle by one step of `dt` seconds. Velocities are
	/// expressed per-frame at 60 fps, so the displacement is `v * dt * 60`.
	pub fn step(&mut self, dt: f64) {
		self.elapsed += dt;
		let frames = dt * 60.0;

		for p in &mut self.particles {
			p.x += p.vx * frames;
			p.y += p.vy * frames;

			if let Some(w) = self.config.wave {
				p.x += (self.elapsed * w.frequency + p.phase).sin() * w.amplitude * frames;
			}

			p.x = wrap(p.x, self.width);
			p.y = wrap(p.y, self.height);
		}
	}

	/// Visit every connected unordered pair with its line opacity.
	pub fn for_connections(&self, mut f: impl FnMut(&Particle, &Particle, f64)) {
		let threshold = self.config.connection_distance;
		let base = self.config.connection_alpha;

		for i in 0..self.particles.len() {
			for j in (i + 1)..self.particles.len() {
				let (a, b) = (&self.particles[i], &self.particles[j]);
				let (dx, dy) = (a.x - b.x, a.y - b.y);
				let distance = (dx * dx + dy * dy).sqrt();
				if let Some(alpha) = connection_alpha(distance, threshold, base) {
					f(a, b, alpha);
				}
			}
		}
	}

	/// Regenerate the population for new surface dimensions. Existing
	/// particles are discarded, never rescaled in place.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
		self.particles = Self::spawn(&self.config, width, height);
	}

	/// Whether the particle at `index` renders as a square under the
	/// configured shape policy.
	pub fn is_square(&self, index: usize) -> bool {
		self.config.shape == ShapePolicy::AlternatingSquares && index % 2 == 1
	}

	pub fn width(&self) -> f64 {
		self.width
	}

	pub fn height(&self) -> f64 {
		self.height
	}

	pub fn config(&self) -> &FieldConfig {
		&self.config
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn test_config() -> FieldConfig {
		FieldConfig {
			max_count: 60,
			density: 20_000.0,
			..FieldConfig::about()
		}
	}

	#[test]
	fn population_follows_area_over_density() {
		let cfg = test_config();
		assert_eq!(population(&cfg, 800.0, 600.0), 24);
	}

	#[test]
	fn population_caps_at_max_count() {
		let cfg = test_config();
		assert_eq!(population(&cfg, 4000.0, 3000.0), 60);
	}

	#[test]
	fn population_is_zero_for_degenerate_surfaces() {
		let cfg = test_config();
		assert_eq!(population(&cfg, 0.0, 600.0), 0);
		assert_eq!(population(&cfg, -10.0, 600.0), 0);
	}

	#[test]
	fn spawn_places_particles_inside_bounds() {
		let field = ParticleField::new(test_config(), 800.0, 600.0);
		assert_eq!(field.particles.len(), 24);
		for p in &field.particles {
			assert!(p.x >= 0.0 && p.x < 800.0);
			assert!(p.y >= 0.0 && p.y < 600.0);
			assert!(p.vx.abs() <= field.config().speed);
			assert!(p.vy.abs() <= field.config().speed);
			assert!(p.radius >= 0.5 && p.radius <= 2.5);
		}
	}

	#[test]
	fn wrap_is_toroidal() {
		assert_eq!(wrap(805.0, 800.0), 5.0);
		assert_eq!(wrap(-3.0, 800.0), 797.0);
		assert_eq!(wrap(800.0, 800.0), 0.0);
		assert_eq!(wrap(0.0, 800.0), 0.0);
	}

	#[test]
	fn step_keeps_every_particle_inside_bounds() {
		let mut field = ParticleField::new(test_config(), 300.0, 200.0);
		// Force particles onto the edges with outward velocities.
		for (i, p) in field.particles.iter_mut().enumerate() {
			if i % 2 == 0 {
				p.x = 299.9;
				p.y = 199.9;
				p.vx = 5.0;
				p.vy = 5.0;
			} else {
				p.x = 0.0;
				p.y = 0.0;
				p.vx = -5.0;
				p.vy = -5.0;
			}
		}
		for _ in 0..100 {
			field.step(1.0 / 60.0);
			for p in &field.particles {
				assert!(p.x >= 0.0 && p.x < 300.0, "x out of bounds: {}", p.x);
				assert!(p.y >= 0.0 && p.y < 200.0, "y out of bounds: {}", p.y);
			}
		}
	}

	#[test]
	fn wave_motion_also_respects_bounds() {
		let mut field = ParticleField::new(FieldConfig::skills(), 400.0, 300.0);
		for _ in 0..200 {
			field.step(1.0 / 60.0);
		}
		for p in &field.particles {
			assert!(p.x >= 0.0 && p.x < 400.0);
			assert!(p.y >= 0.0 && p.y < 300.0);
		}
	}

	#[test]
	fn connection_alpha_falls_off_linearly() {
		assert_eq!(connection_alpha(0.0, 80.0, 0.1), Some(0.1));
		let near = connection_alpha(20.0, 80.0, 0.1).unwrap();
		let far = connection_alpha(60.0, 80.0, 0.1).unwrap();
		assert!((near - 0.075).abs() < 1e-12);
		assert!((far - 0.025).abs() < 1e-12);
		assert!(near > far);
		assert_eq!(connection_alpha(80.0, 80.0, 0.1), None);
		assert_eq!(connection_alpha(120.0, 80.0, 0.1), None);
	}

	#[test]
	fn connections_skip_pairs_beyond_threshold() {
		let mut field = ParticleField::new(test_config(), 800.0, 600.0);
		field.particles.truncate(3);
		// Two close together, one far away.
		field.particles[0].x = 10.0;
		field.particles[0].y = 10.0;
		field.particles[1].x = 40.0;
		field.particles[1].y = 10.0;
		field.particles[2].x = 700.0;
		field.particles[2].y = 500.0;

		let mut pairs = Vec::new();
		field.for_connections(|a, b, alpha| pairs.push((a.x, b.x, alpha)));

		assert_eq!(pairs.len(), 1);
		let expected = 0.1 * (1.0 - 30.0 / 80.0);
		assert!((pairs[0].2 - expected).abs() < 1e-12);
	}

	#[test]
	fn resize_regenerates_instead_of_rescaling() {
		let mut field = ParticleField::new(test_config(), 800.0, 600.0);
		assert_eq!(field.particles.len(), 24);
		// Tag the old population so replacement is observable.
		for p in &mut field.particles {
			p.radius = 99.0;
		}
		field.resize(400.0, 300.0);
		assert_eq!(field.particles.len(), 6);
		for p in &field.particles {
			assert!(p.radius < 99.0);
			assert!(p.x >= 0.0 && p.x < 400.0);
			assert!(p.y >= 0.0 && p.y < 300.0);
		}
	}

	#[test]
	fn alternating_shape_policy_marks_odd_indices() {
		let field = ParticleField::new(FieldConfig::skills(), 800.0, 600.0);
		assert!(!field.is_square(0));
		assert!(field.is_square(1));
		let circles = ParticleField::new(FieldConfig::about(), 800.0, 600.0);
		assert!(!circles.is_square(1));
	}
}
