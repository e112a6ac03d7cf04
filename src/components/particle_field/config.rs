//! Visual configuration for ambient particle fields.
//!
//! Every page section instantiates its own field from one of the named
//! presets below. The presets differ only in constants (particle cap,
//! density, connection threshold); none of those values is load-bearing,
//! they are tuning choices per section.

/// RGBA color representation.
#[derive(Clone, Copy, Debug)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// A band of colors particles are sampled from: independent channel ranges
/// plus an alpha range. Sampling draws one unit random per channel.
#[derive(Clone, Copy, Debug)]
pub struct ColorBand {
	pub red: (u8, u8),
	pub green: (u8, u8),
	pub blue: (u8, u8),
	pub alpha: (f64, f64),
}

impl ColorBand {
	/// Sample a color from the band. `unit` must yield values in `[0, 1)`.
	pub fn sample(&self, mut unit: impl FnMut() -> f64) -> Color {
		let channel = |range: (u8, u8), u: f64| {
			range.0 + (u * (range.1 - range.0) as f64) as u8
		};
		let (r, g, b) = (
			channel(self.red, unit()),
			channel(self.green, unit()),
			channel(self.blue, unit()),
		);
		let a = self.alpha.0 + unit() * (self.alpha.1 - self.alpha.0);
		Color::rgba(r, g, b, a)
	}

	/// Pale blue-white band used by most sections.
	pub const fn frost(alpha: (f64, f64)) -> Self {
		Self {
			red: (156, 255),
			green: (156, 255),
			blue: (255, 255),
			alpha,
		}
	}
}

/// How particles are drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapePolicy {
	/// Every particle is a filled circle.
	Circles,
	/// Odd-indexed particles are drawn as squares instead.
	AlternatingSquares,
}

/// Sinusoidal drift added on top of linear velocity.
#[derive(Clone, Copy, Debug)]
pub struct WaveMotion {
	/// Peak horizontal displacement per frame, in pixels.
	pub amplitude: f64,
	/// Oscillation frequency in radians per second.
	pub frequency: f64,
}

/// Faint background grid drawn behind the hero field.
#[derive(Clone, Copy, Debug)]
pub struct GridOverlay {
	pub spacing: f64,
	pub color: Color,
	pub line_width: f64,
}

/// Complete configuration record for one particle field instance.
#[derive(Clone, Debug)]
pub struct FieldConfig {
	/// Hard cap on the particle population regardless of surface area.
	pub max_count: usize,
	/// Surface area (px^2) per particle; population = area / density.
	pub density: f64,
	/// Maximum distance at which two particles are linked by a line.
	pub connection_distance: f64,
	/// Line color; alpha is replaced per pair by the distance falloff.
	pub connection_color: Color,
	/// Base line opacity at zero distance.
	pub connection_alpha: f64,
	/// Connection line width, kept below the particle radius.
	pub line_width: f64,
	/// Velocity components are uniform in `[-speed, speed]` px per frame.
	pub speed: f64,
	/// Particle radius range `(min, max)` in pixels.
	pub size_range: (f64, f64),
	/// Band particle colors are sampled from.
	pub color_band: ColorBand,
	pub shape: ShapePolicy,
	pub wave: Option<WaveMotion>,
	pub grid: Option<GridOverlay>,
}

/// Accent blue shared by all connection lines.
const CONNECTION_BLUE: Color = Color::rgb(59, 130, 246);

impl FieldConfig {
	/// Dense fullscreen field behind the hero section, with the grid overlay.
	pub fn hero() -> Self {
		Self {
			max_count: 100,
			density: 15_000.0,
			connection_distance: 100.0,
			connection_color: CONNECTION_BLUE,
			connection_alpha: 0.1,
			line_width: 0.5,
			speed: 0.25,
			size_range: (0.5, 2.5),
			color_band: ColorBand::frost((0.1, 0.4)),
			shape: ShapePolicy::Circles,
			wave: None,
			grid: Some(GridOverlay {
				spacing: 50.0,
				color: Color::rgba(255, 255, 255, 0.03),
				line_width: 1.0,
			}),
		}
	}

	/// Calm, sparse field scoped to the about section container.
	pub fn about() -> Self {
		Self {
			max_count: 60,
			density: 20_000.0,
			connection_distance: 80.0,
			connection_color: CONNECTION_BLUE,
			connection_alpha: 0.1,
			line_width: 0.3,
			speed: 0.1,
			size_range: (0.5, 2.5),
			color_band: ColorBand::frost((0.1, 0.3)),
			shape: ShapePolicy::Circles,
			wave: None,
			grid: None,
		}
	}

	/// Skills backdrop: mixed shapes with a slow horizontal wave.
	pub fn skills() -> Self {
		Self {
			max_count: 60,
			density: 20_000.0,
			connection_distance: 90.0,
			speed: 0.12,
			shape: ShapePolicy::AlternatingSquares,
			wave: Some(WaveMotion {
				amplitude: 0.15,
				frequency: 0.8,
			}),
			..Self::about()
		}
	}

	/// Projects backdrop: slightly denser, wider connections.
	pub fn projects() -> Self {
		Self {
			max_count: 70,
			density: 18_000.0,
			connection_distance: 90.0,
			speed: 0.15,
			..Self::about()
		}
	}

	/// Contact backdrop: about preset with a gentle pulse wave.
	pub fn contact() -> Self {
		Self {
			wave: Some(WaveMotion {
				amplitude: 0.1,
				frequency: 0.6,
			}),
			..Self::about()
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn color_css_drops_alpha_when_opaque() {
		assert_eq!(Color::rgb(59, 130, 246).to_css(), "#3b82f6");
		assert_eq!(
			Color::rgba(59, 130, 246, 0.25).to_css(),
			"rgba(59, 130, 246, 0.25)"
		);
	}

	#[test]
	fn band_sample_stays_inside_band() {
		let band = ColorBand::frost((0.1, 0.4));
		// Exercise the extremes of the unit interval.
		for u in [0.0, 0.25, 0.5, 0.999] {
			let c = band.sample(|| u);
			assert!(c.r >= 156);
			assert_eq!(c.b, 255);
			assert!(c.a >= 0.1 && c.a < 0.4);
		}
	}

	#[test]
	fn presets_keep_line_width_below_min_radius() {
		for cfg in [
			FieldConfig::hero(),
			FieldConfig::about(),
			FieldConfig::skills(),
			FieldConfig::projects(),
			FieldConfig::contact(),
		] {
			assert!(cfg.line_width <= cfg.size_range.0);
			assert!(cfg.connection_alpha > 0.0 && cfg.connection_alpha <= 1.0);
		}
	}
}
