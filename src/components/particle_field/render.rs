//! Canvas painting for the particle field.
//!
//! Draw order per frame: clear, particles, connection lines, then the
//! optional grid overlay. The canvas itself stays transparent; the section
//! background shows through.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::config::FieldConfig;
use super::field::ParticleField;

/// Paint one frame of the field.
pub fn render(field: &ParticleField, ctx: &CanvasRenderingContext2d, config: &FieldConfig) {
	ctx.clear_rect(0.0, 0.0, field.width(), field.height());

	draw_particles(field, ctx);
	draw_connections(field, ctx, config);

	if let Some(grid) = &config.grid {
		draw_grid(field, ctx, grid);
	}
}

fn draw_particles(field: &ParticleField, ctx: &CanvasRenderingContext2d) {
	for (i, p) in field.particles.iter().enumerate() {
		ctx.set_fill_style_str(&p.color.to_css());
		if field.is_square(i) {
			let side = p.radius * 2.0;
			ctx.fill_rect(p.x - p.radius, p.y - p.radius, side, side);
		} else {
			ctx.begin_path();
			let _ = ctx.arc(p.x, p.y, p.radius, 0.0, PI * 2.0);
			ctx.fill();
		}
	}
}

fn draw_connections(field: &ParticleField, ctx: &CanvasRenderingContext2d, config: &FieldConfig) {
	ctx.set_line_width(config.line_width);
	field.for_connections(|a, b, alpha| {
		ctx.set_stroke_style_str(&config.connection_color.with_alpha(alpha).to_css());
		ctx.begin_path();
		ctx.move_to(a.x, a.y);
		ctx.line_to(b.x, b.y);
		ctx.stroke();
	});
}

fn draw_grid(
	field: &ParticleField,
	ctx: &CanvasRenderingContext2d,
	grid: &super::config::GridOverlay,
) {
	if grid.spacing <= 0.0 {
		return;
	}
	ctx.set_stroke_style_str(&grid.color.to_css());
	ctx.set_line_width(grid.line_width);

	let mut x = 0.0;
	while x < field.width() {
		ctx.begin_path();
		ctx.move_to(x, 0.0);
		ctx.line_to(x, field.height());
		ctx.stroke();
		x += grid.spacing;
	}

	let mut y = 0.0;
	while y < field.height() {
		ctx.begin_path();
		ctx.move_to(0.0, y);
		ctx.line_to(field.width(), y);
		ctx.stroke();
		y += grid.spacing;
	}
}
