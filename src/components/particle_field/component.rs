//! Leptos component hosting one particle field on a canvas element.
//!
//! The component sizes the canvas to its parent container (or to the
//! viewport when `fullscreen`), builds the field, and drives it through an
//! [`AnimationLoop`] backed by the browser ports. The loop and its resize
//! listener are released on component cleanup, and starting before the
//! canvas is mounted is a silent no-op.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::browser::{BrowserFrames, WindowResize};
use super::config::FieldConfig;
use super::driver::AnimationLoop;
use super::field::ParticleField;
use super::render;

/// Reference frame duration; `requestAnimationFrame` does not report
/// elapsed time, so the field is stepped at the 60 fps nominal rate.
const FRAME_DT: f64 = 1.0 / 60.0;

fn surface_size(canvas: &HtmlCanvasElement, window: &Window, fullscreen: bool) -> (f64, f64) {
	if fullscreen {
		let dim = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
			v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
		};
		(dim(window.inner_width()), dim(window.inner_height()))
	} else {
		canvas
			.parent_element()
			.map(|p| (p.client_width() as f64, p.client_height() as f64))
			.unwrap_or((0.0, 0.0))
	}
}

/// Renders a decorative animated particle backdrop scoped to one canvas.
///
/// Each instance owns an independent field; instances never share state.
/// The particle population is recomputed from the surface area on every
/// window resize.
#[component]
pub fn ParticleCanvas(
	/// Field tuning for this section, usually one of the [`FieldConfig`] presets.
	config: FieldConfig,
	/// Fill the viewport instead of the parent container.
	#[prop(default = false)]
	fullscreen: bool,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

	Effect::new(move |_| {
		// Not mounted yet: deferred precondition, not an error.
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};

		let (w, h) = surface_size(&canvas, &window, fullscreen);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let ctx: CanvasRenderingContext2d = match canvas.get_context("2d") {
			Ok(Some(ctx)) => match ctx.dyn_into() {
				Ok(ctx) => ctx,
				Err(_) => return,
			},
			_ => return,
		};

		let field = Rc::new(RefCell::new(ParticleField::new(config.clone(), w, h)));
		let animation = AnimationLoop::new(Rc::new(BrowserFrames), Rc::new(WindowResize));

		let on_frame = {
			let field = field.clone();
			let ctx = ctx.clone();
			let config = config.clone();
			move || {
				let mut field = field.borrow_mut();
				field.step(FRAME_DT);
				render::render(&field, &ctx, &config);
			}
		};

		let on_resize = {
			let field = field.clone();
			let canvas = canvas.clone();
			move || {
				let Some(window) = web_sys::window() else {
					return;
				};
				let (w, h) = surface_size(&canvas, &window, fullscreen);
				canvas.set_width(w as u32);
				canvas.set_height(h as u32);
				field.borrow_mut().resize(w, h);
			}
		};

		animation.start(on_frame, on_resize);
		// `on_cleanup` requires `Send + Sync`; the loop is single-threaded
		// wasm state, so the wrapper's thread assertion always holds.
		let animation = send_wrapper::SendWrapper::new(animation);
		on_cleanup(move || animation.stop());
	});

	view! { <canvas node_ref=canvas_ref class="particle-canvas" /> }
}
