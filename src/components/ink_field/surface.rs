//! Drawable targets for the ink field.
//!
//! The engine draws through the [`TrailSurface`] trait so the simulation can
//! be exercised against a recording stub in tests. The canvas implementation
//! keeps two layers: the visible canvas, and an offscreen trail canvas that
//! accumulates blots and is partially erased every frame to leave a fading
//! residue.

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::theme::Color;

/// A two-layer drawing target: an accumulating trail plus a visible surface.
pub trait TrailSurface {
	/// Uniformly erases `amount` of the trail's alpha (0.0 to 1.0).
	fn fade(&mut self, amount: f64);

	/// Paints one blot into the trail: a radial fade from `alpha` at the
	/// center, through 60% of `alpha` at the midpoint, to transparent at
	/// `radius`.
	fn draw_drop(&mut self, x: f64, y: f64, radius: f64, color: Color, alpha: f64);

	/// Clears the visible surface and copies the trail onto it verbatim.
	fn composite(&mut self);

	/// Fully clears both layers.
	fn clear(&mut self);

	/// Resizes both layers, discarding their contents.
	fn resize(&mut self, width: f64, height: f64);
}

/// Canvas-backed surface: the visible canvas plus an offscreen trail canvas
/// of matching dimensions.
pub struct CanvasSurface {
	visible: CanvasRenderingContext2d,
	trail: CanvasRenderingContext2d,
	canvas: HtmlCanvasElement,
	trail_canvas: HtmlCanvasElement,
	width: f64,
	height: f64,
}

impl CanvasSurface {
	/// Wraps `canvas` and allocates a matching offscreen trail canvas.
	/// Returns `None` when a 2d context is unavailable.
	pub fn new(canvas: HtmlCanvasElement, width: f64, height: f64) -> Option<Self> {
		let visible = context_2d(&canvas)?;
		let document = web_sys::window()?.document()?;
		let trail_canvas: HtmlCanvasElement =
			document.create_element("canvas").ok()?.dyn_into().ok()?;
		let trail = context_2d(&trail_canvas)?;

		let mut surface = Self {
			visible,
			trail,
			canvas,
			trail_canvas,
			width: 0.0,
			height: 0.0,
		};
		surface.resize(width, height);
		Some(surface)
	}
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas.get_context("2d").ok()??.dyn_into().ok()
}

impl TrailSurface for CanvasSurface {
	fn fade(&mut self, amount: f64) {
		let _ = self.trail.set_global_composite_operation("destination-out");
		self.trail
			.set_fill_style_str(&format!("rgba(0, 0, 0, {})", amount));
		self.trail.fill_rect(0.0, 0.0, self.width, self.height);
		let _ = self.trail.set_global_composite_operation("source-over");
	}

	fn draw_drop(&mut self, x: f64, y: f64, radius: f64, color: Color, alpha: f64) {
		let Ok(gradient) = self
			.trail
			.create_radial_gradient(x, y, radius * 0.1, x, y, radius)
		else {
			return;
		};
		let _ = gradient.add_color_stop(0.0, &color.css(alpha));
		let _ = gradient.add_color_stop(0.5, &color.css(alpha * 0.6));
		let _ = gradient.add_color_stop(1.0, &color.css(0.0));

		self.trail.begin_path();
		let _ = self.trail.arc(x, y, radius, 0.0, std::f64::consts::PI * 2.0);
		#[allow(deprecated)]
		self.trail.set_fill_style(&gradient);
		self.trail.fill();
	}

	fn composite(&mut self) {
		self.visible.clear_rect(0.0, 0.0, self.width, self.height);
		let _ = self
			.visible
			.draw_image_with_html_canvas_element(&self.trail_canvas, 0.0, 0.0);
	}

	fn clear(&mut self) {
		self.visible.clear_rect(0.0, 0.0, self.width, self.height);
		self.trail.clear_rect(0.0, 0.0, self.width, self.height);
	}

	fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
		// Setting canvas dimensions resets their contents.
		self.canvas.set_width(width as u32);
		self.canvas.set_height(height as u32);
		self.trail_canvas.set_width(width as u32);
		self.trail_canvas.set_height(height as u32);
	}
}
