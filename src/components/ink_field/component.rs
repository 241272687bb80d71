//! Leptos component wrapping the ink field canvas.
//!
//! The component creates the canvas element, wires up mouse and touch
//! handlers that feed the engine, and drives it via `requestAnimationFrame`.
//! Unlike a conventional always-on render loop, this one only runs while the
//! engine reports work: it starts dormant, is woken by the first successful
//! spawn, and parks itself again once the trail has fully faded.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, MouseEvent, TouchEvent, Window};

use super::config::{FieldConfig, MotionTier};
use super::engine::{InkField, InputSource};
use super::surface::{CanvasSurface, TrailSurface};
use super::theme::PaletteSet;

/// Bundles the engine with its drawing surface for the animation loop.
struct FieldContext {
	engine: InkField,
	surface: CanvasSurface,
}

type SharedClosure = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Reads the active theme key from the document root's `data-theme`
/// attribute, falling back to the monochrome default.
fn current_theme() -> String {
	web_sys::window()
		.and_then(|w| w.document())
		.and_then(|d| d.document_element())
		.and_then(|el| el.get_attribute("data-theme"))
		.unwrap_or_else(|| "noir".to_string())
}

/// Detects the animation tier once at mount: reduced-motion users get no
/// ink at all, low-core machines get minimum-size bursts.
fn detect_motion_tier(window: &Window) -> MotionTier {
	let reduced = window
		.match_media("(prefers-reduced-motion: reduce)")
		.ok()
		.flatten()
		.is_some_and(|query| query.matches());
	if reduced {
		return MotionTier::Minimal;
	}
	let cores = window.navigator().hardware_concurrency();
	if cores > 0.0 && cores <= 4.0 {
		MotionTier::Reduced
	} else {
		MotionTier::Full
	}
}

/// Requests an animation frame for the loop closure unless one is already
/// pending.
fn schedule_frame(animate: &SharedClosure, running: &Rc<Cell<bool>>) {
	if running.get() {
		return;
	}
	if let Some(ref cb) = *animate.borrow() {
		running.set(true);
		let _ = web_sys::window()
			.unwrap()
			.request_animation_frame(cb.as_ref().unchecked_ref());
	}
}

/// Renders the interactive ink-drop background on a canvas element.
///
/// The component sizes itself to its parent container by default; set
/// `fullscreen = true` to fill the viewport and resize automatically with
/// the window. Explicit `width`/`height` override automatic sizing. Custom
/// `palettes` replace the built-in set when provided.
#[component]
pub fn InkFieldCanvas(
	#[prop(default = None)] palettes: Option<PaletteSet>,
	#[prop(default = false)] fullscreen: bool,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let context: Rc<RefCell<Option<FieldContext>>> = Rc::new(RefCell::new(None));
	let animate: SharedClosure = Rc::new(RefCell::new(None));
	let resize_cb: SharedClosure = Rc::new(RefCell::new(None));
	let running: Rc<Cell<bool>> = Rc::new(Cell::new(false));
	let (context_init, animate_init, resize_cb_init, running_init) = (
		context.clone(),
		animate.clone(),
		resize_cb.clone(),
		running.clone(),
	);

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let window: Window = web_sys::window().unwrap();

		let (w, h) = if fullscreen {
			(
				window.inner_width().unwrap().as_f64().unwrap(),
				window.inner_height().unwrap().as_f64().unwrap(),
			)
		} else {
			(
				width.unwrap_or_else(|| {
					canvas
						.parent_element()
						.map(|p| p.client_width() as f64)
						.unwrap_or(800.0)
				}),
				height.unwrap_or_else(|| {
					canvas
						.parent_element()
						.map(|p| p.client_height() as f64)
						.unwrap_or(600.0)
				}),
			)
		};

		let Some(surface) = CanvasSurface::new(canvas.clone(), w, h) else {
			warn!("ink-field: 2d context unavailable, background disabled");
			return;
		};

		let motion = detect_motion_tier(&window);
		let engine = InkField::new(
			FieldConfig::default(),
			palettes.clone().unwrap_or_default(),
			motion,
			current_theme,
			js_sys::Date::now(),
		);
		*context_init.borrow_mut() = Some(FieldContext { engine, surface });

		if fullscreen {
			let context_resize = context_init.clone();
			*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
				let win: Window = web_sys::window().unwrap();
				let (nw, nh) = (
					win.inner_width().unwrap().as_f64().unwrap(),
					win.inner_height().unwrap().as_f64().unwrap(),
				);
				if let Some(ref mut c) = *context_resize.borrow_mut() {
					c.surface.resize(nw, nh);
				}
			}));
			if let Some(ref cb) = *resize_cb_init.borrow() {
				let _ =
					window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
		}

		let (context_anim, animate_inner, running_anim) = (
			context_init.clone(),
			animate_init.clone(),
			running_init.clone(),
		);
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			let keep_running = match *context_anim.borrow_mut() {
				Some(ref mut c) => c.engine.step(&mut c.surface),
				None => false,
			};
			if !keep_running {
				running_anim.set(false);
				return;
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				let _ = web_sys::window()
					.unwrap()
					.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		// The loop starts dormant; the first successful spawn wakes it.
	});

	let (context_mm, animate_mm, running_mm) = (context.clone(), animate.clone(), running.clone());
	let on_mousemove = move |ev: MouseEvent| {
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let rect = canvas.get_bounding_client_rect();
		let (x, y) = (
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		);

		if let Some(ref mut c) = *context_mm.borrow_mut() {
			if c.engine.spawn_trail(x, y, js_sys::Date::now()) {
				schedule_frame(&animate_mm, &running_mm);
			}
		}
	};

	let (context_cl, animate_cl, running_cl) = (context.clone(), animate.clone(), running.clone());
	let on_click = move |ev: MouseEvent| {
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let rect = canvas.get_bounding_client_rect();
		let (x, y) = (
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		);

		if let Some(ref mut c) = *context_cl.borrow_mut() {
			if c.engine.spawn_burst(x, y, InputSource::Pointer) {
				schedule_frame(&animate_cl, &running_cl);
			}
		}
	};

	let (context_tm, animate_tm, running_tm) = (context.clone(), animate.clone(), running.clone());
	let on_touchmove = move |ev: TouchEvent| {
		let Some(touch) = ev.touches().get(0) else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let rect = canvas.get_bounding_client_rect();
		let (x, y) = (
			touch.client_x() as f64 - rect.left(),
			touch.client_y() as f64 - rect.top(),
		);

		if let Some(ref mut c) = *context_tm.borrow_mut() {
			if c.engine.spawn_trail(x, y, js_sys::Date::now()) {
				schedule_frame(&animate_tm, &running_tm);
			}
		}
	};

	let (context_ts, animate_ts, running_ts) = (context.clone(), animate.clone(), running.clone());
	let on_touchstart = move |ev: TouchEvent| {
		let Some(touch) = ev.touches().get(0) else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let rect = canvas.get_bounding_client_rect();
		let (x, y) = (
			touch.client_x() as f64 - rect.left(),
			touch.client_y() as f64 - rect.top(),
		);

		if let Some(ref mut c) = *context_ts.borrow_mut() {
			if c.engine.spawn_burst(x, y, InputSource::Touch) {
				schedule_frame(&animate_ts, &running_ts);
			}
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="ink-field-canvas"
			on:mousemove=on_mousemove
			on:click=on_click
			on:touchmove=on_touchmove
			on:touchstart=on_touchstart
			style="display: block;"
		/>
	}
}
