//! ink-field: interactive ink-drop canvas background.
//!
//! This crate provides a WASM-based background component that turns pointer
//! and touch interaction into spreading, fading ink blots, colored to match
//! the surrounding site's theme.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::ink_field::{InkFieldCanvas, PaletteOverrides, PaletteSet};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("ink-field: logging initialized");
}

/// Load palette overrides from a script element with id="ink-palettes".
/// Expected format: JSON mapping theme names to lists of CSS colors.
fn load_palette_overrides() -> Option<PaletteSet> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("ink-palettes")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match serde_json::from_str::<PaletteOverrides>(&json_text) {
		Ok(overrides) => {
			info!(
				"ink-field: loaded palette overrides for {} themes",
				overrides.themes.len()
			);
			Some(PaletteSet::with_overrides(&overrides))
		}
		Err(e) => {
			warn!("ink-field: failed to parse palette overrides: {}", e);
			None
		}
	}
}

/// Main application component.
/// Mounts the fullscreen ink background behind the hero overlay.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let palettes = load_palette_overrides();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="midnight" />
		<Title text="Portfolio" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="ink-backdrop">
			<InkFieldCanvas palettes=palettes fullscreen=true />
			<div class="ink-overlay">
				<h1>"Portfolio"</h1>
				<p class="subtitle">"Move the pointer to scatter ink. Click for a burst."</p>
			</div>
		</div>
	}
}
