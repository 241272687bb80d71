//! The ink field engine: spawning, advancement, and the frame driver.
//!
//! All mutable state lives on [`InkField`] so the simulation can be driven
//! and inspected without a live canvas. The engine never reads global clocks
//! or document state; timestamps and the current theme come in from the
//! component layer, which also owns the `requestAnimationFrame` scheduling.

use super::config::{FieldConfig, MotionTier};
use super::drop::{DropKind, InkDrop};
use super::rng::JitterSource;
use super::surface::TrailSurface;
use super::theme::PaletteSet;

/// Which input device produced a burst; selects the burst count range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputSource {
	/// Mouse or other fine pointer.
	Pointer,
	/// Touch contact.
	Touch,
}

/// Owns the live drop collection and drives the per-frame simulation.
///
/// The render loop calls [`InkField::step`] once per animation frame for as
/// long as it returns `true`; a `false` return means the field has gone
/// dormant and stays that way until the next spawn.
pub struct InkField {
	drops: Vec<InkDrop>,
	idle_frames: u32,
	last_move_ms: f64,
	config: FieldConfig,
	palettes: PaletteSet,
	theme: Box<dyn Fn() -> String>,
	motion: MotionTier,
	jitter: JitterSource,
}

impl InkField {
	/// Creates a dormant field.
	///
	/// `theme` is consulted each time a drop is constructed, so a palette
	/// change only affects drops spawned afterwards; live drops keep their
	/// already-chosen ink.
	pub fn new(
		config: FieldConfig,
		palettes: PaletteSet,
		motion: MotionTier,
		theme: impl Fn() -> String + 'static,
		seed: f64,
	) -> Self {
		Self {
			drops: Vec::new(),
			idle_frames: 0,
			last_move_ms: f64::NEG_INFINITY,
			config,
			palettes,
			theme: Box::new(theme),
			motion,
			jitter: JitterSource::new(seed),
		}
	}

	/// Live drops, in spawn order.
	pub fn drops(&self) -> &[InkDrop] {
		&self.drops
	}

	/// Frames elapsed since the last drop died.
	pub fn idle_frames(&self) -> u32 {
		self.idle_frames
	}

	/// Spawns one trail drop near `(x, y)`, throttled to one spawn per
	/// [`FieldConfig::move_throttle_ms`] of wall-clock time regardless of
	/// frame rate.
	///
	/// Returns whether a drop was spawned; a `true` return means the render
	/// loop has work and should be woken if dormant. Non-finite coordinates
	/// are skipped without consuming the throttle window.
	pub fn spawn_trail(&mut self, x: f64, y: f64, now_ms: f64) -> bool {
		if !x.is_finite() || !y.is_finite() || self.motion == MotionTier::Minimal {
			return false;
		}
		if now_ms - self.last_move_ms < self.config.move_throttle_ms {
			return false;
		}
		self.last_move_ms = now_ms;
		self.push_drop(x, y, DropKind::Trail);
		true
	}

	/// Spawns a burst of drops near `(x, y)`. Never throttled: every click
	/// or touch start produces a full burst.
	pub fn spawn_burst(&mut self, x: f64, y: f64, source: InputSource) -> bool {
		if !x.is_finite() || !y.is_finite() || self.motion == MotionTier::Minimal {
			return false;
		}
		let (min, max) = match source {
			InputSource::Pointer => self.config.pointer_burst,
			InputSource::Touch => self.config.touch_burst,
		};
		let count = match self.motion {
			MotionTier::Reduced => min,
			_ => min + self.jitter.index(max - min + 1),
		};
		for _ in 0..count {
			self.push_drop(x, y, DropKind::Burst);
		}
		true
	}

	fn push_drop(&mut self, x: f64, y: f64, kind: DropKind) {
		let palette = self.palettes.get(&(self.theme)());
		let color = palette.pick(self.jitter.index(palette.colors.len()));
		self.drops
			.push(InkDrop::spawn(x, y, kind, &self.config, color, &mut self.jitter));
	}

	/// Runs one frame: fades the trail, advances every drop (removing the
	/// dead before drawing), paints the survivors into the trail, and
	/// composites the trail onto the visible surface.
	///
	/// Returns `true` while another frame should be scheduled. After the
	/// last drop dies the trail keeps fading for
	/// [`FieldConfig::idle_frames`] frames, then both layers are cleared and
	/// the field goes dormant.
	pub fn step(&mut self, surface: &mut dyn TrailSurface) -> bool {
		surface.fade(self.config.trail_fade);

		let damping = self.config.growth_damping;
		self.drops.retain_mut(|drop| drop.advance(damping));
		for drop in &self.drops {
			let alpha = drop.alpha();
			if alpha > 0.001 {
				surface.draw_drop(drop.x, drop.y, drop.radius, drop.color, alpha);
			}
		}

		surface.composite();

		if !self.drops.is_empty() {
			self.idle_frames = 0;
			return true;
		}
		self.idle_frames += 1;
		if self.idle_frames < self.config.idle_frames {
			// Residue is still fading; keep the loop alive.
			true
		} else {
			surface.clear();
			false
		}
	}
}
