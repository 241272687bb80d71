//! Individual ink drops.

use super::config::{FieldConfig, SpawnTuning};
use super::rng::JitterSource;
use super::theme::Color;

/// Which interaction produced a drop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropKind {
	/// Low-intensity drop left by continuous movement.
	Trail,
	/// High-intensity drop from a discrete click or touch start.
	Burst,
}

/// A single expanding, fading ink blot.
#[derive(Clone, Debug)]
pub struct InkDrop {
	pub x: f64,
	pub y: f64,
	pub radius: f64,
	pub max_radius: f64,
	pub opacity: f64,
	pub growth: f64,
	pub life: f64,
	pub decay: f64,
	pub color: Color,
}

impl InkDrop {
	/// Creates a drop near `(x, y)` with randomized jitter, size, and
	/// lifetime drawn from the tuning for `kind`.
	pub fn spawn(
		x: f64,
		y: f64,
		kind: DropKind,
		config: &FieldConfig,
		color: Color,
		jitter: &mut JitterSource,
	) -> Self {
		let tuning: &SpawnTuning = match kind {
			DropKind::Trail => &config.trail,
			DropKind::Burst => &config.burst,
		};
		let radius = jitter.range(tuning.radius_min, tuning.radius_spread);

		Self {
			x: x + (jitter.sample() - 0.5) * tuning.jitter,
			y: y + (jitter.sample() - 0.5) * tuning.jitter,
			radius,
			max_radius: radius * tuning.max_radius_factor
				+ jitter.range(0.0, tuning.max_radius_bonus),
			opacity: tuning.opacity,
			growth: jitter.range(tuning.growth_min, tuning.growth_spread),
			life: 1.0,
			decay: jitter.range(config.decay_min, config.decay_spread),
			color,
		}
	}

	/// Advances one frame; returns whether the drop is still alive.
	///
	/// Growth is damped multiplicatively so expansion slows as the blot
	/// spreads, and the radius is clamped at its ceiling.
	pub fn advance(&mut self, damping: f64) -> bool {
		if self.radius < self.max_radius {
			self.radius = (self.radius + self.growth).min(self.max_radius);
			self.growth *= damping;
		}
		self.life -= self.decay;
		self.life > 0.0
	}

	/// Current center alpha: peak opacity scaled by remaining life.
	pub fn alpha(&self) -> f64 {
		self.opacity * self.life
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn test_drop(kind: DropKind) -> InkDrop {
		let mut jitter = JitterSource::new(5.0);
		InkDrop::spawn(
			50.0,
			50.0,
			kind,
			&FieldConfig::default(),
			Color::rgb(10, 20, 30),
			&mut jitter,
		)
	}

	#[test]
	fn growth_slows_every_frame() {
		let mut drop = test_drop(DropKind::Burst);
		let before = drop.growth;
		drop.advance(0.98);
		assert!((drop.growth - before * 0.98).abs() < 1e-12);
	}

	#[test]
	fn radius_never_exceeds_its_ceiling() {
		let mut drop = test_drop(DropKind::Burst);
		let mut last = drop.radius;
		for _ in 0..500 {
			drop.advance(0.98);
			assert!(drop.radius >= last);
			assert!(drop.radius <= drop.max_radius);
			last = drop.radius;
		}
	}

	#[test]
	fn advance_reports_death_when_life_is_spent() {
		let mut drop = test_drop(DropKind::Trail);
		drop.life = 0.015;
		drop.decay = 0.01;
		assert!(drop.advance(0.98));
		assert!(!drop.advance(0.98));
	}

	#[test]
	fn burst_drops_scatter_wider_than_trail_drops() {
		let config = FieldConfig::default();
		let mut jitter = JitterSource::new(11.0);
		let mut max_trail = 0.0_f64;
		let mut max_burst = 0.0_f64;
		for _ in 0..64 {
			let t = InkDrop::spawn(0.0, 0.0, DropKind::Trail, &config, Color::rgb(0, 0, 0), &mut jitter);
			let b = InkDrop::spawn(0.0, 0.0, DropKind::Burst, &config, Color::rgb(0, 0, 0), &mut jitter);
			max_trail = max_trail.max(t.x.abs()).max(t.y.abs());
			max_burst = max_burst.max(b.x.abs()).max(b.y.abs());
		}
		assert!(max_trail <= 3.0);
		assert!(max_burst <= 20.0);
		assert!(max_burst > max_trail);
	}
}
