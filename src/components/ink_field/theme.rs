//! Ink palettes for each site theme.
//!
//! Each theme owns a short list of inks; a drop picks one at random when it
//! is constructed and keeps it for life. Alpha is substituted at draw time,
//! so palettes only carry RGB.

use std::collections::HashMap;

use serde::Deserialize;

/// An RGB ink. Alpha is supplied per draw call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b }
	}

	/// CSS `rgba()` string with the given alpha substituted in.
	pub fn css(self, alpha: f64) -> String {
		format!("rgba({}, {}, {}, {:.3})", self.r, self.g, self.b, alpha)
	}
}

/// The inks available to drops spawned under one theme.
#[derive(Clone, Debug)]
pub struct Palette {
	pub colors: Vec<Color>,
}

impl Palette {
	/// Greyscale inks for the monochrome theme (default fallback).
	pub fn noir() -> Self {
		Self {
			colors: vec![
				Color::rgb(60, 60, 60), // Graphite
				Color::rgb(80, 80, 80), // Ash
				Color::rgb(40, 40, 40), // Charcoal
			],
		}
	}

	/// Cyan inks on a dark ground.
	pub fn midnight() -> Self {
		Self {
			colors: vec![
				Color::rgb(0, 180, 200),  // Teal
				Color::rgb(0, 220, 255),  // Electric cyan
				Color::rgb(0, 140, 180),  // Deep cyan
				Color::rgb(20, 100, 140), // Petrol
			],
		}
	}

	/// Blue inks.
	pub fn ocean() -> Self {
		Self {
			colors: vec![
				Color::rgb(30, 140, 220), // Azure
				Color::rgb(56, 189, 248), // Sky
				Color::rgb(10, 80, 160),  // Navy
				Color::rgb(20, 110, 190), // Cobalt
			],
		}
	}

	/// Violet inks.
	pub fn aurora() -> Self {
		Self {
			colors: vec![
				Color::rgb(130, 50, 220),  // Violet
				Color::rgb(168, 85, 247),  // Orchid
				Color::rgb(100, 20, 200),  // Indigo
				Color::rgb(180, 100, 255), // Lilac
			],
		}
	}

	/// Green inks.
	pub fn forest() -> Self {
		Self {
			colors: vec![
				Color::rgb(20, 160, 100), // Jade
				Color::rgb(52, 211, 153), // Mint
				Color::rgb(10, 120, 80),  // Pine
				Color::rgb(30, 180, 110), // Emerald
			],
		}
	}

	/// Red inks.
	pub fn wine() -> Self {
		Self {
			colors: vec![
				Color::rgb(200, 40, 80),   // Claret
				Color::rgb(251, 113, 133), // Rose
				Color::rgb(160, 20, 60),   // Burgundy
				Color::rgb(220, 60, 100),  // Cerise
			],
		}
	}

	/// Amber inks.
	pub fn warm() -> Self {
		Self {
			colors: vec![
				Color::rgb(200, 150, 30), // Gold
				Color::rgb(251, 191, 36), // Amber
				Color::rgb(180, 120, 10), // Bronze
				Color::rgb(220, 170, 50), // Honey
			],
		}
	}

	/// Ink at `index`, wrapping past the end.
	pub fn pick(&self, index: usize) -> Color {
		self.colors[index % self.colors.len()]
	}
}

/// All known palettes keyed by theme name, with a fallback for unknown keys.
#[derive(Clone, Debug)]
pub struct PaletteSet {
	themes: HashMap<String, Palette>,
	fallback: Palette,
}

impl PaletteSet {
	/// The built-in palettes for every site theme.
	pub fn builtin() -> Self {
		let themes = [
			("noir", Palette::noir()),
			("midnight", Palette::midnight()),
			("ocean", Palette::ocean()),
			("aurora", Palette::aurora()),
			("forest", Palette::forest()),
			("wine", Palette::wine()),
			("warm", Palette::warm()),
		]
		.into_iter()
		.map(|(k, v)| (k.to_string(), v))
		.collect();

		Self {
			themes,
			fallback: Palette::noir(),
		}
	}

	/// Built-in palettes with JSON-supplied replacements applied on top.
	///
	/// Override entries that parse to no usable colors are ignored.
	pub fn with_overrides(overrides: &PaletteOverrides) -> Self {
		let mut set = Self::builtin();
		for (name, entries) in &overrides.themes {
			let colors: Vec<Color> = entries.iter().filter_map(|s| parse_color(s)).collect();
			if !colors.is_empty() {
				set.themes.insert(name.clone(), Palette { colors });
			}
		}
		set
	}

	/// Palette for `theme`, falling back to noir for unrecognized keys.
	pub fn get(&self, theme: &str) -> &Palette {
		self.themes.get(theme).unwrap_or(&self.fallback)
	}
}

impl Default for PaletteSet {
	fn default() -> Self {
		Self::builtin()
	}
}

/// Palette overrides as supplied in the `ink-palettes` JSON script element.
///
/// Keys are theme names; values are lists of CSS color strings.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct PaletteOverrides {
	#[serde(flatten)]
	pub themes: HashMap<String, Vec<String>>,
}

/// Parses a CSS color string into a [`Color`].
/// Supports hex (`#RRGGBB`) and `rgb()`/`rgba()` functional notation.
pub fn parse_color(color_str: &str) -> Option<Color> {
	let s = color_str.trim();
	if let Some(hex) = s.strip_prefix('#') {
		if hex.len() != 6 {
			return None;
		}
		let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
		let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
		let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
		Some(Color::rgb(r, g, b))
	} else if s.starts_with("rgb") {
		let nums: Vec<&str> = s
			.trim_start_matches("rgba(")
			.trim_start_matches("rgb(")
			.trim_end_matches(')')
			.split(',')
			.collect();
		let r = nums.first()?.trim().parse().ok()?;
		let g = nums.get(1)?.trim().parse().ok()?;
		let b = nums.get(2)?.trim().parse().ok()?;
		Some(Color::rgb(r, g, b))
	} else {
		None
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn unknown_theme_falls_back_to_noir() {
		let set = PaletteSet::default();
		assert_eq!(set.get("does-not-exist").colors, Palette::noir().colors);
	}

	#[test]
	fn css_substitutes_the_alpha_channel() {
		assert_eq!(Color::rgb(60, 60, 60).css(0.5), "rgba(60, 60, 60, 0.500)");
		assert_eq!(Color::rgb(0, 180, 200).css(0.0), "rgba(0, 180, 200, 0.000)");
	}

	#[test]
	fn parses_hex_and_functional_notation() {
		assert_eq!(parse_color("#1e8cdc"), Some(Color::rgb(30, 140, 220)));
		assert_eq!(parse_color("rgb(56, 189, 248)"), Some(Color::rgb(56, 189, 248)));
		assert_eq!(
			parse_color("rgba(10, 80, 160, 0.5)"),
			Some(Color::rgb(10, 80, 160))
		);
		assert_eq!(parse_color("teal"), None);
		assert_eq!(parse_color("#12345"), None);
	}

	#[test]
	fn overrides_replace_builtin_palettes() {
		let json = r##"{"ocean": ["#010203", "rgb(4, 5, 6)"], "custom": ["#0a0b0c"], "broken": ["nope"]}"##;
		let overrides: PaletteOverrides = serde_json::from_str(json).unwrap();
		let set = PaletteSet::with_overrides(&overrides);
		assert_eq!(
			set.get("ocean").colors,
			vec![Color::rgb(1, 2, 3), Color::rgb(4, 5, 6)]
		);
		assert_eq!(set.get("custom").colors, vec![Color::rgb(10, 11, 12)]);
		// Entries that parse to nothing leave the override out entirely.
		assert_eq!(set.get("broken").colors, Palette::noir().colors);
	}
}
