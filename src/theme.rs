//! Light/dark theming and the color helpers used by canvas drawing.

use std::fmt;
use std::str::FromStr;

/// RGB color parsed from a `#rrggbb` string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
}

impl Color {
	/// Electric cyan, the default particle color on dark backgrounds.
	pub const CYAN: Color = Color::rgb(0x00, 0xd9, 0xff);
	/// Neon purple, used for particles on light backgrounds.
	pub const PURPLE: Color = Color::rgb(0x8b, 0x5c, 0xf6);

	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b }
	}

	/// Parse `#rrggbb` or the short `#rgb` form.
	pub fn parse_hex(s: &str) -> Option<Self> {
		let hex = s.trim().strip_prefix('#')?;
		if !hex.is_ascii() {
			return None;
		}
		match hex.len() {
			6 => Some(Self::rgb(
				u8::from_str_radix(&hex[0..2], 16).ok()?,
				u8::from_str_radix(&hex[2..4], 16).ok()?,
				u8::from_str_radix(&hex[4..6], 16).ok()?,
			)),
			3 => {
				let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);
				Some(Self::rgb(nibble(0)?, nibble(1)?, nibble(2)?))
			}
			_ => None,
		}
	}

	pub fn to_css_rgb(self) -> String {
		format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
	}

	/// `#rrggbbaa` with the alpha byte `round(opacity * 255)`.
	pub fn to_hex_alpha(self, opacity: f64) -> String {
		format!("{}{:02x}", self.to_css_rgb(), alpha_byte(opacity))
	}
}

/// Alpha channel byte for an opacity in `[0, 1]`; out-of-range input is clamped.
pub fn alpha_byte(opacity: f64) -> u8 {
	if opacity.is_nan() {
		return 0;
	}
	(opacity.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl Default for Color {
	fn default() -> Self {
		Color::CYAN
	}
}

impl fmt::Display for Color {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.to_css_rgb())
	}
}

/// Site color scheme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
	Light,
	#[default]
	Dark,
}

impl Theme {
	pub fn toggle(self) -> Self {
		match self {
			Theme::Light => Theme::Dark,
			Theme::Dark => Theme::Light,
		}
	}

	/// Name used for persistence and for the `data-theme` attribute.
	pub fn as_str(self) -> &'static str {
		match self {
			Theme::Light => "light",
			Theme::Dark => "dark",
		}
	}

	/// Base hue of the hero particle field.
	pub fn particle_color(self) -> Color {
		match self {
			Theme::Light => Color::PURPLE,
			Theme::Dark => Color::CYAN,
		}
	}
}

impl FromStr for Theme {
	type Err = ();

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim() {
			"light" => Ok(Theme::Light),
			"dark" => Ok(Theme::Dark),
			_ => Err(()),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_parse_hex() {
		assert_eq!(Color::parse_hex("#00D9FF"), Some(Color::CYAN));
		assert_eq!(Color::parse_hex("#8b5cf6"), Some(Color::PURPLE));
		assert_eq!(Color::parse_hex("#333"), Some(Color::rgb(0x33, 0x33, 0x33)));
		assert_eq!(Color::parse_hex("00D9FF"), None);
		assert_eq!(Color::parse_hex("#00D9F"), None);
		assert_eq!(Color::parse_hex("#zzzzzz"), None);
	}

	#[test]
	fn test_hex_alpha_rounds() {
		assert_eq!(Color::CYAN.to_hex_alpha(0.7), "#00d9ffb3");
		assert_eq!(Color::CYAN.to_hex_alpha(0.2), "#00d9ff33");
		assert_eq!(Color::CYAN.to_hex_alpha(0.0), "#00d9ff00");
		assert_eq!(Color::CYAN.to_hex_alpha(1.5), "#00d9ffff");
		assert_eq!(alpha_byte(f64::NAN), 0);
	}

	#[test]
	fn test_theme_toggle_and_names() {
		assert_eq!(Theme::Dark.toggle(), Theme::Light);
		assert_eq!("light".parse::<Theme>(), Ok(Theme::Light));
		assert!("sepia".parse::<Theme>().is_err());
		assert_eq!(Theme::Light.particle_color(), Color::PURPLE);
	}
}
