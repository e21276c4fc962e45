//! Category colors.
//!
//! A [`CategorySpec`](super::types::CategorySpec) only carries a palette index; the
//! palette picked at chart time turns it into a CSS color.

/// RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
	/// Red.
	pub r: u8,
	/// Green.
	pub g: u8,
	/// Blue.
	pub b: u8,
}

impl Color {
	/// Opaque color from 8-bit channels.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b }
	}

	/// `#rrggbb` hex notation.
	pub fn to_css_rgb(self) -> String {
		format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
	}
}

/// Ordered category colors.
#[derive(Clone, Debug)]
pub struct CategoryPalette {
	/// Color per category index.
	pub colors: Vec<Color>,
}

impl CategoryPalette {
	/// Keyword / Query / Paper legend colors (default)
	pub fn legend() -> Self {
		Self {
			colors: vec![
				Color::rgb(31, 119, 180), // Blue
				Color::rgb(255, 127, 14), // Orange
				Color::rgb(44, 160, 44),  // Green
			],
		}
	}

	/// Keyword / Title / Other knowledge-graph colors
	pub fn knowledge() -> Self {
		Self {
			colors: vec![
				Color::rgb(84, 112, 198),  // Blue
				Color::rgb(145, 204, 117), // Green
				Color::rgb(204, 204, 204), // Gray
			],
		}
	}

	/// Color for a category's palette index, wrapping around.
	pub fn get(&self, index: usize) -> Color {
		if self.colors.is_empty() {
			return Color::rgb(204, 204, 204);
		}
		self.colors[index % self.colors.len()]
	}
}

impl Default for CategoryPalette {
	fn default() -> Self {
		Self::legend()
	}
}
