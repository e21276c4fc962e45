//! Fixed-size multi-line node labels.
//!
//! Node labels are chopped into lines of at most `max_chars_per_line` characters,
//! with at most `max_lines` lines. Text that does not fit loses its tail and the
//! last line ends with an ellipsis instead. Characters are counted as Unicode
//! scalar values.

use serde::Deserialize;

/// Appended to the last line of a truncated label.
pub const ELLIPSIS: char = '…';

/// Line/character budget for a wrapped label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LabelFormat {
	/// Maximum number of lines in the output.
	pub max_lines: usize,
	/// Maximum characters on each line.
	pub max_chars_per_line: usize,
}

impl LabelFormat {
	/// Budget of `max_lines` lines by `max_chars_per_line` characters.
	pub const fn new(max_lines: usize, max_chars_per_line: usize) -> Self {
		Self {
			max_lines,
			max_chars_per_line,
		}
	}

	/// Total characters that fit without truncation.
	pub fn budget(&self) -> usize {
		self.max_lines.saturating_mul(self.max_chars_per_line)
	}

	/// Wrap `text` using this budget. See [`wrap`].
	pub fn wrap(&self, text: &str) -> String {
		wrap(text, self.max_lines, self.max_chars_per_line)
	}
}

impl Default for LabelFormat {
	fn default() -> Self {
		Self::new(3, 8)
	}
}

/// Wrap `text` into at most `max_lines` newline-joined lines of
/// `max_chars_per_line` characters.
///
/// Text of exactly `max_lines * max_chars_per_line` characters still fits. Longer
/// text keeps its first `budget - 1` characters and gets [`ELLIPSIS`] appended to
/// the last line. A zero budget renders non-empty text as the ellipsis alone.
pub fn wrap(text: &str, max_lines: usize, max_chars_per_line: usize) -> String {
	let budget = max_lines.saturating_mul(max_chars_per_line);
	let chars: Vec<char> = text.chars().collect();

	if chars.len() <= budget {
		return join_lines(&chars, max_chars_per_line);
	}

	let mut out = join_lines(&chars[..budget.saturating_sub(1)], max_chars_per_line);
	out.push(ELLIPSIS);
	out
}

fn join_lines(chars: &[char], width: usize) -> String {
	if width == 0 || chars.is_empty() {
		return String::new();
	}
	chars
		.chunks(width)
		.map(|line| line.iter().collect::<String>())
		.collect::<Vec<_>>()
		.join("\n")
}
