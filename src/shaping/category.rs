//! Category registry: maps domain labels to legend entries.
//!
//! Each registry owns an ordered legend. A label resolves only through an
//! explicitly registered alias, compared exactly (`"title"` → `"Paper"`).
//! Labels that resolve to nothing fail with [`ShapeError::UnknownCategory`]
//! unless the registry was given a fallback category.

use super::error::ShapeError;
use super::types::CategorySpec;

/// Legend shared by the frequency and path graphs.
pub const LEGEND_KEYWORD: &str = "Keyword";
/// Legend entry of the queried document.
pub const LEGEND_QUERY: &str = "Query";
/// Legend entry of paper titles.
pub const LEGEND_PAPER: &str = "Paper";

/// Legend of the knowledge-graph view.
pub const KG_KEYWORD: &str = "Keyword";
/// Knowledge-graph legend entry of paper titles.
pub const KG_TITLE: &str = "Title";
/// Gray catch-all for any other database label.
pub const KG_OTHER: &str = "Other";

/// Ordered legend plus label aliases.
#[derive(Clone, Debug)]
pub struct CategoryRegistry {
	specs: Vec<CategorySpec>,
	aliases: Vec<(String, usize)>,
	unknown_index: Option<usize>,
}

impl CategoryRegistry {
	/// Registry over `names`, in legend order. Each category gets the color at
	/// its own position.
	pub fn new<I, S>(names: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let specs = names
			.into_iter()
			.enumerate()
			.map(|(color_index, name)| CategorySpec {
				name: name.into(),
				color_index,
			})
			.collect();
		Self {
			specs,
			aliases: Vec::new(),
			unknown_index: None,
		}
	}

	/// Resolve `label` to the legend entry called `category`.
	///
	/// Aliases pointing at a category that is not in the legend are ignored.
	pub fn with_alias(mut self, label: impl Into<String>, category: &str) -> Self {
		if let Some(index) = self.position(category) {
			self.aliases.push((label.into(), index));
		}
		self
	}

	/// Send unknown labels to the legend entry called `category` instead of failing.
	pub fn with_unknown_category(mut self, category: &str) -> Self {
		self.unknown_index = self.position(category);
		self
	}

	/// Legend used by both the frequency and the path graph, so one legend
	/// renderer can serve both. Path node labels `keyword`, `center` and `title`
	/// map onto Keyword, Query and Paper; no other label is accepted.
	pub fn legend() -> Self {
		Self::new([LEGEND_KEYWORD, LEGEND_QUERY, LEGEND_PAPER])
			.with_alias("keyword", LEGEND_KEYWORD)
			.with_alias("center", LEGEND_QUERY)
			.with_alias("title", LEGEND_PAPER)
	}

	/// Two-color knowledge-graph scheme: database labels `Keyword` and `Title`,
	/// gray for any other label.
	pub fn knowledge() -> Self {
		Self::new([KG_KEYWORD, KG_TITLE, KG_OTHER])
			.with_alias(KG_KEYWORD, KG_KEYWORD)
			.with_alias(KG_TITLE, KG_TITLE)
			.with_unknown_category(KG_OTHER)
	}

	/// Resolve `label` to its category index and legend entry.
	pub fn classify(&self, label: &str) -> Result<(usize, &CategorySpec), ShapeError> {
		let index = self
			.aliases
			.iter()
			.find(|(alias, _)| alias == label)
			.map(|(_, index)| *index)
			.or(self.unknown_index)
			.ok_or_else(|| ShapeError::UnknownCategory(label.to_string()))?;
		Ok((index, &self.specs[index]))
	}

	/// Index of the legend entry called `name`.
	pub fn index_of(&self, name: &str) -> Result<usize, ShapeError> {
		self.position(name)
			.ok_or_else(|| ShapeError::UnknownCategory(name.to_string()))
	}

	/// The legend, in index order.
	pub fn categories(&self) -> &[CategorySpec] {
		&self.specs
	}

	fn position(&self, name: &str) -> Option<usize> {
		self.specs
			.iter()
			.position(|spec| spec.name == name)
	}
}
