use std::fmt;

use rand::Rng;

use crate::vocabulary::Theme;

/// The two themes a document draws its topical words from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemePair(pub Theme, pub Theme);

impl ThemePair {
	/// Returns both themes as an array, first theme first.
	pub fn themes(self) -> [Theme; 2] {
		[self.0, self.1]
	}

	/// Returns `true` if `word` belongs to either theme.
	pub fn contains(self, word: &str) -> bool {
		self.0.contains(word) || self.1.contains(word)
	}
}

impl fmt::Display for ThemePair {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}+{}", self.0, self.1)
	}
}

/// Maps a 1-based document index onto a theme pair by quartile.
///
/// | index range                | themes            |
/// |----------------------------|-------------------|
/// | `i <= n/4`                 | Tech, Business    |
/// | `n/4 < i <= n/2`           | Business, Science |
/// | `n/2 < i <= 3n/4`          | Nature, Science   |
/// | `i > 3n/4`                 | Tech, Nature      |
///
/// Boundaries use integer division. Pure: the same inputs always give the
/// same pair.
pub fn assign_themes(index: usize, total: usize) -> ThemePair {
	if index <= total / 4 {
		ThemePair(Theme::Tech, Theme::Business)
	} else if index <= total / 2 {
		ThemePair(Theme::Business, Theme::Science)
	} else if index <= 3 * total / 4 {
		ThemePair(Theme::Nature, Theme::Science)
	} else {
		ThemePair(Theme::Tech, Theme::Nature)
	}
}

/// Strategy used to pick the themes of each document.
///
/// # Variants
/// - `Quartile`: deterministic quartile step function (`assign_themes`).
/// - `Random`: two distinct themes drawn at random for every document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeStrategy {
	#[default]
	Quartile,
	Random,
}

impl ThemeStrategy {
	/// Selects the theme pair of document `index` out of `total`.
	///
	/// Only `Random` consumes randomness from `rng`.
	pub fn themes_for<R: Rng + ?Sized>(self, index: usize, total: usize, rng: &mut R) -> ThemePair {
		match self {
			ThemeStrategy::Quartile => assign_themes(index, total),
			ThemeStrategy::Random => {
				let count = Theme::ALL.len();
				let first = rng.random_range(0..count);
				// Non-zero offset: the second theme always differs from the first
				let second = (first + rng.random_range(1..count)) % count;
				ThemePair(Theme::ALL[first], Theme::ALL[second])
			}
		}
	}
}
