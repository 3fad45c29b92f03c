use std::ops::RangeInclusive;

use rand::Rng;

use super::theme::ThemePair;
use crate::vocabulary::COMMON_WORDS;

/// Number of words a sentence aims for (closed range).
pub const SENTENCE_LENGTH: RangeInclusive<usize> = 8..=15;

/// Multiplier applied to the average document length.
pub const JITTER_RANGE: RangeInclusive<f64> = 0.8..=1.2;

/// How many times the common words are repeated in a pool.
const COMMON_WEIGHT: usize = 2;

/// Flat sampling pool for a single document.
///
/// Holds the words of both themes followed by the common words repeated
/// `COMMON_WEIGHT` times. Duplicates are kept on purpose: a word's sampling
/// probability is proportional to the number of times it appears.
///
/// # Invariants
/// - The pool is never empty
#[derive(Clone, Debug)]
pub struct WordPool {
	words: Vec<&'static str>,
}

impl WordPool {
	/// Builds the pool for a theme pair.
	pub fn new(themes: ThemePair) -> Self {
		let mut words = Vec::new();
		for theme in themes.themes() {
			words.extend_from_slice(theme.words());
		}
		for _ in 0..COMMON_WEIGHT {
			words.extend_from_slice(COMMON_WORDS);
		}
		Self { words }
	}

	/// Draws one word uniformly, with replacement.
	pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> &'static str {
		self.words[rng.random_range(0..self.words.len())]
	}

	pub fn contains(&self, word: &str) -> bool {
		self.words.contains(&word)
	}

	/// Number of entries, duplicates included.
	pub fn len(&self) -> usize {
		self.words.len()
	}

	pub fn is_empty(&self) -> bool {
		self.words.is_empty()
	}
}

/// Generates a body of exactly `target` words drawn from `pool`.
///
/// Words are grouped into sentences of `SENTENCE_LENGTH` words; the last
/// sentence is cut short once the target is reached. Sentences carry no
/// punctuation and everything is joined by single spaces.
///
/// Returns an empty string when `target` is 0.
pub fn synthesize<R: Rng + ?Sized>(pool: &WordPool, target: usize, rng: &mut R) -> String {
	let mut sentences: Vec<String> = Vec::new();
	let mut generated = 0;

	while generated < target {
		let sentence_length = rng.random_range(SENTENCE_LENGTH);
		let mut sentence_words = Vec::with_capacity(sentence_length);

		for _ in 0..sentence_length {
			if generated >= target {
				break;
			}
			sentence_words.push(pool.sample(rng));
			generated += 1;
		}

		sentences.push(sentence_words.join(" "));
	}

	sentences.join(" ")
}

/// Jitters the average document length `base` by `JITTER_RANGE`.
///
/// The result is floored and never below 1, so no document is ever empty.
pub fn perturbed_target<R: Rng + ?Sized>(base: usize, rng: &mut R) -> usize {
	let factor: f64 = rng.random_range(JITTER_RANGE);
	((base as f64 * factor) as usize).max(1)
}
