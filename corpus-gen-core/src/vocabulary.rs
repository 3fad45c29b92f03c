use std::fmt;

const TECH_WORDS: &[&str] = &[
	"algorithm",
	"machine",
	"learning",
	"data",
	"analysis",
	"computer",
	"software",
	"programming",
	"artificial",
	"intelligence",
	"network",
	"system",
	"database",
	"application",
	"development",
	"technology",
	"digital",
	"innovation",
	"automation",
	"cloud",
	"computing",
	"cybersecurity",
	"blockchain",
	"neural",
	"processing",
];

const BUSINESS_WORDS: &[&str] = &[
	"company",
	"business",
	"market",
	"customer",
	"revenue",
	"profit",
	"strategy",
	"management",
	"operations",
	"finance",
	"investment",
	"growth",
	"sales",
	"marketing",
	"product",
	"service",
	"enterprise",
	"organization",
	"leadership",
	"team",
	"project",
	"planning",
	"execution",
	"performance",
	"results",
];

const NATURE_WORDS: &[&str] = &[
	"forest",
	"tree",
	"animal",
	"wildlife",
	"environment",
	"ecosystem",
	"nature",
	"habitat",
	"species",
	"biodiversity",
	"conservation",
	"climate",
	"weather",
	"mountain",
	"river",
	"ocean",
	"plant",
	"flower",
	"grass",
	"soil",
	"rock",
	"bird",
	"fish",
	"mammal",
	"insect",
	"butterfly",
	"sustainability",
];

const SCIENCE_WORDS: &[&str] = &[
	"research",
	"experiment",
	"laboratory",
	"hypothesis",
	"theory",
	"discovery",
	"investigation",
	"methodology",
	"analysis",
	"observation",
	"evidence",
	"study",
	"physics",
	"chemistry",
	"biology",
	"mathematics",
	"statistics",
	"variables",
	"measurement",
	"calculation",
	"formula",
	"equation",
	"scientific",
	"academic",
];

/// High-frequency function words mixed into every document.
pub const COMMON_WORDS: &[&str] = &[
	"the",
	"and",
	"or",
	"but",
	"in",
	"on",
	"at",
	"to",
	"for",
	"of",
	"with",
	"from",
	"by",
	"about",
	"through",
	"during",
	"before",
	"after",
	"over",
	"under",
	"between",
	"among",
	"within",
	"without",
	"including",
	"such",
];

/// A topic vocabulary used to bias a document toward a subject.
///
/// The word lists are fixed for the lifetime of the process. They are
/// themed rather than strictly disjoint (`"analysis"` belongs to both
/// `Tech` and `Science`), so membership is always checked per theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Theme {
	Tech,
	Business,
	Nature,
	Science,
}

impl Theme {
	/// Every theme, in declaration order.
	pub const ALL: [Theme; 4] = [Theme::Tech, Theme::Business, Theme::Nature, Theme::Science];

	/// Returns the fixed word list of this theme.
	pub fn words(self) -> &'static [&'static str] {
		match self {
			Theme::Tech => TECH_WORDS,
			Theme::Business => BUSINESS_WORDS,
			Theme::Nature => NATURE_WORDS,
			Theme::Science => SCIENCE_WORDS,
		}
	}

	pub fn contains(self, word: &str) -> bool {
		self.words().contains(&word)
	}
}

impl fmt::Display for Theme {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			Theme::Tech => "tech",
			Theme::Business => "business",
			Theme::Nature => "nature",
			Theme::Science => "science",
		};
		f.write_str(name)
	}
}

/// Returns `true` if `word` is one of the common function words.
pub fn is_common_word(word: &str) -> bool {
	COMMON_WORDS.contains(&word)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn vocabulary_sizes() {
		assert_eq!(Theme::Tech.words().len(), 25);
		assert_eq!(Theme::Business.words().len(), 25);
		assert_eq!(Theme::Nature.words().len(), 27);
		assert_eq!(Theme::Science.words().len(), 24);
		assert_eq!(COMMON_WORDS.len(), 26);
	}

	#[test]
	fn words_are_lowercase_ascii() {
		let all = Theme::ALL.iter().flat_map(|t| t.words().iter()).chain(COMMON_WORDS.iter());
		for word in all {
			assert!(!word.is_empty());
			assert!(word.chars().all(|c| c.is_ascii_lowercase()), "bad word {word}");
		}
	}

	#[test]
	fn membership() {
		assert!(Theme::Tech.contains("blockchain"));
		assert!(!Theme::Nature.contains("blockchain"));
		assert!(Theme::Tech.contains("analysis") && Theme::Science.contains("analysis"));
		assert!(is_common_word("the"));
		assert!(!is_common_word("forest"));
	}
}
