use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::{debug, info};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::synthesizer::{WordPool, perturbed_target, synthesize};
use super::theme::{ThemePair, ThemeStrategy};
use crate::io::build_output_path;

/// Extension of every dataset file.
pub const DATASET_EXTENSION: &str = "txt";

/// Prefix of the identifier token that starts every line.
pub const DOCUMENT_PREFIX: &str = "Document";

/// A dataset to generate: its name, how many documents it holds and the
/// total number of words it aims for.
///
/// The realized word count drifts from `word_target` because every document
/// length is jittered independently.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct DatasetSpec {
	pub name: String,
	pub document_count: usize,
	pub word_target: usize,
}

impl DatasetSpec {
	pub fn new(name: &str, document_count: usize, word_target: usize) -> Self {
		Self { name: name.to_owned(), document_count, word_target }
	}

	/// The fixed three-dataset plan.
	pub fn defaults() -> Vec<DatasetSpec> {
		vec![
			DatasetSpec::new("dataset1", 100, 5_000),
			DatasetSpec::new("dataset2", 200, 15_000),
			DatasetSpec::new("dataset3", 300, 25_000),
		]
	}

	/// File name of the dataset, e.g. `dataset1.txt`.
	pub fn file_name(&self) -> String {
		format!("{}.{}", self.name, DATASET_EXTENSION)
	}

	/// Average words per document, floored.
	///
	/// Call `validate` first: a zero document count yields 0 here.
	pub fn base_words(&self) -> usize {
		self.word_target.checked_div(self.document_count).unwrap_or(0)
	}

	/// Name with its first letter upper-cased, used in progress messages.
	pub fn display_name(&self) -> String {
		let mut chars = self.name.chars();
		match chars.next() {
			Some(first) => first.to_uppercase().chain(chars).collect(),
			None => String::new(),
		}
	}

	/// Checks the spec can be generated.
	///
	/// # Errors
	/// `InvalidInput` if the document count is zero, or the name is empty,
	/// `.`, `..` or contains a path separator.
	pub fn validate(&self) -> io::Result<()> {
		if self.document_count == 0 {
			return Err(io::Error::new(
				io::ErrorKind::InvalidInput,
				format!("Dataset '{}' must contain at least one document", self.name),
			));
		}
		if matches!(self.name.as_str(), "" | "." | "..") || self.name.contains(['/', '\\']) {
			return Err(io::Error::new(
				io::ErrorKind::InvalidInput,
				format!("Invalid dataset name: '{}'", self.name),
			));
		}
		Ok(())
	}

	/// Lazily generates the documents of this dataset, in index order.
	///
	/// Each document is built on demand and owned by the caller, so nothing
	/// is retained once it has been written.
	pub fn documents<'a, R: Rng + ?Sized>(
		&'a self,
		strategy: ThemeStrategy,
		rng: &'a mut R,
	) -> impl Iterator<Item = Document> + 'a {
		let base = self.base_words();
		let total = self.document_count;
		(1..=total).map(move |index| {
			let themes = strategy.themes_for(index, total, rng);
			let target = perturbed_target(base, rng);
			Document::generate(index, themes, target, rng)
		})
	}
}

/// Parses `NAME:DOCS:WORDS`, e.g. `dataset1:100:5000`.
impl FromStr for DatasetSpec {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let parts: Vec<&str> = s.split(':').map(str::trim).collect();
		let [name, docs, words] = parts.as_slice() else {
			return Err(format!("Expected NAME:DOCS:WORDS, got '{s}'"));
		};
		let document_count = docs
			.parse::<usize>()
			.map_err(|e| format!("Invalid document count '{docs}': {e}"))?;
		let word_target = words
			.parse::<usize>()
			.map_err(|e| format!("Invalid word target '{words}': {e}"))?;

		let spec = DatasetSpec::new(name, document_count, word_target);
		spec.validate().map_err(|e| e.to_string())?;
		Ok(spec)
	}
}

/// One generated line: a 1-based index, the themes it was drawn from and
/// its body text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Document {
	pub index: usize,
	pub themes: ThemePair,
	pub body: String,
}

impl Document {
	/// Synthesizes a document of `target` words from `themes`.
	pub fn generate<R: Rng + ?Sized>(index: usize, themes: ThemePair, target: usize, rng: &mut R) -> Self {
		let pool = WordPool::new(themes);
		let body = synthesize(&pool, target, rng);
		Self { index, themes, body }
	}

	/// Identifier token, e.g. `Document7`.
	pub fn identifier(&self) -> String {
		format!("{}{}", DOCUMENT_PREFIX, self.index)
	}

	pub fn word_count(&self) -> usize {
		self.body.split_whitespace().count()
	}
}

impl fmt::Display for Document {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} {}", self.identifier(), self.body)
	}
}

/// Streams every document of `spec` to `writer`, one line each.
///
/// Returns the number of documents written.
pub fn write_documents<W, R>(
	spec: &DatasetSpec,
	writer: &mut W,
	strategy: ThemeStrategy,
	rng: &mut R,
) -> io::Result<usize>
where
	W: Write + ?Sized,
	R: Rng + ?Sized,
{
	spec.validate()?;

	let mut written = 0;
	for document in spec.documents(strategy, rng) {
		writeln!(writer, "{document}")?;
		written += 1;
	}
	debug!("{}: wrote {} documents (base {} words)", spec.name, written, spec.base_words());
	Ok(written)
}

/// Generates `spec` into `<folder>/<name>.txt`, creating or truncating it.
///
/// The file is fully written and flushed before this returns.
///
/// # Errors
/// Returns an error if the spec is invalid or any I/O operation fails. No
/// cleanup is attempted on failure.
pub fn write_dataset<P, R>(
	spec: &DatasetSpec,
	folder: P,
	strategy: ThemeStrategy,
	rng: &mut R,
) -> io::Result<PathBuf>
where
	P: AsRef<Path>,
	R: Rng + ?Sized,
{
	spec.validate()?;

	let path = build_output_path(folder, &spec.file_name());
	let mut writer = BufWriter::new(File::create(&path)?);
	write_documents(spec, &mut writer, strategy, rng)?;
	writer.flush()?;

	info!("Wrote {}", path.display());
	Ok(path)
}
