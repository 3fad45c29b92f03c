use std::fmt;
use std::io;
use std::path::Path;

use serde::Serialize;

use crate::io::read_file;

/// Document and word totals of one dataset file.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct DatasetSummary {
	pub file: String,
	pub documents: usize,
	pub words: usize,
}

impl fmt::Display for DatasetSummary {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}: {} documents, {} words", self.file, self.documents, self.words)
	}
}

/// Counts documents and body words over already-read lines.
///
/// Every line is one document. Its first token is the identifier and is
/// not counted; an empty line counts zero words.
pub fn summarize_lines<S: AsRef<str>>(file: &str, lines: &[S]) -> DatasetSummary {
	let words = lines
		.iter()
		.map(|line| line.as_ref().split_whitespace().count().saturating_sub(1))
		.sum();

	DatasetSummary { file: file.to_owned(), documents: lines.len(), words }
}

/// Reads a dataset file back and summarizes it. The file is not modified.
pub fn summarize_file<P: AsRef<Path>>(path: P) -> io::Result<DatasetSummary> {
	let path = path.as_ref();
	let lines = read_file(path)?;
	let file = path
		.file_name()
		.map(|name| name.to_string_lossy().to_string())
		.unwrap_or_else(|| path.display().to_string());
	Ok(summarize_lines(&file, &lines))
}
