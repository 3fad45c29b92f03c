use std::io;
use std::path::{Path, PathBuf};

use log::{debug, info};
use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

use crate::io::{build_output_path, ensure_folder, normalize_folder};
use crate::model::dataset::{DatasetSpec, write_dataset};
use crate::model::theme::ThemeStrategy;
use crate::report::{DatasetSummary, summarize_file};

/// High-level driver generating an ordered list of datasets.
///
/// # Responsibilities
/// - Hold the dataset plan, the output folder and the theme strategy
/// - Generate every dataset in order, stopping at the first failure
/// - Read the generated files back and summarize them
///
/// All randomness comes from the owned `rng`, so a seeded generator always
/// writes the same files.
#[derive(Debug)]
pub struct CorpusGenerator<R: Rng> {
	datasets: Vec<DatasetSpec>,
	output_dir: PathBuf,
	strategy: ThemeStrategy,
	rng: R,
}

impl CorpusGenerator<ThreadRng> {
	/// Generator backed by the thread-local random source.
	///
	/// Successive runs produce different corpora.
	pub fn from_entropy<P: AsRef<Path>>(output_dir: P) -> Self {
		Self::new(output_dir, rand::rng())
	}
}

impl CorpusGenerator<StdRng> {
	/// Reproducible generator: the same seed always yields the same files.
	pub fn seeded<P: AsRef<Path>>(output_dir: P, seed: u64) -> Self {
		Self::new(output_dir, StdRng::seed_from_u64(seed))
	}
}

impl<R: Rng> CorpusGenerator<R> {
	/// Creates a generator for the default three-dataset plan.
	///
	/// `"."` and `"./"` resolve to the current working directory.
	pub fn new<P: AsRef<Path>>(output_dir: P, rng: R) -> Self {
		Self {
			datasets: DatasetSpec::defaults(),
			output_dir: normalize_folder(output_dir),
			strategy: ThemeStrategy::default(),
			rng,
		}
	}

	/// Replaces the dataset plan. Order is preserved.
	pub fn with_datasets(mut self, datasets: Vec<DatasetSpec>) -> Self {
		self.datasets = datasets;
		self
	}

	pub fn with_strategy(mut self, strategy: ThemeStrategy) -> Self {
		self.strategy = strategy;
		self
	}

	pub fn datasets(&self) -> &[DatasetSpec] {
		&self.datasets
	}

	pub fn output_dir(&self) -> &Path {
		&self.output_dir
	}

	pub fn strategy(&self) -> ThemeStrategy {
		self.strategy
	}

	/// Path the given dataset is written to.
	pub fn dataset_path(&self, spec: &DatasetSpec) -> PathBuf {
		build_output_path(&self.output_dir, &spec.file_name())
	}

	/// Generates every dataset in plan order.
	///
	/// `on_progress` is called right before each dataset is generated.
	///
	/// # Errors
	/// Stops at the first invalid spec or I/O failure; datasets already
	/// written are left in place and the remaining ones are not attempted.
	pub fn generate_all<F>(&mut self, mut on_progress: F) -> io::Result<Vec<PathBuf>>
	where
		F: FnMut(&DatasetSpec),
	{
		ensure_folder(&self.output_dir)?;

		let mut paths = Vec::with_capacity(self.datasets.len());
		for spec in &self.datasets {
			on_progress(spec);
			debug!(
				"Generating {} ({} documents, {} words, {:?} themes)",
				spec.name, spec.document_count, spec.word_target, self.strategy
			);
			let path = write_dataset(spec, &self.output_dir, self.strategy, &mut self.rng)?;
			paths.push(path);
		}

		info!("Generated {} datasets in {}", paths.len(), self.output_dir.display());
		Ok(paths)
	}

	/// Summarizes every dataset file of the plan, in plan order.
	///
	/// # Errors
	/// Fails if a dataset file cannot be read.
	pub fn report(&self) -> io::Result<Vec<DatasetSummary>> {
		self.datasets
			.iter()
			.map(|spec| summarize_file(self.dataset_path(spec)))
			.collect()
	}

	/// Generates all datasets, then reports on them.
	pub fn run<F>(&mut self, on_progress: F) -> io::Result<Vec<DatasetSummary>>
	where
		F: FnMut(&DatasetSpec),
	{
		self.generate_all(on_progress)?;
		self.report()
	}
}

/// Progress line printed before a dataset is generated.
///
/// Example: `Generating Dataset1: ~100 documents, ~5,000 words...`
pub fn progress_message(spec: &DatasetSpec) -> String {
	format!(
		"Generating {}: ~{} documents, ~{} words...",
		spec.display_name(),
		group_thousands(spec.document_count),
		group_thousands(spec.word_target)
	)
}

/// Formats `n` with a comma between groups of three digits.
fn group_thousands(n: usize) -> String {
	let digits = n.to_string();
	let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
	for (i, c) in digits.chars().enumerate() {
		if i > 0 && (digits.len() - i) % 3 == 0 {
			grouped.push(',');
		}
		grouped.push(c);
	}
	grouped
}
